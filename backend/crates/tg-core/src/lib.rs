pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::password_hash::PasswordHash;
pub use models::task::{NewTask, Task, TaskFilter, TaskUpdate};
pub use models::task_priority::TaskPriority;
pub use models::task_status::TaskStatus;
pub use models::user::{NewUser, ProfileUpdate, User};

#[cfg(test)]
mod tests;
