pub mod password_hash;
pub mod task;
pub mod task_priority;
pub mod task_status;
pub mod user;

use chrono::{DateTime, SubsecRound, Utc};

/// Current time at the precision the store keeps (whole seconds)
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}
