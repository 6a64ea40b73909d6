mod password_hash;
mod task;
mod task_priority;
mod task_status;
mod user;
