pub mod task_repository;
