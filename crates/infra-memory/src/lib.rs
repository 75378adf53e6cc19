// Taskflow Infrastructure - In-Memory Adapter
// Implements: TaskRepository (process-lifetime storage, discarded on exit)

mod task_repository;

pub use task_repository::InMemoryTaskRepository;
