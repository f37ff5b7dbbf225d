//! Task Commands
//!
//! List, read and mutate tasks in the browser-local repository.

use gloo_timers::future::TimeoutFuture;

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::models::{SearchOptions, TableData, Task, TaskDraft};
use crate::repository::TaskRepository;

async fn latency(config: &AppConfig) {
    if config.simulated_latency_ms > 0 {
        TimeoutFuture::new(config.simulated_latency_ms).await;
    }
}

// ========================
// Task Commands
// ========================

pub async fn list_tasks(config: &AppConfig, options: &SearchOptions) -> AppResult<TableData> {
    latency(config).await;
    let repo = TaskRepository::load(&config.tasks_key)?;
    Ok(repo.list(options))
}

pub async fn get_task(config: &AppConfig, id: u32) -> AppResult<Option<Task>> {
    let repo = TaskRepository::load(&config.tasks_key)?;
    Ok(repo.find(id).cloned())
}

pub async fn create_task(config: &AppConfig, draft: &TaskDraft) -> AppResult<Task> {
    latency(config).await;
    let mut repo = TaskRepository::load(&config.tasks_key)?;
    let task = repo.create(draft)?;
    repo.save(&config.tasks_key)?;
    Ok(task)
}

pub async fn update_task(config: &AppConfig, id: u32, draft: &TaskDraft) -> AppResult<Task> {
    latency(config).await;
    let mut repo = TaskRepository::load(&config.tasks_key)?;
    let task = repo.update(id, draft)?;
    repo.save(&config.tasks_key)?;
    Ok(task)
}

pub async fn delete_task(config: &AppConfig, id: u32) -> AppResult<()> {
    latency(config).await;
    let mut repo = TaskRepository::load(&config.tasks_key)?;
    repo.delete(id)?;
    repo.save(&config.tasks_key)
}
