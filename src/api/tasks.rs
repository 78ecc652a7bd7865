//! Task Endpoints
//!
//! One binding per endpoint on the task resource. All bindings return the
//! decoded payload or an `ApiError`; nothing here retries or caches.

use crate::models::{Task, TaskStats};

use super::http::{fetch_json, send, ApiError};

fn encode(task: &Task) -> Result<String, ApiError> {
    serde_json::to_string(task).map_err(|e| ApiError::Encode(e.to_string()))
}

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    fetch_json("GET", "", None).await
}

pub async fn get_task(id: u64) -> Result<Task, ApiError> {
    fetch_json("GET", &format!("/{id}"), None).await
}

pub async fn create_task(task: &Task) -> Result<Task, ApiError> {
    fetch_json("POST", "", Some(encode(task)?)).await
}

pub async fn update_task(id: u64, task: &Task) -> Result<Task, ApiError> {
    fetch_json("PUT", &format!("/{id}"), Some(encode(task)?)).await
}

/// Flip the completion flag server-side; the server returns the new state.
pub async fn toggle_task(id: u64) -> Result<Task, ApiError> {
    fetch_json("PATCH", &format!("/{id}/complete"), Some("{}".to_string())).await
}

pub async fn delete_task(id: u64) -> Result<(), ApiError> {
    // 204 on success, no body to decode
    send("DELETE", &format!("/{id}"), None).await?;
    Ok(())
}

pub async fn list_tasks_by_status(completed: bool) -> Result<Vec<Task>, ApiError> {
    fetch_json("GET", &format!("/status/{completed}"), None).await
}

pub async fn task_stats() -> Result<TaskStats, ApiError> {
    fetch_json("GET", "/stats", None).await
}
