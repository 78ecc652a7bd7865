//! Task Gateway
//!
//! Mediates all task persistence. Components go through the gateway; the
//! gateway calls the HTTP bindings and, after every successful mutation,
//! re-fetches the full list and publishes it to the store (full-refresh
//! policy, no incremental patching). A failed call leaves the previously
//! published list untouched.

use leptos::prelude::*;

use crate::api::{self, ApiError};
use crate::models::Task;
use crate::store::{AppStateStoreFields, AppStore};

/// Copyable handle over the store; cheap to capture in event closures
#[derive(Clone, Copy)]
pub struct TaskGateway {
    store: AppStore,
}

impl TaskGateway {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Initial load (and manual retry). Drives the store through
    /// loading -> ready, or loading -> errored when the list fetch fails.
    pub async fn load(self) {
        self.store.loading().set(true);
        self.store.error().set(None);

        match api::list_tasks().await {
            Ok(tasks) => {
                self.store.tasks().set(tasks);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[GATEWAY] Error loading tasks: {e}").into());
                self.store
                    .error()
                    .set(Some("Failed to load tasks. Please try again.".to_string()));
            }
        }
        self.store.loading().set(false);

        self.refresh_stats().await;
    }

    /// Re-fetch the aggregate counts from the dedicated stats endpoint.
    pub async fn refresh_stats(self) {
        match api::task_stats().await {
            Ok(stats) => {
                if !stats.is_consistent() {
                    web_sys::console::warn_1(
                        &format!(
                            "[GATEWAY] Inconsistent stats: total={} completed={} pending={}",
                            stats.total_tasks, stats.completed_tasks, stats.pending_tasks
                        )
                        .into(),
                    );
                }
                self.store.stats().set(Some(stats));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[GATEWAY] Error loading stats: {e}").into());
            }
        }
    }

    /// Full refresh after a successful mutation. A failed refresh keeps the
    /// previously published list and only logs.
    async fn republish(self) {
        match api::list_tasks().await {
            Ok(tasks) => self.store.tasks().set(tasks),
            Err(e) => {
                web_sys::console::error_1(&format!("[GATEWAY] Error refreshing tasks: {e}").into());
            }
        }
    }

    pub async fn create(self, task: &Task) -> Result<Task, ApiError> {
        let created = api::create_task(task).await?;
        self.republish().await;
        Ok(created)
    }

    pub async fn update(self, id: u64, task: &Task) -> Result<Task, ApiError> {
        let updated = api::update_task(id, task).await?;
        self.republish().await;
        Ok(updated)
    }

    pub async fn toggle_completion(self, id: u64) -> Result<Task, ApiError> {
        let toggled = api::toggle_task(id).await?;
        self.republish().await;
        Ok(toggled)
    }

    pub async fn delete(self, id: u64) -> Result<(), ApiError> {
        api::delete_task(id).await?;
        self.republish().await;
        Ok(())
    }

    /// Fetch a single task without touching the published list.
    pub async fn get(self, id: u64) -> Result<Task, ApiError> {
        api::get_task(id).await
    }

    /// Server-side status filter; the client-side tabs use `crate::filter`
    /// instead and never hit this endpoint.
    pub async fn by_status(self, completed: bool) -> Result<Vec<Task>, ApiError> {
        api::list_tasks_by_status(completed).await
    }

    /// Surface a user-facing error without disturbing the published list.
    pub fn set_error(&self, message: impl Into<String>) {
        self.store.error().set(Some(message.into()));
    }
}

/// Get the task gateway from context
pub fn use_gateway() -> TaskGateway {
    expect_context::<TaskGateway>()
}
