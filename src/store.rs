//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The task list
//! here is the single published cache; the gateway replaces it wholesale
//! after every refresh.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskStats};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last-published task list, mirrored from the backend
    pub tasks: Vec<Task>,
    /// Aggregate counts from the dedicated stats endpoint
    pub stats: Option<TaskStats>,
    /// True while the initial load (or a retry) is in flight
    pub loading: bool,
    /// User-facing error message, if any
    pub error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
