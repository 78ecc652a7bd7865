//! Task List Component
//!
//! Renders the cached task list with filter tabs, summary stats, empty
//! states, and an error banner with retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TaskItem;
use crate::context::AppContext;
use crate::filter::{apply_filter, count_matching, TaskFilter, FILTERS};
use crate::gateway::use_gateway;
use crate::store::{use_app_store, AppStateStoreFields};

/// Task list with filter tabs and stats header
#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let gateway = use_gateway();
    let store = use_app_store();

    let (current_filter, set_current_filter) = signal(TaskFilter::default());

    // Pure recomputation over the cached list; filter changes never fetch
    let filtered = move || apply_filter(&store.tasks().get(), current_filter.get());

    let on_toggle = move |id: u64| {
        spawn_local(async move {
            match gateway.toggle_completion(id).await {
                Ok(_) => gateway.refresh_stats().await,
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[TASK-LIST] Error toggling task {id}: {e}").into(),
                    );
                    gateway.set_error("Failed to update task. Please try again.");
                }
            }
        });
    };

    let on_delete = move |id: u64| {
        spawn_local(async move {
            match gateway.delete(id).await {
                Ok(()) => gateway.refresh_stats().await,
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[TASK-LIST] Error deleting task {id}: {e}").into(),
                    );
                    gateway.set_error("Failed to delete task. Please try again.");
                }
            }
        });
    };

    view! {
        <div class="task-list-container">
            <div class="task-list-header">
                <h2>"My Tasks"</h2>
                {move || store.stats().get().map(|stats| view! {
                    <div class="task-stats">
                        <span class="stat-item">"Total: " <strong>{stats.total_tasks}</strong></span>
                        <span class="stat-item">"Completed: " <strong>{stats.completed_tasks}</strong></span>
                        <span class="stat-item">"Pending: " <strong>{stats.pending_tasks}</strong></span>
                    </div>
                })}
            </div>

            <div class="task-filters">
                {FILTERS.iter().map(|&filter| {
                    let is_active = move || current_filter.get() == filter;
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| set_current_filter.set(filter)
                        >
                            {move || {
                                format!("{} ({})", filter.label(), count_matching(&store.tasks().get(), filter))
                            }}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="task-list-content">
                <Show when=move || store.loading().get()>
                    <div class="loading-message">"Loading tasks..."</div>
                </Show>

                <Show when=move || !store.loading().get() && filtered().is_empty()>
                    <div class="empty-message">
                        <div class="empty-icon">"📝"</div>
                        <h3>{move || current_filter.get().empty_heading()}</h3>
                        <p>{move || current_filter.get().empty_hint()}</p>
                    </div>
                </Show>

                <Show when=move || !store.loading().get() && !filtered().is_empty()>
                    <div class="tasks">
                        <For
                            each=filtered
                            // Key on the mutable fields so a toggled or edited
                            // task re-renders its row after a refresh
                            key=|task| (task.id, task.completed, task.title.clone(), task.updated_at)
                            children=move |task| {
                                view! { <TaskItem task=task on_toggle=on_toggle on_delete=on_delete/> }
                            }
                        />
                    </div>
                </Show>
            </div>

            {move || store.error().get().map(|message| view! {
                <div class="error-message">
                    <strong>"Error: "</strong> {message}
                    <button class="btn btn-sm btn-outline" on:click=move |_| ctx.reload()>
                        "Retry"
                    </button>
                </div>
            })}
        </div>
    }
}
