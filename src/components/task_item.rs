//! Task Item Component
//!
//! Single task row: completion checkbox, title, description, dates, and a
//! guarded delete action.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::datetime::format_relative;
use crate::models::Task;

/// One row in the task list
#[component]
pub fn TaskItem(
    task: Task,
    #[prop(into)] on_toggle: Callback<u64>,
    #[prop(into)] on_delete: Callback<u64>,
) -> impl IntoView {
    let id = task.id;
    let completed = task.completed;

    let now = Utc::now();
    let created = task.created_at.map(|date| format_relative(date, now));
    // Show the update date only when the task changed after creation
    let updated = task
        .updated_at
        .filter(|date| task.created_at != Some(*date))
        .map(|date| format_relative(date, now));

    let checkbox_id = id.map(|id| format!("task-{id}")).unwrap_or_default();
    let row_class = if completed { "task-item completed" } else { "task-item" };
    let text_class = |base: &str| {
        if completed {
            format!("{base} completed-text")
        } else {
            base.to_string()
        }
    };

    view! {
        <div class=row_class>
            <div class="task-content">
                <div class="task-checkbox">
                    <input
                        type="checkbox"
                        id=checkbox_id.clone()
                        prop:checked=completed
                        on:change=move |_| {
                            if let Some(id) = id {
                                on_toggle.run(id);
                            }
                        }
                    />
                    <label for=checkbox_id.clone() class="checkbox-label"></label>
                </div>

                <div class="task-details">
                    <div class=text_class("task-title")>{task.title.clone()}</div>

                    {task.description.clone().filter(|d| !d.is_empty()).map(|description| view! {
                        <div class=text_class("task-description")>{description}</div>
                    })}

                    <div class="task-meta">
                        {created.map(|date| view! {
                            <span class="task-date">"Created: " {date}</span>
                        })}
                        {updated.map(|date| view! {
                            <span class="task-date">"Updated: " {date}</span>
                        })}
                    </div>
                </div>
            </div>

            <div class="task-actions">
                <DeleteConfirmButton
                    button_class="btn btn-danger btn-sm"
                    on_confirm=move |_| {
                        if let Some(id) = id {
                            on_delete.run(id);
                        }
                    }
                />
            </div>
        </div>
    }
}
