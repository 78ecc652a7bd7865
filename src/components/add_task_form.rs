//! Add Task Form Component
//!
//! Form for creating new tasks with an optional description.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::gateway::use_gateway;
use crate::models::{Task, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};

/// Form for creating new tasks
#[component]
pub fn AddTaskForm() -> impl IntoView {
    let gateway = use_gateway();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = Task::draft(&title.get(), &description.get());
        // Blank or overlong input never issues a request
        if let Err(message) = draft.validate() {
            set_form_error.set(Some(message));
            return;
        }

        set_form_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match gateway.create(&draft).await {
                Ok(_) => {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    gateway.refresh_stats().await;
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[ADD-TASK] Error creating task: {e}").into(),
                    );
                    set_form_error
                        .set(Some("Failed to create task. Please try again.".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    let reset_form = move |_| {
        set_title.set(String::new());
        set_description.set(String::new());
        set_form_error.set(None);
    };

    view! {
        <div class="add-task-container">
            <h3>"Add New Task"</h3>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="task-title">"Task Title *"</label>
                    <input
                        type="text"
                        id="task-title"
                        class="form-control"
                        placeholder="Enter task title..."
                        maxlength=MAX_TITLE_LEN.to_string()
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="task-description">"Description (Optional)"</label>
                    <textarea
                        id="task-description"
                        class="form-control"
                        placeholder="Enter task description..."
                        rows=3
                        maxlength=MAX_DESCRIPTION_LEN.to_string()
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                {move || form_error.get().map(|message| view! {
                    <div class="error-message">{message}</div>
                })}

                <div class="form-actions">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Adding..." } else { "Add Task" }}
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=reset_form>
                        "Clear"
                    </button>
                </div>
            </form>
        </div>
    }
}
