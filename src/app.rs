//! Taskdeck Frontend App
//!
//! Root component wiring the store, gateway, and layout.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{AddTaskForm, TaskList};
use crate::context::AppContext;
use crate::gateway::TaskGateway;
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    let gateway = TaskGateway::new(store);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide shared state to all children
    provide_context(store);
    provide_context(gateway);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Load tasks and stats on mount, and again on every requested reload
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading tasks, trigger={trigger}").into());
        spawn_local(async move {
            gateway.load().await;
        });
    });

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Taskdeck"</h1>
            </header>

            <main class="app-main">
                <AddTaskForm/>
                <TaskList/>
            </main>
        </div>
    }
}
