//! UI Components
//!
//! Reusable Leptos components.

mod add_task_form;
mod delete_confirm_button;
mod task_item;
mod task_list;

pub use add_task_form::AddTaskForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use task_item::TaskItem;
pub use task_list::TaskList;
