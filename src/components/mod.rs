//! UI Components
//!
//! Reusable Leptos components.

pub mod calendar;
mod complete_accordion;
mod delete_confirm_button;
mod empty_task;
mod error_state;
mod loading;
mod login_form;
mod modal;
mod navbar;
mod task_display;
mod task_edit_form;
mod task_form;
mod task_item;
mod task_list;
mod task_section;
mod task_sidebar;
mod toast_stack;

pub use complete_accordion::CompleteAccordion;
pub use delete_confirm_button::DeleteConfirmButton;
pub use empty_task::EmptyTask;
pub use error_state::ErrorState;
pub use loading::Loading;
pub use login_form::LoginForm;
pub use modal::Modal;
pub use navbar::Navbar;
pub use task_display::TaskDisplay;
pub use task_edit_form::TaskEditForm;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use task_section::TaskSection;
pub use task_sidebar::TaskSidebar;
pub use toast_stack::ToastStack;
