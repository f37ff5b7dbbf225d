//! UI Components
//!
//! Reusable Leptos components.

mod home_variants;
mod home_view;
mod modal;
mod nav_bar;
mod task_form;
mod task_modals;
mod task_table;
mod tasks_search_view;
mod tasks_view;

pub use home_variants::{HomeVariantA, HomeVariantB};
pub use home_view::HomeView;
pub use modal::Modal;
pub use nav_bar::{NavBar, Page};
pub use task_form::TaskForm;
pub use task_modals::TaskModals;
pub use task_table::TaskTable;
pub use tasks_search_view::TasksSearchView;
pub use tasks_view::TasksView;
