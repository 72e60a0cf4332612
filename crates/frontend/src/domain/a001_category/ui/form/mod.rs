//! Category dialog UI module
//!
//! MVVM layout, as in the other details forms:
//! - state.rs: form controller (fields, errors, dialog and in-flight state)
//! - view_model.rs: signals and commands around the controller
//! - view.rs: Leptos component (pure UI)

mod state;
mod view;
mod view_model;

pub use state::{CategoryFormState, DialogState, Persisted, Settlement, SubmitRequest};
pub use view::CategoryForm;
pub use view_model::CategoryFormViewModel;
