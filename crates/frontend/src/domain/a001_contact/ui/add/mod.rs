//! Add Contact UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API function (create)
//! - view_model.rs: ViewModel with validation, submit and reset commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::AddContactPage;
pub use view_model::AddContactViewModel;
