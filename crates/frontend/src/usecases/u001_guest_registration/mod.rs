//! Guest self-registration
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: draft and multi-part payload assembly
//! - api.rs: submission over HTTP
//! - view_model.rs: commands and state
//! - view.rs: Leptos component (pure UI)

pub mod api;
pub mod model;
mod view;
pub mod view_model;

pub use view::RegistrationPage;
pub use view_model::RegistrationViewModel;
