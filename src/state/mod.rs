//! Application state module

mod app_state;
mod capture_form;
mod field;
mod splash_state;
mod validation;

pub use app_state::*;
pub use capture_form::*;
pub use field::FormField;
pub use splash_state::*;
