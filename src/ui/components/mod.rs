//! Reusable UI components

mod button;
mod field;

pub use button::{render_button, render_sidebar_button, BUTTON_HEIGHT};
pub use field::{render_field, FIELD_HEIGHT};
