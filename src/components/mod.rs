//! UI Components
//!
//! Reusable Leptos components.

mod board_dot;
mod breadcrumb;
mod form_field;

pub use board_dot::BoardDot;
pub use breadcrumb::Breadcrumb;
pub use form_field::{field_error, FormField};
