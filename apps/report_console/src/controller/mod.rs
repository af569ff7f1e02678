//! Controller layer: parsing typed-in actions and driving the report dialog.

pub mod actions;
pub mod session;
