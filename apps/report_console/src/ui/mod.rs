//! Text rendering of the report dialog for the console.

pub mod dialog;
