//! Domain models and errors for the file selection set.

pub mod errors;
pub mod model;
