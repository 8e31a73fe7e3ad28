//! Application layer: the selection controller and its derived views.

pub mod controller;
pub mod format;
