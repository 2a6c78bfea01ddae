//! Output formatting for the prefs command

pub mod human;
pub mod json;
pub mod records;
