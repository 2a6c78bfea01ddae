//! CLI commands for facpref

pub mod dispatch;
pub mod names;
pub mod prefs;
pub mod solve;
pub mod submit;
