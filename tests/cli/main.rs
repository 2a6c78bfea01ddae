//! CLI integration tests for facpref commands

mod names;
mod prefs;
mod solve;
mod submit;
mod support;
