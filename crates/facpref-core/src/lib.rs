//! Facpref Core Library
//!
//! Domain logic for turning faculty course-preference survey exports into a
//! normalized per-faculty report and a deduplicated ledger of weighted
//! faculty/course edges.

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod ledger;
pub mod logging;
pub mod normalize;
pub mod preference;
pub mod roster;
pub mod source;
pub mod submit;
pub mod weight;
