/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing fuzzy name matching used for lookup suggestions
pub mod names;

pub use config::*;
pub use logger::*;
pub use names::*;
