//! Process-level plumbing: logging setup

pub mod logging;

pub use logging::{ConsoleSink, init_logging};
