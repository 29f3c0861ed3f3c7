//! Application runtime: client context and execution modes

pub mod context;
pub mod modes;

pub use context::ClientContext;
