//! shortlink-client - terminal client for a URL shortening service
//!
//! This library provides the client side of the shortening API: an HTTP
//! client with a pluggable transport, session token persistence, pure
//! view-model builders and a page controller shared by the CLI and TUI.
//!
//! # Features
//! - **cli**: One-shot command-line interface (default)
//! - **tui**: Interactive terminal user interface (default)
//!
//! # Architecture
//! - `api`: Wire models, `HttpTransport` seam and `ApiClient`
//! - `storage`: Session token stores
//! - `view`: Result / link list / analytics view-models
//! - `controller`: Page state machine driven by `UiEvent`s
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Client context and execution modes
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod storage;
pub mod system;
pub mod view;
