//! HTTP server for competitive-gaming contests.
//!
//! - [`api`]: Axum router and handlers
//! - [`config`]: Environment-driven configuration
//! - [`logging`]: Tracing subscriber setup

pub mod api;
pub mod config;
pub mod logging;
