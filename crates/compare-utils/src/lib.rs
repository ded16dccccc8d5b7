//! Shared utilities for stock-compare
//!
//! Logging setup used by the CLI and by anything embedding the commentary
//! generator in a long-running process.

pub mod logging;

pub use logging::{LogFormat, init_tracing};
