//! Common infrastructure shared by the tessera crates
//!
//! Library crates emit `tracing` events, which are forwarded to `log` when
//! no subscriber is installed. [`LoggingTransformer`] installs the `log`
//! backend for binaries, demos and tests.

#![forbid(unsafe_code)]

pub mod logging;

pub use logging::LoggingTransformer;
