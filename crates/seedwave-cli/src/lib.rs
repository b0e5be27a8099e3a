//! Seedwave CLI library.
//!
//! Command implementations behind the `seedwave` binary, exposed as a
//! library so they can be driven from tests.

pub mod commands;
pub mod logging;
