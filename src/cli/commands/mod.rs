//! Command implementations.
//!
//! Each read command exposes a pure `render` function over the loaded
//! issues and an `execute` wrapper that prints the result.

pub mod list;
pub mod quickstart;
pub mod show;
pub mod stats;
