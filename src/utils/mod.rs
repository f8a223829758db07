//! Utilities for the command line front end.
//!
//! ## Modules
//!
//! - [`input`] - Memory-mapped input loading and preparation
//! - [`progress`] - Progress bar (no-op without the `progress` feature)

pub mod input;
pub mod progress;

pub use input::*;
pub use progress::*;
