//! Core utilities and types for the g4make generator.
//!
//! This crate provides the file emission pipeline (normalize, write, format)
//! and the string helpers shared by the template crates.

mod emit;
mod file;
mod utils;

// File emission
pub use emit::{EmitError, Emitter, Formatter};
pub use file::{File, normalize_source};
// String utilities
pub use utils::{is_go_identifier, quote_go_string, relative_path, title};
