//! Shared code generation utilities for g4make.
//!
//! The [`builder`] module holds the fragment model and the indenting writer
//! used by `g4make-codegen-go`.

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
