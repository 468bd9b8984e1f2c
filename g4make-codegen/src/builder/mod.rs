//! Code generation building blocks.
//!
//! - [`CodeBuilder`] writes tab-indented Go source
//! - [`CodeFragment`] is the intermediate form AST nodes render to
//! - [`Renderable`] is implemented by anything that produces fragments

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
