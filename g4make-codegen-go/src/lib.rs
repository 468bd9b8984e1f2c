//! Go code generation for g4make.
//!
//! Renders the `doc.go`, `<pkg>_test.go` and listener files of an ANTLR
//! Go-target grammar package from a [`g4make_project::Project`].

mod error;
mod features;
mod go_file;

pub mod ast;
pub mod files;

pub use error::RenderError;
pub use features::{ANTLR_RUNTIME, Features};
pub use files::{
    BaseListenerGo, COPYRIGHT, DEFAULT_MODULE, DocGo, GoTemplate, ListenerGo, Template,
    TemplateData, TestGo, render, render_file,
};
pub use go_file::{GoFile, ImportSet};
