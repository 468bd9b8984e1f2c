// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Project model and descriptor loading for g4make.
//!
//! A [`Project`] is built in two explicit phases: [`Pom::project`] produces
//! the base metadata declared by a `pom.xml`, then [`Project::apply`] layers
//! the overrides given on the command line on top of it.

mod error;
mod pom;
mod project;

pub use error::{Error, Result};
pub use pom::Pom;
pub use project::{CaseFolding, Project, ProjectOverrides};
