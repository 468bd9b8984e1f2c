//! Go declaration builders.

mod decls;
mod func;

pub use decls::{Const, Interface, Method, Struct, Var};
pub use func::Func;
