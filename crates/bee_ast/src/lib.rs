#![doc = include_str!("../README.md")]

use std::fmt::Display;

pub mod expr;
pub mod identifier;
pub mod program;
pub mod statements;

pub use expr::{BooleanLiteral, Expression, IntegerLiteral};
pub use identifier::Identifier;
pub use program::Program;
pub use statements::{ExpressionStatement, LetStatement, ReturnStatement, Statement};

/// Implemented by every node in the tree.
///
/// Rendering a node as source text is done through [Display].
pub trait Node: Display {
    /// The literal text of the first token consumed to build this node
    fn token_literal(&self) -> &str;
}
