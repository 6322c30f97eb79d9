#![doc = include_str!("../README.md")]

use crate::lexer::Lexer;
use crate::parser::{Parser, SyntaxError};
use bee_ast::Program;

pub mod lexer;
pub mod parser;

/// Parses a string of source, returning the program along with every syntax error found.
///
/// An empty error list means the parse was clean.
pub fn parse(src: &str) -> (Program, Vec<SyntaxError>) {
    let mut parser = Parser::new(Lexer::new(src));
    let program = parser.parse_program();
    (program, parser.into_errors())
}
