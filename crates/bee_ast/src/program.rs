//! The root of every tree

use crate::statements::Statement;
use crate::Node;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// The root node of every AST, holding its top level statements in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    /// Creates an empty program
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a statement to the end of this program
    pub fn push(&mut self, statement: impl Into<Statement>) {
        self.statements.push(statement.into());
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    /// The literal of the first statement, or nothing for an empty program
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.statements.iter().join(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Expression, Identifier, LetStatement, ReturnStatement};
    use bee_tokens::{Token, TokenKind};

    #[test]
    fn test_empty_program() {
        let program = Program::new();
        assert!(program.is_empty());
        assert_eq!(program.to_string(), "");
        assert_eq!(program.token_literal(), "");
    }

    #[test]
    fn test_render_program() {
        let mut program = Program::new();
        program.push(LetStatement::new(
            Token::new(TokenKind::Let, "let"),
            Identifier::new(Token::new(TokenKind::Ident, "myVar")),
            Expression::from(Identifier::new(Token::new(TokenKind::Ident, "anotherVar"))),
        ));
        program.push(ReturnStatement::new(
            Token::new(TokenKind::Return, "return"),
            Expression::from(Identifier::new(Token::new(TokenKind::Ident, "myVar"))),
        ));
        assert_eq!(program.len(), 2);
        assert_eq!(program.token_literal(), "let");
        assert_eq!(program.to_string(), "let myVar = anotherVar;return myVar;");
    }
}
