//! Statements

use crate::expr::Expression;
use crate::identifier::Identifier;
use crate::Node;
use bee_tokens::Token;
use std::fmt::{Display, Formatter};

/// A statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => stmt.fmt(f),
            Statement::Return(stmt) => stmt.fmt(f),
            Statement::Expression(stmt) => stmt.fmt(f),
        }
    }
}

impl From<LetStatement> for Statement {
    fn from(value: LetStatement) -> Self {
        Statement::Let(value)
    }
}

impl From<ReturnStatement> for Statement {
    fn from(value: ReturnStatement) -> Self {
        Statement::Return(value)
    }
}

impl From<ExpressionStatement> for Statement {
    fn from(value: ExpressionStatement) -> Self {
        Statement::Expression(value)
    }
}

/// A `let <name> = <value>;` binding
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    token: Token,
    name: Identifier,
    value: Option<Expression>,
}

impl LetStatement {
    /// Creates a new let statement.
    ///
    /// The value is `None` while the right hand side of the binding is not parsed.
    pub fn new(token: Token, name: Identifier, value: impl Into<Option<Expression>>) -> Self {
        Self {
            token,
            name,
            value: value.into(),
        }
    }

    /// The name being bound
    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn value(&self) -> Option<&Expression> {
        self.value.as_ref()
    }
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

/// Return from the enclosing function
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    token: Token,
    return_value: Option<Expression>,
}

impl ReturnStatement {
    pub fn new(token: Token, return_value: impl Into<Option<Expression>>) -> Self {
        Self {
            token,
            return_value: return_value.into(),
        }
    }

    pub fn return_value(&self) -> Option<&Expression> {
        self.return_value.as_ref()
    }
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token_literal())?;
        if let Some(value) = &self.return_value {
            write!(f, "{value}")?;
        }
        write!(f, ";")
    }
}

/// A statement consisting of a single expression, like `x + 10;`
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    token: Token,
    expression: Option<Expression>,
}

impl ExpressionStatement {
    pub fn new(token: Token, expression: impl Into<Option<Expression>>) -> Self {
        Self {
            token,
            expression: expression.into(),
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "{expression}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bee_tokens::TokenKind;

    fn ident(name: &str) -> Identifier {
        Identifier::new(Token::new(TokenKind::Ident, name))
    }

    #[test]
    fn test_render_let() {
        let stmt = LetStatement::new(
            Token::new(TokenKind::Let, "let"),
            ident("myVar"),
            Expression::from(ident("anotherVar")),
        );
        assert_eq!(stmt.to_string(), "let myVar = anotherVar;");
        assert_eq!(stmt.token_literal(), "let");
    }

    #[test]
    fn test_render_let_without_value() {
        let stmt = LetStatement::new(Token::new(TokenKind::Let, "let"), ident("x"), None);
        assert_eq!(stmt.to_string(), "let x = ;");
        assert!(stmt.value().is_none());
    }

    #[test]
    fn test_render_return() {
        let stmt = ReturnStatement::new(
            Token::new(TokenKind::Return, "return"),
            Expression::from(ident("y")),
        );
        assert_eq!(stmt.to_string(), "return y;");
        let stmt = ReturnStatement::new(Token::new(TokenKind::Return, "return"), None);
        assert_eq!(stmt.to_string(), "return ;");
    }

    #[test]
    fn test_render_expression_statement() {
        let token = Token::new(TokenKind::Ident, "foo");
        let stmt = ExpressionStatement::new(token.clone(), Expression::from(Identifier::new(token.clone())));
        assert_eq!(stmt.to_string(), "foo");
        assert_eq!(Statement::from(stmt).token_literal(), "foo");
        assert_eq!(ExpressionStatement::new(token, None).to_string(), "");
    }
}
