//! identifiers

use crate::Node;
use bee_tokens::Token;
use std::fmt::{Display, Formatter};

/// A name, such as the `x` in `let x = 5;`.
///
/// An identifier is always an expression, even when it's only used as the binding of a let
/// statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    token: Token,
    value: String,
}

impl Identifier {
    /// Creates a new identifier from its token, taking the token's literal as the name
    pub fn new(token: Token) -> Self {
        let value = token.literal().to_string();
        Self { token, value }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The name of this identifier
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        self.token.literal()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bee_tokens::TokenKind;

    #[test]
    fn test_identifier_takes_literal() {
        let id = Identifier::new(Token::new(TokenKind::Ident, "my_var"));
        assert_eq!(id.value(), "my_var");
        assert_eq!(id.token_literal(), "my_var");
        assert_eq!(id.to_string(), "my_var");
    }
}
