use bee_tokens::{Token, TokenKind};

/// Represents a grammar mismatch found while parsing a statement.
///
/// These are collected by the parser rather than stopping it, each one only abandons the
/// statement it was found in.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error("expected next token to be {expected}, got {} instead", .found.kind())]
    UnexpectedPeek { expected: TokenKind, found: Token },
    #[error("no prefix parse function for {} found", .0.kind())]
    NoPrefixParse(Token),
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
}

impl SyntaxError {
    pub fn unexpected_peek(expected: TokenKind, found: &Token) -> Self {
        Self::UnexpectedPeek {
            expected,
            found: found.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyntaxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_error_message() {
        let error = SyntaxError::unexpected_peek(TokenKind::Assign, &Token::new(TokenKind::Int, "5"));
        assert_eq!(
            error.to_string(),
            "expected next token to be ASSIGN, got INT instead"
        );
    }

    #[test]
    fn test_other_messages() {
        let error = SyntaxError::NoPrefixParse(Token::new(TokenKind::RBrace, "}"));
        assert_eq!(error.to_string(), "no prefix parse function for RBRACE found");
        let error = SyntaxError::InvalidInteger("99999999999999999999".to_string());
        assert_eq!(
            error.to_string(),
            r#"could not parse "99999999999999999999" as integer"#
        );
    }
}
