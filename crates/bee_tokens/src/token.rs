//! A lexical token from a line of source, along with the kinds a token can take

use std::fmt::{Debug, Display, Formatter};
use strum::{AsRefStr, EnumIter};

/// A lexical token
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    literal: String,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end of input token, which always has an empty literal
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the exact text this token was scanned from
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Checks if this token is of a given kind
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Int | TokenKind::Illegal => {
                write!(f, "{}({})", self.kind, self.literal)
            }
            kind => write!(f, "{kind}"),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Type:{} Literal:{:?}}}", self.kind, self.literal)
    }
}

/// The kind for this token.
///
/// The display form of a kind is its canonical upper case name, which is what diagnostics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, AsRefStr, EnumIter)]
pub enum TokenKind {
    /// An unrecognized character
    #[strum(serialize = "ILLEGAL")]
    Illegal,
    /// End of input, repeated forever once reached
    #[strum(serialize = "EOF")]
    Eof,

    #[strum(serialize = "IDENT")]
    Ident,
    #[strum(serialize = "INT")]
    Int,

    // operators
    /// =
    #[strum(serialize = "ASSIGN")]
    Assign,
    #[strum(serialize = "PLUS")]
    Plus,
    #[strum(serialize = "MINUS")]
    Minus,
    #[strum(serialize = "BANG")]
    Bang,
    #[strum(serialize = "ASTERISK")]
    Asterisk,
    #[strum(serialize = "SLASH")]
    Slash,
    #[strum(serialize = "LT")]
    Lt,
    #[strum(serialize = "GT")]
    Gt,
    /// ==
    #[strum(serialize = "EQ")]
    Eq,
    /// !=
    #[strum(serialize = "NOT_EQ")]
    NotEq,

    // delimiters
    #[strum(serialize = "COMMA")]
    Comma,
    #[strum(serialize = "SEMICOLON")]
    SemiColon,
    #[strum(serialize = "LPAREN")]
    LParen,
    #[strum(serialize = "RPAREN")]
    RParen,
    #[strum(serialize = "LBRACE")]
    LBrace,
    #[strum(serialize = "RBRACE")]
    RBrace,

    // keywords
    #[strum(serialize = "FUNCTION")]
    Function,
    #[strum(serialize = "LET")]
    Let,
    #[strum(serialize = "TRUE")]
    True,
    #[strum(serialize = "FALSE")]
    False,
    #[strum(serialize = "IF")]
    If,
    #[strum(serialize = "ELSE")]
    Else,
    #[strum(serialize = "RETURN")]
    Return,
}

impl TokenKind {
    /// Classifies a run of identifier characters, returning the keyword kind if the text is a
    /// reserved word and [TokenKind::Ident] otherwise.
    pub fn lookup_ident(ident: &str) -> TokenKind {
        match ident {
            "fn" => TokenKind::Function,
            "let" => TokenKind::Let,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            _ => TokenKind::Ident,
        }
    }

    /// Checks if this kind is a reserved word
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Function
                | TokenKind::Let
                | TokenKind::True
                | TokenKind::False
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Return
        )
    }
}
