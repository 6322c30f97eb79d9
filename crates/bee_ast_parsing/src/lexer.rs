//! Responsible with converting a line of source into a token stream

use bee_tokens::{Token, TokenKind};
use tracing::trace;

/// Scans source text into tokens, one token per call to [Lexer::next_token].
///
/// The lexer only understands ASCII. It never fails, characters it doesn't recognize are produced
/// as [TokenKind::Illegal] tokens and left for the consumer to deal with.
///
/// # Examples
/// ```
/// # use bee_ast_parsing::lexer::Lexer;
/// # use bee_tokens::TokenKind;
/// let mut lexer = Lexer::new("let x = 5;");
/// assert_eq!(lexer.next_token().kind(), TokenKind::Let);
/// assert_eq!(lexer.next_token().literal(), "x");
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    input: Vec<u8>,
    /// index of the current char
    position: usize,
    /// index of the next char
    read_position: usize,
    /// 0 once the end of the input is reached
    ch: u8,
    done: bool,
}

impl Lexer {
    /// Creates a new lexer, reading in the first char of the input
    pub fn new(input: impl Into<String>) -> Self {
        let mut lexer = Self {
            input: input.into().into_bytes(),
            position: 0,
            read_position: 0,
            ch: 0,
            done: false,
        };
        lexer.read_char();
        lexer
    }

    /// Produces the next token, advancing past it.
    ///
    /// Once the end of input is reached every call returns an [TokenKind::Eof] token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => self.one_or_two(TokenKind::Assign, TokenKind::Eq),
            b'!' => self.one_or_two(TokenKind::Bang, TokenKind::NotEq),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'/' => self.single(TokenKind::Slash),
            b'*' => self.single(TokenKind::Asterisk),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),
            b';' => self.single(TokenKind::SemiColon),
            b',' => self.single(TokenKind::Comma),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            // nothing is read past the end of input, keeping every later call here
            0 => return Token::eof(),
            ch if is_letter(ch) => {
                let ident = self.read_while(is_letter);
                let token = Token::new(TokenKind::lookup_ident(&ident), ident);
                trace!("scanned {token:?}");
                return token;
            }
            ch if ch.is_ascii_digit() => {
                let token = Token::new(TokenKind::Int, self.read_while(|c| c.is_ascii_digit()));
                trace!("scanned {token:?}");
                return token;
            }
            _ => self.single(TokenKind::Illegal),
        };

        self.read_char();
        trace!("scanned {token:?}");
        token
    }

    /// A token made from only the current char
    fn single(&self, kind: TokenKind) -> Token {
        Token::new(kind, String::from_utf8_lossy(&[self.ch]))
    }

    /// Either `one` made from the current char, or `two` if the next char is a `=`
    fn one_or_two(&mut self, one: TokenKind, two: TokenKind) -> Token {
        if self.peek_char() == b'=' {
            let first = self.ch;
            self.read_char();
            Token::new(two, String::from_utf8_lossy(&[first, self.ch]))
        } else {
            self.single(one)
        }
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied().unwrap_or(0);
        // position never runs more than one past the end of the input
        self.position = self.read_position.min(self.input.len());
        self.read_position = self.position + 1;
    }

    fn peek_char(&self) -> u8 {
        self.input.get(self.read_position).copied().unwrap_or(0)
    }

    fn read_while<F: Fn(u8) -> bool>(&mut self, predicate: F) -> String {
        let start = self.position;
        while self.ch != 0 && predicate(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Yields every token up to, but not including, the end of input
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.done = true;
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).map(|token| token.kind()).collect()
    }

    #[test]
    fn test_single_char_tokens() {
        assert_eq!(
            kinds("=+(){},;"),
            vec![
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Comma,
                TokenKind::SemiColon,
            ]
        );
        assert_eq!(
            kinds("!-/*5 < 10 > 5"),
            vec![
                TokenKind::Bang,
                TokenKind::Minus,
                TokenKind::Slash,
                TokenKind::Asterisk,
                TokenKind::Int,
                TokenKind::Lt,
                TokenKind::Int,
                TokenKind::Gt,
                TokenKind::Int,
            ]
        );
    }

    #[test]
    fn test_two_char_operators() {
        let mut lexer = Lexer::new("==");
        let token = lexer.next_token();
        assert_eq!(token.kind(), TokenKind::Eq);
        assert_eq!(token.literal(), "==");
        assert!(lexer.next_token().is(TokenKind::Eof));

        let mut lexer = Lexer::new("=");
        let token = lexer.next_token();
        assert_eq!(token.kind(), TokenKind::Assign);
        assert_eq!(token.literal(), "=");
        assert!(lexer.next_token().is(TokenKind::Eof));

        assert_eq!(kinds("!= ! ="), vec![TokenKind::NotEq, TokenKind::Bang, TokenKind::Assign]);
        assert_eq!(kinds("==="), vec![TokenKind::Eq, TokenKind::Assign]);
    }

    #[test]
    fn test_identifiers_and_keywords() {
        let tokens: Vec<_> = Lexer::new("let _under fn_name if else returned").collect();
        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "_under"),
            (TokenKind::Ident, "fn_name"),
            (TokenKind::If, "if"),
            (TokenKind::Else, "else"),
            (TokenKind::Ident, "returned"),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, literal)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind(), kind);
            assert_eq!(token.literal(), literal);
        }
    }

    #[test]
    fn test_digits_end_identifiers() {
        let tokens: Vec<_> = Lexer::new("x1 -42").collect();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Ident, "x"),
                Token::new(TokenKind::Int, "1"),
                Token::new(TokenKind::Minus, "-"),
                Token::new(TokenKind::Int, "42"),
            ]
        );
    }

    #[test]
    fn test_illegal_chars() {
        let tokens: Vec<_> = Lexer::new("a @ $").collect();
        assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "@"));
        assert_eq!(tokens[2], Token::new(TokenKind::Illegal, "$"));
    }

    #[test]
    fn test_non_ascii_is_illegal_per_byte() {
        let tokens: Vec<_> = Lexer::new("é").collect();
        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().all(|token| token.is(TokenKind::Illegal)));
    }

    #[test]
    fn test_eof_is_stable() {
        let mut lexer = Lexer::new("  \t\r\n");
        for _ in 0..5 {
            let token = lexer.next_token();
            assert_eq!(token.kind(), TokenKind::Eof);
            assert_eq!(token.literal(), "");
        }
        let mut lexer = Lexer::new("x");
        assert!(lexer.next_token().is(TokenKind::Ident));
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), Token::eof());
        }
    }

    #[test]
    fn test_nul_ends_input() {
        let mut lexer = Lexer::new("a\0b");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "a"));
        for _ in 0..3 {
            assert_eq!(lexer.next_token(), Token::eof());
        }
    }

    #[test]
    fn test_iterator_stops_at_eof() {
        let mut lexer = Lexer::new("a");
        assert!(lexer.next().is_some());
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }
}
