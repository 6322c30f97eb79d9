//! Parser used for creating the AST

use crate::lexer::Lexer;
use bee_ast::{
    BooleanLiteral, Expression, ExpressionStatement, Identifier, IntegerLiteral, LetStatement,
    Program, ReturnStatement, Statement,
};
use bee_tokens::{Token, TokenKind};
use tracing::{debug, trace};

pub mod error;

pub use error::{Result, SyntaxError};

/// Creates a [Program] from the tokens of a [Lexer].
///
/// The parser looks at two tokens at a time, the current token and the one after it, and only
/// ever moves forward by sliding that window one token with [Parser::next_token].
///
/// # Examples
/// ```
/// # use bee_ast_parsing::lexer::Lexer;
/// # use bee_ast_parsing::parser::Parser;
/// let mut parser = Parser::new(Lexer::new("let x = 5; return x;"));
/// let program = parser.parse_program();
/// assert_eq!(program.len(), 2);
/// assert!(parser.errors().is_empty());
/// ```
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    errors: Vec<SyntaxError>,
    current_token: Token,
    peek_token: Token,
}

impl Parser {
    /// Creates a new parser, reading two tokens so both the current and peek tokens are set
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Self {
            lexer,
            errors: vec![],
            current_token,
            peek_token,
        }
    }

    /// The errors found so far, in the order they were found
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }

    /// Parses statements until the end of input.
    ///
    /// A statement that fails to parse adds an error and is left out of the program, parsing
    /// then picks up again at the following token.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => program.push(statement),
                Err(error) => {
                    debug!("statement starting at {:?} failed: {error}", self.current_token);
                    self.errors.push(error);
                }
            }
            self.next_token();
        }

        program
    }

    fn next_token(&mut self) {
        self.current_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        trace!("parsing statement at {:?}", self.current_token);
        match self.current_token.kind() {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    fn parse_let_statement(&mut self) -> Result<LetStatement> {
        let token = self.current_token.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.current_token.clone());

        self.expect_peek(TokenKind::Assign)?;

        // TODO: parse the value once expressions have a precedence parser
        self.skip_to_terminator()?;

        Ok(LetStatement::new(token, name, None))
    }

    fn parse_return_statement(&mut self) -> Result<ReturnStatement> {
        let token = self.current_token.clone();

        self.next_token();
        self.skip_to_terminator()?;

        Ok(ReturnStatement::new(token, None))
    }

    fn parse_expression_statement(&mut self) -> Result<ExpressionStatement> {
        let token = self.current_token.clone();
        let expression = self.parse_leaf_expression()?;

        self.skip_to_terminator()?;

        Ok(ExpressionStatement::new(token, expression))
    }

    /// Parses the single token expression at the current token
    fn parse_leaf_expression(&self) -> Result<Expression> {
        let token = self.current_token.clone();
        match token.kind() {
            TokenKind::Ident => Ok(Identifier::new(token).into()),
            TokenKind::Int => {
                let value = token
                    .literal()
                    .parse::<i64>()
                    .map_err(|_| SyntaxError::InvalidInteger(token.literal().to_string()))?;
                Ok(IntegerLiteral::new(token, value).into())
            }
            TokenKind::True | TokenKind::False => {
                let value = token.is(TokenKind::True);
                Ok(BooleanLiteral::new(token, value).into())
            }
            _ => Err(SyntaxError::NoPrefixParse(token)),
        }
    }

    /// Moves forward until the current token is the `;` ending this statement, or the end of
    /// input. A `;` within braces doesn't end the statement.
    ///
    /// A group that is still open at a terminating `;`, or at the end of input, fails the
    /// statement. Stopping at the `;` lets the statements after it be parsed.
    fn skip_to_terminator(&mut self) -> Result<()> {
        let mut closers = vec![];
        loop {
            match self.current_token.kind() {
                TokenKind::Eof => {
                    return match closers.last() {
                        Some(&closer) => Err(SyntaxError::unexpected_peek(closer, &self.current_token)),
                        None => Ok(()),
                    };
                }
                TokenKind::SemiColon => match closers.last() {
                    None => return Ok(()),
                    Some(TokenKind::RBrace) => {}
                    Some(&closer) => {
                        return Err(SyntaxError::unexpected_peek(closer, &self.current_token))
                    }
                },
                TokenKind::LBrace => closers.push(TokenKind::RBrace),
                TokenKind::LParen => closers.push(TokenKind::RParen),
                kind @ (TokenKind::RBrace | TokenKind::RParen) => match closers.last() {
                    Some(&closer) if closer == kind => {
                        closers.pop();
                    }
                    Some(&closer) => {
                        return Err(SyntaxError::unexpected_peek(closer, &self.current_token))
                    }
                    // a stray closer is left for whatever parses it later
                    None => {}
                },
                _ => {}
            }
            self.next_token();
        }
    }

    fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Moves forward only if the peek token is of the given kind, otherwise the window is left
    /// where it is
    fn expect_peek(&mut self, kind: TokenKind) -> Result<()> {
        if self.peek_token_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(SyntaxError::unexpected_peek(kind, &self.peek_token))
        }
    }
}
