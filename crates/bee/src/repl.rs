//! The read-print loop

use crate::args::Mode;
use bee_ast_parsing::lexer::Lexer;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Entering this line ends the session
pub const EXIT: &str = "exit";

/// Reads source a line at a time, printing what the front end makes of each line
#[derive(Debug, Clone)]
pub struct Repl {
    prompt: String,
    mode: Mode,
    colored: bool,
}

impl Repl {
    pub fn new(prompt: impl Into<String>, mode: Mode) -> Self {
        Self {
            prompt: prompt.into(),
            mode,
            colored: false,
        }
    }

    /// Sets whether syntax errors may be colored, when the terminal supports it
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Writes the welcome message
    pub fn greet<W: Write>(&self, user: &str, mut output: W) -> io::Result<()> {
        writeln!(output, "Hello {user}! Welcome to the Bee programming language!")?;
        writeln!(
            output,
            "Feel free to type in commands. Enter '{EXIT}' to leave the repl"
        )
    }

    /// Runs until the input ends or the exit command is entered
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            let Some(line) = lines.next().transpose()? else {
                debug!("input ended");
                return Ok(());
            };
            if line == EXIT {
                debug!("exit requested");
                return Ok(());
            }
            trace!("read line {line:?}");

            match self.mode {
                Mode::Tokens => self.print_tokens(&line, &mut output)?,
                Mode::Ast => self.print_ast(&line, &mut output)?,
            }
        }
    }

    fn print_tokens<W: Write>(&self, line: &str, output: &mut W) -> io::Result<()> {
        for token in Lexer::new(line) {
            writeln!(output, "{token}")?;
        }
        Ok(())
    }

    fn print_ast<W: Write>(&self, line: &str, output: &mut W) -> io::Result<()> {
        let (program, errors) = bee_ast_parsing::parse(line);
        if !program.is_empty() {
            writeln!(output, "{program}")?;
        }
        for error in errors {
            if self.colored {
                writeln!(
                    output,
                    "\t{}",
                    error.if_supports_color(Stdout, |text| text.bright_red())
                )?;
            } else {
                writeln!(output, "\t{error}")?;
            }
        }
        Ok(())
    }
}
