//! the args for running the bee shell

use bee_cli_common::LoggingArgs;

/// What the shell prints for each line it reads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Print every token of the line
    #[default]
    Tokens,
    /// Parse the line, printing the rendered program and any syntax errors
    Ast,
}

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "An interactive shell for the bee language")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// What to print for each line of input
    #[clap(short = 'm', long, value_enum, default_value_t = Mode::Tokens, env = "BEE_MODE")]
    pub mode: Mode,
    /// The prompt shown before reading each line
    #[clap(long, default_value = ">> ", env = "BEE_PROMPT")]
    pub prompt: String,
    /// Never color output
    #[clap(long)]
    pub no_color: bool,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}
