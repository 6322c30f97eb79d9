use crate::args::Args;
use crate::repl::Repl;
use clap::Parser;
use std::io::{stderr, stdin, stdout};
use std::process::ExitCode;
use tracing::metadata::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

mod args;
mod repl;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting bee with args: {args:?}");
    debug!("bee version: {}", env!("CARGO_PKG_VERSION"));

    let repl = Repl::new(args.prompt.as_str(), args.mode).colored(!args.no_color);
    repl.greet(&current_user(), stdout().lock())?;
    repl.run(stdin().lock(), stdout().lock())?;

    Ok(ExitCode::SUCCESS)
}

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "there".to_string())
}

/// Logs go to stderr so they never mix with what the shell prints
fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format().with_thread_ids(true))
                .with_writer(stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
