#![doc = include_str!("../README.md")]

use clap::{value_parser, ArgAction, Args};

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct LoggingArgs {
    /// Log more, can be repeated up to three times
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=3), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Log less, can be repeated twice
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// How far from the default level `-v[vv]` or `-q[q]` moves logging
    pub fn offset(&self) -> i8 {
        self.verbose.min(3) as i8 - self.quiet.min(2) as i8
    }

    /// Gets the logging level based on whether `-v[vv]` or `-q[q]` has been used, with warnings
    /// being the default.
    #[cfg(feature = "tracing")]
    pub fn log_level_filter(&self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self.offset() {
            i8::MIN..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        logging: LoggingArgs,
    }

    #[test]
    fn test_default_offset() {
        let args = TestArgs::try_parse_from(["test"]).expect("could not parse");
        assert_eq!(args.logging.offset(), 0);
    }

    #[test]
    fn test_verbose_and_quiet() {
        let args = TestArgs::try_parse_from(["test", "-vv"]).expect("could not parse");
        assert_eq!(args.logging.offset(), 2);
        let args = TestArgs::try_parse_from(["test", "-q"]).expect("could not parse");
        assert_eq!(args.logging.offset(), -1);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(TestArgs::try_parse_from(["test", "-v", "-q"]).is_err());
    }
}
