//! CLI argument definitions for the prep toolkit.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "prep",
    version,
    about = "Data preprocessing operations: cleaning, numeric scaling, text and structure",
    long_about = "Run one stateless preprocessing operation over values given on the \
                  command line and print the result.\n\n\
                  Operations are grouped into clean, numeric, text and struct. \
                  Run `prep operations` for the full list."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Result format printed to stdout.
    #[arg(long = "output", value_enum, default_value = "text", global = true)]
    pub output: OutputFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Data cleaning operations.
    #[command(subcommand)]
    Clean(CleanCommand),

    /// Numeric data operations.
    #[command(subcommand)]
    Numeric(NumericCommand),

    /// Text processing operations.
    #[command(subcommand)]
    Text(TextCommand),

    /// Data structure operations.
    #[command(subcommand)]
    Struct(StructCommand),

    /// List every available operation.
    Operations,
}

#[derive(Subcommand)]
pub enum CleanCommand {
    /// Remove missing values (None, "", nan, none).
    RemoveMissing(ValuesArgs),

    /// Fill missing values with a specified value.
    FillMissing {
        #[command(flatten)]
        values: ValuesArgs,

        /// Value to replace missing data.
        #[arg(long = "fill-value", default_value_t = 0.0, allow_negative_numbers = true)]
        fill_value: f64,
    },
}

#[derive(Subcommand)]
pub enum NumericCommand {
    /// Min-max normalization.
    Normalize {
        #[command(flatten)]
        values: NumbersArgs,

        /// New minimum value.
        #[arg(long = "new-min", default_value_t = 0.0, allow_negative_numbers = true)]
        new_min: f64,

        /// New maximum value.
        #[arg(long = "new-max", default_value_t = 1.0, allow_negative_numbers = true)]
        new_max: f64,
    },

    /// Z-score standardization.
    Standardize(NumbersArgs),

    /// Clip values to a range.
    Clip {
        #[command(flatten)]
        values: NumbersArgs,

        /// Minimum value to clip to.
        #[arg(long = "min", default_value_t = 0.0, allow_negative_numbers = true)]
        min: f64,

        /// Maximum value to clip to.
        #[arg(long = "max", default_value_t = 1.0, allow_negative_numbers = true)]
        max: f64,
    },

    /// Convert string numbers to integers, skipping non-numeric values.
    ToIntegers(NumbersArgs),

    /// Apply the natural log to positive values.
    LogTransform(NumbersArgs),
}

#[derive(Subcommand)]
pub enum TextCommand {
    /// Tokenize text (word characters, lower-cased).
    Tokenize(TextArgs),

    /// Replace punctuation with spaces, keeping alphanumerics and whitespace.
    RemovePunctuation(TextArgs),

    /// Remove stopwords from lower-cased text.
    RemoveStopwords {
        #[command(flatten)]
        text: TextArgs,

        /// Stopword to remove (repeatable).
        #[arg(long = "stopwords", value_name = "WORD")]
        stopwords: Vec<String>,

        /// Lower-case the stopwords too, so matching ignores their case.
        #[arg(long = "fold-case")]
        fold_case: bool,
    },
}

#[derive(Subcommand)]
pub enum StructCommand {
    /// Shuffle values with an optional seed.
    Shuffle {
        #[command(flatten)]
        values: ValuesArgs,

        /// Random seed for reproducibility.
        #[arg(long = "seed")]
        seed: Option<u64>,
    },

    /// Flatten bracketed lists such as "[1,2]" "[3,4]".
    Flatten(ValuesArgs),

    /// Remove duplicate values, preserving order.
    Unique(ValuesArgs),
}

#[derive(Args)]
pub struct ValuesArgs {
    /// Values to process.
    #[arg(value_name = "VALUES")]
    pub values: Vec<String>,
}

#[derive(Args)]
pub struct NumbersArgs {
    /// Numeric values to process.
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(Args)]
pub struct TextArgs {
    /// Text to process.
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// CLI result format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn numeric_values_accept_negatives() {
        let cli = Cli::try_parse_from([
            "prep", "numeric", "clip", "-5", "2.5", "--min", "-1", "--max", "1",
        ])
        .unwrap();
        let Command::Numeric(NumericCommand::Clip { values, min, max }) = cli.command else {
            panic!("expected clip");
        };
        assert_eq!(values.values, vec!["-5", "2.5"]);
        assert_eq!(min, -1.0);
        assert_eq!(max, 1.0);
    }

    #[test]
    fn stopwords_are_repeatable() {
        let cli = Cli::try_parse_from([
            "prep",
            "text",
            "remove-stopwords",
            "This is a test",
            "--stopwords",
            "is",
            "--stopwords",
            "a",
        ])
        .unwrap();
        let Command::Text(TextCommand::RemoveStopwords {
            text,
            stopwords,
            fold_case,
        }) = cli.command
        else {
            panic!("expected remove-stopwords");
        };
        assert_eq!(text.text, "This is a test");
        assert_eq!(stopwords, vec!["is", "a"]);
        assert!(!fold_case);
    }

    #[test]
    fn fill_value_defaults_to_zero() {
        let cli = Cli::try_parse_from(["prep", "clean", "fill-missing", "1", "None"]).unwrap();
        let Command::Clean(CleanCommand::FillMissing { fill_value, .. }) = cli.command else {
            panic!("expected fill-missing");
        };
        assert_eq!(fill_value, 0.0);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "prep",
            "struct",
            "shuffle",
            "1",
            "2",
            "--seed",
            "42",
            "--output",
            "json",
        ])
        .unwrap();
        assert!(matches!(cli.output, OutputFormatArg::Json));
        let Command::Struct(StructCommand::Shuffle { seed, .. }) = cli.command else {
            panic!("expected shuffle");
        };
        assert_eq!(seed, Some(42));
    }
}
