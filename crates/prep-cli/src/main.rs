//! prep command-line tool.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use prep_cli::catalog::operations_table;
use prep_cli::commands;
use prep_cli::logging::{LogConfig, LogFormat, init_logging};
use prep_cli::render::{CommandOutput, OutputFormat, render};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info_span};

mod cli;

use crate::cli::{
    CleanCommand, Cli, Command, LogFormatArg, LogLevelArg, NumericCommand, OutputFormatArg,
    StructCommand, TextCommand,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    let format = match cli.output {
        OutputFormatArg::Text => OutputFormat::Text,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    let output = match cli.command {
        Command::Operations => {
            println!("{}", operations_table());
            return Ok(());
        }
        Command::Clean(command) => run_clean(command),
        Command::Numeric(command) => run_numeric(command)?,
        Command::Text(command) => run_text(command),
        Command::Struct(command) => run_struct(command),
    };
    debug!(len = output.len(), "command finished");
    let rendered = render(&output, format).context("render result")?;
    println!("{rendered}");
    Ok(())
}

fn run_clean(command: CleanCommand) -> CommandOutput {
    match command {
        CleanCommand::RemoveMissing(args) => {
            let _guard = info_span!("command", name = "remove-missing").entered();
            commands::remove_missing(&args.values)
        }
        CleanCommand::FillMissing { values, fill_value } => {
            let _guard = info_span!("command", name = "fill-missing").entered();
            commands::fill_missing(&values.values, fill_value)
        }
    }
}

fn run_numeric(command: NumericCommand) -> Result<CommandOutput> {
    match command {
        NumericCommand::Normalize {
            values,
            new_min,
            new_max,
        } => {
            let _guard = info_span!("command", name = "normalize").entered();
            commands::normalize(&values.values, new_min, new_max)
        }
        NumericCommand::Standardize(args) => {
            let _guard = info_span!("command", name = "standardize").entered();
            commands::standardize(&args.values)
        }
        NumericCommand::Clip { values, min, max } => {
            let _guard = info_span!("command", name = "clip").entered();
            commands::clip(&values.values, min, max)
        }
        NumericCommand::ToIntegers(args) => {
            let _guard = info_span!("command", name = "to-integers").entered();
            Ok(commands::to_integers(&args.values))
        }
        NumericCommand::LogTransform(args) => {
            let _guard = info_span!("command", name = "log-transform").entered();
            commands::log_transform(&args.values)
        }
    }
}

fn run_text(command: TextCommand) -> CommandOutput {
    match command {
        TextCommand::Tokenize(args) => {
            let _guard = info_span!("command", name = "tokenize").entered();
            commands::tokenize(&args.text)
        }
        TextCommand::RemovePunctuation(args) => {
            let _guard = info_span!("command", name = "remove-punctuation").entered();
            commands::remove_punctuation(&args.text)
        }
        TextCommand::RemoveStopwords {
            text,
            stopwords,
            fold_case,
        } => {
            let _guard = info_span!("command", name = "remove-stopwords").entered();
            commands::remove_stopwords(&text.text, &stopwords, fold_case)
        }
    }
}

fn run_struct(command: StructCommand) -> CommandOutput {
    match command {
        StructCommand::Shuffle { values, seed } => {
            let _guard = info_span!("command", name = "shuffle").entered();
            commands::shuffle(&values.values, seed)
        }
        StructCommand::Flatten(args) => {
            let _guard = info_span!("command", name = "flatten").entered();
            commands::flatten(&args.values)
        }
        StructCommand::Unique(args) => {
            let _guard = info_span!("command", name = "unique").entered();
            commands::unique(&args.values)
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
