//! Border checkpoint pipeline CLI.

use std::io::{self, IsTerminal};

use borderpost_cli::logging::{LogConfig, LogFormat, init_logging};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_features, run_geojson, run_normalize, run_transliterate, run_validate,
};
use crate::summary::{
    print_features_summary, print_geojson_summary, print_normalize_summary,
    print_validation_summary,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Normalize(args) => report(run_normalize(&args), print_normalize_summary),
        Command::Geojson(args) => report(run_geojson(&args), print_geojson_summary),
        Command::Features(args) => report(run_features(&args), print_features_summary),
        Command::Validate(args) => {
            let reports = run_validate(&args);
            print_validation_summary(&reports);
            if reports.iter().all(|r| r.is_valid()) { 0 } else { 1 }
        }
        Command::Transliterate(args) => {
            println!("{}", run_transliterate(&args));
            0
        }
    };
    std::process::exit(exit_code);
}

fn report<T>(result: anyhow::Result<T>, print: fn(&T)) -> i32 {
    match result {
        Ok(value) => {
            print(&value);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
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
