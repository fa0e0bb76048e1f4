//! MetaQuery CLI.

use clap::{ColorChoice, Parser};
use metaquery_cli::logging::{LogConfig, LogFormat, init_logging};
use metaquery_cli::pipeline::{EXIT_ALLOW, EXIT_INPUT_ERROR};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_build, run_fields};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_INPUT_ERROR);
    }
    let exit_code = match cli.command {
        Command::Build(args) => match run_build(&args) {
            Ok(report) => {
                print_summary(&report);
                report.exit_code()
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                EXIT_INPUT_ERROR
            }
        },
        Command::Fields(args) => match run_fields(&args) {
            Ok(()) => EXIT_ALLOW,
            Err(error) => {
                eprintln!("error: {error:#}");
                EXIT_INPUT_ERROR
            }
        },
    };
    std::process::exit(exit_code);
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
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn log_decoration_is_off_by_default() {
        let config = log_config_from_cli(&parse(&["metaquery", "fields", "--fields", "f.yml"]));
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn log_flags_reach_the_config() {
        let cli = parse(&[
            "metaquery",
            "--log-timestamps",
            "--log-target",
            "--log-format",
            "compact",
            "--log-level",
            "debug",
            "build",
            "selection.yml",
            "--fields",
            "fields.yml",
        ]);
        let config = log_config_from_cli(&cli);
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn global_log_flags_follow_the_subcommand() {
        let cli = parse(&[
            "metaquery",
            "fields",
            "--fields",
            "fields.yml",
            "--log-timestamps",
        ]);
        assert!(log_config_from_cli(&cli).with_timestamps);
    }
}
