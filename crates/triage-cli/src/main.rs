//! Compliance report triage CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use triage_cli::logging::{LogConfig, LogFormat, init_logging};
use triage_cli::session_store::{load_session, save_session};
use triage_core::SessionState;
use triage_standards::StandardsRegistry;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_component, run_dashboard, run_requirements, run_standards, run_verify};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let registry = match StandardsRegistry::load(cli.standards_dir.as_deref()) {
        Ok(registry) => registry,
        Err(error) => {
            eprintln!("error: failed to load standards tables: {error}");
            return 1;
        }
    };
    let mut session = match cli.session.as_deref().map(load_session) {
        Some(Ok(session)) => session,
        Some(Err(error)) => {
            eprintln!("error: {error:#}");
            return 1;
        }
        None => SessionState::new(),
    };

    let exit_code = match &cli.command {
        Command::Verify(args) => match run_verify(args, &registry, &mut session) {
            Ok(result) => {
                if result.has_errors() { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Requirements(args) => match run_requirements(args, &registry, &mut session) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Component(args) => match run_component(args, &registry, &mut session) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Standards => {
            run_standards(&registry);
            0
        }
        Command::Dashboard => {
            run_dashboard(&session);
            0
        }
    };

    if let Some(path) = &cli.session
        && let Err(error) = save_session(path, &session)
    {
        eprintln!("error: {error:#}");
        return 1;
    }
    exit_code
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
