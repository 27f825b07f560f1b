//! stubform CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 4: Template error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};
use stubform_core::TemplateError;

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const TEMPLATE_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_code(&e));
        }
    };

    let level = if cli.global.verbose {
        "stubform=debug"
    } else if cli.global.quiet {
        "stubform=error"
    } else {
        "stubform=info"
    };

    let mut filter = EnvFilter::from_default_env();
    for directive in [level, "warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    // Logs go to stderr so rendered markup on stdout stays clean.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let result = match &cli.command {
        Commands::Open(args) => commands::open::execute(args, &cli.global),
        Commands::Close => commands::close::execute(&cli.global),
        Commands::Text(args) => commands::text::execute(args, &cli.global),
        Commands::Submit(args) => commands::submit::execute(args, &cli.global),
        Commands::Render(args) => commands::render::execute(args, &cli.global),
        Commands::List => commands::list::execute(&cli.global),
        Commands::Check(args) => commands::check::execute(args, &cli.global),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Exit code for a command line that failed to parse (`--help` and
/// `--version` also land here and succeed)
fn parse_exit_code(e: &clap::Error) -> u8 {
    if e.use_stderr() {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::SUCCESS
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.chain().any(|cause| cause.downcast_ref::<TemplateError>().is_some()) {
        ExitCodes::TEMPLATE_ERROR
    } else {
        ExitCodes::GENERAL_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_template_error_exit_code() {
        let err: anyhow::Result<()> = Err(TemplateError::NotFound("submit".to_string()))
            .context("Failed to render submit button");
        assert_eq!(categorize_error(&err.unwrap_err()), ExitCodes::TEMPLATE_ERROR);
    }

    #[test]
    fn test_malformed_key_value_is_invalid_args() {
        let err = Cli::try_parse_from(["stubform", "open", "--token", "novalue"])
            .err()
            .unwrap();
        assert_eq!(parse_exit_code(&err), ExitCodes::INVALID_ARGS);
    }

    #[test]
    fn test_help_is_not_an_error() {
        let err = Cli::try_parse_from(["stubform", "--help"]).err().unwrap();
        assert_eq!(parse_exit_code(&err), ExitCodes::SUCCESS);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("Check failed with 2 problem(s)");
        assert_eq!(categorize_error(&err), ExitCodes::GENERAL_ERROR);
    }
}
