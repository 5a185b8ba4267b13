//! CLI for the vxerr error classification engine.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use vxerr_core::config;

use commands::{
    run_backoff, run_classify, run_extract, run_format, run_handle, run_list, run_respond,
    run_simulate,
};

/// Top-level CLI for vxerr.
#[derive(Debug, Parser)]
#[command(name = "vxerr")]
#[command(about = "vxerr: classify platform errors and plan retries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// A failure given on the command line.
#[derive(Debug, Clone, Args)]
pub struct FailureArg {
    /// Error code, or a JSON failure value with --json.
    pub input: String,

    /// Treat INPUT as JSON (string, exception, response or parsed error object).
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show how a registry code is classified.
    Classify {
        /// Error code, e.g. FUNCTION_THROTTLED.
        code: String,
    },

    /// List registry codes.
    List {
        /// Only codes in this category (e.g. DNS, Internal).
        #[arg(long)]
        category: Option<String>,
    },

    /// Handle a failure and print the caller-facing result as JSON.
    Handle {
        #[command(flatten)]
        failure: FailureArg,
        /// Include description and technical message.
        #[arg(long)]
        details: bool,
        /// Include the stack, if the failure carried one.
        #[arg(long)]
        stack: bool,
    },

    /// Print the API error response for a failure.
    Respond {
        #[command(flatten)]
        failure: FailureArg,
    },

    /// Render a failure as a one-line message.
    Format {
        #[command(flatten)]
        failure: FailureArg,
        /// Append the error code.
        #[arg(long)]
        code: bool,
        /// Append the category.
        #[arg(long)]
        category: bool,
        /// Use the developer message instead of the user message.
        #[arg(long)]
        technical: bool,
    },

    /// Print retryability and the backoff schedule for a failure.
    Backoff {
        #[command(flatten)]
        failure: FailureArg,
        /// Number of attempts to plan (defaults to the configured maximum).
        #[arg(long, value_name = "N")]
        attempts: Option<u32>,
    },

    /// Best-effort code extraction without full parsing.
    Extract {
        #[command(flatten)]
        failure: FailureArg,
    },

    /// Run the retry loop against an operation that fails a fixed number of times.
    Simulate {
        #[command(flatten)]
        failure: FailureArg,
        /// How many calls fail before one succeeds.
        #[arg(long, default_value = "2", value_name = "N")]
        failures: u32,
        /// Attempt budget (defaults to the configured maximum).
        #[arg(long, value_name = "N")]
        attempts: Option<u32>,
        /// Print backoff waits instead of sleeping.
        #[arg(long)]
        dry_run: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Classify { code } => run_classify(&code)?,
            CliCommand::List { category } => run_list(category.as_deref())?,
            CliCommand::Handle {
                failure,
                details,
                stack,
            } => run_handle(&cfg, &failure, details, stack)?,
            CliCommand::Respond { failure } => run_respond(&failure)?,
            CliCommand::Format {
                failure,
                code,
                category,
                technical,
            } => run_format(&failure, code, category, technical)?,
            CliCommand::Backoff { failure, attempts } => run_backoff(&cfg, &failure, attempts)?,
            CliCommand::Extract { failure } => run_extract(&failure)?,
            CliCommand::Simulate {
                failure,
                failures,
                attempts,
                dry_run,
            } => run_simulate(&cfg, &failure, failures, attempts, dry_run).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
