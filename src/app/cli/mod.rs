//! CLI Adapter.

mod build;
mod env;
mod locate;
mod logging;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use crate::app::api::BootstrapOptions;
use crate::domain::AppError;

/// Diagnostic printed when no SDK root is found.
pub const ROOT_NOT_FOUND_MESSAGE: &str = "Unable to find SDK root. Exiting.";

#[derive(Parser)]
#[command(name = "ovrboot")]
#[command(version)]
#[command(
    about = "Locate the SDK root, publish its build environment, and run the build driver",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ovrboot.toml in the start directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Directory to start the root search from (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    start: Option<PathBuf>,
    /// Number of parent directories to inspect
    #[arg(long, global = true, value_name = "N")]
    max_depth: Option<usize>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate the SDK root and run the build driver
    #[clap(visible_alias = "b")]
    Build {
        /// Arguments forwarded to the build driver
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Print the SDK root
    #[clap(visible_alias = "l")]
    Locate {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the environment the build driver receives
    Env {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = BootstrapOptions { start: cli.start, config: cli.config, max_depth: cli.max_depth };

    let result: Result<(), AppError> = match cli.command {
        Commands::Build { args } => build::run_build(&options, &args),
        Commands::Locate { json } => locate::run_locate(&options, json),
        Commands::Env { json } => env::run_env(&options, json),
    };

    if let Err(e) = result {
        std::process::exit(report_error(&e));
    }
}

/// Print the diagnostic for `e` and return the exit status.
fn report_error(e: &AppError) -> i32 {
    match e {
        AppError::RootNotFound { .. } => {
            debug!("{}", e);
            println!("{}", ROOT_NOT_FOUND_MESSAGE);
        }
        // The driver reports its own failure.
        AppError::DriverFailed { .. } => debug!("{}", e),
        _ => eprintln!("Error: {}", e),
    }
    e.exit_code()
}
