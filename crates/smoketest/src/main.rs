//! navki smoketest: replay scripted keystroke scenarios against the mock
//! page boundaries and check the outcomes.

use std::{fs, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use tracing::{error, info};

mod scenario;

use scenario::{Scenario, SmokeError};

#[derive(Parser, Debug)]
#[command(name = "smoketest", about = "navki scripted scenario runner", version)]
struct Cli {
    #[command(flatten)]
    logs: logging::LogArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a scenario from a RON file
    Run {
        /// Path to the scenario file
        path: PathBuf,
    },
    /// Run one built-in scenario by name
    Builtin {
        /// Name from `list`
        name: String,
    },
    /// Run every built-in scenario
    All,
    /// List built-in scenarios
    List,
}

/// Built-in scenarios bundled with the binary.
fn builtins() -> &'static [(&'static str, &'static str)] {
    &[
        ("walk", include_str!("../scenarios/walk.ron")),
        ("shrink", include_str!("../scenarios/shrink.ron")),
        ("paginate", include_str!("../scenarios/paginate.ron")),
        ("chord-timeout", include_str!("../scenarios/chord_timeout.ron")),
    ]
}

fn run_named(name: &str, text: &str) -> Result<(), SmokeError> {
    let scenario: Scenario = scenario::parse(text)?;
    let report = scenario::run(&scenario)?;
    info!(name, steps = report.steps, "ok");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter_from_spec(&cli.logs.spec()))
        .without_time()
        .init();

    let outcome = match &cli.command {
        Commands::Run { path } => match fs::read_to_string(path) {
            Ok(text) => run_named(&path.display().to_string(), &text),
            Err(e) => Err(SmokeError::Io(e)),
        },
        Commands::Builtin { name } => {
            match builtins().iter().find(|(n, _)| *n == name.as_str()) {
                Some((n, text)) => run_named(n, text),
                None => {
                    error!(name = %name, "no such built-in scenario");
                    return ExitCode::FAILURE;
                }
            }
        }
        Commands::All => {
            let mut result = Ok(());
            for (name, text) in builtins() {
                if let Err(e) = run_named(name, text) {
                    error!(name = %name, %e, "scenario failed");
                    result = Err(e);
                }
            }
            result
        }
        Commands::List => {
            for (name, _) in builtins() {
                println!("{name}");
            }
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "smoketest failed");
            ExitCode::FAILURE
        }
    }
}
