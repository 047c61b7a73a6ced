//! config-bootstrap
//!
//! Loads remote configuration for the active profiles into the environment,
//! then optionally runs a command with it.
//!
//! ```text
//! app.config.profiles.active=dev,local \
//! app.name=orders \
//! app.config.server.url=http://config:8888 \
//!     config-bootstrap -- ./orders-service --port 0
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;

use config_bootstrap::config::{load_dotenv, load_dotenv_from};
use config_bootstrap::observability::logging;
use config_bootstrap::{Bootstrap, ProcessEnv, Settings};

#[derive(Parser)]
#[command(name = "config-bootstrap")]
#[command(about = "Inject remote config server properties into the environment", long_about = None)]
struct Cli {
    /// Load variables from this file instead of ./.env
    #[arg(long, value_name = "PATH", conflicts_with = "no_dotenv")]
    env_file: Option<PathBuf>,

    /// Do not read a .env file
    #[arg(long)]
    no_dotenv: bool,

    /// Print applied variables as KEY=VALUE
    #[arg(short, long)]
    print: bool,

    /// Command to run with the loaded environment
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    command: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init();

    match &cli.env_file {
        Some(path) => load_dotenv_from(path)?,
        None if !cli.no_dotenv => load_dotenv(),
        None => {}
    }

    let settings = Settings::from_env();
    let report = match Bootstrap::new(settings).run(&mut ProcessEnv).await {
        Ok(report) => report,
        Err(e) => {
            // Printed directly so it survives any RUST_LOG filter.
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.print {
        let mut seen = HashSet::new();
        for key in report.applied_keys().filter(|key| seen.insert(*key)) {
            if let Ok(value) = std::env::var(key) {
                println!("{}={}", key, value);
            }
        }
    }

    if let Some((program, args)) = cli.command.split_first() {
        tracing::debug!(program = %program, "Running command");
        let status = tokio::process::Command::new(program)
            .args(args)
            .status()
            .await?;
        std::process::exit(status.code().unwrap_or(1));
    }

    Ok(())
}
