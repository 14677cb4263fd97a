//! Custom provider entry point
//!
//! The host launches `terraform-provider-custom serve` and speaks the
//! line-delimited JSON RPC over stdin/stdout. Logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use custom_provider::handlers::import::import_state;
use custom_provider::{resources, ProviderConfig, RpcHandler};

#[derive(Parser)]
#[command(name = "terraform-provider-custom")]
#[command(about = "Sequential integer and pinned timestamp resources", version)]
struct Cli {
    /// Path to provider config file
    #[arg(long, short = 'c', global = true, env = "CUSTOM_PROVIDER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve lifecycle requests on stdin/stdout until EOF
    Serve,

    /// Print the provider schema as JSON
    Schema,

    /// Run an import locally and print the resulting state
    Import {
        /// Resource type, e.g. sequential_integer
        type_name: String,

        /// Composite import string, e.g. "3,1,3"
        id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ProviderConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_level);
    if let Some(source) = &config.source {
        info!(path = %source.path, digest = %source.digest, "loaded provider config");
    }

    match cli.command {
        Commands::Serve => run_serve(config),
        Commands::Schema => run_schema(&config),
        Commands::Import { type_name, id } => run_import(&type_name, &id),
    }
}

/// Initialize the stderr subscriber; `RUST_LOG` wins over the configured level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run_serve(config: ProviderConfig) -> ExitCode {
    info!(
        protocol_min = config.protocol_min,
        protocol_max = config.protocol_max,
        "serving provider RPC on stdio"
    );
    let handler = RpcHandler::new(config);

    if let Err(e) = handler.run() {
        error!(error = %e, "RPC handler error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run_schema(config: &ProviderConfig) -> ExitCode {
    let schemas = resources::schemas(config);
    match serde_json::to_string_pretty(&serde_json::json!({ "resources": schemas })) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_import(type_name: &str, id: &str) -> ExitCode {
    let state = match import_state(type_name, id) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {}", e.message);
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&state) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
