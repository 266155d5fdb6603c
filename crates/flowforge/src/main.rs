//! flowforge - command-line companion for a local n8n instance
//!
//! Commands:
//! - health: check n8n over HTTP
//! - doctor: dependency report + health check
//! - start/stop/restart: manage the n8n background process
//! - list-workflows/get-workflow: read workflows via the REST API

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use flowforge::client::N8nClient;
use flowforge::commands;
use flowforge::exec::SystemRunner;
use flowforge::health::HealthChecker;
use flowforge::process::ProcessManager;
use flowforge::system::SystemChecker;
use flowforge::workflows::WorkflowService;
use flowforge_core::{N8nConfig, Paths};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "flowforge")]
#[command(version = VERSION)]
#[command(about = "Command-line companion for managing a local n8n instance")]
#[command(after_help = r#"EXAMPLES:
    flowforge doctor              # Check dependencies + server health
    flowforge start               # Start n8n in the background
    flowforge health --json       # Health status for scripts
    flowforge list-workflows      # Workflow inventory as a table
    flowforge get-workflow 42     # One workflow in detail

CONFIGURATION:
    ~/.config/flowforge/config.json, overridable with
    N8N_HOST, N8N_PORT and N8N_API_KEY.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check n8n server health
    Health {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Full system health check
    Doctor,

    /// Start n8n in the background
    Start,

    /// Stop the n8n process
    Stop,

    /// Restart the n8n process
    Restart,

    /// List workflows
    #[command(alias = "ls")]
    ListWorkflows {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single workflow
    GetWorkflow {
        /// Workflow id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = N8nConfig::load()?;
    let paths = Paths::new();

    let code = match cli.command {
        Commands::Health { json } => {
            let checker = HealthChecker::new(N8nClient::new(&config)?);
            commands::health::run(&checker, json).await?
        }

        Commands::Doctor => {
            let system = SystemChecker::new(SystemRunner);
            let checker = HealthChecker::new(N8nClient::new(&config)?);
            commands::doctor::run(&system, &checker).await?
        }

        Commands::Start => {
            let manager = ProcessManager::new(SystemRunner, &config, paths.server_log());
            let checker = HealthChecker::new(N8nClient::new(&config)?);
            commands::start::run(&manager, &checker, config.startup_wait(), &config.base_url())
                .await?
        }

        Commands::Stop => {
            let manager = ProcessManager::new(SystemRunner, &config, paths.server_log());
            commands::stop::run(&manager).await?
        }

        Commands::Restart => {
            let manager = ProcessManager::new(SystemRunner, &config, paths.server_log());
            let checker = HealthChecker::new(N8nClient::new(&config)?);
            commands::restart::run(&manager, &checker, config.startup_wait(), &config.base_url())
                .await?
        }

        Commands::ListWorkflows { json } => {
            let service = WorkflowService::new(N8nClient::new(&config)?);
            commands::workflows::list(&service, json).await?
        }

        Commands::GetWorkflow { id, json } => {
            let service = WorkflowService::new(N8nClient::new(&config)?);
            commands::workflows::get(&service, &id, json).await?
        }
    };

    std::process::exit(code);
}
