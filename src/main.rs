//! caseroute CLI - rank agents and dispatch assignment commands
//!
//! Thin operational front end over the assignment engine: evaluate the
//! ranked roster, assign an unassigned case, or transfer a case with a
//! reason code and notification flags.

use caseroute::assignment::AssignmentService;
use caseroute::backend::HttpCaseBackend;
use caseroute::config::PortalConfig;
use caseroute::domain::{TransferReason, TransferRequest};
use caseroute::observability::init_default_logging;
use caseroute::session::Session;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// Case assignment engine for the case-management portal
#[derive(Parser)]
#[command(name = "caseroute")]
#[command(about = "Agent workload ranking and case assignment")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "CASEROUTE_CONFIG")]
    config: Option<PathBuf>,

    /// Portal user id to act as
    #[arg(long, env = "CASEROUTE_USER", default_value = "cli")]
    user: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked agent roster with availability labels
    Roster,
    /// Assign an unassigned case to an agent
    Assign {
        /// Case id
        #[arg(long)]
        case: String,
        /// Target agent id
        #[arg(long)]
        agent: String,
    },
    /// Transfer an already-assigned case to a different agent
    Transfer {
        /// Case id
        #[arg(long)]
        case: String,
        /// Target agent id
        #[arg(long)]
        agent: String,
        /// Reason code: reassignment, coverage, specialization, workload, other
        #[arg(long)]
        reason: String,
        /// Handover notes for the receiving agent
        #[arg(long)]
        notes: Option<String>,
        /// Notify the client about the transfer
        #[arg(long)]
        notify_client: bool,
        /// Notify the receiving agent
        #[arg(long)]
        notify_agent: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging();

    let config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(cli, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_configuration(
    config_path: &Option<PathBuf>,
) -> Result<PortalConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(PortalConfig::load_from_file(path)?)
        }
        None => {
            for path_str in ["caseroute.toml", "config/caseroute.toml"] {
                let path = PathBuf::from(path_str);
                if path.exists() {
                    info!("Loading configuration from: {}", path.display());
                    return Ok(PortalConfig::load_from_file(&path)?);
                }
            }
            Err("No configuration file found. Provide one with -c/--config or create caseroute.toml".into())
        }
    }
}

async fn run(cli: Cli, config: PortalConfig) -> Result<(), Box<dyn std::error::Error>> {
    let token = config.access_token()?;
    let session = Session::new(cli.user.clone(), token);

    let backend = HttpCaseBackend::from_config(&config)?;
    let service = AssignmentService::new(backend, config.workload_policy());

    match cli.command {
        Commands::Roster => {
            let snapshot = service.evaluate(&session).await?;
            println!(
                "{:<12} {:<24} {:>7} {:>9} {:>9} {:>6}  {}",
                "AGENT", "NAME", "ACTIVE", "HEADROOM", "UTIL%", "APPR%", "AVAILABILITY"
            );
            for workload in &snapshot.workloads {
                println!(
                    "{:<12} {:<24} {:>7} {:>9} {:>9.1} {:>6}  {}",
                    workload.agent.id,
                    workload.agent.name,
                    workload.metrics.active_cases,
                    workload.metrics.available_capacity,
                    workload.metrics.utilization_rate,
                    workload.metrics.approval_rate,
                    snapshot.availability_of(workload)
                );
            }
        }
        Commands::Assign { case, agent } => {
            let snapshot = service.evaluate(&session).await?;
            service
                .assign(&session, &case, Some(&agent), &snapshot)
                .await?;
            println!("Case {case} assigned to agent {agent}");
        }
        Commands::Transfer {
            case,
            agent,
            reason,
            notes,
            notify_client,
            notify_agent,
        } => {
            let reason = TransferReason::parse(&reason)?;
            let mut request = TransferRequest::new(case.clone(), agent.clone(), reason)
                .notifying(notify_client, notify_agent);
            if let Some(notes) = notes {
                request = request.with_notes(notes);
            }

            let snapshot = service.evaluate(&session).await?;
            service.transfer(&session, &request, &snapshot).await?;
            println!("Case {case} transferred to agent {agent}");
        }
    }

    Ok(())
}
