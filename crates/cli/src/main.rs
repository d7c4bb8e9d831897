//! # dnsacl
//!
//! Evaluate DNS queries against zone-scoped allow/block policies.

mod bootstrap;
mod commands;
mod di;

use clap::{Parser, Subcommand};
use commands::check::CheckArgs;
use dnsacl_domain::CliOverrides;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dnsacl")]
#[command(version)]
#[command(about = "Zone-scoped source-address ACLs for DNS queries")]
struct Cli {
    /// Path to the TOML configuration
    #[arg(short = 'c', long, global = true, default_value = "dnsacl.toml")]
    config: String,

    /// Override [logging] level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a single query
    Check {
        /// Client address the query came from
        #[arg(short, long)]
        source: String,

        /// Queried name
        #[arg(short, long)]
        name: String,

        /// Query type mnemonic or TYPEnnn
        #[arg(short = 't', long = "type", default_value = "A")]
        qtype: String,

        /// Number of questions carried by the query
        #[arg(long, default_value_t = 1)]
        questions: usize,
    },

    /// Compile the configuration and print a summary
    Validate,

    /// Evaluate a batch of queries and print decision counters
    Stats {
        /// File with one `source name type [questions]` per line
        #[arg(short, long)]
        queries: String,

        /// Print counters as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        &cli.config,
        CliOverrides {
            log_level: cli.log_level.clone(),
        },
    )?;
    bootstrap::init_logging(&config);
    bootstrap::log_config_summary(&cli.config, &config);

    let services = di::AclServices::load(&config.acl).await?;

    match &cli.command {
        Command::Check {
            source,
            name,
            qtype,
            questions,
        } => commands::run_check(
            &services,
            &CheckArgs {
                source,
                name,
                qtype,
                questions: *questions,
            },
        ),
        Command::Validate => commands::run_validate(&services),
        Command::Stats { queries, json } => commands::run_stats(&services, queries, *json).await,
    }
}
