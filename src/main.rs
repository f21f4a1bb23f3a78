use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use helpdesk_agent::agent::types::Agent;
use helpdesk_agent::agents::{hello_agent, helpdesk_agent};
use helpdesk_agent::config::HelpdeskConfig;

/// Inspect the demo agents and call their tools locally.
#[derive(Debug, Parser)]
#[command(name = "helpdesk-agent", version)]
struct Cli {
    /// Which agent declaration to use.
    #[arg(long, value_enum, default_value_t = AgentKind::Helpdesk, global = true)]
    agent: AgentKind,

    /// TOML file with seed users and services. Built-in data when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AgentKind {
    Helpdesk,
    Hello,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the agent's declaration and tool schemas as JSON.
    Describe,
    /// Call one tool with JSON arguments and print its result.
    Call {
        /// Tool name, e.g. `lookup_user`.
        tool: String,
        /// JSON object of arguments, e.g. '{"email":"alice@example.com"}'.
        #[arg(default_value = "{}")]
        args: String,
    },
}

fn build_agent(cli: &Cli) -> anyhow::Result<Agent> {
    Ok(match cli.agent {
        AgentKind::Hello => hello_agent(),
        AgentKind::Helpdesk => {
            let config = match &cli.config {
                Some(path) => HelpdeskConfig::from_file(path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => HelpdeskConfig::default(),
            };
            helpdesk_agent(&config)
        }
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let agent = build_agent(&cli)?;

    let output = match &cli.command {
        Command::Describe => serde_json::json!({
            "name": agent.name,
            "model": agent.model,
            "description": agent.description,
            "instruction": agent.instruction,
            "tools": agent.tool_schemas(),
        }),
        Command::Call { tool, args } => {
            let args: serde_json::Value =
                serde_json::from_str(args).context("tool arguments must be JSON")?;
            agent.invoke(tool, args).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
