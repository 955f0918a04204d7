use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pharmagent_core::samples::sample_query;
use pharmagent_core::{
    AgentRegistry, DashboardStats, Delay, Message, MessageData, MessageKind, NoDelay,
    QueryOrchestrator, QueryOutcome, SAMPLE_QUERIES, SessionStore, SourceHealth, TokioDelay,
    View, builtin_sources,
};

mod config;

use config::PharmagentConfig;

#[derive(Parser)]
#[command(name = "pharmagent")]
#[command(version)]
#[command(about = "Pharmagent: a simulated multi-agent pharma research assistant")]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a research question and watch the agents work
    Ask {
        /// The question to ask
        text: String,
    },

    /// Submit one of the built-in sample questions
    Sample {
        /// Index shown by `pharmagent samples`
        index: usize,
    },

    /// List the built-in sample questions
    Samples,

    /// Show the agent registry
    Agents,

    /// Show data sources and their health
    Sources,

    /// Run queries in one session, then show dashboard stats and history
    Dashboard {
        /// Query to run first (repeatable)
        #[arg(short, long = "query")]
        queries: Vec<String>,

        /// Only list history entries containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Write the default config file
    Init,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = PharmagentConfig::load(&cli.config)?;

    // Set up logging
    let filter = if cli.debug {
        "debug".to_string()
    } else {
        cfg.logging.level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Ask { text } => cmd_ask(&cfg, &text).await,
        Commands::Sample { index } => {
            let text = sample_query(index).ok_or_else(|| {
                anyhow!(
                    "No sample query {} (choose 0-{})",
                    index,
                    SAMPLE_QUERIES.len() - 1
                )
            })?;
            cmd_ask(&cfg, text).await
        }
        Commands::Samples => cmd_samples(),
        Commands::Agents => cmd_agents(),
        Commands::Sources => cmd_sources(),
        Commands::Dashboard { queries, search } => {
            cmd_dashboard(&cfg, &queries, search.as_deref()).await
        }
        Commands::Init => cmd_init().await,
        Commands::Config => cmd_config(&cfg),
    }
}

fn build_orchestrator(cfg: &PharmagentConfig) -> QueryOrchestrator<Arc<dyn Delay>> {
    let delay: Arc<dyn Delay> = if cfg.simulation.realtime {
        Arc::new(TokioDelay)
    } else {
        Arc::new(NoDelay)
    };
    QueryOrchestrator::new(delay)
}

/// Run one query in `store`, printing each message as it arrives
async fn run_query(
    orchestrator: &QueryOrchestrator<Arc<dyn Delay>>,
    store: &mut SessionStore,
    text: &str,
    show_data: bool,
) -> Result<QueryOutcome> {
    let outcome = orchestrator
        .submit_with(store, text, &mut |m| print_message(m, show_data))
        .await?;
    Ok(outcome)
}

async fn cmd_ask(cfg: &PharmagentConfig, text: &str) -> Result<()> {
    let orchestrator = build_orchestrator(cfg);
    let mut store = SessionStore::new();
    store.set_view(View::Query);

    let outcome = run_query(&orchestrator, &mut store, text, cfg.display.show_data).await?;

    println!();
    match &outcome {
        QueryOutcome::Completed { report_id, .. } => {
            let title = store
                .reports()
                .iter()
                .find(|r| &r.id == report_id)
                .map(|r| r.title.as_str())
                .unwrap_or_default();
            println!("Query {} completed", outcome.query_id());
            println!("Report ready: {}", title);
        }
        QueryOutcome::Failed { .. } => {
            println!("Query {} failed", outcome.query_id());
        }
    }
    Ok(())
}

fn print_message(message: &Message, show_data: bool) -> Result<()> {
    match message.kind {
        MessageKind::User => println!("\n> {}\n", message.content),
        MessageKind::System => println!("  · {}", message.content),
        MessageKind::Agent => {
            let name = message.agent_name.as_deref().unwrap_or("Agent");
            match &message.data {
                Some(MessageData::Results { results }) => {
                    println!("\n[{}]\n{}", name, message.content);
                    println!("\nDetailed findings from {} agents", results.len());
                }
                Some(MessageData::Findings(findings)) => {
                    println!("  [{}] {}", name, message.content);
                    if show_data {
                        let pretty = serde_json::to_string_pretty(findings)
                            .context("Failed to render findings")?;
                        for line in pretty.lines() {
                            println!("      {}", line);
                        }
                    }
                }
                None => println!("  [{}] {}", name, message.content),
            }
        }
    }
    Ok(())
}

fn cmd_samples() -> Result<()> {
    for (i, sample) in SAMPLE_QUERIES.iter().enumerate() {
        println!("{:>2}  {}", i, sample);
    }
    Ok(())
}

fn cmd_agents() -> Result<()> {
    let registry = AgentRegistry::builtin();
    for agent in registry.profiles() {
        println!(
            "{:<26} {:<10} {:>5} queries  {:>4.1}s avg  {:>5.1}% success",
            agent.name,
            agent.status.to_string(),
            agent.queries_processed,
            agent.avg_response_time,
            agent.success_rate
        );
        println!("    {}", agent.description);
    }
    Ok(())
}

fn cmd_sources() -> Result<()> {
    let now = Utc::now();
    let sources = builtin_sources(now);
    for source in &sources {
        let last_sync = source
            .last_sync
            .map(|t| format!("{} min ago", (now - t).num_minutes()))
            .unwrap_or_else(|| "never".to_string());
        println!(
            "{:<30} {:<22} {:<13} {}",
            source.name,
            source.kind,
            source.status.to_string(),
            last_sync
        );
    }
    let health = SourceHealth::of(&sources);
    println!(
        "\n{}/{} connected ({}% healthy)",
        health.connected, health.total, health.percentage
    );
    Ok(())
}

async fn cmd_dashboard(
    cfg: &PharmagentConfig,
    queries: &[String],
    search: Option<&str>,
) -> Result<()> {
    let orchestrator = build_orchestrator(cfg);
    let mut store = SessionStore::new();

    for text in queries {
        if let Err(e) = run_query(&orchestrator, &mut store, text, false).await {
            warn!("Skipping query {:?}: {}", text, e);
        }
    }

    store.set_view(View::Dashboard);
    let stats = DashboardStats::collect(&store, &AgentRegistry::builtin());
    println!("\nDashboard");
    println!("  Total queries:          {}", stats.total_queries);
    println!("  Reports ready:          {}", stats.reports_ready);
    println!("  Data points analyzed:   {}", stats.data_points_analyzed);
    println!(
        "  Active agents:          {} ({} total)",
        stats.active_agents, stats.total_agents
    );
    println!("  Avg response time:      {:.1}s", stats.avg_response_time);
    println!("  Queries processed:      {}", stats.total_queries_processed);
    println!("  Avg success rate:       {:.1}%", stats.avg_success_rate);

    store.set_view(View::History);
    let history = store.search_queries(search.unwrap_or_default());
    println!("\nQuery history ({})", history.len());
    for query in history {
        println!(
            "  [{:<10}] {}  ({} agents)",
            query.status.to_string(),
            query.text,
            query.agents_involved.len()
        );
    }
    Ok(())
}

async fn cmd_init() -> Result<()> {
    let config_dir = config::config_dir();
    tokio::fs::create_dir_all(&config_dir)
        .await
        .with_context(|| format!("Failed to create config dir: {}", config_dir.display()))?;

    let config_path = config::default_config_path();
    if config_path.exists() {
        warn!("Config already exists at {}", config_path.display());
    } else {
        let default_config = include_str!("../../../config/default.toml");
        tokio::fs::write(&config_path, default_config)
            .await
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        info!("Created default config at {}", config_path.display());
    }

    println!("Pharmagent initialized at {}", config_dir.display());
    Ok(())
}

fn cmd_config(cfg: &PharmagentConfig) -> Result<()> {
    println!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
