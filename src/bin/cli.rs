//! InflammAI CLI
//!
//! Drives the demo holders in-process, without the web server:
//! - Chat with the mock assistant
//! - Connect the mock wallet
//! - Sync the mock health device
//! - Run the symptom checker
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use inflamm::assistant::{ChatMessage, ConversationEngine, Sender, SymptomChecker};
use inflamm::config::{Config, DemoConfig};
use inflamm::health::HealthState;
use inflamm::wallet::{short_address, WalletSession, WalletState};

#[derive(Parser)]
#[command(name = "inflamm-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Try the InflammAI demo from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,

    /// Skip the simulated delays
    #[arg(long, global = true)]
    pub instant: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Chat with the assistant (type /clear to reset, /quit to leave)
    Chat,

    /// Simulated wallet
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },

    /// Simulated health device
    Health {
        #[command(subcommand)]
        action: HealthAction,
    },

    /// Add symptoms and list the possible conditions
    Symptoms {
        /// Symptom names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum WalletAction {
    /// Show the session before connecting
    Status,
    /// Connect the demo account
    Connect,
    /// Connect, then disconnect again
    Disconnect,
}

#[derive(Subcommand)]
pub enum HealthAction {
    /// Show the dashboard metrics
    Status,
    /// Run a sync
    Sync,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_default().context("failed to load configuration")?;
    // stdout carries the command output
    inflamm::logging::init_with_writer(&config.logging, std::io::stderr);

    let demo = if cli.instant {
        DemoConfig::instant()
    } else {
        config.demo
    };
    tracing::debug!(instant = cli.instant, "inflamm-cli starting");

    match cli.command {
        Commands::Chat => chat(ConversationEngine::new(demo.reply_latency())).await?,

        Commands::Wallet { action } => {
            let wallet = WalletState::new(demo.wallet_latency());
            let session = match action {
                WalletAction::Status => wallet.session().await,
                WalletAction::Connect => {
                    progress(cli.format, "Connecting...");
                    wallet.connect().await
                }
                WalletAction::Disconnect => {
                    wallet.connect().await;
                    wallet.disconnect().await
                }
            };
            print_wallet(&session, cli.format)?;
        }

        Commands::Health { action } => {
            let health = HealthState::new(demo.health_latency());
            if let HealthAction::Sync = action {
                progress(cli.format, "Syncing...");
                let result = health.sync().await;
                progress(cli.format, &result.message);
            }
            print_health(&health, cli.format).await?;
        }

        Commands::Symptoms { names } => {
            let checker = SymptomChecker::new(demo.symptom_latency());
            for name in &names {
                if let Err(e) = checker.add_symptom(name).await {
                    eprintln!("Skipping {:?}: {}", name, e);
                }
            }
            print_symptoms(&checker, cli.format).await?;
        }

        Commands::Config { output } => {
            let config = inflamm::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

async fn chat(engine: ConversationEngine) -> anyhow::Result<()> {
    for message in engine.messages().await {
        print_message(&message);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/clear" => {
                for message in engine.clear_conversation().await {
                    print_message(&message);
                }
            }
            text => {
                println!("  ...");
                match engine.send_message(text).await {
                    Ok(outcome) => {
                        if let Some(reply) = outcome.reply {
                            print_message(&reply);
                        }
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }
        }
    }

    Ok(())
}

/// Status lines for humans; never mixed into JSON output
fn progress(format: Format, line: &str) {
    if format == Format::Table {
        println!("{}", line);
    }
}

fn print_message(message: &ChatMessage) {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Assistant => "assistant",
    };
    println!(
        "[{}] {}: {}",
        message.timestamp.format("%H:%M"),
        who,
        message.text
    );
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_wallet(session: &WalletSession, format: Format) -> anyhow::Result<()> {
    if format == Format::Json {
        return print_json(session);
    }

    match session.address() {
        Some(address) => {
            println!("Connected:  {}", short_address(address, 4));
            println!("Balance:    {} INFLAMM", session.balance_display());
            if let Some(network) = session.network() {
                println!("Network:    {}", network.name);
            }
        }
        None => println!("Not connected"),
    }
    Ok(())
}

async fn print_health(health: &HealthState, format: Format) -> anyhow::Result<()> {
    let snapshot = health.snapshot().await;
    if format == Format::Json {
        return print_json(&snapshot);
    }

    println!("{:<12} {:>10} {:>10} {:>6}", "METRIC", "VALUE", "TARGET", "%");
    println!("{}", "-".repeat(41));
    for card in snapshot.metric_cards() {
        println!(
            "{:<12} {:>10} {:>10} {:>5}%",
            card.name, card.value, card.target, card.progress_percent
        );
    }
    println!();
    println!("Points:       {}", snapshot.points);
    println!("Daily avg:    {}", snapshot.daily_average_points());
    println!(
        "Last synced:  {}",
        snapshot.last_synced_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    Ok(())
}

async fn print_symptoms(checker: &SymptomChecker, format: Format) -> anyhow::Result<()> {
    let conditions = checker.conditions().await;
    if format == Format::Json {
        #[derive(Serialize)]
        struct Output<T, U> {
            symptoms: T,
            conditions: U,
        }
        return print_json(&Output {
            symptoms: checker.symptoms().await,
            conditions,
        });
    }

    let symptoms = checker.symptoms().await;
    let names: Vec<&str> = symptoms.iter().map(|s| s.name.as_str()).collect();
    println!("Symptoms: {}", names.join(", "));
    println!();
    println!("Possible conditions:");
    for condition in conditions {
        println!("  {} ({:?})", condition.name, condition.likelihood);
        println!("    {}", condition.description);
        for recommendation in condition.recommendations {
            println!("    - {}", recommendation);
        }
    }
    Ok(())
}
