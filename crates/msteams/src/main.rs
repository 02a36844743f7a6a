//! CLI for rendering Teams cards from webhook event bodies
//!
//! Run `teams-card --help` for usage information.

// CLI binaries legitimately need println! for user output
#![allow(clippy::disallowed_macros)]

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use msteams::{get_payload, HookEvent, HookEventType, Payloader};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "teams-card")]
#[command(about = "Render Microsoft Teams MessageCards from webhook events")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the card for one event body
    Render {
        /// Event type, e.g. push, issues, pull_request_review_approved
        #[arg(short, long, env = "TEAMS_CARD_EVENT")]
        event: String,

        /// File holding the event JSON (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Hook integration settings, passed through to the builder
        #[arg(short, long, env = "TEAMS_CARD_META", default_value = "")]
        meta: String,
    },

    /// List event types and whether they produce a card
    Kinds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render { event, input, meta } => render(&event, input, &meta),
        Commands::Kinds => {
            for kind in HookEventType::ALL {
                let status = if kind.has_card() { "card" } else { "empty" };
                println!("{:<30} {status}", kind.as_str());
            }
            Ok(())
        }
    }
}

fn render(event: &str, input: Option<PathBuf>, meta: &str) -> Result<()> {
    let kind: HookEventType = event.parse()?;

    let body = match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read event from stdin")?;
            buf
        }
    };
    debug!(event = %kind, bytes = body.len(), "Read event body");

    let hook_event = HookEvent::from_json(kind, &body)
        .with_context(|| format!("Invalid {kind} event body"))?;
    let card = get_payload(&hook_event, meta)?;
    if card.sections.is_empty() {
        info!(event = %kind, "Event type has no card, rendering empty card");
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&card.json_payload()?)?;
    writeln!(stdout)?;
    Ok(())
}
