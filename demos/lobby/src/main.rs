//! lobby: a branch-office teller agent driven over stdin/stdout.
//!
//! Reads one wire message per line from stdin (see [`wire`]) and answers each
//! with the agent's snapshot as one JSON line on stdout.  Logs go to stderr;
//! set `RUST_LOG=debug` to watch state transitions.
//!
//! ```text
//! $ echo '{"type":"dialogue","text":"계좌 개설하고 싶어요"}' | lobby --seed 7
//! {"position":{"x":0.0,"y":0.0,"z":0.0},"rotation":{"y":0.0},"animation":"talking",...}
//! ```

mod scenario;
mod wire;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use bt_agent::{AgentBuilder, AgentController, CustomerEvent, Snapshot};
use bt_behavior::load_patterns_csv;
use bt_core::AgentConfig;
use bt_dialogue::{load_catalog_csv, load_rules_csv};
use bt_output::{CsvWriter, RecordingObserver};

#[derive(Parser, Debug)]
#[command(name = "lobby")]
#[command(about = "Bank-teller NPC agent over JSON lines", long_about = None)]
#[command(version)]
struct Args {
    /// Agent settings (TOML).  Missing keys take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Response-sampling seed; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Dialogue catalog CSV (`intent,response`).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Keyword rules CSV (`intent,keyword`).
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Idle behavior patterns CSV (`animation,duration_ticks,dx,dz`).
    #[arg(long)]
    patterns: Option<PathBuf>,

    /// Record snapshots and conversation turns as CSV in this directory.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Play a scripted customer visit instead of reading stdin.
    #[arg(long)]
    scenario: bool,
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<AgentConfig> {
    let Some(path) = path else {
        return Ok(AgentConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn build_agent(args: &Args) -> Result<AgentController> {
    let mut config = load_config(args.config.as_deref())?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut builder = AgentBuilder::new(config);
    if let Some(path) = &args.catalog {
        let catalog = load_catalog_csv(path)
            .with_context(|| format!("loading catalog {}", path.display()))?;
        builder = builder.catalog(Arc::new(catalog));
    }
    if let Some(path) = &args.rules {
        let rules = load_rules_csv(path)
            .with_context(|| format!("loading rules {}", path.display()))?;
        builder = builder.classifier(Arc::new(rules));
    }
    if let Some(path) = &args.patterns {
        let patterns = load_patterns_csv(path)
            .with_context(|| format!("loading patterns {}", path.display()))?;
        builder = builder.patterns(Arc::new(patterns));
    }
    Ok(builder.build()?)
}

// ── Driving ───────────────────────────────────────────────────────────────────

/// Runs each event through the agent, recording it when `--output` is set.
struct Driver {
    agent:    AgentController,
    recorder: Option<RecordingObserver<CsvWriter>>,
}

impl Driver {
    fn step(&mut self, event: &CustomerEvent) -> Snapshot {
        match &mut self.recorder {
            Some(rec) => self.agent.update_observed(event, rec),
            None      => self.agent.update(event),
        }
    }

    fn finish(mut self) -> Result<AgentController> {
        if let Some(mut rec) = self.recorder.take() {
            rec.finish();
            if let Some(e) = rec.take_error() {
                return Err(e).context("writing output");
            }
        }
        Ok(self.agent)
    }
}

fn emit(out: &mut impl Write, snapshot: &Snapshot) -> Result<()> {
    serde_json::to_writer(&mut *out, snapshot)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn run_stdin(driver: &mut Driver, out: &mut impl Write) -> Result<()> {
    for (n, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        let event = match wire::parse_line(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(error) => {
                tracing::warn!(line = n + 1, %error, "skipping malformed message");
                continue;
            }
        };
        emit(out, &driver.step(&event))?;
    }
    Ok(())
}

fn run_scenario(driver: &mut Driver, out: &mut impl Write) -> Result<()> {
    let wait = driver.agent.patterns().cycle_ticks();
    for event in scenario::visit(wait) {
        emit(out, &driver.step(&event))?;
    }
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let agent = build_agent(&args)?;

    let recorder = match &args.output {
        Some(dir) => Some(RecordingObserver::new(
            CsvWriter::new(dir).with_context(|| format!("opening output in {}", dir.display()))?,
        )),
        None => None,
    };
    let mut driver = Driver { agent, recorder };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.scenario {
        run_scenario(&mut driver, &mut out)?;
    } else {
        run_stdin(&mut driver, &mut out)?;
    }

    let agent = driver.finish()?;
    tracing::info!(
        updates = agent.tick().0,
        turns   = agent.history().len(),
        state   = %agent.state(),
        "session over"
    );
    Ok(())
}
