//! rootsum CLI: runs the built-in square-root pipeline and prints the report.
//!
//! The binary takes no options besides `--help`/`--version` and reads no
//! environment variables. Diagnostics go to stderr; stdout carries only the
//! four report lines.

use std::io;
use std::process;

use clap::Parser;
use rootsum_core::config::PipelineConfig;
use rootsum_exec::Engine;
use tracing::Level;

#[derive(Parser)]
#[command(name = "rootsum", version)]
#[command(about = "Square roots of a fixed list, filtered above a threshold and summed", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new(PipelineConfig::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let manifest = engine.run_and_report(&mut out)?;

    tracing::debug!(
        plan_hash = %manifest.plan_hash,
        duration_ms = manifest.duration_ms(),
        "pipeline finished"
    );
    Ok(())
}
