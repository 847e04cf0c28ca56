use anyhow::{Context, Result};
use armbian_facts::armbian_release;
use armbian_facts::facts::{FactsResult, FailureResult, ModuleArgs};
use clap::Parser;
use std::path::PathBuf;

/// Collect facts about Armbian from /etc/armbian-release.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Opts {
    /// JSON file with module arguments, as passed by the host.
    args_file: Option<PathBuf>,
    /// Accepted for compatibility; facts are always read from the release file.
    #[arg(long)]
    fact_path: Option<PathBuf>,
    /// Check mode. Nothing is changed either way.
    #[arg(long)]
    check: bool,
}

fn load_args(opts: &Opts) -> Result<ModuleArgs> {
    let mut args = match &opts.args_file {
        Some(path) => {
            let json = std::fs::read_to_string(path).with_context(|| {
                format!("failed to read module arguments from {}", path.display())
            })?;
            ModuleArgs::from_json(&json).context("failed to parse module arguments")?
        }
        None => ModuleArgs::default(),
    };
    if opts.fact_path.is_some() {
        args.fact_path = opts.fact_path.clone();
    }
    args.check_mode |= opts.check;
    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let args = match load_args(&opts) {
        Ok(args) => args,
        Err(err) => {
            tracing::error!("{err:#}");
            println!("{}", FailureResult::new(format!("{err:#}")).to_json()?);
            std::process::exit(1);
        }
    };
    tracing::debug!(fact_path = ?args.fact_path, check_mode = args.check_mode, "module arguments");

    let record = armbian_release::parse_armbian_release();
    if record.is_empty() {
        tracing::info!("{} not found or empty", armbian_release::ARMBIAN_RELEASE_PATH);
    }
    println!("{}", FactsResult::new(record).to_json()?);
    Ok(())
}
