//! `check-env`: lint `.env.local` before a build.

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use medichat_config::{CheckOptions, run_check};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "check-env",
    about = "Check that .env.local carries the public Supabase URL and anon key"
)]
struct Cli {
    /// Env file to check (default: ./.env.local)
    #[arg(long)]
    env_file: Option<PathBuf>,
    /// Report missing keys without failing (exit 0)
    #[arg(long)]
    advisory: bool,
}

fn main() -> Result<ExitCode> {
    // Keep the default quiet so the report stays identical between runs.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut opts = match cli.env_file {
        Some(env_file) => CheckOptions {
            env_file,
            ..CheckOptions::default()
        },
        None => CheckOptions::from_current_dir()
            .context("failed to resolve current directory")?,
    };
    opts.advisory = cli.advisory;

    let outcome = run_check(&opts, &mut io::stdout(), &mut io::stderr())
        .context("failed to write report")?;

    Ok(ExitCode::from(outcome.exit_code()))
}
