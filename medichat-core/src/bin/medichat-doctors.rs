//! `medichat-doctors`: browse the doctor directory from a terminal.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use medichat_config::{SupabaseConfig, constants::DEFAULT_ENV_FILE};
use medichat_core::{DoctorRepository, RestClient, RestDoctorRepository};
use medichat_model::{Doctor, DoctorId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "medichat-doctors", about = "Browse the doctor directory")]
struct Cli {
    /// Env file holding the Supabase URL and anon key
    #[arg(long, default_value = DEFAULT_ENV_FILE, global = true)]
    env_file: PathBuf,
    /// Read the URL and anon key from exported variables instead
    #[arg(long, global = true)]
    process_env: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all doctors, newest first
    List,
    /// Show one doctor and the path of their chat screen
    Show {
        /// Doctor id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = if cli.process_env {
        SupabaseConfig::from_process_env()
            .context("failed to load config from the process environment")?
    } else {
        SupabaseConfig::from_env_file(&cli.env_file).with_context(|| {
            format!("failed to load {}", cli.env_file.display())
        })?
    };
    let repo = RestDoctorRepository::new(RestClient::new(&config)?);

    match cli.command {
        Command::List => {
            let doctors = repo.list_doctors().await?;
            write_doctor_list(&mut io::stdout().lock(), &doctors)?;
        }
        Command::Show { id } => {
            let doctor = repo
                .get_doctor(&DoctorId::new(id.clone()))
                .await
                .with_context(|| format!("failed to load doctor {id}"))?;
            let mut out = io::stdout().lock();
            write_doctor(&mut out, &doctor)?;
            writeln!(out, "  chat: {}", doctor.chat_path())?;
        }
    }

    Ok(())
}

/// The listing page: one line per doctor and a count footer, or a single
/// notice when the directory is empty.
fn write_doctor_list<W: Write>(
    out: &mut W,
    doctors: &[Doctor],
) -> io::Result<()> {
    if doctors.is_empty() {
        return writeln!(out, "No doctors available.");
    }
    for doctor in doctors {
        write_doctor(out, doctor)?;
    }
    writeln!(out, "{} doctors available", doctors.len())
}

fn write_doctor<W: Write>(out: &mut W, doctor: &Doctor) -> io::Result<()> {
    let initial = doctor.initial().unwrap_or('?');
    writeln!(out, "[{initial}] {} <{}>", doctor.display_name(), doctor.email)
}
