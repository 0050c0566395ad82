mod api_client;
mod cli;
mod config;
mod errors;
mod models;
mod routes;
mod session;
mod state;
mod views;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::state::AppState;
use crate::views::ViewOutcome;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration first so RUST_LOG from .env is honoured
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only page output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(
        "staff-console v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.api_base_url
    );

    let state = AppState::from_config(config)?;
    let outcome = cli.command.execute(&state).await;

    Ok(print_outcome(outcome))
}

fn print_outcome(outcome: ViewOutcome) -> ExitCode {
    match outcome {
        ViewOutcome::Page(page) => {
            println!("{page}");
            ExitCode::SUCCESS
        }
        ViewOutcome::Navigate { to, notice } => {
            if let Some(notice) = notice {
                println!("{notice}");
            }
            println!("-> {to}");
            ExitCode::SUCCESS
        }
        ViewOutcome::Error(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}
