//! Kioku CLI - Prompt library migration
//!
//! One-shot import of the YAML prompt library into the memory store.
//! Safe to re-run: the store deduplicates by content hash.

mod config;
mod store;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use kioku::{ImportOutcome, Importer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::MemoryApiClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let result = run().await;
    if let Err(e) = &result {
        report_error(e);
    }

    ExitCode::from(exit_status(&result))
}

async fn run() -> Result<ImportOutcome> {
    let config = Config::load()?;
    migrate(&config).await
}

async fn migrate(config: &Config) -> Result<ImportOutcome> {
    tracing::debug!(
        config = ?Config::config_path().ok(),
        source = %config.resolved_source_path().display(),
        store = %config.store.base_url,
        "Loaded configuration"
    );

    let client = MemoryApiClient::new(&config.store);
    let importer = Importer::new(config.import_config(), client);

    importer.run().await.context("Prompt migration failed")
}

/// Zero for every normal outcome, including a missing library
fn exit_status<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Tracing goes to stderr so stdout only carries progress lines
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();
}

fn report_error(error: &anyhow::Error) {
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    eprintln!("{} {}", "Error:".red().bold(), error);
    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn config_for(source_path: &Path) -> Config {
        let mut config = Config {
            source_path: source_path.to_path_buf(),
            ..Config::default()
        };
        config.store.base_url = "http://127.0.0.1:9".to_string();
        config
    }

    fn library(dir: &TempDir, content: &str) -> Config {
        let path = dir.path().join("prompt-library.yaml");
        std::fs::write(&path, content).unwrap();
        config_for(&path)
    }

    #[tokio::test]
    async fn test_missing_library_exits_zero() {
        let dir = TempDir::new().unwrap();
        let result = migrate(&config_for(&dir.path().join("absent.yaml"))).await;

        assert!(matches!(result, Ok(ImportOutcome::SourceMissing(_))));
        assert_eq!(exit_status(&result), 0);
    }

    #[tokio::test]
    async fn test_no_prompts_exits_zero() {
        let dir = TempDir::new().unwrap();
        let result = migrate(&library(&dir, "prompts: []\n")).await;

        assert!(matches!(result, Ok(ImportOutcome::NoPrompts)));
        assert_eq!(exit_status(&result), 0);
    }

    #[tokio::test]
    async fn test_malformed_library_exits_non_zero() {
        let dir = TempDir::new().unwrap();
        let result = migrate(&library(&dir, "prompts: [\n  - id: a\n")).await;

        assert_eq!(exit_status(&result), 1);
        let error = result.unwrap_err();
        assert!(error.to_string().contains("Prompt migration failed"));
        assert!(matches!(
            error.downcast_ref::<kioku::ImportError>(),
            Some(kioku::ImportError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_store_exits_non_zero() {
        let dir = TempDir::new().unwrap();
        let config = library(
            &dir,
            "prompts:\n  - id: greet\n    prompt: Say hello\n    triggers: [hi]\n",
        );

        let result = migrate(&config).await;

        assert_eq!(exit_status(&result), 1);
        assert!(matches!(
            result.unwrap_err().downcast_ref::<kioku::ImportError>(),
            Some(kioku::ImportError::Write { .. })
        ));
    }
}
