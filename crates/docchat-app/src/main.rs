//! DocChat application binary: composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing (stderr, so menus on stdout stay readable)
//! 3. Build the LLM client, document chat and text-to-SQL collaborators
//! 4. Run the interactive menus on stdin/stdout

mod cli;
mod menu;

use std::sync::Arc;

use clap::Parser;
use docchat_chat::{CompatibleClient, FileChat, LlmClient};
use docchat_core::config::DocChatConfig;
use docchat_sql::{SqlExecutor, SqlTranslator};

use crate::cli::CliArgs;
use crate::menu::{App, SqlMode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing starts so its log level can apply;
    // load_or_default's warning is emitted once the subscriber is up.
    let config_file = args.resolve_config_path();
    let config_exists = config_file.exists();

    let bootstrap_level = args.resolve_log_level("info");
    let config = if config_exists {
        DocChatConfig::load(&config_file).ok()
    } else {
        None
    };
    let log_level = match config {
        Some(ref c) => args.resolve_log_level(&c.general.log_level),
        None => bootstrap_level,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    tracing::info!("Starting DocChat v{}", env!("CARGO_PKG_VERSION"));

    let config = match config {
        Some(config) => {
            tracing::info!(path = %config_file.display(), "Configuration loaded");
            config
        }
        None if config_exists => DocChatConfig::load_or_default(&config_file),
        None => {
            tracing::info!(path = %config_file.display(), "No config file, using defaults");
            DocChatConfig::default()
        }
    };

    // LLM.
    let client: Arc<dyn LlmClient> = Arc::new(CompatibleClient::from_config(&config.llm));
    tracing::info!(
        provider = %config.llm.provider,
        model = %config.llm.model,
        "LLM client ready"
    );

    // Text-to-SQL database.
    let db_path = args.resolve_database(&config.database.path);
    let executor = match SqlExecutor::open(&db_path) {
        Ok(executor) => Ok(executor),
        Err(e) => {
            tracing::warn!(path = %db_path.display(), error = %e, "Text-to-SQL disabled");
            Err(e.to_string())
        }
    };
    let sql = SqlMode {
        translator: SqlTranslator::new(Arc::clone(&client), config.database.dialect.clone()),
        executor,
    };

    let chat = FileChat::new(client);
    let stdin = std::io::stdin();
    let mut app = App::new(stdin.lock(), std::io::stdout(), chat, sql);
    app.run().await?;

    tracing::info!("DocChat shut down");
    Ok(())
}
