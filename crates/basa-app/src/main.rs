mod cli;
mod repl;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use basa_ai::{ChatEngine, GeminiConfig};

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    // Try common locations for .env relative to the workspace
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root — two levels up from crates/basa-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();

    let log_directive = args.log_level.as_deref().unwrap_or("basa=info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "basa=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("basa v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match GeminiConfig::from_env() {
        Ok(config) => match args.model {
            Some(model) => config.with_model(model),
            None => config,
        },
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Kesalahan konfigurasi: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Using model '{}'", config.model);

    let engine = ChatEngine::gemini(config);
    repl::run(engine).await
}
