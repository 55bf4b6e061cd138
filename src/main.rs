use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use bookvault::domain::keybinding::Keymap;
use bookvault::infrastructure::{AppConfig, CliArgs, LibraryClient, StorageManager};
use bookvault::presentation::{App, AppOptions, Theme};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app() -> Result<App<LibraryClient>> {
    let config = load_config()?;

    init_logging(&config)?;

    info!(
        version = bookvault::VERSION,
        api = %config.api_base_url,
        "Starting BookVault"
    );

    let (keymap, rejected) = Keymap::defaults().with_overrides(&config.keybindings);
    for key in rejected {
        warn!(key = %key, "Ignoring keybinding with unrecognized key");
    }

    let client = Arc::new(LibraryClient::new(
        &config.api_base_url,
        config.request_timeout(),
    )?);

    let options = AppOptions {
        start_route: config.start_route(),
        keymap,
        theme: Theme::new(&config.ui.accent_color),
        show_key_hints: config.ui.show_key_hints,
    };

    Ok(App::new(client, options))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
