#![forbid(unsafe_code)]

use anyhow::Result;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use company_commander::{ArmyListStore, JsonStore};

fn main() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let backend = JsonStore::open_default();
    info!(path = %backend.path().display(), "opening army list store");

    let store = ArmyListStore::open(backend);
    let document = store.document();
    info!(
        lists = document.lists.len(),
        current = %document.session.current_list,
        "army list store ready"
    );
    for (name, list) in &document.lists {
        info!(
            list = %name,
            nation = %list.nationality,
            theater = %list.theater_selector,
            platoons = list.platoons.len(),
            "available army list"
        );
    }

    Ok(())
}
