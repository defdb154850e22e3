use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use shelfscan_app::{AppConfig, ConfigError, HomeScreen, JsonFileSource};
use shelfscan_events::{InMemoryNavigator, NavigationEvent};

fn main() -> anyhow::Result<()> {
    shelfscan_observability::init();

    let mut config = AppConfig::from_env().context("invalid configuration")?;
    if let Some(path) = std::env::args_os().nth(1) {
        config.inventory_path = Some(PathBuf::from(path));
    }
    let path = config
        .inventory_path
        .clone()
        .ok_or(ConfigError::MissingInventory)?;

    let source = Arc::new(JsonFileSource::new(&path));
    let navigator = Arc::new(InMemoryNavigator::new());
    let mut screen = HomeScreen::new(source, config.clock(), Arc::new(config.view.clone()));

    screen.activate(navigator.clone());
    navigator.emit(NavigationEvent::Focus)?;

    if let Some(err) = screen.last_error() {
        anyhow::bail!("failed to load inventory from {}: {err}", path.display());
    }

    for id in &config.expand {
        if screen.toggle(id).is_none() {
            tracing::warn!(product_id = %id, "requested expansion for a product that is not shown");
        }
    }

    let rows = screen.rows();
    let mut out = std::io::stdout().lock();
    for row in &rows {
        serde_json::to_writer(&mut out, row).context("failed to write row")?;
        writeln!(out)?;
    }
    out.flush()?;

    tracing::info!(rows = rows.len(), path = %path.display(), "rendered inventory");
    screen.teardown();
    Ok(())
}
