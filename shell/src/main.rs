//! Command-line front end: loads one collection and prints a page of it as
//! JSON.
//!
//! Usage: `starchart [people|planets|films] [search text] [page]`

use anyhow::Context;
use starchart_core::AppConfig;
use starchart_shell::commands::{catalog, settings};
use starchart_shell::{init_tracing, version, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    tracing::info!("Starting Starchart v{}", version());

    let mut args = std::env::args().skip(1);
    let resource = args.next().unwrap_or_else(|| "people".to_string());
    let search = args.next().unwrap_or_default();
    let page = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("page must be a positive number, got '{raw}'"))?,
        None => 1,
    };

    let config = AppConfig::load_with_env().context("failed to load configuration")?;
    let state = AppState::bootstrap(config)?;
    tracing::debug!("Dark mode: {}", settings::dark_mode(&state).await);

    catalog::select_resource(&state, &resource).await?;
    catalog::set_search(&state, search).await;
    let view = catalog::go_to_page(&state, page).await;

    println!("{}", serde_json::to_string_pretty(&view)?);

    if let Some(error) = &view.error {
        anyhow::bail!("{error}");
    }
    Ok(())
}
