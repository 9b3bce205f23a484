//! `rickdex stats` — per-status breakdown of the full catalog.

use crate::api::ApiClient;
use crate::catalog::compute_stats;
use crate::cli::output;
use crate::config::Config;
use anyhow::Result;

/// Run the stats command. Stats are derived from the unfiltered list, so
/// there are no filter flags here.
pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let client = ApiClient::new(&config);

    let spinner = output::spinner("counting the multiverse...");
    let result = client.fetch_all().await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let characters = result?;

    let stats = compute_stats(&characters);

    if output::is_json() {
        output::print_json(&serde_json::to_value(stats)?);
        return Ok(());
    }

    if !output::is_quiet() {
        eprintln!("  Character catalog:");
        eprintln!();
        eprintln!("    Total    {:>5}", stats.total);
        eprintln!("    Alive    {:>5}", stats.alive);
        eprintln!("    Dead     {:>5}", stats.dead);
        eprintln!("    Unknown  {:>5}", stats.unknown);
    }

    Ok(())
}
