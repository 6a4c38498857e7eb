use anyhow::{Context, Result, bail};
use journal_map::{ClusterEngine, ClusterRadius, JournalMapConfig, SnapshotLoader, logging};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

const USAGE: &str = "\
journal-map - cluster geotagged journal entries for map display

Usage: journal-map [SNAPSHOT.json] [ZOOM_LEVEL]

SNAPSHOT.json  journal entries (falls back to map.snapshot_path in config)
ZOOM_LEVEL     map zoom, larger is more zoomed out (falls back to map.default_zoom_level)";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return Ok(());
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("journal-map {}", journal_map::VERSION);
        return Ok(());
    }

    let config = JournalMapConfig::load()?;
    logging::init(&config.logging);

    let snapshot_path = match args.first() {
        Some(path) => PathBuf::from(path),
        None => match &config.map.snapshot_path {
            Some(path) => path.clone(),
            None => bail!("No snapshot given.\n\n{USAGE}"),
        },
    };

    let zoom_level = match args.get(1) {
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("Invalid zoom level '{raw}'"))?,
        None => config.map.default_zoom_level,
    };

    let entries = SnapshotLoader::load(&snapshot_path)
        .map_err(|e| anyhow::anyhow!(e.user_message()))
        .with_context(|| format!("Failed to load {}", snapshot_path.display()))?;

    let clusters = ClusterEngine::compute_clusters(&entries, zoom_level);
    let statistics = ClusterEngine::compute_statistics(&entries);

    info!(
        "{} entries -> {} clusters at zoom {}",
        entries.len(),
        clusters.len(),
        zoom_level
    );

    let output = json!({
        "zoomLevel": zoom_level,
        "radiusKm": ClusterRadius::for_zoom(zoom_level),
        "clusters": clusters,
        "statistics": statistics,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
