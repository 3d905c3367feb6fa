use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use log::{info, warn};
use sdg_health::algorithm::summary::Comparison;
use sdg_health::utils::test::sample_records;
use sdg_health::{
    AreaSummary, CatalogStore, Choice, DashboardConfig, GeoLevel, GeographicCatalog,
    GeographicSelector, MapLayer, MapView, PerformanceClassifier, PerformanceReport, RecordSource,
    Selection, choropleth_bins,
};

/// Optional inputs: `sdg-health [CONFIG.json] [RECORDS.json] [CATALOG.json]`
struct Args {
    config: Option<PathBuf>,
    records: Option<PathBuf>,
    catalog: Option<PathBuf>,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args_os().skip(1).map(PathBuf::from);
        Self {
            config: args.next(),
            records: args.next(),
            catalog: args.next(),
        }
    }
}

fn log_report(report: &PerformanceReport) {
    info!("National comparison for {}", report.selection);
    for row in &report.comparisons {
        match &row.comparison {
            Comparison::Performance(result) => info!(
                "  {:<24} {:>8} | {}",
                row.indicator.display_name(),
                result.status,
                result.interpretation
            ),
            Comparison::ShareOfNational { percent: Some(percent) } => info!(
                "  {:<24} {:>7.1}% of national total",
                row.indicator.display_name(),
                percent
            ),
            Comparison::ShareOfNational { percent: None } => {
                info!("  {:<24} no national share", row.indicator.display_name());
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let start = Instant::now();

    let config = match &args.config {
        Some(path) => DashboardConfig::from_json_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    info!("{config}");

    let source = match &args.records {
        Some(path) => RecordSource::from_json_file(path)
            .with_context(|| format!("loading area records from {}", path.display()))?,
        None => {
            warn!("No record file given, using the built-in sample rows");
            RecordSource::new(sample_records())
        }
    };

    let catalog = match &args.catalog {
        Some(path) => GeographicCatalog::from_json_file(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => GeographicCatalog::from_records(source.records())
            .context("deriving catalog from area records")?,
    };

    let store = CatalogStore::new(catalog, config.cache.geographic_ttl());
    let selector = GeographicSelector::from_store(&store);
    let classifier = PerformanceClassifier::default();

    // Walk down the first option at every level
    let mut selection = selector.reset();
    for level in [GeoLevel::Province, GeoLevel::District, GeoLevel::Municipality] {
        let Some(first) = selector.options_for(level, &selection).into_iter().next() else {
            warn!("No {} options under {selection}", level.display_name());
            break;
        };
        selection = selector.select(level, first.code, &selection)?;

        let summary = AreaSummary::for_selection(source.records(), &selection);
        info!("{summary}");
        log_report(&PerformanceReport::dashboard(&source, &selection, &classifier));

        let view = MapView::for_selection(&selection, &config.map);
        let values: Vec<f64> = view
            .layer_values(source.records(), MapLayer::Population)
            .into_iter()
            .filter_map(|(_, value)| value)
            .collect();
        if let Some(bins) = choropleth_bins(MapLayer::Population, &values, 5) {
            info!("Map {:?} at zoom {}, population bins {bins:?}", view.scope, view.zoom);
        }
    }

    // "All" at district level goes back to the province
    let widened = selector.select(GeoLevel::District, Choice::All, &selection)?;
    info!("Widened selection to {widened}");
    let reset: Selection = selector.reset();
    info!("Reset selection to {reset}");

    info!("Done in {:.2?}", start.elapsed());
    Ok(())
}
