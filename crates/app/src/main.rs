use anyhow::Context;

use ecocheck_app::EcoCheck;
use ecocheck_catalog::SortCriterion;
use ecocheck_core::Entity;
use ecocheck_infra::StoreConfig;

fn main() -> anyhow::Result<()> {
    ecocheck_observability::init();

    let config = StoreConfig::from_env().context("failed to load configuration")?;
    let catalog = config.load_catalog()?;
    let store = config.open_store()?;

    match config.store_path() {
        Some(path) => tracing::info!(
            backend = ?config.backend,
            store = %path.display(),
            products = catalog.len(),
            "ecocheck session ready"
        ),
        None => tracing::info!(
            backend = ?config.backend,
            products = catalog.len(),
            "ecocheck session ready"
        ),
    }

    let app = EcoCheck::new(catalog, store);

    match app.scan() {
        Ok(product) => {
            let details = app.details(product.id().as_str());
            tracing::info!(
                details = %serde_json::to_string(&details).context("failed to render product")?,
                "simulated scan"
            );
        }
        Err(err) => tracing::error!(error = %err, "scan failed"),
    }

    let favorites = app.favorites_sorted(SortCriterion::default());
    let stale = app.stale_favorites();
    if !stale.is_empty() {
        tracing::warn!(?stale, "favorites reference products missing from the catalog");
    }
    tracing::info!(
        theme = %app.theme(),
        favorites = %favorites.saved_label,
        "session summary"
    );

    Ok(())
}
