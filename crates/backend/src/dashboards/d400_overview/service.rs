use contracts::dashboards::d400_overview::dto::OverviewResponse;
use contracts::shared::indicators::IndicatorContext;

use crate::shared::data::catalog::Catalog;
use crate::shared::indicators::metadata::ids;
use crate::shared::indicators::IndicatorRegistry;

/// Current monthly orders and sales over the whole catalog.
pub fn get_overview(catalog: &Catalog, registry: &IndicatorRegistry) -> OverviewResponse {
    let indicators = registry.compute(
        catalog,
        &[ids::orders_current_month(), ids::sales_current_month()],
        &IndicatorContext::default(),
    );
    tracing::info!("D400 Overview: {} indicators", indicators.len());
    OverviewResponse { indicators }
}
