use anyhow::Context;
use std::time::Duration;

use backend::dashboards::{d400_overview, d401_orders, d402_sales};
use backend::shared::config;
use backend::shared::data::catalog;
use backend::shared::data::source;
use backend::shared::format::{format_delta, format_money, format_number};
use backend::shared::indicators::metadata::build_catalog;
use backend::shared::indicators::IndicatorRegistry;
use backend::system;
use contracts::dashboards::d401_orders::dto::OrdersDashboardRequest;
use contracts::dashboards::d402_sales::dto::SalesDashboardRequest;
use contracts::shared::indicators::{IndicatorValue, ValueFormat};

fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = config::load_config().context("config load failed")?;
    let range = config.dashboard.range();

    let source = source::source_for_location(
        &config.catalog.location,
        Duration::from_secs(config.catalog.timeout_secs),
    )?;
    let catalog = catalog::load_cached(source.as_ref()).context("catalog load failed")?;

    let registry = IndicatorRegistry::new();

    let overview = d400_overview::service::get_overview(&catalog, &registry);
    for value in &overview.indicators {
        tracing::info!("{}", kpi_line(value));
    }

    let orders = d401_orders::service::get_orders_dashboard(&catalog, &OrdersDashboardRequest { range });
    if let Ok(ref response) = orders {
        tracing::info!("Total Orders: {}", format_number(response.total_orders));
    }

    let sales = d402_sales::service::get_sales_dashboard(
        &catalog,
        &SalesDashboardRequest {
            range,
            seasonal_period: config.dashboard.seasonal_period,
        },
    );
    if let Ok(ref response) = sales {
        tracing::info!("Total Sales: {}", format_money(response.total_sales));
    }

    let report = serde_json::json!({
        "overview": overview,
        "orders": section(orders),
        "sales": section(sales),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// A failed dashboard becomes an error message in the report.
fn section<T: serde::Serialize>(result: backend::shared::error::Result<T>) -> serde_json::Value {
    match result {
        Ok(response) => serde_json::to_value(response).unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() })),
        Err(e) => {
            tracing::error!("dashboard failed: {}", e);
            serde_json::json!({ "error": e.to_string() })
        }
    }
}

fn kpi_line(value: &IndicatorValue) -> String {
    let meta = build_catalog().into_iter().find(|m| m.id == value.id);
    let label = meta.as_ref().map(|m| m.label.clone()).unwrap_or_else(|| value.id.0.clone());
    let money = matches!(meta.map(|m| m.format), Some(ValueFormat::Money { .. }));

    match value.value {
        Some(v) => {
            let shown = if money { format_money(v) } else { format_number(v.round() as u64) };
            let change = value.delta.map(|d| format!(" ({})", format_delta(d, money))).unwrap_or_default();
            let period = value.subtitle.as_deref().map(|s| format!(" [{}]", s)).unwrap_or_default();
            format!("{}: {}{}{}", label, shown, change, period)
        }
        None => format!(
            "{}: n/a ({})",
            label,
            value.subtitle.as_deref().unwrap_or("unavailable")
        ),
    }
}
