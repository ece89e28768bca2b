use contracts::shared::indicators::*;
use contracts::shared::period::{Period, SummaryStats};

use super::{from_delta, plain, scoped_orders};
use crate::shared::analytics::{self, OrderPrice};
use crate::shared::data::catalog::Catalog;
use crate::shared::error::Result;
use crate::shared::indicators::metadata::ids;

fn order_prices(catalog: &Catalog, ctx: &IndicatorContext) -> Vec<OrderPrice> {
    let orders = scoped_orders(catalog, ctx);
    analytics::join_order_prices(&orders, catalog.order_lines(), catalog)
}

fn order_price_stats(catalog: &Catalog, ctx: &IndicatorContext) -> Result<SummaryStats> {
    analytics::summarize(order_prices(catalog, ctx).iter().map(|p| p.price))
}

pub fn compute_sales_current_month(catalog: &Catalog, ctx: &IndicatorContext) -> Result<IndicatorValue> {
    let by_month = analytics::sales_by_period(&order_prices(catalog, ctx), Period::YearMonth);
    let delta = analytics::top_n_delta(&by_month)?;
    Ok(from_delta(ids::sales_current_month(), &delta))
}

pub fn compute_sales_total(catalog: &Catalog, ctx: &IndicatorContext) -> Result<IndicatorValue> {
    let total: f64 = order_prices(catalog, ctx).iter().filter_map(|p| p.price).sum();
    Ok(plain(ids::sales_total(), total))
}

pub fn compute_sales_avg_order(catalog: &Catalog, ctx: &IndicatorContext) -> Result<IndicatorValue> {
    let stats = order_price_stats(catalog, ctx)?;
    Ok(plain(ids::sales_avg_order(), stats.mean))
}

pub fn compute_sales_max_order(catalog: &Catalog, ctx: &IndicatorContext) -> Result<IndicatorValue> {
    let stats = order_price_stats(catalog, ctx)?;
    Ok(plain(ids::sales_max_order(), stats.max))
}

pub fn compute_sales_min_order(catalog: &Catalog, ctx: &IndicatorContext) -> Result<IndicatorValue> {
    let stats = order_price_stats(catalog, ctx)?;
    Ok(plain(ids::sales_min_order(), stats.min))
}
