use contracts::shared::indicators::*;
use contracts::shared::period::Period;

use super::{from_delta, plain, scoped_orders};
use crate::shared::analytics;
use crate::shared::data::catalog::Catalog;
use crate::shared::error::Result;
use crate::shared::indicators::metadata::ids;

pub fn compute_orders_current_month(catalog: &Catalog, ctx: &IndicatorContext) -> Result<IndicatorValue> {
    let orders = scoped_orders(catalog, ctx);
    let by_month = analytics::orders_by_period(&orders, Period::YearMonth);
    let delta = analytics::top_n_delta(&by_month)?;
    Ok(from_delta(ids::orders_current_month(), &delta))
}

pub fn compute_orders_total(catalog: &Catalog, ctx: &IndicatorContext) -> Result<IndicatorValue> {
    let orders = scoped_orders(catalog, ctx);
    Ok(plain(ids::orders_total(), orders.len() as f64))
}
