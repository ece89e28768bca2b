pub mod orders;
pub mod sales;

use contracts::domain::a001_order::aggregate::Order;
use contracts::shared::date_range::DateRange;
use contracts::shared::indicators::*;
use contracts::shared::period::PeriodDelta;

use crate::shared::analytics;
use crate::shared::data::catalog::Catalog;

/// Orders in the context's date range, or every order when no range is set.
fn scoped_orders(catalog: &Catalog, ctx: &IndicatorContext) -> Vec<Order> {
    match (ctx.date_from, ctx.date_to) {
        (Some(from), Some(to)) => analytics::date_range_filter(catalog.orders(), &DateRange::new(from, to)),
        _ => catalog.orders().to_vec(),
    }
}

fn status_by_delta(delta: f64) -> IndicatorStatus {
    if delta > 0.0 {
        IndicatorStatus::Good
    } else if delta < 0.0 {
        IndicatorStatus::Bad
    } else {
        IndicatorStatus::Neutral
    }
}

fn from_delta(id: IndicatorId, delta: &PeriodDelta) -> IndicatorValue {
    IndicatorValue {
        id,
        value: Some(delta.current.value),
        previous_value: Some(delta.previous.value),
        delta: Some(delta.delta),
        status: status_by_delta(delta.delta),
        subtitle: Some(delta.current.key.label()),
    }
}

fn plain(id: IndicatorId, value: f64) -> IndicatorValue {
    IndicatorValue {
        id,
        value: Some(value),
        previous_value: None,
        delta: None,
        status: IndicatorStatus::Neutral,
        subtitle: None,
    }
}
