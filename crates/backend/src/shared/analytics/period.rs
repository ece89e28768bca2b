use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

use contracts::domain::a001_order::aggregate::Order;
use contracts::shared::period::{Aggregation, Period, PeriodAggregate, PeriodKey, PeriodValue};

use super::join::OrderPrice;

/// Group `rows` by `period` of their timestamp and reduce each bucket.
///
/// `Count` counts rows; `Sum` adds `value` and skips `None`, so a bucket whose
/// values are all absent sums to 0. Buckets come out in first-seen order.
pub fn aggregate_by_period<T, F, V>(
    rows: &[T],
    period: Period,
    timestamp: F,
    value: V,
    aggregation: Aggregation,
) -> PeriodAggregate
where
    F: Fn(&T) -> NaiveDateTime,
    V: Fn(&T) -> Option<f64>,
{
    let mut result = PeriodAggregate::new(period, aggregation);
    let mut index: HashMap<PeriodKey, usize> = HashMap::new();

    for row in rows {
        let key = period.key_of(&timestamp(row));
        let slot = *index.entry(key).or_insert_with(|| {
            result.rows.push(PeriodValue { key, value: 0.0 });
            result.rows.len() - 1
        });

        let contribution = match aggregation {
            Aggregation::Count => 1.0,
            Aggregation::Sum => value(row).unwrap_or(0.0),
        };
        result.rows[slot].value += contribution;
    }

    result
}

/// Number of orders per period.
pub fn orders_by_period(orders: &[Order], period: Period) -> PeriodAggregate {
    aggregate_by_period(orders, period, |o| o.placed_at, |_| None, Aggregation::Count)
}

/// Sum of order prices per period.
pub fn sales_by_period(order_prices: &[OrderPrice], period: Period) -> PeriodAggregate {
    aggregate_by_period(order_prices, period, |p| p.placed_at, |p| p.price, Aggregation::Sum)
}

/// Daily sales in date order; days without orders are not present.
pub fn daily_sales(order_prices: &[OrderPrice]) -> Vec<(NaiveDate, f64)> {
    sales_by_period(order_prices, Period::Day)
        .sorted()
        .rows
        .into_iter()
        .filter_map(|r| match r.key {
            PeriodKey::Day(date) => Some((date, r.value)),
            _ => None,
        })
        .collect()
}
