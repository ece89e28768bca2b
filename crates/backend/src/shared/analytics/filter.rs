use chrono::NaiveTime;
use std::collections::HashSet;

use contracts::domain::a001_order::aggregate::{Order, OrderId};
use contracts::domain::a002_order_line::aggregate::OrderLine;
use contracts::shared::date_range::DateRange;

/// Orders with `date_from 00:00:00 <= placed_at <= date_to 00:00:00`.
///
/// The end bound is midnight of `date_to`, so later orders on that day are
/// excluded. Reports built before depend on this boundary.
pub fn date_range_filter(orders: &[Order], range: &DateRange) -> Vec<Order> {
    let start = range.date_from.and_time(NaiveTime::MIN);
    let end = range.date_to.and_time(NaiveTime::MIN);

    let filtered: Vec<Order> = orders
        .iter()
        .filter(|o| o.placed_at >= start && o.placed_at <= end)
        .cloned()
        .collect();

    tracing::debug!(
        "date_range_filter {}..={}: {} of {} orders",
        range.date_from,
        range.date_to,
        filtered.len(),
        orders.len()
    );
    filtered
}

/// Lines belonging to one of `orders`.
pub fn order_lines_in_range(order_lines: &[OrderLine], orders: &[Order]) -> Vec<OrderLine> {
    let ids: HashSet<OrderId> = orders.iter().map(|o| o.id).collect();
    order_lines
        .iter()
        .filter(|l| ids.contains(&l.order_id))
        .cloned()
        .collect()
}
