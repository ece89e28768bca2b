use chrono::Timelike;
use std::collections::HashMap;

use contracts::dashboards::d401_orders::dto::HourlyOrders;
use contracts::domain::a001_order::aggregate::{Order, OrderId};
use contracts::domain::a002_order_line::aggregate::OrderLine;
use contracts::shared::date_range::DateRange;
use contracts::shared::period::{PeriodAggregate, SummaryStats};

use crate::shared::error::{AnalyticsError, Result};

/// mean / max / min over the present values; absent ones are skipped.
pub fn summarize<I>(values: I) -> Result<SummaryStats>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;

    for v in values.into_iter().flatten() {
        count += 1;
        sum += v;
        max = max.max(v);
        min = min.min(v);
    }

    if count == 0 {
        return Err(AnalyticsError::empty_range("no values to summarize"));
    }

    Ok(SummaryStats {
        mean: sum / count as f64,
        max,
        min,
    })
}

pub fn summarize_aggregate(aggregate: &PeriodAggregate) -> Result<SummaryStats> {
    summarize(aggregate.rows.iter().map(|r| Some(r.value)))
}

/// Total quantity per order, for orders that have lines. First-seen order.
pub fn pizzas_per_order(order_lines: &[OrderLine]) -> Vec<(OrderId, u64)> {
    let mut totals: Vec<(OrderId, u64)> = Vec::new();
    let mut index: HashMap<OrderId, usize> = HashMap::new();
    for line in order_lines {
        let slot = *index.entry(line.order_id).or_insert_with(|| {
            totals.push((line.order_id, 0));
            totals.len() - 1
        });
        totals[slot].1 += line.quantity as u64;
    }
    totals
}

/// Orders per hour of day, and per hour per day of `range`.
pub fn orders_by_hour(orders: &[Order], range: &DateRange) -> HourlyOrders {
    let mut total = vec![0u64; 24];
    for order in orders {
        total[order.placed_at.hour() as usize] += 1;
    }

    let days = range.span_days();
    let average = if days > 0 {
        Some(total.iter().map(|&n| n as f64 / days as f64).collect())
    } else {
        None
    };

    HourlyOrders { total, average }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixtures;
    use chrono::NaiveDate;

    #[test]
    fn test_summarize_skips_absent() {
        let stats = summarize(vec![Some(2.0), None, Some(4.0), Some(9.0)]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.min, 2.0);
    }

    #[test]
    fn test_summarize_empty_is_error() {
        assert!(matches!(summarize(vec![None, None]), Err(AnalyticsError::EmptyRange(_))));
        assert!(summarize(Vec::<Option<f64>>::new()).is_err());
    }

    #[test]
    fn test_pizzas_per_order() {
        let per_order = pizzas_per_order(&fixtures::order_lines());
        let counts: Vec<u64> = per_order.iter().map(|(_, n)| *n).collect();
        assert_eq!(counts, vec![3, 1, 1, 3, 3]);
        let stats = summarize(counts.iter().map(|&n| Some(n as f64))).unwrap();
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.min, 1.0);
    }

    #[test]
    fn test_orders_by_hour() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2015, 1, 3).unwrap(),
        );
        let hourly = orders_by_hour(&fixtures::orders(), &range);
        assert_eq!(hourly.total.len(), 24);
        assert_eq!(hourly.total.iter().sum::<u64>(), 6);
        assert_eq!(hourly.total[0], 1);
        assert_eq!(hourly.total[12], 1);
        assert_eq!(hourly.total[18], 1);
        assert_eq!(hourly.average.unwrap()[11], 0.5);

        let same_day = DateRange::new(range.date_from, range.date_from);
        assert!(orders_by_hour(&fixtures::orders(), &same_day).average.is_none());
    }
}
