use contracts::shared::indicators::*;
use std::collections::HashMap;

use super::compute::{orders, sales};
use super::metadata::ids;
use crate::shared::data::catalog::Catalog;
use crate::shared::error::Result;

type ComputeFn = fn(&Catalog, &IndicatorContext) -> Result<IndicatorValue>;

/// Central registry: maps `IndicatorId` to its compute function.
pub struct IndicatorRegistry {
    fns: HashMap<String, ComputeFn>,
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        let mut fns: HashMap<String, ComputeFn> = HashMap::new();

        fns.insert(ids::orders_current_month().0, orders::compute_orders_current_month);
        fns.insert(ids::orders_total().0, orders::compute_orders_total);
        fns.insert(ids::sales_current_month().0, sales::compute_sales_current_month);
        fns.insert(ids::sales_total().0, sales::compute_sales_total);
        fns.insert(ids::sales_avg_order().0, sales::compute_sales_avg_order);
        fns.insert(ids::sales_max_order().0, sales::compute_sales_max_order);
        fns.insert(ids::sales_min_order().0, sales::compute_sales_min_order);

        Self { fns }
    }

    /// Compute a batch of indicators. A failing indicator is reported in its
    /// own value and does not abort the batch; unknown ids are skipped.
    pub fn compute(&self, catalog: &Catalog, ids: &[IndicatorId], ctx: &IndicatorContext) -> Vec<IndicatorValue> {
        let mut results = Vec::with_capacity(ids.len());

        for id in ids {
            if let Some(compute_fn) = self.fns.get(&id.0) {
                match compute_fn(catalog, ctx) {
                    Ok(val) => results.push(val),
                    Err(e) => {
                        tracing::warn!("indicator {} compute error: {e}", id.0);
                        results.push(IndicatorValue::unavailable(id.clone(), e.to_string()));
                    }
                }
            } else {
                tracing::warn!("indicator {} not found in registry", id.0);
            }
        }

        results
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixtures;
    use chrono::NaiveDate;

    fn value_of(values: &[IndicatorValue], id: IndicatorId) -> &IndicatorValue {
        values.iter().find(|v| v.id == id).unwrap()
    }

    #[test]
    fn test_every_catalogued_indicator_is_registered() {
        let registry = IndicatorRegistry::new();
        for meta in super::super::metadata::build_catalog() {
            assert!(registry.fns.contains_key(&meta.id.0), "{}", meta.id.0);
        }
    }

    #[test]
    fn test_current_month_kpis() {
        let catalog = fixtures::catalog();
        let registry = IndicatorRegistry::new();
        let values = registry.compute(
            &catalog,
            &[ids::orders_current_month(), ids::sales_current_month()],
            &IndicatorContext::default(),
        );
        assert_eq!(values.len(), 2);

        let orders = value_of(&values, ids::orders_current_month());
        assert_eq!(orders.value, Some(2.0));
        assert_eq!(orders.previous_value, Some(4.0));
        assert_eq!(orders.delta, Some(-2.0));
        assert_eq!(orders.status, IndicatorStatus::Bad);
        assert_eq!(orders.subtitle.as_deref(), Some("2015-02"));

        let sales = value_of(&values, ids::sales_current_month());
        assert!((sales.value.unwrap() - 37.25).abs() < 1e-9);
        assert!((sales.previous_value.unwrap() - 80.5).abs() < 1e-9);
    }

    #[test]
    fn test_current_month_spans_year_boundary() {
        use crate::shared::data::catalog::Catalog;
        use chrono::NaiveDateTime;
        use contracts::domain::a001_order::aggregate::{Order, OrderId};

        let orders: Vec<Order> = ["2015-11-20 12:00:00", "2015-12-01 12:00:00", "2015-12-24 19:00:00", "2016-01-02 13:00:00"]
            .iter()
            .enumerate()
            .map(|(i, ts)| {
                let placed_at = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap();
                Order::new(OrderId::new(i as u64 + 1), placed_at)
            })
            .collect();
        let catalog = Catalog::from_tables(orders, Vec::new(), fixtures::pizzas(), fixtures::pizza_types()).unwrap();

        let values = IndicatorRegistry::new().compute(&catalog, &[ids::orders_current_month()], &IndicatorContext::default());
        // chronological: January 2016 is current, not December
        assert_eq!(values[0].subtitle.as_deref(), Some("2016-01"));
        assert_eq!(values[0].value, Some(1.0));
        assert_eq!(values[0].previous_value, Some(2.0));
    }

    #[test]
    fn test_single_month_reports_no_data() {
        let catalog = fixtures::catalog();
        let ctx = IndicatorContext {
            date_from: NaiveDate::from_ymd_opt(2015, 1, 1),
            date_to: NaiveDate::from_ymd_opt(2015, 1, 31),
        };
        let values = IndicatorRegistry::new().compute(&catalog, &[ids::orders_current_month(), ids::orders_total()], &ctx);
        assert_eq!(values[0].value, None);
        assert!(values[0].subtitle.as_deref().unwrap().starts_with("no data"));
        assert_eq!(values[1].value, Some(4.0));
    }

    #[test]
    fn test_order_price_kpis() {
        let catalog = fixtures::catalog();
        let values = IndicatorRegistry::new().compute(
            &catalog,
            &[
                ids::sales_total(),
                ids::sales_avg_order(),
                ids::sales_max_order(),
                ids::sales_min_order(),
            ],
            &IndicatorContext::default(),
        );
        assert!((values[0].value.unwrap() - 117.75).abs() < 1e-9);
        // order 6 has no price and is not averaged in
        assert!((values[1].value.unwrap() - 117.75 / 5.0).abs() < 1e-9);
        assert_eq!(values[2].value, Some(37.25));
        assert_eq!(values[3].value, Some(13.25));
    }

    #[test]
    fn test_unknown_indicator_is_skipped() {
        let catalog = fixtures::catalog();
        let values = IndicatorRegistry::new().compute(&catalog, &[IndicatorId::new("nope")], &IndicatorContext::default());
        assert!(values.is_empty());
    }
}
