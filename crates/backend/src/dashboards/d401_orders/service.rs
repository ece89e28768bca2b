use contracts::dashboards::d401_orders::dto::{OrdersDashboardRequest, OrdersDashboardResponse};
use contracts::shared::period::Period;
use contracts::shared::ranking::{BestSellerDimension, BestSellerMetric};

use crate::dashboards::{breakdown, ensure_valid_range};
use crate::shared::analytics;
use crate::shared::data::catalog::Catalog;
use crate::shared::error::Result;

/// Orders page: counts by period and hour, order size, best sellers by quantity.
pub fn get_orders_dashboard(catalog: &Catalog, request: &OrdersDashboardRequest) -> Result<OrdersDashboardResponse> {
    let range = request.range;
    ensure_valid_range(&range)?;

    let orders = analytics::date_range_filter(catalog.orders(), &range);
    let lines = analytics::order_lines_in_range(catalog.order_lines(), &orders);
    tracing::info!(
        "D401 Orders: {}..={}, {} orders, {} lines",
        range.date_from,
        range.date_to,
        orders.len(),
        lines.len()
    );

    let by_period = Period::selectable()
        .into_iter()
        .map(|period| breakdown(analytics::orders_by_period(&orders, period)))
        .collect();

    let per_order = analytics::pizzas_per_order(&lines);
    let pizzas_per_order = analytics::summarize(per_order.iter().map(|&(_, n)| Some(n as f64))).ok();

    let best_sellers = BestSellerDimension::all()
        .into_iter()
        .map(|dimension| {
            analytics::best_sellers(
                &lines,
                catalog,
                dimension,
                BestSellerMetric::Quantity,
            )
        })
        .collect();

    Ok(OrdersDashboardResponse {
        range,
        total_orders: orders.len() as u64,
        by_period,
        by_hour: analytics::orders_by_hour(&orders, &range),
        pizzas_per_order,
        best_sellers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixtures;
    use chrono::NaiveDate;
    use contracts::shared::date_range::DateRange;
    use contracts::shared::period::PeriodKey;

    fn request(from: (i32, u32, u32), to: (i32, u32, u32)) -> OrdersDashboardRequest {
        OrdersDashboardRequest {
            range: DateRange::new(
                NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
                NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
            ),
        }
    }

    #[test]
    fn test_full_year() {
        let response = get_orders_dashboard(&fixtures::catalog(), &OrdersDashboardRequest::default()).unwrap();
        assert_eq!(response.total_orders, 6);
        assert_eq!(response.by_period.len(), 3);

        let by_month = &response.by_period[1];
        assert_eq!(by_month.aggregate.period, Period::Month);
        assert_eq!(by_month.aggregate.rows[0].key, PeriodKey::Month(1));
        let stats = by_month.stats.unwrap();
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.min, 2.0);

        assert_eq!(response.best_sellers.len(), BestSellerDimension::all().len());
        assert_eq!(response.best_sellers[0].rows[0].label, "The Hawaiian Pizza");
        assert_eq!(response.pizzas_per_order.unwrap().max, 3.0);
    }

    #[test]
    fn test_range_limits_best_sellers() {
        let response = get_orders_dashboard(&fixtures::catalog(), &request((2015, 2, 1), (2015, 2, 28))).unwrap();
        assert_eq!(response.total_orders, 2);
        let by_name = &response.best_sellers[0];
        // only order 5: bbq_ckn_l x1, hawaiian_l x2
        assert_eq!(by_name.get("The Hawaiian Pizza"), Some(2.0));
        assert_eq!(by_name.get("The Barbecue Chicken Pizza"), Some(1.0));
    }

    #[test]
    fn test_empty_range_has_no_stats() {
        let response = get_orders_dashboard(&fixtures::catalog(), &request((2016, 1, 1), (2016, 1, 31))).unwrap();
        assert_eq!(response.total_orders, 0);
        assert!(response.by_period.iter().all(|b| b.stats.is_none() && b.aggregate.is_empty()));
        assert!(response.pizzas_per_order.is_none());
        assert!(response.best_sellers.iter().all(|r| r.rows.is_empty()));
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        assert!(get_orders_dashboard(&fixtures::catalog(), &request((2015, 2, 1), (2015, 1, 1))).is_err());
    }
}
