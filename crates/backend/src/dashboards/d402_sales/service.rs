use contracts::dashboards::d402_sales::dto::{SalesDashboardRequest, SalesDashboardResponse, SeasonalityBlock};
use contracts::shared::date_range::DateRange;
use contracts::shared::period::Period;
use contracts::shared::ranking::{BestSellerDimension, BestSellerMetric};

use crate::dashboards::{breakdown, ensure_valid_range};
use crate::shared::analytics::{self, OrderPrice};
use crate::shared::data::catalog::Catalog;
use crate::shared::error::{AnalyticsError, Result};
use crate::shared::seasonality;

/// Sales page: order value KPIs, sales by period, best sellers by sales and
/// weekly seasonality.
pub fn get_sales_dashboard(catalog: &Catalog, request: &SalesDashboardRequest) -> Result<SalesDashboardResponse> {
    let range = request.range;
    ensure_valid_range(&range)?;

    let orders = analytics::date_range_filter(catalog.orders(), &range);
    let lines = analytics::order_lines_in_range(catalog.order_lines(), &orders);
    let order_prices = analytics::join_order_prices(&orders, &lines, catalog);
    tracing::info!(
        "D402 Sales: {}..={}, {} orders",
        range.date_from,
        range.date_to,
        order_prices.len()
    );

    let total_sales = order_prices.iter().filter_map(|p| p.price).sum();
    let order_price = analytics::summarize(order_prices.iter().map(|p| p.price)).ok();

    let by_period = Period::selectable()
        .into_iter()
        .map(|period| breakdown(analytics::sales_by_period(&order_prices, period)))
        .collect();

    let best_sellers = BestSellerDimension::all()
        .into_iter()
        .map(|dimension| {
            analytics::best_sellers(
                &lines,
                catalog,
                dimension,
                BestSellerMetric::Sales,
            )
        })
        .collect();

    Ok(SalesDashboardResponse {
        range,
        total_sales,
        order_price,
        by_period,
        best_sellers,
        seasonality: seasonality_block(&order_prices, &range, request.seasonal_period),
    })
}

fn seasonality_block(order_prices: &[OrderPrice], range: &DateRange, period: usize) -> SeasonalityBlock {
    let Some(min_days) = i64::try_from(period).ok().and_then(|p| p.checked_mul(2)) else {
        let e = AnalyticsError::InvalidPeriod(period);
        tracing::warn!("D402 Sales: seasonality skipped: {}", e);
        return SeasonalityBlock {
            decomposition: None,
            message: Some(e.to_string()),
        };
    };
    if range.span_days() < min_days {
        return SeasonalityBlock {
            decomposition: None,
            message: Some(format!(
                "Date Range Must Be Greater Than {} Days To See Seasonality in Sales",
                min_days
            )),
        };
    }

    match seasonality::decompose(&analytics::daily_sales(order_prices), period) {
        Ok(decomposition) => SeasonalityBlock {
            decomposition: Some(decomposition),
            message: None,
        },
        Err(e) => {
            tracing::warn!("D402 Sales: seasonality skipped: {}", e);
            SeasonalityBlock {
                decomposition: None,
                message: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixtures;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use contracts::domain::a001_order::aggregate::{Order, OrderId};
    use contracts::domain::a002_order_line::aggregate::{OrderLine, OrderLineId};
    use contracts::domain::a003_pizza::aggregate::PizzaId;

    fn request(from: (i32, u32, u32), to: (i32, u32, u32)) -> SalesDashboardRequest {
        SalesDashboardRequest {
            range: DateRange::new(
                NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
                NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
            ),
            seasonal_period: 7,
        }
    }

    /// Four weeks of one order per day, with two extra pizzas on Saturdays.
    fn four_week_catalog() -> Catalog {
        let start = NaiveDateTime::parse_from_str("2015-03-02 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let mut orders = Vec::new();
        let mut lines = Vec::new();
        for day in 0..28u64 {
            let order_id = OrderId::new(day + 1);
            orders.push(Order::new(order_id, start + Duration::days(day as i64)));
            lines.push(OrderLine::new(OrderLineId::new(lines.len() as u64 + 1), order_id, PizzaId::new("hawaiian_m"), 1));
            if day % 7 == 5 {
                lines.push(OrderLine::new(OrderLineId::new(lines.len() as u64 + 1), order_id, PizzaId::new("bbq_ckn_l"), 1));
            }
        }
        Catalog::from_tables(orders, lines, fixtures::pizzas(), fixtures::pizza_types()).unwrap()
    }

    #[test]
    fn test_sales_kpis() {
        let response = get_sales_dashboard(&fixtures::catalog(), &SalesDashboardRequest::default()).unwrap();
        assert!((response.total_sales - 117.75).abs() < 1e-9);
        let stats = response.order_price.unwrap();
        assert_eq!(stats.max, 37.25);
        assert_eq!(stats.min, 13.25);

        let by_quarter = &response.by_period[2];
        assert_eq!(by_quarter.aggregate.period, Period::Quarter);
        assert!((by_quarter.aggregate.total() - 117.75).abs() < 1e-9);

        let by_pizza = &response.best_sellers[1];
        assert_eq!(by_pizza.dimension, BestSellerDimension::PizzaId);
        assert_eq!(by_pizza.rows[0].label, "bbq_ckn_l");
    }

    #[test]
    fn test_sparse_series_skips_seasonality() {
        // a year-long range, but the fixture only has four days of sales
        let response = get_sales_dashboard(&fixtures::catalog(), &SalesDashboardRequest::default()).unwrap();
        assert!(response.seasonality.decomposition.is_none());
        assert!(response.seasonality.message.is_some());
    }

    #[test]
    fn test_short_range_message() {
        let response = get_sales_dashboard(&fixtures::catalog(), &request((2015, 1, 1), (2015, 1, 10))).unwrap();
        assert!(response.seasonality.decomposition.is_none());
        assert_eq!(
            response.seasonality.message.as_deref(),
            Some("Date Range Must Be Greater Than 14 Days To See Seasonality in Sales")
        );
    }

    #[test]
    fn test_oversized_period_reports_message() {
        let mut req = request((2015, 1, 1), (2015, 12, 31));
        req.seasonal_period = usize::MAX / 2 + 1;
        let response = get_sales_dashboard(&fixtures::catalog(), &req).unwrap();
        assert!(response.seasonality.decomposition.is_none());
        assert!(response.seasonality.message.unwrap().contains("period"));
    }

    #[test]
    fn test_weekly_seasonality() {
        let response = get_sales_dashboard(&four_week_catalog(), &request((2015, 3, 1), (2015, 3, 31))).unwrap();
        let decomposition = response.seasonality.decomposition.unwrap();
        assert_eq!(decomposition.points.len(), 28);
        // Saturdays (position 5) carry the extra pizza
        let factors = &decomposition.seasonal_factors;
        let peak = factors.iter().cloned().fold(f64::MIN, f64::max);
        assert_eq!(factors[5], peak);
        let mean = factors.iter().sum::<f64>() / factors.len() as f64;
        assert!((mean - 1.0).abs() < 1e-9);
    }
}
