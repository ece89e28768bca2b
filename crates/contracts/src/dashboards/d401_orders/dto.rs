use serde::{Deserialize, Serialize};

use crate::shared::date_range::DateRange;
use crate::shared::period::{PeriodBreakdown, SummaryStats};
use crate::shared::ranking::BestSellerRanking;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersDashboardRequest {
    #[serde(flatten)]
    pub range: DateRange,
}

/// Orders histogram by hour of day (24 bins, 0..=23).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyOrders {
    pub total: Vec<u64>,
    /// `total` divided by the number of days in the range; `None` when the
    /// range spans zero days.
    pub average: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersDashboardResponse {
    pub range: DateRange,
    pub total_orders: u64,
    /// Day, month and quarter tabs
    pub by_period: Vec<PeriodBreakdown>,
    pub by_hour: HourlyOrders,
    /// Pizzas in a typical order
    pub pizzas_per_order: Option<SummaryStats>,
    /// Ranked by quantity, one table per dimension
    pub best_sellers: Vec<BestSellerRanking>,
}
