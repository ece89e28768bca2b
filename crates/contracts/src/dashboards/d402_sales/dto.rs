use serde::{Deserialize, Serialize};

use crate::shared::date_range::DateRange;
use crate::shared::period::{PeriodBreakdown, SummaryStats};
use crate::shared::ranking::BestSellerRanking;
use crate::shared::seasonality::SeasonalDecomposition;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesDashboardRequest {
    #[serde(flatten)]
    pub range: DateRange,
    /// Observations per seasonal cycle of the daily sales series
    #[serde(default = "default_seasonal_period")]
    pub seasonal_period: usize,
}

fn default_seasonal_period() -> usize {
    7
}

impl Default for SalesDashboardRequest {
    fn default() -> Self {
        Self {
            range: DateRange::default(),
            seasonal_period: default_seasonal_period(),
        }
    }
}

/// Either a decomposition or the reason it was skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalityBlock {
    pub decomposition: Option<SeasonalDecomposition>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesDashboardResponse {
    pub range: DateRange,
    pub total_sales: f64,
    /// Average / largest / smallest order
    pub order_price: Option<SummaryStats>,
    pub by_period: Vec<PeriodBreakdown>,
    /// Ranked by sales, one table per dimension
    pub best_sellers: Vec<BestSellerRanking>,
    pub seasonality: SeasonalityBlock,
}
