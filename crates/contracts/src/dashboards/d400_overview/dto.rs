use serde::{Deserialize, Serialize};

use crate::shared::indicators::IndicatorValue;

/// Landing page KPIs: current monthly orders and sales against the previous
/// month. Computed over the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub indicators: Vec<IndicatorValue>,
}
