pub mod d400_overview;
pub mod d401_orders;
pub mod d402_sales;

use contracts::shared::date_range::DateRange;
use contracts::shared::period::{PeriodAggregate, PeriodBreakdown};

use crate::shared::analytics;
use crate::shared::error::{AnalyticsError, Result};

fn ensure_valid_range(range: &DateRange) -> Result<()> {
    if range.date_from > range.date_to {
        return Err(AnalyticsError::empty_range(format!(
            "start date {} is after end date {}",
            range.date_from, range.date_to
        )));
    }
    Ok(())
}

/// Sorted aggregate plus mean/max/min; stats are absent for an empty range.
fn breakdown(aggregate: PeriodAggregate) -> PeriodBreakdown {
    let stats = match analytics::summarize_aggregate(&aggregate) {
        Ok(stats) => Some(stats),
        Err(e) => {
            tracing::info!("{} breakdown: {}", aggregate.period.label(), e);
            None
        }
    };
    PeriodBreakdown {
        aggregate: aggregate.sorted(),
        stats,
    }
}
