use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observation of a multiplicative decomposition.
///
/// `trend` and `residual` are `None` at both edges of the series where the
/// centred moving average has no full window. Gaps are never filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecompositionPoint {
    pub date: NaiveDate,
    pub observed: f64,
    pub trend: Option<f64>,
    pub seasonal: f64,
    pub residual: Option<f64>,
}

/// observed = trend × seasonal × residual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalDecomposition {
    pub period: usize,
    pub points: Vec<DecompositionPoint>,
    /// One factor per position within the period; their mean is 1.
    pub seasonal_factors: Vec<f64>,
}

impl SeasonalDecomposition {
    pub fn trend(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.trend).collect()
    }

    pub fn seasonal(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.seasonal).collect()
    }

    pub fn residual(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.residual).collect()
    }
}
