use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key in the registry and in requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How the presentation layer should format the numeric value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
}

/// Static metadata describing one indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub id: IndicatorId,
    pub label: String,
    pub format: ValueFormat,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single computed KPI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    /// Primary numeric value (`None` when data is unavailable).
    pub value: Option<f64>,
    /// Value for the previous comparable period.
    pub previous_value: Option<f64>,
    /// `value - previous_value`
    pub delta: Option<f64>,
    pub status: IndicatorStatus,
    /// Period label or error text shown below the value.
    pub subtitle: Option<String>,
}

impl IndicatorValue {
    pub fn unavailable(id: IndicatorId, reason: String) -> Self {
        Self {
            id,
            value: None,
            previous_value: None,
            delta: None,
            status: IndicatorStatus::Neutral,
            subtitle: Some(reason),
        }
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Scope of a KPI computation: an optional inclusive date range.
/// Without a range the whole catalog is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorContext {
    #[serde(default)]
    pub date_from: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub date_to: Option<chrono::NaiveDate>,
}
