use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Calendar month names in calendar order. Month views are plotted in this
/// order, never lexically.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ---------------------------------------------------------------------------
// Granularity
// ---------------------------------------------------------------------------

/// Grouping granularity for time-series views.
///
/// `Month` and `Quarter` ignore the year: January 2015 and January 2016 land
/// in the same bucket. Existing reports depend on this, so it is kept.
/// `YearMonth` keeps the year and is used by the overview KPIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Day,
    Month,
    Quarter,
    YearMonth,
}

impl Period {
    /// Granularities offered by the period selector.
    pub fn selectable() -> Vec<Period> {
        vec![Period::Day, Period::Month, Period::Quarter]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Day => "Day",
            Period::Month => "Month",
            Period::Quarter => "Quarter",
            Period::YearMonth => "Year-Month",
        }
    }

    pub fn key_of(&self, ts: &NaiveDateTime) -> PeriodKey {
        match self {
            Period::Day => PeriodKey::Day(ts.date()),
            Period::Month => PeriodKey::Month(ts.month()),
            Period::Quarter => PeriodKey::Quarter((ts.month() - 1) / 3 + 1),
            Period::YearMonth => PeriodKey::YearMonth {
                year: ts.year(),
                month: ts.month(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Bucket key produced by a [`Period`]. Ordering is chronological within one
/// granularity; keys of different granularities are never mixed in one
/// aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PeriodKey {
    Day(NaiveDate),
    /// Month number 1..=12
    Month(u32),
    /// Quarter number 1..=4
    Quarter(u32),
    YearMonth { year: i32, month: u32 },
}

impl PeriodKey {
    pub fn label(&self) -> String {
        match self {
            PeriodKey::Day(d) => d.format("%Y-%m-%d").to_string(),
            PeriodKey::Month(m) => month_name(*m).to_string(),
            PeriodKey::Quarter(q) => q.to_string(),
            PeriodKey::YearMonth { year, month } => format!("{:04}-{:02}", year, month),
        }
    }
}

impl std::fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "Unknown",
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Reduction applied to each bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    Count,
    Sum,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodValue {
    pub key: PeriodKey,
    pub value: f64,
}

/// Period key → metric, in grouping (first-seen) order. Use [`PeriodAggregate::sorted`]
/// before plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodAggregate {
    pub period: Period,
    pub aggregation: Aggregation,
    pub rows: Vec<PeriodValue>,
}

impl PeriodAggregate {
    pub fn new(period: Period, aggregation: Aggregation) -> Self {
        Self {
            period,
            aggregation,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &PeriodKey) -> Option<f64> {
        self.rows.iter().find(|r| &r.key == key).map(|r| r.value)
    }

    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.value).collect()
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.value).sum()
    }

    /// Chronologically sorted copy.
    pub fn sorted(&self) -> PeriodAggregate {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        PeriodAggregate {
            period: self.period,
            aggregation: self.aggregation,
            rows,
        }
    }
}

/// mean / max / min over a set of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// Difference between the two most recent periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodDelta {
    pub current: PeriodValue,
    pub previous: PeriodValue,
    /// `current - previous`
    pub delta: f64,
}

/// One tab of a "by date" chart: the sorted aggregate plus its mean/max/min.
/// `stats` is `None` when the range holds no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBreakdown {
    pub aggregate: PeriodAggregate,
    pub stats: Option<SummaryStats>,
}
