use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Order number, unique per order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl OrderId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A placed order. `placed_at` is the source `date` and `time` columns
/// combined at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "datetime")]
    pub placed_at: NaiveDateTime,
}

impl Order {
    pub fn new(id: OrderId, placed_at: NaiveDateTime) -> Self {
        Self { id, placed_at }
    }
}
