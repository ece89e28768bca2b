use serde::{Deserialize, Serialize};

use crate::domain::a004_pizza_type::aggregate::PizzaTypeId;
use crate::enums::pizza_size::PizzaSize;

// ============================================================================
// ID Type
// ============================================================================

/// Pizza id: type + size, e.g. `bbq_ckn_l`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PizzaId(pub String);

impl PizzaId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PizzaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A sellable menu item: a pizza type in one size at one price (USD).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    #[serde(rename = "pizza_id")]
    pub id: PizzaId,
    pub pizza_type_id: PizzaTypeId,
    pub size: PizzaSize,
    pub price: f64,
}

impl Pizza {
    pub fn new(id: PizzaId, pizza_type_id: PizzaTypeId, size: PizzaSize, price: f64) -> Self {
        Self {
            id,
            pizza_type_id,
            size,
            price,
        }
    }
}
