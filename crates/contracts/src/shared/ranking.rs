use serde::{Deserialize, Serialize};

/// Catalog dimension a best-seller ranking is sliced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BestSellerDimension {
    /// Type + size, e.g. `bbq_ckn_l`
    PizzaId,
    Name,
    Category,
    Size,
    /// One row per ingredient; a line counts once for every ingredient of its pizza
    Ingredient,
}

impl BestSellerDimension {
    pub fn all() -> Vec<BestSellerDimension> {
        vec![
            BestSellerDimension::Name,
            BestSellerDimension::PizzaId,
            BestSellerDimension::Category,
            BestSellerDimension::Size,
            BestSellerDimension::Ingredient,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BestSellerMetric {
    /// Sum of line quantities
    Quantity,
    /// Sum of quantity × price
    Sales,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSellerRow {
    pub label: String,
    pub value: f64,
}

/// Dimension value → metric, sorted descending. Equal values keep first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSellerRanking {
    pub dimension: BestSellerDimension,
    pub metric: BestSellerMetric,
    pub rows: Vec<BestSellerRow>,
}

impl BestSellerRanking {
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.value).sum()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.rows.iter().find(|r| r.label == label).map(|r| r.value)
    }
}
