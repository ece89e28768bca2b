use serde::{Deserialize, Serialize};

use crate::enums::pizza_category::PizzaCategory;

/// Pizza type id, e.g. `bbq_ckn`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PizzaTypeId(pub String);

impl PizzaTypeId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A pizza type on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaType {
    #[serde(rename = "pizza_type_id")]
    pub id: PizzaTypeId,
    pub name: String,
    pub category: PizzaCategory,
    /// Ingredients in menu order
    pub ingredients: Vec<String>,
}

impl PizzaType {
    pub fn new(id: PizzaTypeId, name: &str, category: PizzaCategory, ingredients: Vec<String>) -> Self {
        Self {
            id,
            name: name.to_string(),
            category,
            ingredients,
        }
    }

    /// Split the comma-delimited ingredient column, dropping empty entries.
    pub fn parse_ingredients(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
