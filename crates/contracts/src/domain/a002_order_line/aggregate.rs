use serde::{Deserialize, Serialize};

use crate::domain::a001_order::aggregate::OrderId;
use crate::domain::a003_pizza::aggregate::PizzaId;

/// Order line id (`order_details_id` in the source)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderLineId(pub u64);

impl OrderLineId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// One pizza (type + size) within an order. Pizzas of the same type and size
/// share a row and raise `quantity` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "order_details_id")]
    pub id: OrderLineId,
    pub order_id: OrderId,
    pub pizza_id: PizzaId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(id: OrderLineId, order_id: OrderId, pizza_id: PizzaId, quantity: u32) -> Self {
        Self {
            id,
            order_id,
            pizza_id,
            quantity,
        }
    }
}
