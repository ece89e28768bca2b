//! Small in-memory pizza place used by unit tests.
//!
//! Per-order prices (sum of line prices, quantity not applied):
//! 1 → 34.00, 2 → 16.50, 3 → 16.75, 4 → 13.25, 5 → 37.25, 6 → no lines.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a002_order_line::aggregate::OrderLine;
use contracts::domain::a003_pizza::aggregate::Pizza;
use contracts::domain::a004_pizza_type::aggregate::PizzaType;

use super::catalog::Catalog;
use super::parse;
use super::source::{CatalogResource, CatalogSource};
use crate::shared::error::{AnalyticsError, Result};

pub const ORDERS_CSV: &str = "order_id,date,time
1,2015-01-01,11:38:36
2,2015-01-01,13:00:00
3,2015-01-02,00:00:00
4,2015-01-02,12:00:00
5,2015-02-10,18:30:00
6,2015-02-11,19:00:00
";

pub const ORDER_DETAILS_CSV: &str = "order_details_id,order_id,pizza_id,quantity
1,1,hawaiian_m,1
2,1,bbq_ckn_l,2
3,2,hawaiian_l,1
4,3,bbq_ckn_m,1
5,4,hawaiian_m,3
6,5,bbq_ckn_l,1
7,5,hawaiian_l,2
";

pub const PIZZA_TYPES_CSV: &str = "pizza_type_id,name,category,ingredients
hawaiian,The Hawaiian Pizza,Classic,\"Sliced Ham, Pineapple, Mozzarella Cheese\"
bbq_ckn,The Barbecue Chicken Pizza,Chicken,\"Barbecued Chicken, Red Peppers, Mozzarella Cheese\"
";

pub const PIZZAS_CSV: &str = "pizza_id,pizza_type_id,size,price
hawaiian_m,hawaiian,M,13.25
hawaiian_l,hawaiian,L,16.5
bbq_ckn_m,bbq_ckn,M,16.75
bbq_ckn_l,bbq_ckn,L,20.75
";

pub fn orders() -> Vec<Order> {
    parse::parse_orders(ORDERS_CSV.as_bytes()).unwrap()
}

pub fn order_lines() -> Vec<OrderLine> {
    parse::parse_order_lines(ORDER_DETAILS_CSV.as_bytes()).unwrap()
}

pub fn pizzas() -> Vec<Pizza> {
    parse::parse_pizzas(PIZZAS_CSV.as_bytes()).unwrap()
}

pub fn pizza_types() -> Vec<PizzaType> {
    parse::parse_pizza_types(PIZZA_TYPES_CSV.as_bytes()).unwrap()
}

pub fn catalog() -> Catalog {
    Catalog::from_tables(orders(), order_lines(), pizzas(), pizza_types()).unwrap()
}

/// Serves the fixture CSVs and counts fetches.
pub struct MemoryCatalogSource {
    location: String,
    files: HashMap<CatalogResource, &'static str>,
    pub fetch_count: AtomicUsize,
}

impl MemoryCatalogSource {
    pub fn new(location: &str) -> Self {
        let files = maplit::hashmap! {
            CatalogResource::OrderDetails => ORDER_DETAILS_CSV,
            CatalogResource::Orders => ORDERS_CSV,
            CatalogResource::PizzaTypes => PIZZA_TYPES_CSV,
            CatalogResource::Pizzas => PIZZAS_CSV,
        };
        Self {
            location: location.to_string(),
            files,
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub fn without(mut self, resource: CatalogResource) -> Self {
        self.files.remove(&resource);
        self
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn fetch(&self, resource: CatalogResource) -> Result<Vec<u8>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.files
            .get(&resource)
            .map(|s| s.as_bytes().to_vec())
            .ok_or_else(|| AnalyticsError::data_load(resource.file_name(), "not found"))
    }
}
