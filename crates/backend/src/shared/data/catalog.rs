use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use contracts::domain::a001_order::aggregate::Order;
use contracts::domain::a002_order_line::aggregate::OrderLine;
use contracts::domain::a003_pizza::aggregate::{Pizza, PizzaId};
use contracts::domain::a004_pizza_type::aggregate::{PizzaType, PizzaTypeId};

use super::parse;
use super::source::{CatalogResource, CatalogSource};
use crate::shared::error::{AnalyticsError, Result};

/// Loaded catalogs, keyed on the source location. Lives for the whole process.
static CATALOG_CACHE: Lazy<Mutex<HashMap<String, Arc<Catalog>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// The four reference tables, immutable after load. Passed explicitly to every
/// dashboard service.
#[derive(Debug, Clone)]
pub struct Catalog {
    orders: Vec<Order>,
    order_lines: Vec<OrderLine>,
    pizzas: Vec<Pizza>,
    pizza_types: Vec<PizzaType>,
    pizza_index: HashMap<PizzaId, usize>,
    pizza_type_index: HashMap<PizzaTypeId, usize>,
}

impl Catalog {
    /// Build a catalog from already parsed tables. Duplicate pizza or pizza
    /// type ids are rejected.
    pub fn from_tables(
        orders: Vec<Order>,
        order_lines: Vec<OrderLine>,
        pizzas: Vec<Pizza>,
        pizza_types: Vec<PizzaType>,
    ) -> Result<Self> {
        let mut pizza_index = HashMap::with_capacity(pizzas.len());
        for (i, pizza) in pizzas.iter().enumerate() {
            if pizza_index.insert(pizza.id.clone(), i).is_some() {
                return Err(AnalyticsError::data_load(
                    CatalogResource::Pizzas.file_name(),
                    format!("duplicate pizza_id '{}'", pizza.id),
                ));
            }
        }

        let mut pizza_type_index = HashMap::with_capacity(pizza_types.len());
        for (i, pizza_type) in pizza_types.iter().enumerate() {
            if pizza_type_index.insert(pizza_type.id.clone(), i).is_some() {
                return Err(AnalyticsError::data_load(
                    CatalogResource::PizzaTypes.file_name(),
                    format!("duplicate pizza_type_id '{}'", pizza_type.id.as_str()),
                ));
            }
        }

        Ok(Self {
            orders,
            order_lines,
            pizzas,
            pizza_types,
            pizza_index,
            pizza_type_index,
        })
    }

    /// Fetch and parse all four tables. Any failure aborts the load.
    pub fn load(source: &dyn CatalogSource) -> Result<Self> {
        tracing::info!("Loading catalog from {}", source.location());

        let order_lines = parse::parse_order_lines(&source.fetch(CatalogResource::OrderDetails)?)?;
        let orders = parse::parse_orders(&source.fetch(CatalogResource::Orders)?)?;
        let pizza_types = parse::parse_pizza_types(&source.fetch(CatalogResource::PizzaTypes)?)?;
        let pizzas = parse::parse_pizzas(&source.fetch(CatalogResource::Pizzas)?)?;

        let catalog = Self::from_tables(orders, order_lines, pizzas, pizza_types)?;
        tracing::info!(
            "Catalog loaded: {} orders, {} order lines, {} pizzas, {} pizza types",
            catalog.orders.len(),
            catalog.order_lines.len(),
            catalog.pizzas.len(),
            catalog.pizza_types.len()
        );
        Ok(catalog)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_lines(&self) -> &[OrderLine] {
        &self.order_lines
    }

    /// Menu lookup by pizza id, through the index built at load.
    pub fn pizza(&self, id: &PizzaId) -> Option<&Pizza> {
        self.pizza_index.get(id).map(|&i| &self.pizzas[i])
    }

    pub fn pizza_type(&self, id: &PizzaTypeId) -> Option<&PizzaType> {
        self.pizza_type_index.get(id).map(|&i| &self.pizza_types[i])
    }
}

/// Load the catalog once per source location per process; later calls return
/// the same handle.
pub fn load_cached(source: &dyn CatalogSource) -> Result<Arc<Catalog>> {
    let location = source.location();
    let mut cache = CATALOG_CACHE.lock().unwrap_or_else(|e| e.into_inner());

    if let Some(catalog) = cache.get(&location) {
        tracing::debug!("Catalog cache hit for {}", location);
        return Ok(Arc::clone(catalog));
    }

    let catalog = Arc::new(Catalog::load(source)?);
    cache.insert(location, Arc::clone(&catalog));
    Ok(catalog)
}
