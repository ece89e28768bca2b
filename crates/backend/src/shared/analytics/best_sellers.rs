use std::collections::HashMap;

use contracts::domain::a002_order_line::aggregate::OrderLine;
use contracts::domain::a003_pizza::aggregate::Pizza;
use contracts::domain::a004_pizza_type::aggregate::PizzaType;
use contracts::shared::ranking::{BestSellerDimension, BestSellerMetric, BestSellerRanking, BestSellerRow};

use crate::shared::data::catalog::Catalog;

/// An order line with its pizza and pizza type resolved (left join).
#[derive(Debug, Clone, Copy)]
pub struct JoinedLine<'a> {
    pub line: &'a OrderLine,
    pub pizza: Option<&'a Pizza>,
    pub pizza_type: Option<&'a PizzaType>,
}

impl<'a> JoinedLine<'a> {
    /// Metric value of this line; `None` when sales are asked for and the
    /// pizza (hence its price) is unknown.
    pub fn metric(&self, metric: BestSellerMetric) -> Option<f64> {
        let quantity = self.line.quantity as f64;
        match metric {
            BestSellerMetric::Quantity => Some(quantity),
            BestSellerMetric::Sales => self.pizza.map(|p| p.price * quantity),
        }
    }

    /// Group keys for `dimension`. Ingredient yields one key per ingredient;
    /// an unresolved dimension yields none and the line is left out.
    pub fn keys(&self, dimension: BestSellerDimension) -> Vec<String> {
        match dimension {
            BestSellerDimension::PizzaId => vec![self.line.pizza_id.to_string()],
            BestSellerDimension::Name => self.pizza_type.map(|t| t.name.clone()).into_iter().collect(),
            BestSellerDimension::Category => self
                .pizza_type
                .map(|t| t.category.code().to_string())
                .into_iter()
                .collect(),
            BestSellerDimension::Size => self.pizza.map(|p| p.size.code().to_string()).into_iter().collect(),
            BestSellerDimension::Ingredient => self
                .pizza_type
                .map(|t| t.ingredients.clone())
                .unwrap_or_default(),
        }
    }
}

/// OrderLine → Pizza → PizzaType through the catalog's menu indexes, one row
/// per line in input order.
pub fn join_lines<'a>(order_lines: &'a [OrderLine], catalog: &'a Catalog) -> Vec<JoinedLine<'a>> {
    order_lines
        .iter()
        .map(|line| {
            let pizza = catalog.pizza(&line.pizza_id);
            let pizza_type = pizza.and_then(|p| catalog.pizza_type(&p.pizza_type_id));
            JoinedLine { line, pizza, pizza_type }
        })
        .collect()
}

/// Rank `dimension` values by summed `metric`, highest first. Ties keep the
/// order in which the values were first seen.
pub fn best_sellers(
    order_lines: &[OrderLine],
    catalog: &Catalog,
    dimension: BestSellerDimension,
    metric: BestSellerMetric,
) -> BestSellerRanking {
    let joined = join_lines(order_lines, catalog);

    let mut rows: Vec<BestSellerRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut dropped = 0usize;

    for row in &joined {
        let keys = row.keys(dimension);
        let value = match row.metric(metric) {
            Some(v) if !keys.is_empty() => v,
            _ => {
                dropped += 1;
                continue;
            }
        };

        for key in keys {
            let slot = match index.get(&key) {
                Some(&slot) => slot,
                None => {
                    rows.push(BestSellerRow {
                        label: key.clone(),
                        value: 0.0,
                    });
                    index.insert(key, rows.len() - 1);
                    rows.len() - 1
                }
            };
            rows[slot].value += value;
        }
    }

    if dropped > 0 {
        tracing::warn!(
            "best_sellers by {:?}: {} lines could not be resolved against the menu",
            dimension,
            dropped
        );
    }

    // stable: equal values keep first-seen order
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));

    BestSellerRanking {
        dimension,
        metric,
        rows,
    }
}
