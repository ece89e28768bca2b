use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};

use contracts::domain::a001_order::aggregate::{Order, OrderId};
use contracts::domain::a002_order_line::aggregate::OrderLine;

use crate::shared::data::catalog::Catalog;

/// One row per order with the summed price of its lines.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPrice {
    pub order_id: OrderId,
    pub placed_at: NaiveDateTime,
    /// `None` for orders without lines: an absent sum, not zero.
    pub price: Option<f64>,
}

/// Left join of `orders` against the per-order sum of line prices.
///
/// Each line contributes its pizza's listed price once; quantity is not
/// applied here. Every input order appears exactly once, in input order.
/// Lines whose pizza is not on the catalog's menu contribute nothing.
pub fn join_order_prices(orders: &[Order], order_lines: &[OrderLine], catalog: &Catalog) -> Vec<OrderPrice> {
    let mut sums: HashMap<OrderId, f64> = HashMap::new();
    let mut unresolved = 0usize;
    for line in order_lines {
        let entry = sums.entry(line.order_id).or_insert(0.0);
        match catalog.pizza(&line.pizza_id) {
            Some(pizza) => *entry += pizza.price,
            None => unresolved += 1,
        }
    }
    if unresolved > 0 {
        tracing::warn!("join_order_prices: {} lines reference unknown pizzas", unresolved);
    }

    let mut seen: HashSet<OrderId> = HashSet::with_capacity(orders.len());
    orders
        .iter()
        .filter(|o| seen.insert(o.id))
        .map(|o| OrderPrice {
            order_id: o.id,
            placed_at: o.placed_at,
            price: sums.get(&o.id).copied(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixtures;

    #[test]
    fn test_one_row_per_order() {
        let prices = join_order_prices(&fixtures::orders(), &fixtures::order_lines(), &fixtures::catalog());
        assert_eq!(prices.len(), fixtures::orders().len());
        let ids: Vec<u64> = prices.iter().map(|p| p.order_id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_prices_ignore_quantity() {
        let prices = join_order_prices(&fixtures::orders(), &fixtures::order_lines(), &fixtures::catalog());
        // order 1: hawaiian_m (13.25) + bbq_ckn_l x2 (20.75 listed once)
        assert_eq!(prices[0].price, Some(34.0));
        // order 4: hawaiian_m x3
        assert_eq!(prices[3].price, Some(13.25));
        assert_eq!(prices[4].price, Some(37.25));
    }

    #[test]
    fn test_order_without_lines_keeps_absent_price() {
        let prices = join_order_prices(&fixtures::orders(), &fixtures::order_lines(), &fixtures::catalog());
        assert_eq!(prices[5].order_id.value(), 6);
        assert_eq!(prices[5].price, None);
    }

    #[test]
    fn test_unknown_pizza_adds_nothing() {
        let mut lines = fixtures::order_lines();
        lines.push(OrderLine::new(
            contracts::domain::a002_order_line::aggregate::OrderLineId::new(99),
            OrderId::new(6),
            contracts::domain::a003_pizza::aggregate::PizzaId::new("mystery_xl"),
            1,
        ));
        let prices = join_order_prices(&fixtures::orders(), &lines, &fixtures::catalog());
        // order 6 now has a line, but its pizza has no price
        assert_eq!(prices[5].price, Some(0.0));
        assert_eq!(prices[0].price, Some(34.0));
    }

    #[test]
    fn test_duplicate_orders_appear_once() {
        let mut orders = fixtures::orders();
        orders.push(orders[0].clone());
        let prices = join_order_prices(&orders, &fixtures::order_lines(), &fixtures::catalog());
        assert_eq!(prices.len(), 6);
    }
}
