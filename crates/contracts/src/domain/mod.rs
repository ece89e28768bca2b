pub mod a001_order;
pub mod a002_order_line;
pub mod a003_pizza;
pub mod a004_pizza_type;
