//! Joins, groupings and rankings over the loaded catalog.

pub mod best_sellers;
pub mod delta;
pub mod filter;
pub mod join;
pub mod period;
pub mod stats;

pub use best_sellers::best_sellers;
pub use delta::top_n_delta;
pub use filter::{date_range_filter, order_lines_in_range};
pub use join::{join_order_prices, OrderPrice};
pub use period::{aggregate_by_period, daily_sales, orders_by_period, sales_by_period};
pub use stats::{orders_by_hour, pizzas_per_order, summarize, summarize_aggregate};
