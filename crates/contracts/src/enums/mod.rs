pub mod pizza_category;
pub mod pizza_size;
