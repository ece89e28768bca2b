pub mod date_range;
pub mod indicators;
pub mod period;
pub mod ranking;
pub mod seasonality;
