pub mod decompose;

pub use decompose::{decompose, WEEKLY_PERIOD};
