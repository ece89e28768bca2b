pub mod d400_overview;
pub mod d401_orders;
pub mod d402_sales;
