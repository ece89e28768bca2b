use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use contracts::domain::a001_order::aggregate::{Order, OrderId};
use contracts::domain::a002_order_line::aggregate::{OrderLine, OrderLineId};
use contracts::domain::a003_pizza::aggregate::{Pizza, PizzaId};
use contracts::domain::a004_pizza_type::aggregate::{PizzaType, PizzaTypeId};
use contracts::enums::pizza_category::PizzaCategory;
use contracts::enums::pizza_size::PizzaSize;

use super::source::CatalogResource;
use crate::shared::error::{AnalyticsError, Result};

// ---------------------------------------------------------------------------
// Raw CSV rows
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct OrderDetailRecord {
    order_details_id: u64,
    order_id: u64,
    pizza_id: String,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
struct OrderRecord {
    order_id: u64,
    date: String,
    time: String,
}

#[derive(Debug, Deserialize)]
struct PizzaTypeRecord {
    pizza_type_id: String,
    name: String,
    category: String,
    ingredients: String,
}

#[derive(Debug, Deserialize)]
struct PizzaRecord {
    pizza_id: String,
    pizza_type_id: String,
    size: String,
    price: f64,
}

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%m/%d/%Y %H:%M:%S"];

// ---------------------------------------------------------------------------
// Public parsers
// ---------------------------------------------------------------------------

pub fn parse_orders(bytes: &[u8]) -> Result<Vec<Order>> {
    let resource = CatalogResource::Orders;
    read_records::<OrderRecord>(resource, bytes)?
        .into_iter()
        .map(|(line, rec)| {
            let placed_at = parse_datetime(&rec.date, &rec.time)
                .ok_or_else(|| row_error(resource, line, format!("bad date/time '{} {}'", rec.date, rec.time)))?;
            Ok(Order::new(OrderId::new(rec.order_id), placed_at))
        })
        .collect()
}

pub fn parse_order_lines(bytes: &[u8]) -> Result<Vec<OrderLine>> {
    let resource = CatalogResource::OrderDetails;
    read_records::<OrderDetailRecord>(resource, bytes)?
        .into_iter()
        .map(|(line, rec)| {
            if rec.quantity == 0 {
                return Err(row_error(resource, line, "quantity must be positive"));
            }
            Ok(OrderLine::new(
                OrderLineId::new(rec.order_details_id),
                OrderId::new(rec.order_id),
                PizzaId::new(&rec.pizza_id),
                rec.quantity,
            ))
        })
        .collect()
}

pub fn parse_pizza_types(bytes: &[u8]) -> Result<Vec<PizzaType>> {
    let resource = CatalogResource::PizzaTypes;
    read_records::<PizzaTypeRecord>(resource, bytes)?
        .into_iter()
        .map(|(line, rec)| {
            let category = PizzaCategory::from_code(&rec.category)
                .ok_or_else(|| row_error(resource, line, format!("unknown category '{}'", rec.category)))?;
            Ok(PizzaType::new(
                PizzaTypeId::new(&rec.pizza_type_id),
                &rec.name,
                category,
                PizzaType::parse_ingredients(&rec.ingredients),
            ))
        })
        .collect()
}

pub fn parse_pizzas(bytes: &[u8]) -> Result<Vec<Pizza>> {
    let resource = CatalogResource::Pizzas;
    read_records::<PizzaRecord>(resource, bytes)?
        .into_iter()
        .map(|(line, rec)| {
            let size = PizzaSize::from_code(&rec.size)
                .ok_or_else(|| row_error(resource, line, format!("unknown size '{}'", rec.size)))?;
            if rec.price.is_nan() || rec.price <= 0.0 {
                return Err(row_error(resource, line, format!("price must be positive, got {}", rec.price)));
            }
            Ok(Pizza::new(
                PizzaId::new(&rec.pizza_id),
                PizzaTypeId::new(&rec.pizza_type_id),
                size,
                rec.price,
            ))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Source files are not guaranteed to be UTF-8: fall back to Latin-1, where
/// every byte maps to the code point of the same value.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            tracing::debug!("input is not valid UTF-8, decoding as Latin-1");
            bytes.iter().map(|&b| b as char).collect()
        }
    };
    text.trim_start_matches('\u{FEFF}').to_string()
}

/// Deserialize every row, tagging it with its 1-based line number in the file
/// (header is line 1).
fn read_records<T: DeserializeOwned>(resource: CatalogResource, bytes: &[u8]) -> Result<Vec<(usize, T)>> {
    let text = decode_text(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    reader
        .headers()
        .map_err(|e| AnalyticsError::data_load(resource.file_name(), format!("failed to read CSV headers: {}", e)))?;

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<T>().enumerate() {
        let line = i + 2;
        let record = result.map_err(|e| row_error(resource, line, e))?;
        records.push((line, record));
    }

    tracing::debug!("{}: parsed {} rows", resource.file_name(), records.len());
    Ok(records)
}

fn parse_datetime(date: &str, time: &str) -> Option<NaiveDateTime> {
    let combined = format!("{} {}", date.trim(), time.trim());
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&combined, fmt).ok())
}

fn row_error(resource: CatalogResource, line: usize, reason: impl std::fmt::Display) -> AnalyticsError {
    AnalyticsError::data_load(resource.file_name(), format!("line {}: {}", line, reason))
}
