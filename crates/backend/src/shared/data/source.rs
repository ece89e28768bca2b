use std::path::PathBuf;
use std::time::Duration;

use crate::shared::error::{AnalyticsError, Result};

/// The four tables of the pizza place catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogResource {
    OrderDetails,
    Orders,
    PizzaTypes,
    Pizzas,
}

impl CatalogResource {
    pub fn all() -> [CatalogResource; 4] {
        [
            CatalogResource::OrderDetails,
            CatalogResource::Orders,
            CatalogResource::PizzaTypes,
            CatalogResource::Pizzas,
        ]
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            CatalogResource::OrderDetails => "order_details.csv",
            CatalogResource::Orders => "orders.csv",
            CatalogResource::PizzaTypes => "pizza_types.csv",
            CatalogResource::Pizzas => "pizzas.csv",
        }
    }
}

/// Where the raw catalog bytes come from.
pub trait CatalogSource: Send + Sync {
    /// Stable location string; the per-process cache is keyed on it.
    fn location(&self) -> String;

    fn fetch(&self, resource: CatalogResource) -> Result<Vec<u8>>;
}

/// Build a source from a configured location: http(s) URLs go over the
/// network, anything else is treated as a directory.
pub fn source_for_location(location: &str, timeout: Duration) -> Result<Box<dyn CatalogSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpCatalogSource::new(location, timeout)?))
    } else {
        Ok(Box::new(DirCatalogSource::new(location)))
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

pub struct HttpCatalogSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpCatalogSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalyticsError::data_load("http client", e))?;

        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        Ok(Self { base_url, client })
    }
}

impl CatalogSource for HttpCatalogSource {
    fn location(&self) -> String {
        self.base_url.clone()
    }

    fn fetch(&self, resource: CatalogResource) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, resource.file_name());
        tracing::info!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| AnalyticsError::data_load(resource.file_name(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::data_load(
                resource.file_name(),
                format!("HTTP {} from {}", status, url),
            ));
        }

        let bytes = response
            .bytes()
            .map_err(|e| AnalyticsError::data_load(resource.file_name(), e))?;
        tracing::debug!("{}: {} bytes", resource.file_name(), bytes.len());
        Ok(bytes.to_vec())
    }
}

// ---------------------------------------------------------------------------
// Local directory
// ---------------------------------------------------------------------------

pub struct DirCatalogSource {
    dir: PathBuf,
}

impl DirCatalogSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CatalogSource for DirCatalogSource {
    fn location(&self) -> String {
        self.dir.display().to_string()
    }

    fn fetch(&self, resource: CatalogResource) -> Result<Vec<u8>> {
        let path = self.dir.join(resource.file_name());
        tracing::info!("Reading {}", path.display());
        std::fs::read(&path).map_err(|e| {
            AnalyticsError::data_load(resource.file_name(), format!("{}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_location() {
        let http = source_for_location("https://example.com/data", Duration::from_secs(1)).unwrap();
        assert_eq!(http.location(), "https://example.com/data/");

        let dir = source_for_location("pizza_sales", Duration::from_secs(1)).unwrap();
        assert_eq!(dir.location(), "pizza_sales");
    }

    #[test]
    fn test_missing_directory_is_data_load_error() {
        let source = DirCatalogSource::new("definitely/not/here");
        match source.fetch(CatalogResource::Orders) {
            Err(AnalyticsError::DataLoad { resource, .. }) => assert_eq!(resource, "orders.csv"),
            other => panic!("unexpected result: {:?}", other.map(|b| b.len())),
        }
    }
}
