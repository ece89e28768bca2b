use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

use contracts::shared::date_range::DateRange;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Base URL (http/https) or local directory holding the four CSV files
    pub location: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_seasonal_period")]
    pub seasonal_period: usize,
}

impl DashboardConfig {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let range = DateRange::default();
        Self {
            start_date: range.date_from,
            end_date: range.date_to,
            seasonal_period: default_seasonal_period(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_seasonal_period() -> usize {
    7
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[catalog]
location = "https://raw.githubusercontent.com/ryantvackner/pizza-place/master/pizza_sales/"
timeout_secs = 30

[dashboard]
start_date = "2015-01-01"
end_date = "2015-12-31"
seasonal_period = 7
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Current working directory
/// 3. Embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    for config_path in candidate_paths() {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.dashboard.seasonal_period < 2 {
        anyhow::bail!(
            "dashboard.seasonal_period must be at least 2, got {}",
            config.dashboard.seasonal_period
        );
    }
    Ok(config)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            paths.push(exe_dir.join("config.toml"));
        }
    }
    paths.push(PathBuf::from("config.toml"));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert!(config.catalog.location.starts_with("https://"));
        assert_eq!(config.catalog.timeout_secs, 30);
        assert_eq!(config.dashboard.seasonal_period, 7);
        assert_eq!(config.dashboard.range(), DateRange::default());
    }

    #[test]
    fn test_dashboard_section_is_optional() {
        let config = parse_config("[catalog]\nlocation = \"data/\"\n").unwrap();
        assert_eq!(config.catalog.timeout_secs, 30);
        assert_eq!(config.dashboard.seasonal_period, 7);
    }

    #[test]
    fn test_rejects_degenerate_period() {
        let contents = r#"
[catalog]
location = "data/"

[dashboard]
start_date = "2015-01-01"
end_date = "2015-12-31"
seasonal_period = 1
"#;
        assert!(parse_config(contents).is_err());
    }
}
