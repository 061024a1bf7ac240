//! Dataset loading.
//!
//! The dataset is read exactly once at startup from one of:
//! - a remote CSV over HTTP (`fetch`)
//! - a local CSV file
//! - a seeded synthetic generator (`sample`) for offline use

use crate::domain::DataSource;
use crate::error::AppError;
use crate::io::ingest::{IngestedData, load_sales_csv};

pub mod fetch;
pub mod sample;

pub use fetch::CsvFetcher;
pub use sample::generate_demo;

/// Published historical automobile sales dataset.
pub const DEFAULT_SOURCE_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBMDeveloperSkillsNetwork-DV0101EN-SkillsNetwork/Data%20Files/historical_automobile_sales.csv";

/// Environment variable naming the data source (URL, path, or `demo`).
pub const SOURCE_ENV: &str = "AUTOSALES_SOURCE";

/// Resolve the data source: explicit flag, then environment (`.env` honored),
/// then the published dataset URL.
pub fn resolve_source(flag: Option<&str>) -> DataSource {
    if let Some(raw) = flag.map(str::trim).filter(|s| !s.is_empty()) {
        return DataSource::parse(raw);
    }
    dotenvy::dotenv().ok();
    match std::env::var(SOURCE_ENV) {
        Ok(raw) if !raw.trim().is_empty() => DataSource::parse(&raw),
        _ => DataSource::Url(DEFAULT_SOURCE_URL.to_string()),
    }
}

/// Load the dataset once. Failures here are fatal for the process.
pub fn load(source: &DataSource) -> Result<IngestedData, AppError> {
    log::info!("loading sales data from {source}");
    let data = match source {
        DataSource::Url(url) => CsvFetcher::new()?.fetch(url)?,
        DataSource::File(path) => load_sales_csv(path)?,
        DataSource::Demo { seed } => generate_demo(*seed)?,
    };
    log::info!(
        "loaded {} rows ({} skipped), years {}..={}",
        data.rows_used,
        data.row_errors.len(),
        data.stats.year_min,
        data.stats.year_max
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins() {
        assert_eq!(resolve_source(Some("demo:3")), DataSource::Demo { seed: 3 });
        assert_eq!(
            resolve_source(Some("https://example.com/s.csv")),
            DataSource::Url("https://example.com/s.csv".to_string())
        );
    }

    #[test]
    fn demo_source_loads_without_network() {
        let data = load(&DataSource::Demo { seed: 1 }).unwrap();
        assert!(data.rows_used > 0);
        assert!(data.row_errors.is_empty());
    }
}
