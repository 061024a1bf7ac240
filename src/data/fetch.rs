//! HTTP download of the sales CSV.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::AppError;
use crate::io::ingest::{IngestedData, parse_sales_csv};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CsvFetcher {
    client: Client,
}

impl CsvFetcher {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::runtime(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Download `url` and run it through the CSV ingest.
    pub fn fetch(&self, url: &str) -> Result<IngestedData, AppError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::runtime(format!("CSV download failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::runtime(format!(
                "CSV download failed with status {}.",
                resp.status()
            )));
        }

        let body = resp
            .bytes()
            .map_err(|e| AppError::runtime(format!("Failed to read CSV body: {e}")))?;
        log::debug!("downloaded {} bytes from {url}", body.len());

        parse_sales_csv(body.as_ref())
    }
}
