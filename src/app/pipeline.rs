//! Shared "load once, view many" logic used by every front end.
//!
//! The CLI, the TUI and the HTTP server all go through `Dashboard`, so the
//! selector rules and aggregations live in exactly one place.

use crate::cli::SourceArgs;
use crate::domain::{DashboardView, DataSource};
use crate::error::AppError;
use crate::io::ingest::IngestedData;

/// The immutable in-memory dataset plus where it came from.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub source: DataSource,
    pub data: IngestedData,
}

impl Dashboard {
    /// Resolve the source and load the dataset.
    pub fn load(args: &SourceArgs) -> Result<Self, AppError> {
        let source = crate::data::resolve_source(args.source.as_deref());
        let data = crate::data::load(&source)?;
        Ok(Self { source, data })
    }

    pub fn from_data(source: DataSource, data: IngestedData) -> Self {
        Self { source, data }
    }

    /// Output region for the given selector values.
    pub fn view(&self, report: Option<&str>, year: Option<i32>) -> DashboardView {
        crate::report::build_view(&self.data.records, report, year)
    }

    pub fn year_selector_disabled(&self, report: Option<&str>) -> bool {
        crate::report::year_selector_disabled(report)
    }
}
