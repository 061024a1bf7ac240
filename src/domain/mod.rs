//! Domain types used throughout the dashboard.
//!
//! This module defines:
//!
//! - the sales record schema (`SalesRecord`, `VehicleType`)
//! - selector values (`ReportType`, `YEAR_RANGE`)
//! - chart descriptors and views (`Chart`, `DashboardView`)

pub mod types;

pub use types::*;
