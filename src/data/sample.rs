//! Seeded synthetic sales dataset for offline use.
//!
//! Mirrors the published dataset's shape: one observation per month from
//! 1980 through 2023, each tagged with a single vehicle type, with recession
//! months flagged and sales depressed during them.

use chrono::NaiveDate;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{SalesRecord, VehicleType, YEAR_RANGE};
use crate::error::AppError;
use crate::io::ingest::IngestedData;

/// (year, first month, last month) spans flagged as recession.
const RECESSIONS: [(i32, u32, u32); 9] = [
    (1980, 1, 12),
    (1981, 7, 12),
    (1982, 1, 11),
    (1991, 1, 12),
    (2000, 3, 12),
    (2001, 1, 11),
    (2007, 12, 12),
    (2008, 1, 12),
    (2020, 2, 12),
];

/// Generate the demo dataset. The same seed always yields the same records.
pub fn generate_demo(seed: u64) -> Result<IngestedData, AppError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::<f64>::new(0.0, 1.0)
        .map_err(|e| AppError::runtime(format!("Noise distribution error: {e}")))?;

    let mut records = Vec::new();
    for year in YEAR_RANGE {
        for month in 1..=12u32 {
            let recession = is_recession(year, month);
            let vehicle_type = VehicleType::ALL[rng.gen_range(0..VehicleType::ALL.len())];

            // Seasonality peaks in late spring / early summer.
            let seasonality_weight = 0.75 + 0.25 * ((month as f64 - 3.0) / 12.0 * std::f64::consts::TAU).sin();
            let unemployment_rate = if recession {
                round1(6.5 + 1.5 * noise.sample(&mut rng).abs())
            } else {
                round1(4.5 + 0.8 * noise.sample(&mut rng))
            };

            let base = base_sales(vehicle_type);
            let cycle = if recession { 0.55 } else { 1.0 };
            let automobile_sales =
                (base * cycle * (0.8 + 0.4 * seasonality_weight) + 60.0 * noise.sample(&mut rng)).max(10.0);

            let (gdp_base, confidence_base) = if recession { (20.0, 85.0) } else { (40.0, 100.0) };

            let date = last_day_of_month(year, month)?;
            records.push(SalesRecord {
                date,
                recession,
                automobile_sales: round1(automobile_sales),
                gdp: round1(gdp_base + 10.0 * rng.r#gen::<f64>()),
                unemployment_rate,
                consumer_confidence: round1(confidence_base + 8.0 * noise.sample(&mut rng)),
                seasonality_weight: round1(seasonality_weight * 100.0) / 100.0,
                price: round1(base_price(vehicle_type) * (1.0 + 0.05 * noise.sample(&mut rng))),
                advertising_expenditure: (rng.gen_range(1000.0..4500.0) * cycle).round(),
                vehicle_type,
                competition: rng.gen_range(3..10) as f64,
                month,
                year,
            });
        }
    }

    IngestedData::from_records(records)
}

fn is_recession(year: i32, month: u32) -> bool {
    RECESSIONS
        .iter()
        .any(|&(y, first, last)| y == year && (first..=last).contains(&month))
}

fn base_sales(vehicle_type: VehicleType) -> f64 {
    match vehicle_type {
        VehicleType::Supperminicar => 2600.0,
        VehicleType::Smallfamiliycar => 2900.0,
        VehicleType::Mediumfamilycar => 3200.0,
        VehicleType::Executivecar => 1800.0,
        VehicleType::Sports => 1500.0,
    }
}

fn base_price(vehicle_type: VehicleType) -> f64 {
    match vehicle_type {
        VehicleType::Supperminicar => 14_000.0,
        VehicleType::Smallfamiliycar => 19_000.0,
        VehicleType::Mediumfamilycar => 25_000.0,
        VehicleType::Executivecar => 42_000.0,
        VehicleType::Sports => 48_000.0,
    }
}

fn last_day_of_month(year: i32, month: u32) -> Result<NaiveDate, AppError> {
    let (next_y, next_m) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| AppError::runtime(format!("Invalid demo date {year}-{month}.")))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
