//! Group-by aggregation over sales records.
//!
//! Keys are collected into a `BTreeMap`, so results come back in ascending key
//! order. An empty input yields an empty result.

use std::collections::BTreeMap;

use crate::domain::SalesRecord;

/// Reduction applied to each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agg {
    Sum,
    Mean,
}

#[derive(Debug, Default, Clone, Copy)]
struct Accum {
    sum: f64,
    count: usize,
}

impl Accum {
    fn finish(self, agg: Agg) -> f64 {
        match agg {
            Agg::Sum => self.sum,
            Agg::Mean => self.sum / self.count as f64,
        }
    }
}

/// Group `records` by `key` and reduce `value` within each group.
pub fn group_by<'a, I, K, FK, FV>(records: I, key: FK, value: FV, agg: Agg) -> Vec<(K, f64)>
where
    I: IntoIterator<Item = &'a SalesRecord>,
    K: Ord,
    FK: Fn(&SalesRecord) -> K,
    FV: Fn(&SalesRecord) -> f64,
{
    let mut groups: BTreeMap<K, Accum> = BTreeMap::new();
    for r in records {
        let acc = groups.entry(key(r)).or_default();
        acc.sum += value(r);
        acc.count += 1;
    }
    groups
        .into_iter()
        .map(|(k, acc)| (k, acc.finish(agg)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VehicleType;
    use chrono::NaiveDate;

    fn rec(year: i32, vehicle_type: VehicleType, sales: f64) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(year, 1, 31).unwrap(),
            recession: false,
            automobile_sales: sales,
            gdp: 0.0,
            unemployment_rate: 5.0,
            consumer_confidence: 0.0,
            seasonality_weight: 0.0,
            price: 0.0,
            advertising_expenditure: 0.0,
            vehicle_type,
            competition: 0.0,
            month: 1,
            year,
        }
    }

    #[test]
    fn sum_and_mean_by_year() {
        let rows = vec![
            rec(1981, VehicleType::Sports, 10.0),
            rec(1980, VehicleType::Sports, 4.0),
            rec(1981, VehicleType::Executivecar, 20.0),
        ];

        let sums = group_by(&rows, |r| r.year, |r| r.automobile_sales, Agg::Sum);
        assert_eq!(sums, vec![(1980, 4.0), (1981, 30.0)]);

        let means = group_by(&rows, |r| r.year, |r| r.automobile_sales, Agg::Mean);
        assert_eq!(means, vec![(1980, 4.0), (1981, 15.0)]);
    }

    #[test]
    fn keys_follow_declaration_order_for_vehicle_types() {
        let rows = vec![
            rec(1980, VehicleType::Sports, 1.0),
            rec(1980, VehicleType::Supperminicar, 2.0),
        ];
        let out = group_by(&rows, |r| r.vehicle_type, |r| r.automobile_sales, Agg::Sum);
        assert_eq!(out[0].0, VehicleType::Supperminicar);
        assert_eq!(out[1].0, VehicleType::Sports);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let rows: Vec<SalesRecord> = Vec::new();
        assert!(group_by(&rows, |r| r.year, |r| r.automobile_sales, Agg::Mean).is_empty());
    }
}
