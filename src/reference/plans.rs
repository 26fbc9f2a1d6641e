//! Rate area to Silver plan rates index

use super::{csv_reader, open, PlanRow, RateArea};
use crate::error::{Result, SlcspError};
use log::info;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Immutable rate area -> Silver rates mapping
///
/// Rates are kept in file order and duplicates are preserved: two plans
/// with the same premium count as two plans.
#[derive(Debug, Clone, Default)]
pub struct PlanIndex {
    silver_rates: HashMap<RateArea, Vec<Decimal>>,
}

impl PlanIndex {
    /// Build the index in one pass, keeping only Silver plans
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = PlanRow>,
    {
        let mut silver_rates: HashMap<RateArea, Vec<Decimal>> = HashMap::new();
        for row in rows.into_iter().filter(PlanRow::is_silver) {
            silver_rates.entry(row.rate_area()).or_default().push(row.rate);
        }
        Self { silver_rates }
    }

    /// Silver rates for an area; empty if the area has none
    pub fn silver_rates(&self, area: &RateArea) -> &[Decimal] {
        self.silver_rates
            .get(area)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of rate areas with at least one Silver plan
    pub fn area_count(&self) -> usize {
        self.silver_rates.len()
    }

    pub fn plan_count(&self) -> usize {
        self.silver_rates.values().map(Vec::len).sum()
    }
}

/// Load the plan index from a CSV file
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<PlanIndex> {
    let path = path.as_ref();
    info!("Loading plans table from {}", path.display());
    load_plans_from_reader(open(path)?)
}

/// Load the plan index from any reader (useful for tests)
pub fn load_plans_from_reader<R: Read>(reader: R) -> Result<PlanIndex> {
    let rows = csv_reader(reader)
        .deserialize::<PlanRow>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(SlcspError::parse("plans"))?;

    let row_count = rows.len();
    let index = PlanIndex::from_rows(rows);
    info!(
        "Loaded {} plan rows: {} Silver plans across {} rate areas",
        row_count,
        index.plan_count(),
        index.area_count()
    );
    Ok(index)
}
