//! Row types for the reference tables

use rust_decimal::Decimal;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::path::PathBuf;

/// Metal level that qualifies a plan for the SLCSP calculation
pub const SILVER: &str = "Silver";

/// Pricing region: a state plus its numbered rate area
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RateArea {
    pub state: String,
    pub number: NonZeroU32,
}

impl RateArea {
    pub fn new(state: impl Into<String>, number: NonZeroU32) -> Self {
        Self {
            state: state.into(),
            number,
        }
    }
}

impl std::fmt::Display for RateArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.state, self.number)
    }
}

/// One row of zips.csv (one per zip/county combination)
///
/// Columns other than these (county_code, name) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ZipRow {
    pub zipcode: String,
    pub state: String,
    pub rate_area: NonZeroU32,
}

impl ZipRow {
    pub fn rate_area(&self) -> RateArea {
        RateArea::new(self.state.clone(), self.rate_area)
    }
}

/// One row of plans.csv (one per plan per rate area)
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRow {
    pub state: String,
    pub metal_level: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    pub rate_area: NonZeroU32,
}

impl PlanRow {
    pub fn is_silver(&self) -> bool {
        self.metal_level == SILVER
    }

    pub fn rate_area(&self) -> RateArea {
        RateArea::new(self.state.clone(), self.rate_area)
    }
}

/// Locations of the two reference tables
///
/// Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePaths {
    pub zips: PathBuf,
    pub plans: PathBuf,
}

impl Default for ReferencePaths {
    fn default() -> Self {
        Self {
            zips: PathBuf::from("zips.csv"),
            plans: PathBuf::from("plans.csv"),
        }
    }
}
