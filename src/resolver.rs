//! Second-lowest-cost Silver plan lookup

use crate::error::Result;
use crate::reference::{load_plans, load_zips, PlanIndex, RateArea, ReferencePaths, ZipIndex};
use rust_decimal::Decimal;

/// Answers SLCSP queries against a fixed pair of indexes
#[derive(Debug, Clone)]
pub struct SlcspResolver {
    zips: ZipIndex,
    plans: PlanIndex,
}

impl SlcspResolver {
    pub fn new(zips: ZipIndex, plans: PlanIndex) -> Self {
        Self { zips, plans }
    }

    /// Load both reference tables from disk
    pub fn load(paths: &ReferencePaths) -> Result<Self> {
        let zips = load_zips(&paths.zips)?;
        let plans = load_plans(&paths.plans)?;
        Ok(Self::new(zips, plans))
    }

    pub fn plans(&self) -> &PlanIndex {
        &self.plans
    }

    /// Second-lowest Silver rate for a zip code
    ///
    /// Returns `None` when the zip is unknown, maps to more than one rate
    /// area, or its area has fewer than two Silver plans. Rates are ranked
    /// as a list, so if the lowest premium is offered by two plans that
    /// premium is also the second lowest.
    pub fn resolve(&self, zipcode: &str) -> Option<Decimal> {
        let area = self.zips.rate_area(zipcode)?;
        self.second_lowest(area)
    }

    fn second_lowest(&self, area: &RateArea) -> Option<Decimal> {
        let rates = self.plans.silver_rates(area);
        if rates.len() < 2 {
            return None;
        }
        let mut sorted = rates.to_vec();
        sorted.sort();
        sorted.get(1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{PlanRow, ZipRow};
    use std::num::NonZeroU32;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn zip(zipcode: &str, state: &str, rate_area: u32) -> ZipRow {
        ZipRow {
            zipcode: zipcode.to_string(),
            state: state.to_string(),
            rate_area: NonZeroU32::new(rate_area).unwrap(),
        }
    }

    fn silver(state: &str, rate_area: u32, rate: &str) -> PlanRow {
        PlanRow {
            state: state.to_string(),
            metal_level: "Silver".to_string(),
            rate: dec(rate),
            rate_area: NonZeroU32::new(rate_area).unwrap(),
        }
    }

    fn resolver() -> SlcspResolver {
        let zips = ZipIndex::from_rows(vec![
            zip("52101", "IA", 7),
            zip("54545", "WI", 1),
            zip("54545", "WI", 3),
            zip("40813", "KY", 8),
            zip("07184", "NJ", 1),
            zip("31551", "GA", 6),
        ]);
        let plans = PlanIndex::from_rows(vec![
            silver("IA", 7, "320.78"),
            silver("IA", 7, "199.24"),
            silver("IA", 7, "254.56"),
            silver("IA", 7, "254.56"),
            silver("IA", 7, "401.10"),
            silver("WI", 1, "300.00"),
            silver("WI", 1, "310.00"),
            silver("WI", 3, "305.00"),
            silver("WI", 3, "315.00"),
            silver("KY", 8, "250.00"),
            silver("NJ", 1, "190.00"),
            silver("NJ", 1, "190.00"),
            silver("NJ", 1, "225.50"),
        ]);
        SlcspResolver::new(zips, plans)
    }

    #[test]
    fn test_second_lowest() {
        assert_eq!(resolver().resolve("52101"), Some(dec("254.56")));
    }

    #[test]
    fn test_ambiguous_zip_undetermined() {
        // Both candidate areas have enough plans; ambiguity alone decides
        assert_eq!(resolver().resolve("54545"), None);
    }

    #[test]
    fn test_unknown_zip_undetermined() {
        assert_eq!(resolver().resolve("99999"), None);
    }

    #[test]
    fn test_single_plan_undetermined() {
        assert_eq!(resolver().resolve("40813"), None);
    }

    #[test]
    fn test_no_plans_undetermined() {
        assert_eq!(resolver().resolve("31551"), None);
    }

    #[test]
    fn test_duplicate_lowest_counts_twice() {
        assert_eq!(resolver().resolve("07184"), Some(dec("190.00")));
    }

    #[test]
    fn test_numeric_not_lexical_ordering() {
        // "1000.00" sorts before "999.99" as text
        let zips = ZipIndex::from_rows(vec![zip("10001", "NY", 1)]);
        let plans = PlanIndex::from_rows(vec![
            silver("NY", 1, "1000.00"),
            silver("NY", 1, "999.99"),
            silver("NY", 1, "85.10"),
        ]);
        let resolver = SlcspResolver::new(zips, plans);
        assert_eq!(resolver.resolve("10001"), Some(dec("999.99")));
    }

    #[test]
    fn test_scale_does_not_affect_order() {
        let zips = ZipIndex::from_rows(vec![zip("10001", "NY", 1)]);
        let plans = PlanIndex::from_rows(vec![
            silver("NY", 1, "245.2"),
            silver("NY", 1, "245.19"),
            silver("NY", 1, "245.20"),
        ]);
        let resolver = SlcspResolver::new(zips, plans);
        assert_eq!(resolver.resolve("10001"), Some(dec("245.20")));
    }

    #[test]
    fn test_resolve_does_not_mutate_index() {
        let resolver = resolver();
        resolver.resolve("52101");
        assert_eq!(
            resolver.plans().silver_rates(&RateArea::new("IA", NonZeroU32::new(7).unwrap()))[0],
            dec("320.78")
        );
    }
}
