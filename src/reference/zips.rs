//! Zip code to rate area index
//!
//! A zip code may span several counties and so appear on several rows of
//! zips.csv. If those rows disagree on the rate area, the zip is ambiguous
//! and no SLCSP can be given for it.

use super::{csv_reader, open, RateArea, ZipRow};
use crate::error::{Result, SlcspError};
use log::{debug, info};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// What the zip table says about a single zip code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZipAssignment {
    /// Every occurrence agreed on this rate area
    Determined(RateArea),
    /// Occurrences named two or more different rate areas
    Ambiguous,
}

impl ZipAssignment {
    pub fn rate_area(&self) -> Option<&RateArea> {
        match self {
            ZipAssignment::Determined(area) => Some(area),
            ZipAssignment::Ambiguous => None,
        }
    }
}

/// Immutable zipcode -> rate area mapping, keyed on the verbatim zip string
#[derive(Debug, Clone, Default)]
pub struct ZipIndex {
    assignments: HashMap<String, ZipAssignment>,
}

impl ZipIndex {
    /// Build the index in one pass over the rows, in file order
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ZipRow>,
    {
        let mut assignments: HashMap<String, ZipAssignment> = HashMap::new();

        for row in rows {
            let area = row.rate_area();
            match assignments.entry(row.zipcode) {
                Entry::Vacant(slot) => {
                    slot.insert(ZipAssignment::Determined(area));
                }
                Entry::Occupied(mut slot) => {
                    // Ambiguous is terminal
                    let conflicting = matches!(
                        slot.get(),
                        ZipAssignment::Determined(existing) if *existing != area
                    );
                    if conflicting {
                        debug!("zip {} also maps to {}, marking ambiguous", slot.key(), area);
                        slot.insert(ZipAssignment::Ambiguous);
                    }
                }
            }
        }

        Self { assignments }
    }

    /// Assignment for a zip code, or `None` if the zip never appeared
    pub fn get(&self, zipcode: &str) -> Option<&ZipAssignment> {
        self.assignments.get(zipcode)
    }

    /// Rate area for a zip, `None` when the zip is unknown or ambiguous
    pub fn rate_area(&self, zipcode: &str) -> Option<&RateArea> {
        self.get(zipcode).and_then(ZipAssignment::rate_area)
    }

    pub fn zip_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn ambiguous_count(&self) -> usize {
        self.assignments
            .values()
            .filter(|a| matches!(a, ZipAssignment::Ambiguous))
            .count()
    }
}

/// Load the zip index from a CSV file
pub fn load_zips<P: AsRef<Path>>(path: P) -> Result<ZipIndex> {
    let path = path.as_ref();
    info!("Loading zip table from {}", path.display());
    load_zips_from_reader(open(path)?)
}

/// Load the zip index from any reader (useful for tests)
///
/// Every row is parsed before the index is built, so a malformed row fails
/// the whole load.
pub fn load_zips_from_reader<R: Read>(reader: R) -> Result<ZipIndex> {
    let rows = csv_reader(reader)
        .deserialize::<ZipRow>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(SlcspError::parse("zips"))?;

    let row_count = rows.len();
    let index = ZipIndex::from_rows(rows);
    info!(
        "Loaded {} zip rows: {} zip codes, {} ambiguous",
        row_count,
        index.zip_count(),
        index.ambiguous_count()
    );
    Ok(index)
}
