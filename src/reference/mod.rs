//! Reference tables: zip-to-rate-area and plan-to-rate-area indexes

mod data;
pub mod zips;
pub mod plans;

pub use data::{RateArea, ZipRow, PlanRow, ReferencePaths, SILVER};
pub use zips::{ZipIndex, ZipAssignment, load_zips, load_zips_from_reader};
pub use plans::{PlanIndex, load_plans, load_plans_from_reader};

use crate::error::{Result, SlcspError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Header-driven CSV reader shared by the reference loaders and the report
pub(crate) fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader)
}

/// Open a file for buffered reading, keeping the path in the error
pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| SlcspError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
