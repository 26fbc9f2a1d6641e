//! CSV report: one `zipcode,rate` row per requested zip code

use crate::error::{Result, SlcspError};
use crate::reference::csv_reader;
use crate::resolver::SlcspResolver;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::io::{Read, Write};

/// One row of the input zip list
#[derive(Debug, Deserialize)]
struct InputRow {
    zipcode: String,
}

/// Counts from a completed report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Data rows written (excluding the header)
    pub rows: usize,
    /// Rows that received a rate
    pub determined: usize,
}

/// Format a rate to cents, or an empty field when undetermined
pub fn format_rate(rate: Option<Decimal>) -> String {
    match rate {
        Some(rate) => {
            let cents = rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.2}", cents)
        }
        None => String::new(),
    }
}

/// Resolve every zip in `input` and write the report to `output`
///
/// Rows are written in input order. Undetermined zips get an empty rate
/// and processing continues.
pub fn write_report<R: Read, W: Write>(
    resolver: &SlcspResolver,
    input: R,
    output: W,
) -> Result<ReportSummary> {
    let mut reader = csv_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(["zipcode", "rate"])?;

    let mut summary = ReportSummary::default();
    for record in reader.deserialize::<InputRow>() {
        let row = record.map_err(SlcspError::parse("input"))?;
        let rate = resolver.resolve(&row.zipcode);
        if rate.is_none() {
            debug!("no SLCSP for zip {}", row.zipcode);
        } else {
            summary.determined += 1;
        }
        writer.write_record([row.zipcode.as_str(), format_rate(rate).as_str()])?;
        summary.rows += 1;
    }

    writer.flush()?;
    Ok(summary)
}
