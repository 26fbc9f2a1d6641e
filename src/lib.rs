//! Second-lowest-cost silver plan (SLCSP) lookup
//!
//! Loads the zip and plan reference tables once, then answers per-zip
//! queries for the second-lowest Silver rate in the zip's rate area.

pub mod error;
pub mod reference;
pub mod resolver;
pub mod report;

pub use error::{Result, SlcspError};
pub use reference::{PlanIndex, RateArea, ReferencePaths, ZipAssignment, ZipIndex};
pub use resolver::SlcspResolver;
pub use report::{format_rate, write_report, ReportSummary};
