pub mod analysis;
pub mod error;
pub mod log;
pub mod report;

pub use analysis::{AnalysisOptions, SummaryReport, analyze, analyze_with};
pub use error::{Error, Result};
pub use report::{format, run};
