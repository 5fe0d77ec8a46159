#![doc(
    html_logo_url = "https://raw.githubusercontent.com/deceptiscan/deceptiscan/main/assets/deceptiscan.svg",
    issue_tracker_base_url = "https://github.com/deceptiscan/deceptiscan/issues/"
)]

//! Product review analysis reports.
//!
//! [`ReviewPipeline`] runs the sentiment, stylometry and AI-text detectors
//! over each [`ReviewRecord`] and aggregates the results into an
//! [`AnalysisReport`]: how many reviews look fake, the rating with and
//! without them, and what each detector flagged.
//!
//! ## Example
//!
//! ```
//! use deceptiscan::ScanConfig;
//! use deceptiscan_report::{ReviewPipeline, ReviewRecord};
//!
//! let config = ScanConfig { seed: Some(42), ..Default::default() };
//! let mut pipeline = ReviewPipeline::from_config(&config).unwrap();
//! let records = vec![
//!     ReviewRecord::new("r1", "Great, love it, best ever", Some(1)).unwrap(),
//!     ReviewRecord::new("r2", "Works fine, battery lasts.", Some(4)).unwrap(),
//! ];
//!
//! let report = pipeline.report("https://example.com/p/1", "Blender", &records);
//! assert_eq!(report.fake_reviews, 1);
//! assert_eq!(report.real_rating, 4.0);
//! ```

mod pipeline;
mod record;
mod report;

pub use pipeline::{ReviewPipeline, ReviewVerdict};
pub use record::{records_from_json, ReviewRecord};
pub use report::{
    summarize, AnalysisReport, ModuleSummary, AI_TEXT_MODULE, SENTIMENT_MODULE, STYLOMETRY_MODULE,
};
