//! # compound-cli
//!
//! CLI report formatting, the report presenter, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::{CLIReportPresenter, ReportPresenter};
