//! Report output for searched documents.

mod writer;

pub use writer::{render_report, report_file_name, save_report, ReportFormat};
