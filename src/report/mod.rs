//! Formatted valuation reports and projection exports

pub mod format;
mod document;
mod render;
mod export;

pub use document::{ValuationReport, ReportConfig, ReportRow, metric_rows};
pub use render::{ReportFormat, HtmlReport, TextReport, render, render_text, render_html, write_csv};
pub use export::write_projection_csv;
