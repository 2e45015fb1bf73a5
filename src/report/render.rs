//! Renderers for [`ValuationReport`]

use std::fmt;
use std::io;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::document::ValuationReport;

/// Output formats for a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Plain text, the layout a PDF writer consumes
    Text,
    /// HTML email body
    Html,
    /// Metric,Value table
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Html => "html",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

/// Render in the requested format
pub fn render(report: &ValuationReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Html => Ok(render_html(report)),
        ReportFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(report, &mut buf)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn footer(report: &ValuationReport) -> String {
    format!("{} © {}", report.product_name, report.generated_on.year())
}

/// Fixed-layout text report
pub fn render_text(report: &ValuationReport) -> String {
    TextReport(report).to_string()
}

/// Text layout of a report, written through `fmt::Display`
pub struct TextReport<'a>(pub &'a ValuationReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let width = report
            .metrics
            .iter()
            .map(|row| row.metric.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(f, "{}", report.product_name)?;
        writeln!(f, "{}", report.subtitle)?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "{}", report.title)?;
        writeln!(f, "Generated on: {}", report.generated_on.format("%d/%m/%Y"))?;
        writeln!(f)?;

        writeln!(f, "Executive Summary")?;
        writeln!(f, "{}", report.executive_summary)?;
        writeln!(f)?;

        writeln!(f, "{:<width$}  {}", "Metric", "Value", width = width)?;
        writeln!(f, "{}", "-".repeat(width + 20))?;
        for row in &report.metrics {
            // pad by chars; ₹ is multi-byte
            let pad = width - row.metric.chars().count();
            writeln!(f, "{}{}  {}", row.metric, " ".repeat(pad), row.value)?;
        }
        writeln!(f)?;

        writeln!(f, "Business Analysis")?;
        writeln!(f, "{}", report.analysis.join(" "))?;
        writeln!(f)?;

        writeln!(f, "Recommendations")?;
        for rec in &report.recommendations {
            writeln!(f, "• {}", rec)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", footer(report))
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const HTML_STYLE: &str = "      body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; }
      .header { background-color: #245e4f; color: white; padding: 20px; text-align: center; }
      .content { padding: 20px; background-color: #f8f8f8; }
      .metrics-table { width: 100%; border-collapse: collapse; margin: 20px 0; }
      .metrics-table th { background-color: #245e4f; color: white; padding: 10px; text-align: left; }
      .metrics-table td { padding: 10px; border-bottom: 1px solid #ddd; }
      .footer { background-color: #245e4f; color: white; padding: 10px; text-align: center; font-size: 12px; }
";

/// HTML email body with the metric table
pub fn render_html(report: &ValuationReport) -> String {
    HtmlReport(report).to_string()
}

/// HTML layout of a report, written through `fmt::Display`
pub struct HtmlReport<'a>(pub &'a ValuationReport);

impl fmt::Display for HtmlReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "<html>")?;
        writeln!(f, "  <head>")?;
        writeln!(f, "    <style>")?;
        f.write_str(HTML_STYLE)?;
        writeln!(f, "    </style>")?;
        writeln!(f, "  </head>")?;
        writeln!(f, "  <body>")?;
        writeln!(f, "    <div class=\"header\">")?;
        writeln!(f, "      <h1>{}</h1>", escape_html(&report.product_name))?;
        writeln!(f, "      <h2>{}</h2>", escape_html(&report.subtitle))?;
        writeln!(f, "    </div>")?;
        writeln!(f, "    <div class=\"content\">")?;
        writeln!(f, "      <h3>Executive Summary</h3>")?;
        writeln!(f, "      <p>{}</p>", escape_html(&report.executive_summary))?;
        writeln!(f, "      <h3>Key Metrics</h3>")?;
        writeln!(f, "      <table class=\"metrics-table\">")?;
        writeln!(f, "        <tr><th>Metric</th><th>Value</th></tr>")?;
        for row in &report.metrics {
            writeln!(
                f,
                "        <tr><td>{}</td><td>{}</td></tr>",
                escape_html(&row.metric),
                escape_html(&row.value)
            )?;
        }
        writeln!(f, "      </table>")?;
        writeln!(f, "      <h3>Business Analysis</h3>")?;
        writeln!(f, "      <p>{}</p>", escape_html(&report.analysis.join(" ")))?;
        writeln!(f, "      <h3>Recommendations</h3>")?;
        writeln!(f, "      <ul>")?;
        for rec in &report.recommendations {
            writeln!(f, "        <li>{}</li>", escape_html(rec))?;
        }
        writeln!(f, "      </ul>")?;
        writeln!(f, "    </div>")?;
        writeln!(f, "    <div class=\"footer\">{} | All rights reserved.</div>", escape_html(&footer(report)))?;
        writeln!(f, "  </body>")?;
        writeln!(f, "</html>")
    }
}

/// Write the metric table as `Metric,Value` CSV
pub fn write_csv<W: io::Write>(report: &ValuationReport, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Metric", "Value"])?;
    for row in &report.metrics {
        wtr.write_record([row.metric.as_str(), row.value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{MetricInputs, MetricsSnapshot};
    use crate::report::ReportConfig;
    use chrono::NaiveDate;

    fn report() -> ValuationReport {
        let config = ReportConfig {
            generated_on: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
            ..ReportConfig::default()
        };
        ValuationReport::build(&MetricsSnapshot::compute(&MetricInputs::default()), &config)
    }

    #[test]
    fn test_text_layout() {
        let text = render_text(&report());
        assert!(text.starts_with("ARR Insights Pro\n"));
        assert!(text.contains("Generated on: 15/10/2026"));
        let valuation_line = text
            .lines()
            .find(|line| line.starts_with("Estimated Company Valuation"))
            .unwrap();
        assert!(valuation_line.ends_with("  ₹2,40,00,000"));
        // values line up in one column
        let arpu_line = text.lines().find(|line| line.starts_with("Average Revenue")).unwrap();
        assert_eq!(
            valuation_line.chars().count() - "₹2,40,00,000".chars().count(),
            arpu_line.chars().count() - "₹2,000".chars().count()
        );
        assert!(text.contains("• Consider strategies"));
        assert!(text.trim_end().ends_with("ARR Insights Pro © 2026"));
    }

    #[test]
    fn test_html_has_every_row() {
        let report = report();
        let html = render_html(&report);
        assert_eq!(html.matches("<tr><td>").count(), report.metrics.len());
        assert!(html.contains("<tr><td>LTV:CAC Ratio</td><td>8.00</td></tr>"));
        assert!(html.contains("ARR Insights Pro © 2026 | All rights reserved."));
    }

    #[test]
    fn test_csv_table() {
        let csv = render(&report(), ReportFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("Metric,Value"));
        assert_eq!(lines.next(), Some("Monthly Recurring Revenue,\"₹2,00,000\""));
        assert_eq!(csv.lines().count(), 13);
    }

    #[test]
    fn test_json_round_trips() {
        let report = report();
        let json = render(&report, ReportFormat::Json).unwrap();
        let parsed: ValuationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_display_wrappers_match_renderers() {
        let report = report();
        let mut text = String::new();
        fmt::write(&mut text, format_args!("{}", TextReport(&report))).unwrap();
        assert_eq!(text, render_text(&report));
        assert!(text.ends_with("© 2026\n"));

        let html = render_html(&report);
        assert_eq!(html, HtmlReport(&report).to_string());
        assert!(html.contains("    <style>\n      body { font-family: Arial"));
        assert!(html.contains("font-size: 12px; }\n    </style>\n"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("R&D <b>"), "R&amp;D &lt;b&gt;");
    }
}
