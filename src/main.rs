//! ARR Calculator CLI
//!
//! Command-line interface for calculating SaaS metrics, projections and reports

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use arr_calculator::{
    assessment::{dashboard_recommendations, Assessment},
    delivery::{send_report, LogMailer},
    metrics::{FormFields, MetricInputs},
    report::{
        format::{format_count, format_currency, format_months, format_multiple, format_number},
        render, write_projection_csv, ReportConfig, ReportFormat, ValuationReport,
    },
    Calculation, ProjectionConfig,
};

/// Longest horizon accepted on the command line
const MAX_PROJECTION_YEARS: i64 = 1000;

/// Calendar range accepted for `--reference-year`
const MIN_REFERENCE_YEAR: i64 = 1;
const MAX_REFERENCE_YEAR: i64 = 9999;

#[derive(Parser, Debug)]
#[command(name = "arr_calculator")]
#[command(about = "SaaS ARR, unit economics and valuation calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate metrics and projections and print them
    Calculate {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        projection: ProjectionArgs,

        /// Print the full calculation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a valuation report
    Report {
        #[command(flatten)]
        inputs: InputArgs,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the revenue and customer projections as CSV
    Project {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        projection: ProjectionArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Email a valuation report
    Send {
        #[command(flatten)]
        inputs: InputArgs,

        /// Recipient email address
        #[arg(long)]
        to: String,

        /// Simulated transport latency in milliseconds
        #[arg(long, default_value = "1000")]
        latency_ms: u64,
    },
}

/// Calculator inputs, entered as raw text the way the form receives them
#[derive(Args, Debug)]
struct InputArgs {
    /// JSON file with all six inputs (overrides the individual flags)
    #[arg(long)]
    inputs: Option<PathBuf>,

    /// Monthly recurring revenue
    #[arg(long, default_value = "200000")]
    monthly_revenue: String,

    /// Number of paying customers
    #[arg(long, default_value = "100")]
    customer_count: String,

    /// Annual churn rate (%)
    #[arg(long, default_value = "5")]
    churn_rate: String,

    /// Annual growth rate (%)
    #[arg(long, default_value = "15")]
    growth_rate: String,

    /// Customer acquisition cost
    #[arg(long, default_value = "5000")]
    cac: String,

    /// Valuation multiple applied to ARR
    #[arg(long, default_value = "10")]
    valuation_multiple: String,
}

impl InputArgs {
    fn resolve(&self) -> Result<MetricInputs> {
        if let Some(path) = &self.inputs {
            return load_inputs(path);
        }
        Ok(MetricInputs::from_form(&FormFields {
            monthly_revenue: self.monthly_revenue.clone(),
            customer_count: self.customer_count.clone(),
            churn_rate: self.churn_rate.clone(),
            growth_rate: self.growth_rate.clone(),
            cac: self.cac.clone(),
            valuation_multiple: self.valuation_multiple.clone(),
        }))
    }
}

#[derive(Args, Debug)]
struct ProjectionArgs {
    /// Projection horizon in years
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(0..=MAX_PROJECTION_YEARS))]
    years: u32,

    /// Calendar year of the first projection point (defaults to this year)
    #[arg(long, value_parser = clap::value_parser!(i32).range(MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR))]
    reference_year: Option<i32>,
}

impl ProjectionArgs {
    fn config(&self) -> ProjectionConfig {
        match self.reference_year {
            Some(year) => ProjectionConfig::new(self.years, year),
            None => ProjectionConfig::current().with_years(self.years),
        }
    }
}

fn load_inputs(path: &Path) -> Result<MetricInputs> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Unable to read inputs file {}", path.display()))?;
    let inputs = serde_json::from_str(&text)
        .with_context(|| format!("Invalid inputs in {}", path.display()))?;
    Ok(inputs)
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn print_calculation(calc: &Calculation) {
    let s = &calc.snapshot;
    let assessment = Assessment::from_snapshot(s);

    println!("ARR Calculator v0.1.0");
    println!("=====================\n");

    println!("Revenue Metrics:");
    println!("  Monthly Revenue:      {}", format_currency(s.monthly_revenue));
    println!("  Annual Revenue:       {}", format_currency(s.annual_revenue));
    println!("  ARPU:                 {}", format_currency(s.arpu));
    println!();
    println!("Customer Metrics:");
    println!("  Total Customers:      {}", format_count(s.customer_count));
    println!("  Lifetime Value:       {}", format_currency(s.ltv));
    println!("  Acquisition Cost:     {}", format_currency(s.cac));
    println!("  CAC Payback:          {}", format_months(s.payback_period));
    println!();
    println!("Growth & Valuation:");
    println!("  Annual Growth Rate:   {}%", format_number(s.growth_rate));
    println!("  Annual Churn Rate:    {}%", format_number(s.churn_rate));
    println!("  Valuation Multiple:   {}", format_multiple(s.valuation_multiple));
    println!("  Estimated Valuation:  {}", format_currency(s.estimated_valuation));
    println!();

    println!("{}", assessment.unit_economics_summary());
    println!("{}", assessment.payback_summary());
    println!("LTV:CAC band: {}", assessment.unit_economics.label());
    println!();

    println!("Projection ({} years):", calc.config.years);
    println!("{:>6} {:>18} {:>10} {:>8} {:>8}", "Year", "ARR", "Customers", "New", "Churned");
    println!("{}", "-".repeat(54));
    for (r, c) in calc.revenue_projection.iter().zip(&calc.customer_projection) {
        println!(
            "{:>6} {:>18} {:>10} {:>8} {:>8}",
            r.year,
            format_currency(r.arr),
            c.customers,
            c.new_customers,
            c.churned_customers
        );
    }
    println!();

    println!("Key Insights:");
    for (label, text) in assessment.insights() {
        println!("  {}: {}", label, text);
    }
    println!();

    println!("Recommendations:");
    for rec in dashboard_recommendations(&assessment) {
        println!("  - {}: {}", rec.title(), rec.detail());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate { inputs, projection, json } => {
            let calc = Calculation::run(&inputs.resolve()?, projection.config());
            if json {
                println!("{}", serde_json::to_string_pretty(&calc)?);
            } else {
                print_calculation(&calc);
            }
        }
        Commands::Report { inputs, format, output } => {
            let calc = Calculation::run(&inputs.resolve()?, ProjectionConfig::current());
            let report = ValuationReport::build(&calc.snapshot, &ReportConfig::default());
            let rendered = render(&report, format)?;

            let mut out = open_output(output.as_deref())?;
            out.write_all(rendered.as_bytes())?;
            if let Some(path) = &output {
                info!("Report written to {}", path.display());
                println!("Report written to: {}", path.display());
            }
        }
        Commands::Project { inputs, projection, output } => {
            let calc = Calculation::run(&inputs.resolve()?, projection.config());
            let out = open_output(output.as_deref())?;
            write_projection_csv(&calc, out)?;
            if let Some(path) = &output {
                println!("Projection written to: {}", path.display());
            }
        }
        Commands::Send { inputs, to, latency_ms } => {
            let calc = Calculation::run(&inputs.resolve()?, ProjectionConfig::current());
            let report = ValuationReport::build(&calc.snapshot, &ReportConfig::default());
            let mailer = LogMailer::new(Duration::from_millis(latency_ms));

            match send_report(&mailer, &to, &report).await {
                Ok(()) => println!("Report Sent Successfully: sent to {}", to),
                Err(err) => {
                    eprintln!("Failed to Send Report: {}", err);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
