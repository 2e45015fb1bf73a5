//! Run calculations for every scenario in a CSV file
//!
//! Outputs one summary row per scenario for side-by-side comparison

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use arr_calculator::report::format::{format_currency, format_ratio};
use arr_calculator::scenario::{load_scenarios, write_summaries};
use arr_calculator::{ProjectionConfig, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "run_scenarios")]
#[command(about = "Batch SaaS metric calculations from a scenarios CSV", long_about = None)]
struct Args {
    /// Scenarios CSV (name,monthlyRevenue,customerCount,churnRate,growthRate,cac,valuationMultiple)
    #[arg(default_value = "data/scenarios.csv")]
    scenarios: PathBuf,

    /// Summary CSV to write
    #[arg(short, long, default_value = "scenario_summary.csv")]
    output: PathBuf,

    /// Projection horizon in years
    #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(0..=1000))]
    years: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.scenarios.display());

    let scenarios = load_scenarios(&args.scenarios)
        .with_context(|| format!("Failed to load scenarios from {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new(ProjectionConfig::current().with_years(args.years));

    let calc_start = Instant::now();
    let results = runner.run_batch(&scenarios);
    println!("Calculated {} scenarios in {:?}\n", results.len(), calc_start.elapsed());

    println!("{:<24} {:>18} {:>10} {:>20} {:>18}", "Scenario", "ARR", "LTV:CAC", "Valuation", "Final ARR");
    println!("{}", "-".repeat(94));
    for result in &results {
        let summary = result.summary();
        println!(
            "{:<24} {:>18} {:>10} {:>20} {:>18}",
            summary.name,
            format_currency(summary.annual_revenue),
            format_ratio(summary.ltv_cac_ratio),
            format_currency(summary.estimated_valuation),
            format_currency(summary.final_arr),
        );
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;
    write_summaries(&results, file)?;

    println!("\nSummary written to: {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
