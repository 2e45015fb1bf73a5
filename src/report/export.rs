//! CSV export of projection series for charting

use std::io;

use serde::Serialize;

use crate::calculator::Calculation;
use crate::error::Result;

/// One year of both projections side by side
#[derive(Debug, Clone, Serialize)]
struct ProjectionRow {
    year: i64,
    arr: f64,
    customers: i64,
    new_customers: i64,
    churned_customers: i64,
}

/// Write `Year,ARR,Customers,NewCustomers,ChurnedCustomers` rows
///
/// Both series come from the same config, so they pair up by index.
pub fn write_projection_csv<W: io::Write>(calculation: &Calculation, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["Year", "ARR", "Customers", "NewCustomers", "ChurnedCustomers"])?;

    for (revenue, cohort) in calculation
        .revenue_projection
        .iter()
        .zip(&calculation.customer_projection)
    {
        wtr.serialize(ProjectionRow {
            year: revenue.year,
            arr: revenue.arr,
            customers: cohort.customers,
            new_customers: cohort.new_customers,
            churned_customers: cohort.churned_customers,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricInputs;
    use crate::projection::ProjectionConfig;

    #[test]
    fn test_projection_csv() {
        let calc = Calculation::run(&MetricInputs::default(), ProjectionConfig::new(5, 2026));
        let mut buf = Vec::new();
        write_projection_csv(&calc, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Year,ARR,Customers,NewCustomers,ChurnedCustomers");
        assert_eq!(lines[1], "2026,2400000.0,110,15,5");
        assert!(lines[6].starts_with("2031,"));
    }
}
