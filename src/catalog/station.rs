use std::path::Path;

use crate::error::Result;
use crate::io::table::Table;

/// Column layout of the station table
pub const STATION_COLUMNS: [&str; 6] = ["name", "income_annual", "income", "lat", "lng", "borough"];

/// A stop on the route, in route order
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    /// Spending money for instruments, from the `income` column
    pub budget: f64,
    pub lat: f64,
    pub lng: f64,
    pub borough: String,
}

/// Load stations from a tab-delimited file, keeping file order
pub fn load_stations(path: &Path) -> Result<Vec<Station>> {
    let table = Table::read(path, '\t')?;
    parse_stations(&table)
}

pub fn parse_stations(table: &Table) -> Result<Vec<Station>> {
    table
        .records()
        .map(|record| {
            record.expect_columns(&STATION_COLUMNS)?;
            let income = strip_currency(record.text(2));
            let budget = income.trim().parse::<f64>().map_err(|_| {
                record.error(format!(
                    "column 3 (income): cannot parse '{}' as currency",
                    record.text(2).trim()
                ))
            })?;
            Ok(Station {
                name: record.text(0).trim().to_string(),
                budget,
                lat: record.parse(3, "lat")?,
                lng: record.parse(4, "lng")?,
                borough: record.text(5).trim().to_lowercase(),
            })
        })
        .collect()
}

/// "$41,250" -> "41250"
pub fn strip_currency(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '$' | ',')).collect()
}
