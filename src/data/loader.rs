use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{
    MortalityRow, MortalityTable, AGE_RATE_PREFIX, CAUSE_COLUMN, FEMALE_RATE, MALE_RATE,
    OVERALL_RATE, PERIOD_COLUMN,
};

/// Where the dashboard fetches its dataset at startup.
pub const DATA_URL: &str =
    "https://github.com/rmejia41/open_datasets/raw/main/NCHS_mortality.csv";

/// Schema violations in the source CSV.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("CSV missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("CSV row {row}, column '{column}': '{value}' is not a number")]
    BadNumber {
        row: usize,
        column: String,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Fetch the dataset over HTTP and parse it.
pub fn fetch_url(url: &str) -> Result<MortalityTable> {
    log::info!("Fetching mortality data from {url}");
    let body = reqwest::blocking::get(url)
        .with_context(|| format!("requesting {url}"))?
        .error_for_status()
        .with_context(|| format!("fetching {url}"))?
        .text()
        .context("reading response body")?;
    parse_csv(body.as_bytes())
}

/// Load the dataset from a local CSV file.
pub fn load_path(path: &Path) -> Result<MortalityTable> {
    log::info!("Loading mortality data from {}", path.display());
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    parse_csv(file)
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// Expected layout: header row with `Year and Quarter`, `Cause of Death`,
/// `Overall Rate`, `Rate Sex Female`, `Rate Sex Male`, and zero or more
/// `Rate Age <bucket>` columns. Blank rate cells become `None`.
pub fn parse_csv<R: Read>(input: R) -> Result<MortalityTable> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let period_idx = require_column(&headers, PERIOD_COLUMN)?;
    let cause_idx = require_column(&headers, CAUSE_COLUMN)?;

    // Rate columns in schema order: the three fixed metrics, then every
    // age-bucket column in header order. A source with no age columns is
    // valid; that metric family is simply absent.
    let mut metric_indices: Vec<(String, usize)> = vec![
        (OVERALL_RATE.to_string(), require_column(&headers, OVERALL_RATE)?),
        (FEMALE_RATE.to_string(), require_column(&headers, FEMALE_RATE)?),
        (MALE_RATE.to_string(), require_column(&headers, MALE_RATE)?),
    ];
    for (idx, header) in headers.iter().enumerate() {
        if header.starts_with(AGE_RATE_PREFIX) {
            metric_indices.push((header.clone(), idx));
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let period = record.get(period_idx).unwrap_or("").trim().to_string();
        let cause = record.get(cause_idx).unwrap_or("").trim().to_string();
        if period.is_empty() || cause.is_empty() {
            log::warn!("Skipping CSV row {row_no}: blank period or cause");
            continue;
        }

        let rates = metric_indices
            .iter()
            .map(|(name, idx)| parse_rate(record.get(*idx).unwrap_or(""), row_no, name))
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(MortalityRow {
            period,
            cause,
            rates,
        });
    }

    log::info!(
        "Parsed {} rows, {} rate columns",
        rows.len(),
        metric_indices.len()
    );

    Ok(MortalityTable {
        metric_names: metric_indices.into_iter().map(|(name, _)| name).collect(),
        rows,
    })
}

fn require_column(headers: &[String], name: &'static str) -> Result<usize, SchemaError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(SchemaError::MissingColumn(name))
}

fn parse_rate(cell: &str, row: usize, column: &str) -> Result<Option<f64>, SchemaError> {
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    cell.parse::<f64>()
        .map(Some)
        .map_err(|_| SchemaError::BadNumber {
            row,
            column: column.to_string(),
            value: cell.to_string(),
        })
}
