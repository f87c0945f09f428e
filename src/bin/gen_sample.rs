//! Writes a small schema-conforming mortality CSV for offline use:
//!
//! ```text
//! cargo run --bin gen_sample
//! RUST_LOG=info cargo run -- (then File → Open… sample_mortality.csv)
//! ```

use anyhow::{Context, Result};

const QUARTERS_PER_YEAR: u32 = 4;
const YEARS: std::ops::RangeInclusive<u32> = 2018..=2021;

const CAUSES: [(&str, f64); 3] = [
    ("Heart Disease", 160.0),
    ("Cancer", 145.0),
    ("Influenza and Pneumonia", 12.0),
];

const AGE_BUCKETS: [(&str, f64); 4] = [
    ("Rate Age 1_4", 0.02),
    ("Rate Age 25_34", 0.15),
    ("Rate Age 65_74", 2.5),
    ("Rate Age 85+", 9.0),
];

/// Synthetic quarterly rate: a slow downward trend plus a winter bump,
/// deterministic so repeated runs produce identical files.
fn rate(base: f64, year: u32, quarter: u32) -> f64 {
    let t = (year - 2018) as f64 * QUARTERS_PER_YEAR as f64 + (quarter - 1) as f64;
    let trend = base * (1.0 - 0.004 * t);
    let seasonal = base * 0.06 * (std::f64::consts::TAU * (quarter - 1) as f64 / 4.0).cos();
    ((trend + seasonal) * 10.0).round() / 10.0
}

fn main() -> Result<()> {
    let output_path = "sample_mortality.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut header = vec![
        "Year and Quarter".to_string(),
        "Cause of Death".to_string(),
        "Overall Rate".to_string(),
        "Rate Sex Female".to_string(),
        "Rate Sex Male".to_string(),
    ];
    header.extend(AGE_BUCKETS.iter().map(|(name, _)| name.to_string()));
    writer.write_record(&header).context("writing header")?;

    let mut rows = 0usize;
    for year in YEARS {
        for quarter in 1..=QUARTERS_PER_YEAR {
            for (cause, base) in CAUSES {
                let overall = rate(base, year, quarter);
                let mut record = vec![
                    format!("{year} Q{quarter}"),
                    cause.to_string(),
                    format!("{overall:.1}"),
                    format!("{:.1}", overall * 0.88),
                    format!("{:.1}", overall * 1.12),
                ];
                for (_, share) in AGE_BUCKETS {
                    record.push(format!("{:.2}", overall * share));
                }
                writer.write_record(&record).context("writing row")?;
                rows += 1;
            }
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {rows} rows to {output_path}");
    Ok(())
}
