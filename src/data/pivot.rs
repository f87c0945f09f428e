use std::collections::{BTreeSet, HashMap};

use super::model::{MortalityTable, WideTable};

// ---------------------------------------------------------------------------
// Long → wide reshape
// ---------------------------------------------------------------------------

/// Pivot the long table into the wide lookup table.
///
/// * Grouping key: period. Row order is source appearance order.
/// * Column-expansion key: cause of death.
/// * One output column per `(metric, cause)` pair with at least one value,
///   named `"<metric> <cause>"`; pairs never observed produce no column.
/// * Conflict policy: if several source rows hit the same cell, the first
///   encountered value wins. No aggregation.
pub fn pivot(table: &MortalityTable) -> WideTable {
    let mut periods: Vec<String> = Vec::new();
    let mut period_index: HashMap<String, usize> = HashMap::new();
    let mut observed: BTreeSet<(usize, &str)> = BTreeSet::new();
    let mut causes: BTreeSet<&str> = BTreeSet::new();

    for row in &table.rows {
        if !period_index.contains_key(&row.period) {
            period_index.insert(row.period.clone(), periods.len());
            periods.push(row.period.clone());
        }
        causes.insert(row.cause.as_str());
        for (metric_idx, rate) in row.rates.iter().enumerate() {
            if rate.is_some() {
                observed.insert((metric_idx, row.cause.as_str()));
            }
        }
    }

    // Column order: metrics in schema order, causes alphabetical within each.
    let mut columns: Vec<String> = Vec::new();
    let mut column_index: HashMap<(usize, &str), usize> = HashMap::new();
    for (metric_idx, metric) in table.metric_names.iter().enumerate() {
        for &cause in &causes {
            if observed.contains(&(metric_idx, cause)) {
                column_index.insert((metric_idx, cause), columns.len());
                columns.push(column_name(metric, cause));
            }
        }
    }

    let mut cells: Vec<Vec<Option<f64>>> = vec![vec![None; periods.len()]; columns.len()];
    for row in &table.rows {
        let period_idx = period_index[&row.period];
        for (metric_idx, rate) in row.rates.iter().enumerate() {
            let Some(value) = rate else { continue };
            let Some(&col) = column_index.get(&(metric_idx, row.cause.as_str())) else {
                continue;
            };
            let cell = &mut cells[col][period_idx];
            if cell.is_none() {
                *cell = Some(*value);
            }
        }
    }

    WideTable::new(periods, columns, cells)
}

/// Join metric and cause with a single space, trimmed.
fn column_name(metric: &str, cause: &str) -> String {
    format!("{metric} {cause}").trim().to_string()
}
