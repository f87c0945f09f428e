use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Source schema column names
// ---------------------------------------------------------------------------

/// Time axis column: quarterly periods such as `"2020 Q1"`.
pub const PERIOD_COLUMN: &str = "Year and Quarter";
/// Grouping column: one value per cause of death.
pub const CAUSE_COLUMN: &str = "Cause of Death";
/// The three fixed rate metrics.
pub const OVERALL_RATE: &str = "Overall Rate";
pub const FEMALE_RATE: &str = "Rate Sex Female";
pub const MALE_RATE: &str = "Rate Sex Male";
/// Age-bucket rate columns are detected by prefix, e.g. `"Rate Age 25_34"`.
pub const AGE_RATE_PREFIX: &str = "Rate Age";

// ---------------------------------------------------------------------------
// MortalityRow – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single source row: one (period, cause) pair with its rate metrics.
#[derive(Debug, Clone)]
pub struct MortalityRow {
    pub period: String,
    pub cause: String,
    /// One entry per rate column, aligned with [`MortalityTable::metric_names`].
    /// `None` for blank cells in the source.
    pub rates: Vec<Option<f64>>,
}

// ---------------------------------------------------------------------------
// MortalityTable – the long-format dataset as loaded
// ---------------------------------------------------------------------------

/// The parsed long-format table. Uniqueness of (period, cause) is assumed,
/// not validated; the pivot keeps the first value it encounters.
#[derive(Debug, Clone)]
pub struct MortalityTable {
    /// Rate column names in source header order: the three fixed metrics,
    /// then every detected `Rate Age*` column.
    pub metric_names: Vec<String>,
    pub rows: Vec<MortalityRow>,
}

impl MortalityTable {
    /// Distinct causes of death in source appearance order (never sorted);
    /// the first one is the dashboard's default selection.
    pub fn causes(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut causes = Vec::new();
        for row in &self.rows {
            if seen.insert(row.cause.as_str()) {
                causes.push(row.cause.clone());
            }
        }
        causes
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// WideTable – the pivoted lookup table
// ---------------------------------------------------------------------------

/// The pivoted dataset: one row per period, one column per observed
/// `(metric, cause)` pair named `"<metric> <cause>"`. Read-only after
/// construction; every chart update is a column lookup against it.
#[derive(Debug, Clone)]
pub struct WideTable {
    /// Periods in source appearance order. The x axis of every chart.
    pub periods: Vec<String>,
    /// Column names in pivot order: metrics in schema order, causes sorted
    /// alphabetically within each metric.
    pub columns: Vec<String>,
    /// Column-major cells, aligned with `periods`. `None` where no source
    /// row supplied a value.
    cells: Vec<Vec<Option<f64>>>,
}

impl WideTable {
    pub(crate) fn new(
        periods: Vec<String>,
        columns: Vec<String>,
        cells: Vec<Vec<Option<f64>>>,
    ) -> Self {
        debug_assert_eq!(columns.len(), cells.len());
        WideTable {
            periods,
            columns,
            cells,
        }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// First column in pivot order; the resolver's positional fallback.
    pub fn first_column(&self) -> Option<&str> {
        self.columns.first().map(String::as_str)
    }

    /// Cell values for a column, aligned with `periods`.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(&self.cells[idx])
    }

    /// Columns belonging to the age-bucket metric family, in pivot order.
    /// These feed the age dropdown; each value is a full column name.
    pub fn age_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.starts_with(AGE_RATE_PREFIX))
            .cloned()
            .collect()
    }

    /// Number of periods (chart points per series).
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
