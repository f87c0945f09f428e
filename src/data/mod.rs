/// Data layer: source schema, loading, reshaping, and selection resolution.
///
/// Pipeline:
/// ```text
///  NCHS_mortality.csv (URL or local file)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → MortalityTable (long format)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  pivot    │  long → WideTable, one column per (metric, cause)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ resolve   │  UI selection → wide-table column name
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod pivot;
pub mod resolve;
