use crate::data::model::{MortalityTable, WideTable};
use crate::data::pivot::pivot;
use crate::data::resolve::{resolve, Control, GenderMetric, Selection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The wide table is built once per dataset load and read-only afterwards;
/// every dropdown change is one resolve cycle against it.
pub struct AppState {
    /// Pivoted dataset (None until a load succeeds).
    pub table: Option<WideTable>,

    /// Cause dropdown options, in source appearance order.
    pub causes: Vec<String>,

    /// Age dropdown options: every `Rate Age*` wide column, in pivot order.
    pub age_options: Vec<String>,

    /// Current dropdown selections plus which control fired last.
    pub selection: Selection,

    /// The wide column currently plotted, resolved from the selection.
    pub resolved_column: Option<String>,

    /// Error message shown in the top bar.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            causes: Vec::new(),
            age_options: Vec::new(),
            selection: Selection::default(),
            resolved_column: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: pivot it, reset the selection to its
    /// defaults (first cause, Overall, no age), and resolve.
    pub fn set_dataset(&mut self, raw: MortalityTable) {
        let wide = pivot(&raw);
        log::info!(
            "Pivoted {} rows into {} periods x {} columns",
            raw.len(),
            wide.len(),
            wide.columns.len()
        );

        self.causes = raw.causes();
        self.age_options = wide.age_columns();
        self.selection = Selection {
            cause: self.causes.first().cloned().unwrap_or_default(),
            gender: GenderMetric::Overall,
            age: None,
            last_changed: Control::None,
        };
        self.table = Some(wide);
        self.status_message = None;
        self.reresolve();
    }

    /// Cause dropdown changed.
    pub fn set_cause(&mut self, cause: String) {
        self.selection.cause = cause;
        self.selection.last_changed = Control::Cause;
        self.reresolve();
    }

    /// Gender dropdown changed.
    pub fn set_gender(&mut self, gender: GenderMetric) {
        self.selection.gender = gender;
        self.selection.last_changed = Control::Gender;
        self.reresolve();
    }

    /// Age dropdown changed; `None` is the "No Selection" option.
    pub fn set_age(&mut self, age: Option<String>) {
        self.selection.age = age;
        self.selection.last_changed = Control::Age;
        self.reresolve();
    }

    fn reresolve(&mut self) {
        self.resolved_column = self
            .table
            .as_ref()
            .map(|table| resolve(&self.selection, table));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::series_color;
    use crate::data::loader::parse_csv;
    use eframe::egui::Color32;

    const SAMPLE: &str = "\
Year and Quarter,Cause of Death,Overall Rate,Rate Sex Female,Rate Sex Male
2020 Q1,Heart Disease,10.5,9.1,12.0
";

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(parse_csv(SAMPLE.as_bytes()).unwrap());
        state
    }

    #[test]
    fn defaults_after_load() {
        let state = loaded();
        assert_eq!(state.selection.cause, "Heart Disease");
        assert_eq!(state.selection.gender, GenderMetric::Overall);
        assert_eq!(state.selection.age, None);
        assert_eq!(state.selection.last_changed, Control::None);
        assert_eq!(
            state.resolved_column.as_deref(),
            Some("Overall Rate Heart Disease")
        );
    }

    #[test]
    fn selecting_a_cause_plots_its_overall_rate() {
        let mut state = loaded();
        state.set_cause("Heart Disease".to_string());

        let column = state.resolved_column.clone().unwrap();
        assert_eq!(column, "Overall Rate Heart Disease");

        let table = state.table.as_ref().unwrap();
        let values = table.column(&column).unwrap();
        assert_eq!(table.periods, vec!["2020 Q1"]);
        assert_eq!(values, &[Some(10.5)]);
        assert_eq!(series_color(&column), Color32::GRAY);
    }

    #[test]
    fn switching_gender_to_male_plots_the_male_rate() {
        let mut state = loaded();
        state.set_gender(GenderMetric::Male);

        let column = state.resolved_column.clone().unwrap();
        assert_eq!(column, "Rate Sex Male Heart Disease");

        let table = state.table.as_ref().unwrap();
        assert_eq!(table.column(&column).unwrap(), &[Some(12.0)]);
        assert_eq!(series_color(&column), Color32::BLUE);
    }

    #[test]
    fn nonexistent_age_bucket_falls_back_without_error() {
        let mut state = loaded();
        // No "Rate Age*" columns exist in this dataset.
        state.set_age(Some("Rate Age 25_34 Heart Disease".to_string()));

        let column = state.resolved_column.clone().unwrap();
        let table = state.table.as_ref().unwrap();
        assert_eq!(column, table.first_column().unwrap());
        assert!(table.column(&column).is_some());
    }
}
