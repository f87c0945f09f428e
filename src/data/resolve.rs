use super::model::{WideTable, FEMALE_RATE, MALE_RATE, OVERALL_RATE};

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// The gender dropdown's fixed options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderMetric {
    Overall,
    Female,
    Male,
}

impl GenderMetric {
    pub const ALL: [GenderMetric; 3] =
        [GenderMetric::Overall, GenderMetric::Female, GenderMetric::Male];

    /// Dropdown label.
    pub fn label(self) -> &'static str {
        match self {
            GenderMetric::Overall => "Overall",
            GenderMetric::Female => "Female",
            GenderMetric::Male => "Male",
        }
    }

    /// The metric's wide-column prefix, composed with a cause on lookup.
    pub fn column_prefix(self) -> &'static str {
        match self {
            GenderMetric::Overall => OVERALL_RATE,
            GenderMetric::Female => FEMALE_RATE,
            GenderMetric::Male => MALE_RATE,
        }
    }
}

/// Which UI control fired most recently. Supplied by the event source,
/// keeping the resolver pure and UI-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Cause,
    Gender,
    Age,
    /// No control has fired yet (initial render).
    None,
}

/// Transient UI selection state. Never persisted.
#[derive(Debug, Clone)]
pub struct Selection {
    pub cause: String,
    pub gender: GenderMetric,
    /// Full wide-column name of the selected age series, if any. Unlike the
    /// gender metric, age options already encode metric and cause.
    pub age: Option<String>,
    pub last_changed: Control,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            cause: String::new(),
            gender: GenderMetric::Overall,
            age: None,
            last_changed: Control::None,
        }
    }
}

// ---------------------------------------------------------------------------
// Selection → column resolution
// ---------------------------------------------------------------------------

/// Map the current selection to a wide-table column name.
///
/// The gender and cause controls compose `"<metric> <cause>"`; the age
/// control carries a full column name verbatim; anything else falls back to
/// the overall rate for the selected cause. A resolved name absent from the
/// table is replaced by the table's first column — positional, not a
/// semantic default (see DESIGN.md).
pub fn resolve(selection: &Selection, table: &WideTable) -> String {
    let name = match selection.last_changed {
        Control::Gender | Control::Cause => {
            format!("{} {}", selection.gender.column_prefix(), selection.cause)
        }
        Control::Age => match &selection.age {
            Some(age) => age.clone(),
            None => format!("{OVERALL_RATE} {}", selection.cause),
        },
        Control::None => format!("{OVERALL_RATE} {}", selection.cause),
    };

    if table.contains(&name) {
        name
    } else {
        table.first_column().unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{MortalityRow, MortalityTable};
    use crate::data::pivot::pivot;

    fn wide() -> WideTable {
        let table = MortalityTable {
            metric_names: vec![
                "Overall Rate".to_string(),
                "Rate Sex Female".to_string(),
                "Rate Sex Male".to_string(),
                "Rate Age 25_34".to_string(),
            ],
            rows: vec![MortalityRow {
                period: "2020 Q1".to_string(),
                cause: "Heart Disease".to_string(),
                rates: vec![Some(10.5), Some(9.1), Some(12.0), Some(1.2)],
            }],
        };
        pivot(&table)
    }

    fn selection(
        cause: &str,
        gender: GenderMetric,
        age: Option<&str>,
        last_changed: Control,
    ) -> Selection {
        Selection {
            cause: cause.to_string(),
            gender,
            age: age.map(str::to_string),
            last_changed,
        }
    }

    #[test]
    fn cause_or_gender_compose_the_column() {
        let table = wide();
        let sel = selection(
            "Heart Disease",
            GenderMetric::Male,
            None,
            Control::Gender,
        );
        assert_eq!(resolve(&sel, &table), "Rate Sex Male Heart Disease");

        let sel = selection(
            "Heart Disease",
            GenderMetric::Female,
            None,
            Control::Cause,
        );
        assert_eq!(resolve(&sel, &table), "Rate Sex Female Heart Disease");
    }

    #[test]
    fn overall_gender_ignores_prior_age_selection() {
        let table = wide();
        let sel = selection(
            "Heart Disease",
            GenderMetric::Overall,
            Some("Rate Age 25_34 Heart Disease"),
            Control::Gender,
        );
        assert_eq!(resolve(&sel, &table), "Overall Rate Heart Disease");
    }

    #[test]
    fn age_selection_is_used_verbatim() {
        let table = wide();
        let sel = selection(
            "Heart Disease",
            GenderMetric::Overall,
            Some("Rate Age 25_34 Heart Disease"),
            Control::Age,
        );
        assert_eq!(resolve(&sel, &table), "Rate Age 25_34 Heart Disease");
    }

    #[test]
    fn age_reset_falls_back_to_overall() {
        let table = wide();
        let sel = selection("Heart Disease", GenderMetric::Male, None, Control::Age);
        assert_eq!(resolve(&sel, &table), "Overall Rate Heart Disease");
    }

    #[test]
    fn initial_render_uses_overall() {
        let table = wide();
        let sel = selection("Heart Disease", GenderMetric::Male, None, Control::None);
        assert_eq!(resolve(&sel, &table), "Overall Rate Heart Disease");
    }

    #[test]
    fn missing_column_falls_back_to_first() {
        let table = wide();
        let sel = selection(
            "Heart Disease",
            GenderMetric::Overall,
            Some("Rate Age 85_94 Heart Disease"),
            Control::Age,
        );
        assert_eq!(
            resolve(&sel, &table),
            table.first_column().unwrap().to_string()
        );
    }

    #[test]
    fn unknown_cause_falls_back_to_first() {
        let table = wide();
        let sel = selection("Gout", GenderMetric::Male, None, Control::Cause);
        assert_eq!(resolve(&sel, &table), "Overall Rate Heart Disease");
    }
}
