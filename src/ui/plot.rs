use eframe::egui::{Ui, Vec2b};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::color::series_color;
use crate::data::resolve::GenderMetric;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Rate chart (central panel)
// ---------------------------------------------------------------------------

/// Render the resolved rate series as a time-ordered line chart with point
/// markers. Periods are plotted at integer x positions in wide-table row
/// order; cells with no value are skipped.
pub fn rate_chart(ui: &mut Ui, state: &AppState) {
    let (table, column) = match (&state.table, &state.resolved_column) {
        (Some(table), Some(column)) => (table, column),
        _ => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No dataset loaded  (File → Open…)");
            });
            return;
        }
    };

    let Some(values) = table.column(column) else {
        ui.label(format!("Column '{column}' not found"));
        return;
    };

    ui.heading(format!(
        "{} Mortality Rate Over Time",
        state.selection.cause
    ));

    let color = series_color(column);
    let coords: Vec<[f64; 2]> = values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|y| [i as f64, y]))
        .collect();

    // Clones for the 'static formatter closures.
    let tick_periods = table.periods.clone();
    let hover_periods = table.periods.clone();
    let hover_values: Vec<Option<f64>> = values.to_vec();
    let cause = state.selection.cause.clone();
    let gender = gender_hover_label(state.selection.gender);
    let age = age_hover_label(state.selection.age.as_deref());

    Plot::new("rate_chart")
        .x_axis_label("Year and Quarter")
        .y_axis_label("Rate")
        .show_grid(Vec2b::new(false, false))
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            tick_periods.get(idx as usize).cloned().unwrap_or_default()
        })
        .label_formatter(move |_name, point| {
            let idx = point.x.round();
            if idx < 0.0 {
                return String::new();
            }
            let idx = idx as usize;
            let Some(period) = hover_periods.get(idx) else {
                return String::new();
            };
            let rate = hover_values
                .get(idx)
                .copied()
                .flatten()
                .unwrap_or(point.y);
            format!(
                "Year and Quarter: {period}\nRate: {rate:.2}\nCause of Death: {cause}\nGender: {gender}\nAge Range: {age}"
            )
        })
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(PlotPoints::from(coords.clone())).color(color).width(1.5));
            plot_ui.points(Points::new(PlotPoints::from(coords)).color(color).radius(3.0));
        });
}

// ---------------------------------------------------------------------------
// Hover labels
// ---------------------------------------------------------------------------

/// Gender line of the hover label: the metric's column prefix with the word
/// "Rate " stripped ("Sex Female", "Sex Male"; "Overall Rate" is unchanged
/// because the prefix ends with "Rate").
fn gender_hover_label(gender: GenderMetric) -> String {
    gender.column_prefix().replace("Rate ", "")
}

/// Age line of the hover label: "All Ages" when nothing is selected, else
/// the column name with "Rate Age " stripped and underscores expanded to
/// " to " ("Rate Age 25_34 Cancer" → "25 to 34 Cancer").
fn age_hover_label(age: Option<&str>) -> String {
    match age {
        None => "All Ages".to_string(),
        Some(column) => column.replace("Rate Age ", "").replace('_', " to "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_labels_strip_the_rate_word() {
        assert_eq!(gender_hover_label(GenderMetric::Overall), "Overall Rate");
        assert_eq!(gender_hover_label(GenderMetric::Female), "Sex Female");
        assert_eq!(gender_hover_label(GenderMetric::Male), "Sex Male");
    }

    #[test]
    fn no_age_selection_reads_all_ages() {
        assert_eq!(age_hover_label(None), "All Ages");
    }

    #[test]
    fn age_labels_expand_underscores() {
        assert_eq!(
            age_hover_label(Some("Rate Age 25_34 Heart Disease")),
            "25 to 34 Heart Disease"
        );
        assert_eq!(age_hover_label(Some("Rate Age 85+ Cancer")), "85+ Cancer");
    }
}
