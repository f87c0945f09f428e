use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader;
use crate::data::resolve::GenderMetric;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – the three selection dropdowns
// ---------------------------------------------------------------------------

/// Render the selection panel: cause of death, gender, age range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.table.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // Clone the option lists so we can mutate state inside the combo loops.
    let causes = state.causes.clone();
    let age_options = state.age_options.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Cause of death ----
            ui.strong("Select Cause of Death");
            let current_cause = state.selection.cause.clone();
            egui::ComboBox::from_id_salt("cause")
                .selected_text(&current_cause)
                .width(ui.available_width() * 0.9)
                .show_ui(ui, |ui: &mut Ui| {
                    for cause in &causes {
                        if ui
                            .selectable_label(current_cause == *cause, cause)
                            .clicked()
                        {
                            state.set_cause(cause.clone());
                        }
                    }
                });
            ui.separator();

            // ---- Gender ----
            ui.strong("Select Gender");
            let current_gender = state.selection.gender;
            egui::ComboBox::from_id_salt("gender")
                .selected_text(current_gender.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for gender in GenderMetric::ALL {
                        if ui
                            .selectable_label(current_gender == gender, gender.label())
                            .clicked()
                        {
                            state.set_gender(gender);
                        }
                    }
                });
            ui.separator();

            // ---- Age range ----
            ui.strong("Select Age Range");
            let current_age = state.selection.age.clone();
            let selected_text = current_age.as_deref().unwrap_or("No Selection").to_string();
            egui::ComboBox::from_id_salt("age_range")
                .selected_text(selected_text)
                .width(ui.available_width() * 0.9)
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(current_age.is_none(), "No Selection")
                        .clicked()
                    {
                        state.set_age(None);
                    }
                    for option in &age_options {
                        if ui
                            .selectable_label(current_age.as_deref() == Some(option), option)
                            .clicked()
                        {
                            state.set_age(Some(option.clone()));
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} quarters, {} rate series",
                table.len(),
                table.columns.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user load a different mortality CSV with the same schema.
/// Failures keep the current dataset and surface in the status line.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open mortality data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_path(&path) {
            Ok(raw) => {
                log::info!("Loaded {} rows from {}", raw.len(), path.display());
                state.set_dataset(raw);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
