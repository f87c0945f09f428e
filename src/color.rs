use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Series colour
// ---------------------------------------------------------------------------

/// Colour for the plotted series, keyed off the resolved column name:
/// red when it mentions "Female", blue when it mentions "Male", grey
/// otherwise. The match is a case-sensitive substring test on the column
/// name, so a cause that happens to contain either word also tints the line.
pub fn series_color(column_name: &str) -> Color32 {
    if column_name.contains("Female") {
        Color32::RED
    } else if column_name.contains("Male") {
        Color32::BLUE
    } else {
        Color32::GRAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn male_series_is_blue() {
        assert_eq!(series_color("Rate Sex Male Heart Disease"), Color32::BLUE);
    }

    #[test]
    fn female_series_is_red() {
        assert_eq!(series_color("Rate Sex Female Heart Disease"), Color32::RED);
    }

    #[test]
    fn overall_series_is_grey() {
        assert_eq!(series_color("Overall Rate Heart Disease"), Color32::GRAY);
        assert_eq!(series_color("Rate Age 25_34 Cancer"), Color32::GRAY);
    }

    #[test]
    fn female_wins_when_both_substrings_appear() {
        assert_eq!(series_color("Overall Rate Male and Female Causes"), Color32::RED);
    }

    #[test]
    fn match_is_case_sensitive() {
        // lowercase "female" is not the "Female" marker
        assert_eq!(series_color("Overall Rate female smokers"), Color32::GRAY);
    }
}
