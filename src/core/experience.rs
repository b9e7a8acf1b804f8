//! Experience arithmetic: years/months to decimal years and back, display
//! formatting, category bands, and closeness scoring.

use crate::domain::model::{ExperienceCategory, ExperienceDuration, ExperiencePreset};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub fn years_months_to_decimal(years: i32, months: i32) -> f64 {
    years as f64 + months as f64 / 12.0
}

/// Splits decimal years into whole years and rounded months.
///
/// Months are clamped to 11: a fraction that rounds up to a twelfth month
/// stays in the current year instead of carrying into the next.
pub fn decimal_to_years_months(decimal_years: f64) -> ExperienceDuration {
    let years = decimal_years.floor();
    let months = ((decimal_years - years) * 12.0).round();
    ExperienceDuration {
        years: years as i32,
        months: (months as i32).min(11),
    }
}

pub fn format_experience(years: i32, months: i32) -> String {
    if years == 0 && months == 0 {
        return "0 years".to_string();
    }
    if years > 0 && months == 0 {
        return plural(years, "year");
    }
    if years == 0 && months > 0 {
        return plural(months, "month");
    }
    format!("{} {}", plural(years, "year"), plural(months, "month"))
}

fn plural(value: i32, unit: &str) -> String {
    if value != 1 {
        format!("{} {}s", value, unit)
    } else {
        format!("{} {}", value, unit)
    }
}

impl ExperienceDuration {
    pub fn to_decimal(&self) -> f64 {
        years_months_to_decimal(self.years, self.months)
    }

    pub fn from_decimal(decimal_years: f64) -> Self {
        decimal_to_years_months(decimal_years)
    }

    pub fn category(&self) -> ExperienceCategory {
        ExperienceCategory::classify(self.to_decimal())
    }
}

impl fmt::Display for ExperienceDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_experience(self.years, self.months))
    }
}

impl ExperienceCategory {
    /// Lower bounds are inclusive. Negative input lands in `Fresher`.
    pub fn classify(decimal_years: f64) -> Self {
        if decimal_years < 1.0 {
            ExperienceCategory::Fresher
        } else if decimal_years < 2.0 {
            ExperienceCategory::EntryLevel
        } else if decimal_years < 4.0 {
            ExperienceCategory::Junior
        } else if decimal_years < 6.0 {
            ExperienceCategory::MidLevel
        } else if decimal_years < 10.0 {
            ExperienceCategory::Senior
        } else if decimal_years < 15.0 {
            ExperienceCategory::Lead
        } else {
            ExperienceCategory::Expert
        }
    }
}

pub fn is_same_experience_category(a: f64, b: f64) -> bool {
    ExperienceCategory::classify(a) == ExperienceCategory::classify(b)
}

/// Closeness of two experience values in `[0, 1]`.
///
/// The relative difference is scaled by a band weight that drops as the
/// absolute gap grows:
/// - within 6 months: 1.0
/// - within 1 year: 0.9
/// - within 2 years: 0.7
/// - within 3 years: 0.5
/// - beyond: 0.3
pub fn experience_similarity(a: f64, b: f64) -> f64 {
    let difference = (a - b).abs();
    // Floor of 1 keeps two zero experiences from dividing by zero.
    let denominator = a.max(b).max(1.0);
    let similarity = (1.0 - difference / denominator).max(0.0);

    let weight = if difference <= 0.5 {
        1.0
    } else if difference <= 1.0 {
        0.9
    } else if difference <= 2.0 {
        0.7
    } else if difference <= 3.0 {
        0.5
    } else {
        0.3
    };

    similarity * weight
}

pub fn experience_presets() -> Vec<ExperiencePreset> {
    vec![
        ExperiencePreset {
            name: "Fresher (0-1 yr)",
            min: ExperienceDuration::years(0),
            max: ExperienceDuration::years(1),
            category: ExperienceCategory::Fresher,
        },
        ExperiencePreset {
            name: "Entry Level (1-2 yrs)",
            min: ExperienceDuration::years(1),
            max: ExperienceDuration::years(2),
            category: ExperienceCategory::EntryLevel,
        },
        ExperiencePreset {
            name: "Junior (2-4 yrs)",
            min: ExperienceDuration::years(2),
            max: ExperienceDuration::years(4),
            category: ExperienceCategory::Junior,
        },
        ExperiencePreset {
            name: "Mid-Level (4-6 yrs)",
            min: ExperienceDuration::years(4),
            max: ExperienceDuration::years(6),
            category: ExperienceCategory::MidLevel,
        },
        ExperiencePreset {
            name: "Senior (6-10 yrs)",
            min: ExperienceDuration::years(6),
            max: ExperienceDuration::years(10),
            category: ExperienceCategory::Senior,
        },
        ExperiencePreset {
            name: "Lead (10+ yrs)",
            min: ExperienceDuration::years(10),
            max: ExperienceDuration::years(30),
            category: ExperienceCategory::Lead,
        },
    ]
}

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+\.\d+").unwrap());

/// Reads free-text candidate experience as decimal years.
///
/// Understands `"2.5 years"`, `"2 years 6 months"`, `"30 months"` and bare
/// numbers (taken as years). Blank or number-free text is `0.0`.
pub fn parse_experience_text(text: &str) -> f64 {
    let cleaned = text.trim().to_lowercase();
    if cleaned.is_empty() {
        return 0.0;
    }

    if let Some(m) = DECIMAL.find(&cleaned) {
        if let Ok(value) = m.as_str().parse::<f64>() {
            return value;
        }
    }

    let numbers: Vec<f64> = NUMBER
        .find_iter(&cleaned)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();
    let Some(&first) = numbers.first() else {
        return 0.0;
    };

    let has_years = cleaned.contains("year") || cleaned.contains("yr");
    let has_months = cleaned.contains("month");

    if has_years && has_months {
        let months = numbers.get(1).copied().unwrap_or(0.0);
        first + months / 12.0
    } else if has_months {
        first / 12.0
    } else {
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_months_to_decimal() {
        assert_eq!(years_months_to_decimal(2, 6), 2.5);
        assert_eq!(years_months_to_decimal(0, 0), 0.0);
        assert!((years_months_to_decimal(1, 1) - 1.083_333).abs() < 1e-5);
    }

    #[test]
    fn test_out_of_range_months_are_combined_not_rejected() {
        assert_eq!(years_months_to_decimal(1, 18), 2.5);
        assert_eq!(years_months_to_decimal(2, -6), 1.5);
    }

    #[test]
    fn test_decimal_round_trip_for_every_month() {
        for years in 0..=30 {
            for months in 0..=11 {
                let back = decimal_to_years_months(years_months_to_decimal(years, months));
                assert_eq!(back, ExperienceDuration::new(years, months));
            }
        }
    }

    #[test]
    fn test_eleven_months_does_not_roll_into_next_year() {
        let back = decimal_to_years_months(years_months_to_decimal(3, 11));
        assert_eq!(back, ExperienceDuration::new(3, 11));
    }

    #[test]
    fn test_twelfth_month_is_clamped() {
        // 11.88 months rounds to 12, which clamps to 11 in the same year.
        assert_eq!(decimal_to_years_months(4.99), ExperienceDuration::new(4, 11));
    }

    #[test]
    fn test_format_experience_cases() {
        assert_eq!(format_experience(0, 0), "0 years");
        assert_eq!(format_experience(1, 0), "1 year");
        assert_eq!(format_experience(2, 0), "2 years");
        assert_eq!(format_experience(0, 1), "1 month");
        assert_eq!(format_experience(0, 7), "7 months");
        assert_eq!(format_experience(1, 6), "1 year 6 months");
        assert_eq!(format_experience(3, 1), "3 years 1 month");
    }

    #[test]
    fn test_duration_display_matches_formatter() {
        assert_eq!(ExperienceDuration::new(2, 3).to_string(), "2 years 3 months");
    }

    #[test]
    fn test_classify_bands() {
        assert_eq!(ExperienceCategory::classify(0.0), ExperienceCategory::Fresher);
        assert_eq!(ExperienceCategory::classify(0.5), ExperienceCategory::Fresher);
        assert_eq!(ExperienceCategory::classify(1.0), ExperienceCategory::EntryLevel);
        assert_eq!(ExperienceCategory::classify(2.0), ExperienceCategory::Junior);
        assert_eq!(ExperienceCategory::classify(5.99), ExperienceCategory::MidLevel);
        assert_eq!(ExperienceCategory::classify(6.0), ExperienceCategory::Senior);
        assert_eq!(ExperienceCategory::classify(14.9), ExperienceCategory::Lead);
        assert_eq!(ExperienceCategory::classify(15.0), ExperienceCategory::Expert);
        assert_eq!(ExperienceCategory::classify(20.0), ExperienceCategory::Expert);
    }

    #[test]
    fn test_category_labels_and_order() {
        assert_eq!(ExperienceCategory::EntryLevel.to_string(), "Entry Level");
        assert_eq!(ExperienceCategory::MidLevel.to_string(), "Mid-Level");
        assert!(ExperienceCategory::Junior < ExperienceCategory::Senior);
        assert_eq!(
            serde_json::to_string(&ExperienceCategory::EntryLevel).unwrap(),
            "\"Entry Level\""
        );
    }

    #[test]
    fn test_same_category() {
        assert!(is_same_experience_category(2.0, 3.9));
        assert!(!is_same_experience_category(3.9, 4.0));
    }

    #[test]
    fn test_similarity_identity() {
        for a in [0.0, 0.5, 1.0, 3.25, 12.0, 40.0] {
            assert_eq!(experience_similarity(a, a), 1.0);
        }
    }

    #[test]
    fn test_similarity_is_symmetric_and_bounded() {
        let samples = [0.0, 0.3, 1.0, 2.5, 4.0, 7.75, 15.0, 30.0];
        for &a in &samples {
            for &b in &samples {
                let s = experience_similarity(a, b);
                assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
                assert_eq!(s, experience_similarity(b, a));
                if a != b {
                    assert!(s < 1.0);
                }
            }
        }
    }

    #[test]
    fn test_similarity_decays_with_distance() {
        // From a zero reference the relative base is already 0 at distance 1.
        assert_eq!(experience_similarity(0.0, 1.0), 0.0);
        assert!(experience_similarity(0.0, 5.0) <= experience_similarity(0.0, 1.0));

        assert!(experience_similarity(5.0, 9.0) < experience_similarity(5.0, 6.0));
        assert!(experience_similarity(5.0, 6.0) < experience_similarity(5.0, 5.4));
        assert!(experience_similarity(10.0, 4.0) < experience_similarity(10.0, 8.0));
    }

    #[test]
    fn test_similarity_weight_bands() {
        // diff 1 over denom 5: base 0.8, weight 0.9
        assert!((experience_similarity(4.0, 5.0) - 0.72).abs() < 1e-9);
        // diff 2 over denom 10: base 0.8, weight 0.7
        assert!((experience_similarity(8.0, 10.0) - 0.56).abs() < 1e-9);
        // diff 4 over denom 10: base 0.6, weight 0.3
        assert!((experience_similarity(6.0, 10.0) - 0.18).abs() < 1e-9);
    }

    #[test]
    fn test_presets_match_their_category() {
        let presets = experience_presets();
        assert_eq!(presets.len(), 6);
        for preset in &presets {
            assert_eq!(preset.min.category(), preset.category, "{}", preset.name);
            assert!(preset.min.to_decimal() < preset.max.to_decimal());
        }
    }

    #[test]
    fn test_parse_experience_text() {
        assert_eq!(parse_experience_text("2.5 years"), 2.5);
        assert_eq!(parse_experience_text("2 years 6 months"), 2.5);
        assert_eq!(parse_experience_text("30 Months"), 2.5);
        assert_eq!(parse_experience_text("4"), 4.0);
        assert_eq!(parse_experience_text("5 yrs"), 5.0);
        assert_eq!(parse_experience_text(""), 0.0);
        assert_eq!(parse_experience_text("fresher"), 0.0);
    }
}
