//! Translation between an experience range and the search API's
//! experience filter fields.

use crate::domain::model::{
    ExperienceDuration, ExperienceFilterInput, ExperienceFilterPayload, ExperienceRange,
};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

pub const DEFAULT_MIN_EXPERIENCE: f64 = 0.0;
pub const DEFAULT_MAX_EXPERIENCE: f64 = 30.0;

/// Years subtracted from the minimum when similar experience is included.
pub const SIMILAR_EXPANSION_BELOW: f64 = 1.0;
/// Years added to the maximum when similar experience is included.
pub const SIMILAR_EXPANSION_ABOVE: f64 = 2.0;

pub fn build_experience_filters(
    range: &ExperienceRange,
    include_similar: bool,
) -> ExperienceFilterPayload {
    let min_decimal = range.min_experience.to_decimal();
    let max_decimal = range.max_experience.to_decimal();

    let mut payload = ExperienceFilterPayload {
        min_experience: to_fixed(min_decimal),
        max_experience: to_fixed(max_decimal),
        min_experience_expanded: None,
        max_experience_expanded: None,
        include_similar_experience: None,
    };

    if include_similar {
        // Widen more above than below: slightly senior candidates are preferred.
        let expanded_min = (min_decimal - SIMILAR_EXPANSION_BELOW).max(0.0);
        let expanded_max = max_decimal + SIMILAR_EXPANSION_ABOVE;
        payload.min_experience_expanded = Some(to_fixed(expanded_min));
        payload.max_experience_expanded = Some(to_fixed(expanded_max));
        payload.include_similar_experience = Some(true);
    }

    payload
}

fn to_fixed(value: f64) -> String {
    format!("{:.2}", value)
}

/// How one bound of a parsed filter was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundSource {
    Parsed,
    /// Field absent or empty.
    Missing,
    /// Field present but not a usable number; the default replaced it.
    Defaulted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedExperienceFilter {
    pub range: ExperienceRange,
    pub min_source: BoundSource,
    pub max_source: BoundSource,
}

impl ParsedExperienceFilter {
    pub fn used_defaults(&self) -> bool {
        self.min_source != BoundSource::Parsed || self.max_source != BoundSource::Parsed
    }
}

/// Reads experience bounds back into a range. Never fails: missing or
/// unusable values become 0 and 30 years.
pub fn parse_experience_filter(filters: &ExperienceFilterInput) -> ExperienceRange {
    parse_experience_filter_report(filters).range
}

pub fn parse_experience_filter_report(filters: &ExperienceFilterInput) -> ParsedExperienceFilter {
    let (min, min_source) = read_bound(filters.min_experience.as_deref(), DEFAULT_MIN_EXPERIENCE);
    let (max, max_source) = read_bound(filters.max_experience.as_deref(), DEFAULT_MAX_EXPERIENCE);

    if min_source == BoundSource::Defaulted {
        tracing::warn!(
            value = ?filters.min_experience,
            default = DEFAULT_MIN_EXPERIENCE,
            "minExperience is not a usable number; using default"
        );
    }
    if max_source == BoundSource::Defaulted {
        tracing::warn!(
            value = ?filters.max_experience,
            default = DEFAULT_MAX_EXPERIENCE,
            "maxExperience is not a usable number; using default"
        );
    }

    ParsedExperienceFilter {
        range: ExperienceRange::new(
            ExperienceDuration::from_decimal(min),
            ExperienceDuration::from_decimal(max),
        ),
        min_source,
        max_source,
    }
}

/// Zero counts as unusable, so an explicit `"0"` maximum widens to the default.
fn read_bound(raw: Option<&str>, default: f64) -> (f64, BoundSource) {
    match raw {
        None | Some("") => (default, BoundSource::Missing),
        Some(text) => match parse_float_prefix(text) {
            Some(value) if value != 0.0 => (value, BoundSource::Parsed),
            Some(_) if default == 0.0 => (default, BoundSource::Parsed),
            _ => (default, BoundSource::Defaulted),
        },
    }
}

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
});

/// Longest leading decimal literal, ignoring leading whitespace:
/// `"2.5 years"` is 2.5, `"abc"` is `None`.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let literal = FLOAT_PREFIX.find(text.trim_start())?.as_str();
    match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => literal.parse::<f64>().ok().filter(|v| !v.is_nan()),
    }
}

/// True when the range is ordered and neither bound is negative.
pub fn validate_experience_range(min: &ExperienceDuration, max: &ExperienceDuration) -> bool {
    let min_decimal = min.to_decimal();
    let max_decimal = max.to_decimal();
    min_decimal <= max_decimal && min_decimal >= 0.0 && max_decimal >= 0.0
}

impl ExperienceRange {
    pub fn is_valid(&self) -> bool {
        validate_experience_range(&self.min_experience, &self.max_experience)
    }

    pub fn to_filter_payload(&self, include_similar: bool) -> ExperienceFilterPayload {
        build_experience_filters(self, include_similar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(min: Option<&str>, max: Option<&str>) -> ExperienceFilterInput {
        ExperienceFilterInput {
            min_experience: min.map(String::from),
            max_experience: max.map(String::from),
        }
    }

    #[test]
    fn test_build_with_similar_expansion() {
        let range = ExperienceRange::new(ExperienceDuration::years(2), ExperienceDuration::years(5));
        let payload = build_experience_filters(&range, true);

        assert_eq!(payload.min_experience, "2.00");
        assert_eq!(payload.max_experience, "5.00");
        assert_eq!(payload.min_experience_expanded.as_deref(), Some("1.00"));
        assert_eq!(payload.max_experience_expanded.as_deref(), Some("7.00"));
        assert_eq!(payload.include_similar_experience, Some(true));
    }

    #[test]
    fn test_build_without_similar_omits_expanded_fields() {
        let range = ExperienceRange::new(ExperienceDuration::new(1, 6), ExperienceDuration::new(3, 4));
        let payload = build_experience_filters(&range, false);

        assert_eq!(payload.min_experience, "1.50");
        assert_eq!(payload.max_experience, "3.33");
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"minExperience": "1.50", "maxExperience": "3.33"})
        );
    }

    #[test]
    fn test_expanded_minimum_never_negative() {
        let range = ExperienceRange::new(ExperienceDuration::new(0, 6), ExperienceDuration::years(1));
        let payload = build_experience_filters(&range, true);
        assert_eq!(payload.min_experience_expanded.as_deref(), Some("0.00"));
        assert_eq!(payload.max_experience_expanded.as_deref(), Some("3.00"));
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let parsed = parse_experience_filter_report(&ExperienceFilterInput::default());
        assert_eq!(
            parsed.range,
            ExperienceRange::new(ExperienceDuration::years(0), ExperienceDuration::years(30))
        );
        assert_eq!(parsed.min_source, BoundSource::Missing);
        assert_eq!(parsed.max_source, BoundSource::Missing);
        assert!(parsed.used_defaults());
    }

    #[test]
    fn test_parse_reads_built_payload_back() {
        let range = ExperienceRange::new(ExperienceDuration::new(2, 6), ExperienceDuration::years(8));
        let payload = build_experience_filters(&range, true);
        let parsed = parse_experience_filter_report(&ExperienceFilterInput::from(&payload));
        assert_eq!(parsed.range, range);
        assert!(!parsed.used_defaults());
    }

    #[test]
    fn test_parse_garbage_falls_back_silently() {
        let range = parse_experience_filter(&input(Some("abc"), Some("lots")));
        assert_eq!(range, ExperienceRange::default());

        let parsed = parse_experience_filter_report(&input(Some("abc"), Some("")));
        assert_eq!(parsed.min_source, BoundSource::Defaulted);
        assert_eq!(parsed.max_source, BoundSource::Missing);
    }

    #[test]
    fn test_parse_zero_maximum_widens_to_default() {
        let parsed = parse_experience_filter_report(&input(Some("0"), Some("0")));
        assert_eq!(parsed.range.min_experience, ExperienceDuration::years(0));
        assert_eq!(parsed.min_source, BoundSource::Parsed);
        assert_eq!(parsed.range.max_experience, ExperienceDuration::years(30));
        assert_eq!(parsed.max_source, BoundSource::Defaulted);
    }

    #[test]
    fn test_parse_accepts_numbers_and_units() {
        let filters: ExperienceFilterInput =
            serde_json::from_str(r#"{"minExperience": 1.25, "maxExperience": "4.5 years"}"#).unwrap();
        let range = parse_experience_filter(&filters);
        assert_eq!(range.min_experience, ExperienceDuration::new(1, 3));
        assert_eq!(range.max_experience, ExperienceDuration::new(4, 6));
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("  2.50"), Some(2.5));
        assert_eq!(parse_float_prefix("3abc"), Some(3.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("-1e1"), Some(-10.0));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("years 3"), None);
        assert_eq!(parse_float_prefix(""), None);
    }

    #[test]
    fn test_validate_experience_range() {
        assert!(!validate_experience_range(
            &ExperienceDuration::years(2),
            &ExperienceDuration::years(1)
        ));
        assert!(validate_experience_range(
            &ExperienceDuration::new(1, 11),
            &ExperienceDuration::years(2)
        ));
        assert!(validate_experience_range(
            &ExperienceDuration::years(3),
            &ExperienceDuration::years(3)
        ));
        assert!(!validate_experience_range(
            &ExperienceDuration::new(0, -1),
            &ExperienceDuration::years(2)
        ));
        assert!(ExperienceRange::default().is_valid());
    }
}
