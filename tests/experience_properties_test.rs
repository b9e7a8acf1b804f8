use candidate_search::core::experience_filter::BoundSource;
use candidate_search::{
    build_experience_filters, decimal_to_years_months, experience_presets, experience_similarity,
    format_experience, is_same_experience_category, parse_experience_filter,
    parse_experience_filter_report, parse_experience_text, validate_experience_range,
    years_months_to_decimal, ExperienceCategory, ExperienceDuration, ExperienceFilterInput,
    ExperienceRange,
};

fn input(json: &str) -> ExperienceFilterInput {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_every_month_survives_decimal_conversion() {
    for years in 0..=40 {
        for months in 0..=11 {
            let decimal = years_months_to_decimal(years, months);
            assert_eq!(
                decimal_to_years_months(decimal),
                ExperienceDuration::new(years, months),
                "{} years {} months",
                years,
                months
            );
        }
    }
}

#[test]
fn test_decomposed_months_never_exceed_eleven() {
    let mut value = 0.0;
    while value < 35.0 {
        let duration = decimal_to_years_months(value);
        assert!((0..=11).contains(&duration.months), "{}", value);
        value += 0.01;
    }
}

#[test]
fn test_similarity_is_symmetric_and_bounded() {
    let samples = [0.0, 0.4, 1.0, 2.5, 3.9, 6.0, 9.75, 15.0, 30.0];
    for &a in &samples {
        assert_eq!(experience_similarity(a, a), 1.0);
        for &b in &samples {
            let score = experience_similarity(a, b);
            assert!((0.0..=1.0).contains(&score));
            assert_eq!(score, experience_similarity(b, a));
        }
    }
}

#[test]
fn test_categories_cover_the_line_without_gaps() {
    let expected = [
        (0.0, ExperienceCategory::Fresher),
        (0.99, ExperienceCategory::Fresher),
        (1.0, ExperienceCategory::EntryLevel),
        (2.0, ExperienceCategory::Junior),
        (4.0, ExperienceCategory::MidLevel),
        (6.0, ExperienceCategory::Senior),
        (10.0, ExperienceCategory::Lead),
        (15.0, ExperienceCategory::Expert),
        (42.0, ExperienceCategory::Expert),
    ];
    for (years, category) in expected {
        assert_eq!(ExperienceCategory::classify(years), category, "{}", years);
    }
    assert!(is_same_experience_category(4.0, 5.9));
    assert!(!is_same_experience_category(5.9, 6.0));
}

#[test]
fn test_built_filter_reads_back_to_the_same_range() {
    let range = ExperienceRange::new(ExperienceDuration::new(2, 6), ExperienceDuration::new(7, 3));
    for include_similar in [false, true] {
        let payload = build_experience_filters(&range, include_similar);
        let parsed = parse_experience_filter(&ExperienceFilterInput::from(&payload));
        assert_eq!(parsed, range);
    }
}

#[test]
fn test_expanded_bounds_stay_outside_the_range() {
    for preset in experience_presets() {
        let payload = build_experience_filters(&preset.range(), true);
        let min: f64 = payload.min_experience.parse().unwrap();
        let max: f64 = payload.max_experience.parse().unwrap();
        let expanded_min: f64 = payload.min_experience_expanded.unwrap().parse().unwrap();
        let expanded_max: f64 = payload.max_experience_expanded.unwrap().parse().unwrap();

        assert!(expanded_min >= 0.0);
        assert!(expanded_min <= min, "{}", preset.name);
        assert!(expanded_max >= max, "{}", preset.name);
        assert_eq!(payload.include_similar_experience, Some(true));
    }
}

#[test]
fn test_missing_and_garbage_bounds_fall_back_to_defaults() {
    let report = parse_experience_filter_report(&input(r#"{"maxExperience": "lots"}"#));
    assert_eq!(report.range, ExperienceRange::default());
    assert_eq!(report.min_source, BoundSource::Missing);
    assert_eq!(report.max_source, BoundSource::Defaulted);
    assert!(report.used_defaults());

    let report = parse_experience_filter_report(&input(r#"{"minExperience": 3, "maxExperience": "5.5"}"#));
    assert_eq!(report.min_source, BoundSource::Parsed);
    assert_eq!(report.range.max_experience, ExperienceDuration::new(5, 6));
    assert!(!report.used_defaults());
}

#[test]
fn test_range_validation() {
    let two = ExperienceDuration::years(2);
    let five = ExperienceDuration::years(5);
    assert!(validate_experience_range(&two, &five));
    assert!(validate_experience_range(&two, &two));
    assert!(!validate_experience_range(&five, &two));
    assert!(!validate_experience_range(&ExperienceDuration::new(0, -1), &two));
}

#[test]
fn test_display_and_free_text() {
    assert_eq!(format_experience(0, 0), "0 years");
    assert_eq!(format_experience(1, 1), "1 year 1 month");
    assert_eq!(format_experience(0, 7), "7 months");
    assert_eq!(parse_experience_text("3 years 6 months"), 3.5);
    assert_eq!(parse_experience_text("18 months"), 1.5);
    assert_eq!(parse_experience_text("n/a"), 0.0);
}
