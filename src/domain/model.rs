use serde::{Deserialize, Serialize};
use std::fmt;

/// Experience as entered on a form: whole years plus months.
///
/// Months are expected in `0..=11`, but nothing enforces it; out-of-range
/// values are combined arithmetically by the converters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExperienceDuration {
    pub years: i32,
    pub months: i32,
}

impl ExperienceDuration {
    pub const fn new(years: i32, months: i32) -> Self {
        Self { years, months }
    }

    pub const fn years(years: i32) -> Self {
        Self { years, months: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceCategory {
    Fresher,
    #[serde(rename = "Entry Level")]
    EntryLevel,
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
    Lead,
    Expert,
}

impl ExperienceCategory {
    pub const ALL: [ExperienceCategory; 7] = [
        ExperienceCategory::Fresher,
        ExperienceCategory::EntryLevel,
        ExperienceCategory::Junior,
        ExperienceCategory::MidLevel,
        ExperienceCategory::Senior,
        ExperienceCategory::Lead,
        ExperienceCategory::Expert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceCategory::Fresher => "Fresher",
            ExperienceCategory::EntryLevel => "Entry Level",
            ExperienceCategory::Junior => "Junior",
            ExperienceCategory::MidLevel => "Mid-Level",
            ExperienceCategory::Senior => "Senior",
            ExperienceCategory::Lead => "Lead",
            ExperienceCategory::Expert => "Expert",
        }
    }
}

impl fmt::Display for ExperienceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRange {
    pub min_experience: ExperienceDuration,
    pub max_experience: ExperienceDuration,
}

impl ExperienceRange {
    pub const fn new(min_experience: ExperienceDuration, max_experience: ExperienceDuration) -> Self {
        Self {
            min_experience,
            max_experience,
        }
    }
}

impl Default for ExperienceRange {
    fn default() -> Self {
        Self::new(ExperienceDuration::years(0), ExperienceDuration::years(30))
    }
}

/// Experience bounds in the shape the search API expects: decimal years
/// rendered with two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceFilterPayload {
    pub min_experience: String,
    pub max_experience: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_experience_expanded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_experience_expanded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_similar_experience: Option<bool>,
}

/// A named range offered as a one-click choice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperiencePreset {
    pub name: &'static str,
    pub min: ExperienceDuration,
    pub max: ExperienceDuration,
    pub category: ExperienceCategory,
}

impl ExperiencePreset {
    pub fn range(&self) -> ExperienceRange {
        ExperienceRange::new(self.min, self.max)
    }
}

/// Accepts a JSON string or number (or null) and keeps it as text.
///
/// Backends are inconsistent about numeric fields such as `experience`
/// and `minExperience`; parsing happens later with the field's own rules.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Experience bounds read back from a stored or returned filter object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceFilterInput {
    #[serde(deserialize_with = "text_or_number")]
    pub min_experience: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub max_experience: Option<String>,
}

impl From<&ExperienceFilterPayload> for ExperienceFilterInput {
    fn from(payload: &ExperienceFilterPayload) -> Self {
        Self {
            min_experience: Some(payload.min_experience.clone()),
            max_experience: Some(payload.max_experience.clone()),
        }
    }
}
