use crate::domain::model::{text_or_number, ExperienceFilterPayload, ExperienceRange};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkillMatchType {
    #[default]
    Any,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CandidateStatus {
    Pending,
    Interested,
    NotInterested,
    TellLater,
    Contacted,
    Offered,
    Hired,
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CandidateStatus::Pending => "Pending",
            CandidateStatus::Interested => "Interested",
            CandidateStatus::NotInterested => "Not Interested",
            CandidateStatus::TellLater => "Tell Later",
            CandidateStatus::Contacted => "Contacted",
            CandidateStatus::Offered => "Offered",
            CandidateStatus::Hired => "Hired",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    #[default]
    Relevance,
    Latest,
    ExperienceHigh,
    ExperienceLow,
    SalaryHigh,
    Name,
}

/// Inclusive bounds of a numeric filter such as CTC or passing year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

/// Full slider span of current CTC in LPA; narrower bounds are a filter.
pub const CURRENT_CTC_SPAN: Bounds<f64> = Bounds { min: 0.0, max: 100.0 };
pub const EXPECTED_CTC_SPAN: Bounds<f64> = Bounds { min: 0.0, max: 150.0 };
pub const EARLIEST_PASSING_YEAR: i32 = 2000;

pub fn passing_year_span() -> Bounds<i32> {
    Bounds::new(EARLIEST_PASSING_YEAR, Utc::now().year())
}

/// Every filter the advanced search understands.
///
/// Unset filters are empty collections, empty strings, `false`, or `None`;
/// only set filters are sent to the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateFilters {
    pub current_locations: Vec<String>,
    pub experience: Option<ExperienceRange>,
    pub include_similar_experience: bool,
    pub experience_level: Vec<String>,
    pub notice_period: Vec<String>,
    pub employment_types: Vec<String>,
    pub primary_skills: Vec<String>,
    pub secondary_skills: Vec<String>,
    pub skill_match_type: SkillMatchType,
    pub degree: Vec<String>,
    pub specialization: String,
    pub passing_year: Option<Bounds<i32>>,
    pub education_gap: Vec<String>,
    pub employment_history: Vec<String>,
    pub status: Vec<CandidateStatus>,
    pub company: String,
    pub profile: String,
    pub current_ctc: Option<Bounds<f64>>,
    pub expected_ctc: Option<Bounds<f64>>,
    pub exclude_duplicates: bool,
    pub exclude_blocked: bool,
    pub verified_only: bool,
}

/// Names one removable filter of [`CandidateFilters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    CurrentLocations,
    Experience,
    ExperienceLevel,
    NoticePeriod,
    EmploymentTypes,
    PrimarySkills,
    SecondarySkills,
    SkillMatchType,
    Degree,
    Specialization,
    PassingYear,
    EducationGap,
    EmploymentHistory,
    Status,
    Company,
    Profile,
    CurrentCtc,
    ExpectedCtc,
    ExcludeDuplicates,
    ExcludeBlocked,
    VerifiedOnly,
}

/// A filter chip: which filter is set and how to show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilter {
    pub key: FilterKey,
    pub category: &'static str,
    pub value: String,
}

/// The `filters` object of a search request. Field names are the API's.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilterPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_gap: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_history: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_status: Option<Vec<CandidateStatus>>,
    #[serde(flatten)]
    pub experience: Option<ExperienceFilterPayload>,
    #[serde(rename = "minCurrentCTC", skip_serializing_if = "Option::is_none")]
    pub min_current_ctc: Option<f64>,
    #[serde(rename = "maxCurrentCTC", skip_serializing_if = "Option::is_none")]
    pub max_current_ctc: Option<f64>,
    #[serde(rename = "minExpectedCTC", skip_serializing_if = "Option::is_none")]
    pub min_expected_ctc: Option<f64>,
    #[serde(rename = "maxExpectedCTC", skip_serializing_if = "Option::is_none")]
    pub max_expected_ctc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_match_type: Option<SkillMatchType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_passing_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_passing_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_duplicates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_only: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub filters: SearchFilterPayload,
    pub sort_by: SortOption,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub profile: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub experience: Option<String>,
    pub experience_level: Option<String>,
    pub skills: Option<String>,
    pub status: Option<String>,
}

impl CandidateSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<CandidateSummary>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

impl Default for SearchResponse {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            total_count: 0,
            total_pages: default_total_pages(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: CandidateFilters,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
}
