pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::AppConfig;

pub use adapters::http::HttpSearchClient;
pub use adapters::storage::{JsonFileStore, MemoryStore};
pub use core::experience::{
    decimal_to_years_months, experience_presets, experience_similarity, format_experience,
    is_same_experience_category, parse_experience_text, years_months_to_decimal,
};
pub use core::experience_filter::{
    build_experience_filters, parse_experience_filter, parse_experience_filter_report,
    validate_experience_range,
};
pub use core::ranking::rank_by_experience;
pub use core::saved_searches::SavedSearchRepository;
pub use core::search_session::SearchSession;
pub use domain::model::{
    ExperienceCategory, ExperienceDuration, ExperienceFilterInput, ExperienceFilterPayload,
    ExperienceRange,
};
pub use domain::search::{CandidateFilters, SearchRequest, SearchResponse};
pub use utils::error::{Result, SearchError};
