pub mod experience;
pub mod experience_filter;
pub mod filters;
pub mod ranking;
pub mod saved_searches;
pub mod search_session;

pub use crate::domain::model::{
    ExperienceCategory, ExperienceDuration, ExperienceFilterInput, ExperienceFilterPayload,
    ExperiencePreset, ExperienceRange,
};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore, SearchBackend};
pub use crate::utils::error::Result;
