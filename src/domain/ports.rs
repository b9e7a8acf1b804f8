use crate::domain::search::{SearchRequest, SearchResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// String key-value persistence, injected wherever state must outlive a
/// process (saved searches today).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn search_path(&self) -> &str;
    fn auth_token(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}
