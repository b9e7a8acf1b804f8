use crate::domain::ports::SearchBackend;
use crate::domain::search::{CandidateFilters, FilterKey, SearchRequest, SearchResponse, SortOption};
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::validate_one_of;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

pub const PAGE_SIZES: [u32; 4] = [5, 10, 25, 50];
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
struct SessionState {
    query: String,
    filters: CandidateFilters,
    sort_by: SortOption,
    page: u32,
    page_size: u32,
    last_request: Option<SearchRequest>,
    last_response: Option<SearchResponse>,
}

impl SessionState {
    fn new(page_size: u32) -> Self {
        Self {
            query: String::new(),
            filters: CandidateFilters::default(),
            sort_by: SortOption::default(),
            page: 1,
            page_size,
            last_request: None,
            last_response: None,
        }
    }

    fn request(&self) -> SearchRequest {
        SearchRequest {
            query: self.query.trim().to_string(),
            filters: self.filters.to_payload(),
            sort_by: self.sort_by,
            page: self.page,
            limit: self.page_size,
        }
    }
}

/// One user's advanced search: filters, paging, and the last result.
///
/// Repeating an identical request is answered from the last response, and
/// debounced searches only run once input has been quiet for the window.
/// Fetches run one at a time, so the recorded response always belongs to
/// the most recently issued request.
pub struct SearchSession<B: SearchBackend> {
    backend: B,
    state: Mutex<SessionState>,
    in_flight: Mutex<()>,
    debounce: Duration,
    generation: AtomicU64,
}

impl<B: SearchBackend> SearchSession<B> {
    pub fn new(backend: B) -> Self {
        Self::with_settings(backend, DEFAULT_PAGE_SIZE, DEFAULT_DEBOUNCE)
    }

    pub fn with_settings(backend: B, page_size: u32, debounce: Duration) -> Self {
        Self {
            backend,
            state: Mutex::new(SessionState::new(page_size)),
            in_flight: Mutex::new(()),
            debounce,
            generation: AtomicU64::new(0),
        }
    }

    pub async fn set_query(&self, query: &str) {
        let mut state = self.state.lock().await;
        state.query = query.to_string();
        state.page = 1;
    }

    pub async fn set_filters(&self, filters: CandidateFilters) {
        let mut state = self.state.lock().await;
        state.filters = filters;
        state.page = 1;
    }

    pub async fn update_filters<F>(&self, update: F)
    where
        F: FnOnce(&mut CandidateFilters),
    {
        let mut state = self.state.lock().await;
        update(&mut state.filters);
        state.page = 1;
    }

    pub async fn remove_filter(&self, key: FilterKey) {
        self.update_filters(|filters| filters.clear(key)).await;
    }

    pub async fn set_sort(&self, sort_by: SortOption) {
        let mut state = self.state.lock().await;
        state.sort_by = sort_by;
        state.page = 1;
    }

    pub async fn set_page_size(&self, page_size: u32) -> Result<()> {
        validate_one_of("page_size", page_size, &PAGE_SIZES)?;
        let mut state = self.state.lock().await;
        state.page_size = page_size;
        state.page = 1;
        Ok(())
    }

    /// Pages are 1-based.
    pub async fn set_page(&self, page: u32) -> Result<()> {
        if page == 0 {
            return Err(SearchError::ValidationError {
                message: "page numbers start at 1".to_string(),
            });
        }
        self.state.lock().await.page = page;
        Ok(())
    }

    pub async fn page(&self) -> u32 {
        self.state.lock().await.page
    }

    pub async fn filters(&self) -> CandidateFilters {
        self.state.lock().await.filters.clone()
    }

    pub async fn current_request(&self) -> SearchRequest {
        self.state.lock().await.request()
    }

    pub async fn last_response(&self) -> Option<SearchResponse> {
        self.state.lock().await.last_response.clone()
    }

    /// Whether there is anything to search for at all.
    pub async fn should_search(&self) -> bool {
        let state = self.state.lock().await;
        state.filters.has_active_filters(&state.query)
    }

    /// Restores default filters and query and forgets the last result.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        let page_size = state.page_size;
        *state = SessionState::new(page_size);
    }

    /// Runs the current request unless it is identical to the last one sent.
    ///
    /// A call made while an identical request is in flight waits for it and
    /// reuses its response.
    pub async fn search(&self) -> Result<SearchResponse> {
        let _in_flight = self.in_flight.lock().await;
        let request = {
            let state = self.state.lock().await;
            let request = state.request();
            if state.last_request.as_ref() == Some(&request) {
                if let Some(cached) = &state.last_response {
                    tracing::debug!(page = request.page, "request unchanged; reusing last response");
                    return Ok(cached.clone());
                }
            }
            request
        };
        self.fetch(request).await
    }

    /// Runs the current request even if it was just sent.
    pub async fn refresh(&self) -> Result<SearchResponse> {
        let _in_flight = self.in_flight.lock().await;
        let request = self.state.lock().await.request();
        self.fetch(request).await
    }

    /// Waits out the debounce window, then searches if no later call has
    /// started and there is something to search for. Superseded or empty
    /// calls return `None`.
    pub async fn search_debounced(&self) -> Result<Option<SearchResponse>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.debounce).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::trace!(ticket, "debounced search superseded");
            return Ok(None);
        }
        if !self.should_search().await {
            tracing::debug!("no query or filters; search not sent");
            return Ok(None);
        }
        self.search().await.map(Some)
    }

    /// Callers hold `in_flight`.
    async fn fetch(&self, request: SearchRequest) -> Result<SearchResponse> {
        let response = self.backend.search(&request).await?;
        let mut state = self.state.lock().await;
        state.last_request = Some(request);
        state.last_response = Some(response.clone());
        Ok(response)
    }
}
