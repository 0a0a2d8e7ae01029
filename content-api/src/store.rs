//! Per-domain state holders
//!
//! A [`ResourceStore`] owns the displayed state of one content domain:
//! payload, metadata timestamp, loading flag, last error, and whether the
//! payload came from the cache. Refreshes go through the
//! fetch-or-fallback protocol, so a store that once loaded successfully
//! keeps serving content through network outages.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use crate::cache::ContentCache;
use crate::client::ApiClient;
use crate::error::Result;
use crate::fetch::{load_cached_resource, ResourceRequest};
use crate::payload::{ListPayload, ObjectPayload};
use crate::resources;

/// Snapshot of a domain's displayed state.
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    pub payload: Option<T>,
    pub loading: bool,
    pub error: Option<crate::error::ApiError>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub from_cache: bool,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            payload: None,
            loading: false,
            error: None,
            fetched_at: None,
            from_cache: false,
        }
    }
}

/// State holder for one content domain.
pub struct ResourceStore<T> {
    client: Arc<ApiClient>,
    cache: Arc<ContentCache>,
    request: ResourceRequest<T>,
    state: RwLock<ResourceState<T>>,
}

impl<T> ResourceStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    pub fn new(
        client: Arc<ApiClient>,
        cache: Arc<ContentCache>,
        request: ResourceRequest<T>,
    ) -> Self {
        Self {
            client,
            cache,
            request,
            state: RwLock::new(ResourceState::default()),
        }
    }

    /// Reload the domain for the given language.
    ///
    /// A fallback to cached data counts as success; the error only lands
    /// in the state (and the return value) when no fallback existed.
    #[instrument(skip(self), fields(resource = self.request.log_label))]
    pub async fn refresh(&self, lang: Option<&str>) -> Result<()> {
        if let Ok(mut state) = self.state.write() {
            state.loading = true;
            state.error = None;
        }

        let result = load_cached_resource(&self.client, &self.cache, &self.request, lang).await;

        let mut state = match self.state.write() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        state.loading = false;

        match result {
            Ok(loaded) => {
                state.payload = Some(loaded.payload);
                state.fetched_at = loaded.fetched_at;
                state.from_cache = loaded.from_cache;
                Ok(())
            }
            Err(err) => {
                state.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Whether the store currently holds a payload. A poisoned state lock
    /// reports no data, which at worst forces a redundant reload.
    pub fn has_data(&self) -> bool {
        self.state
            .read()
            .map(|state| state.payload.is_some())
            .unwrap_or(false)
    }

    /// Current state snapshot.
    pub fn state(&self) -> ResourceState<T> {
        match self.state.read() {
            Ok(state) => state.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Clear the state back to its initial value. The persistent cache is
    /// left untouched.
    pub fn reset(&self) {
        let mut state = match self.state.write() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        *state = ResourceState::default();
    }
}

impl ResourceStore<ObjectPayload> {
    pub fn studio(client: Arc<ApiClient>, cache: Arc<ContentCache>) -> Self {
        Self::new(client, cache, resources::STUDIO)
    }
}

impl ResourceStore<ListPayload> {
    pub fn prices(client: Arc<ApiClient>, cache: Arc<ContentCache>) -> Self {
        Self::new(client, cache, resources::PRICES)
    }

    pub fn equipment(client: Arc<ApiClient>, cache: Arc<ContentCache>) -> Self {
        Self::new(client, cache, resources::EQUIPMENT)
    }

    pub fn teachers(client: Arc<ApiClient>, cache: Arc<ContentCache>) -> Self {
        Self::new(client, cache, resources::TEACHERS)
    }

    pub fn rules(client: Arc<ApiClient>, cache: Arc<ContentCache>) -> Self {
        Self::new(client, cache, resources::RULES)
    }
}
