//! Resource loader coordination
//!
//! Long-lived coordinator that cycles between idle and loading for one
//! resource. It tracks the single language last loaded successfully and
//! skips redundant fetches; a load that fails while no data is present
//! clears that tracking so a later observation retries even when the
//! language value has not changed.
//!
//! Rapidly successive language changes can put two fetches in flight at
//! once. Each load takes a monotonic sequence number and only the most
//! recently issued load commits `last_loaded_lang`, so a slow superseded
//! response cannot flip the coordinator's state backwards.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use content_api::error::{ApiError, Result};
use content_api::store::ResourceStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// One language-parameterized fetch operation.
#[async_trait]
pub trait LanguageFetcher: Send + Sync {
    async fn fetch(&self, lang: &str) -> Result<()>;
}

/// A [`ResourceStore`] is directly usable as the loader's fetch target.
#[async_trait]
impl<T> LanguageFetcher for ResourceStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    async fn fetch(&self, lang: &str) -> Result<()> {
        self.refresh(Some(lang)).await
    }
}

type HasData = Arc<dyn Fn() -> bool + Send + Sync>;
type ErrorHook = Arc<dyn Fn(&ApiError) + Send + Sync>;

/// Language-reactive reload coordinator for one resource.
pub struct ResourceLoader {
    fetcher: Arc<dyn LanguageFetcher>,
    has_data: HasData,
    on_error: Option<ErrorHook>,
    language: Option<watch::Receiver<String>>,
    immediate: bool,
    last_loaded_lang: Mutex<String>,
    load_seq: AtomicU64,
}

impl ResourceLoader {
    pub fn new(fetcher: Arc<dyn LanguageFetcher>) -> Self {
        Self {
            fetcher,
            has_data: Arc::new(|| false),
            on_error: None,
            language: None,
            immediate: true,
            last_loaded_lang: Mutex::new(String::new()),
            load_seq: AtomicU64::new(0),
        }
    }

    /// Predicate reporting whether the resource currently has data.
    /// Without one the loader assumes data is always missing and never
    /// skips a fetch.
    pub fn with_has_data(mut self, has_data: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.has_data = Arc::new(has_data);
        self
    }

    /// Hook invoked with every normalized load failure, including the
    /// ones the observation path swallows.
    pub fn with_error_hook(mut self, hook: impl Fn(&ApiError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(hook));
        self
    }

    /// Reactive language value to observe and to resolve
    /// [`load_current`](Self::load_current) against.
    pub fn with_language(mut self, language: watch::Receiver<String>) -> Self {
        self.language = Some(language);
        self
    }

    /// Whether [`spawn_watch`](Self::spawn_watch) loads the initially
    /// observed language before waiting for changes. Defaults to true.
    pub fn with_immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    /// The language last loaded successfully, empty when none.
    pub fn last_loaded_lang(&self) -> String {
        self.lock_last().clone()
    }

    fn lock_last(&self) -> std::sync::MutexGuard<'_, String> {
        match self.last_loaded_lang.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Load the resource for `lang`.
    ///
    /// No-op for an empty language. Unforced calls are skipped when the
    /// language already loaded successfully and data is present - the
    /// de-duplication guarantee. Failures run the error hook, clear
    /// `last_loaded_lang` when no data is present, and propagate.
    pub async fn load_for_lang(&self, lang: &str, force: bool) -> Result<()> {
        if lang.is_empty() {
            return Ok(());
        }

        if !force && *self.lock_last() == lang && (self.has_data)() {
            debug!(lang = %lang, "Skipping reload, language already loaded");
            return Ok(());
        }

        let seq = self.load_seq.fetch_add(1, Ordering::SeqCst) + 1;

        match self.fetcher.fetch(lang).await {
            Ok(()) => {
                if self.load_seq.load(Ordering::SeqCst) == seq {
                    *self.lock_last() = lang.to_string();
                } else {
                    debug!(lang = %lang, "Load superseded by a newer request");
                }
                Ok(())
            }
            Err(err) => {
                if let Some(hook) = &self.on_error {
                    hook(&err);
                }

                // A superseded failure must not wipe tracking committed by
                // the newer load it lost to.
                if self.load_seq.load(Ordering::SeqCst) == seq && !(self.has_data)() {
                    self.lock_last().clear();
                }

                Err(err)
            }
        }
    }

    /// Forced reload for the currently observed language. No-op when no
    /// language receiver is configured.
    pub async fn load_current(&self) -> Result<()> {
        let Some(rx) = &self.language else {
            return Ok(());
        };

        let lang = rx.borrow().clone();
        self.load_for_lang(&lang, true).await
    }

    /// Observe the configured language value on a background task.
    ///
    /// Every observed value (including the initial one when `immediate`)
    /// triggers an unforced load. Observation-driven failures never
    /// escape this task; the error hook has already seen them.
    ///
    /// Returns `None` when no language receiver is configured.
    pub fn spawn_watch(self: Arc<Self>) -> Option<JoinHandle<()>> {
        let mut rx = self.language.clone()?;
        let loader = self;

        Some(tokio::spawn(async move {
            if loader.immediate {
                let lang = rx.borrow_and_update().clone();
                if let Err(err) = loader.load_for_lang(&lang, false).await {
                    debug!(lang = %lang, error = %err, "Initial observed load failed");
                }
            }

            while rx.changed().await.is_ok() {
                let lang = rx.borrow_and_update().clone();
                if let Err(err) = loader.load_for_lang(&lang, false).await {
                    debug!(lang = %lang, error = %err, "Observed-language load failed");
                }
            }
        }))
    }
}
