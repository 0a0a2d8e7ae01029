//! Tests for the language-reactive reload coordinator

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use content_api::error::ApiError;
use content_loader::{LanguageFetcher, ResourceLoader};
use tokio::sync::watch;
use tokio::time::{sleep, timeout};

// ============================================================================
// Test fetchers
// ============================================================================

#[derive(Default)]
struct CountingFetcher {
    calls: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl CountingFetcher {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn set_failing(&self, failing: bool) {
        self.fail.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl LanguageFetcher for CountingFetcher {
    async fn fetch(&self, lang: &str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(lang.to_string());
        if self.fail.load(Ordering::SeqCst) {
            Err(ApiError::unexpected("fetch failed"))
        } else {
            Ok(())
        }
    }
}

/// Fetcher whose "en" responses are much slower than everything else.
struct SlowEnglishFetcher;

#[async_trait]
impl LanguageFetcher for SlowEnglishFetcher {
    async fn fetch(&self, lang: &str) -> Result<(), ApiError> {
        if lang == "en" {
            sleep(Duration::from_millis(80)).await;
        } else {
            sleep(Duration::from_millis(10)).await;
        }
        Ok(())
    }
}

/// Fetcher whose "en" responses are slow and always fail.
struct SlowFailingEnglishFetcher;

#[async_trait]
impl LanguageFetcher for SlowFailingEnglishFetcher {
    async fn fetch(&self, lang: &str) -> Result<(), ApiError> {
        if lang == "en" {
            sleep(Duration::from_millis(80)).await;
            Err(ApiError::unexpected("stale failure"))
        } else {
            sleep(Duration::from_millis(10)).await;
            Ok(())
        }
    }
}

async fn wait_for_calls(fetcher: &CountingFetcher, expected: usize) {
    timeout(Duration::from_secs(2), async {
        while fetcher.calls().len() < expected {
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("Expected fetch count was never reached");
}

// ============================================================================
// De-duplication and forcing
// ============================================================================

#[tokio::test]
async fn empty_language_is_a_noop() {
    let fetcher = Arc::new(CountingFetcher::default());
    let loader = ResourceLoader::new(fetcher.clone());

    loader.load_for_lang("", false).await.unwrap();
    loader.load_for_lang("", true).await.unwrap();

    assert!(fetcher.calls().is_empty());
    assert_eq!(loader.last_loaded_lang(), "");
}

#[tokio::test]
async fn unforced_reload_of_loaded_language_is_skipped() {
    let fetcher = Arc::new(CountingFetcher::default());
    let loader = ResourceLoader::new(fetcher.clone()).with_has_data(|| true);

    loader.load_for_lang("en", false).await.unwrap();
    loader.load_for_lang("en", false).await.unwrap();

    assert_eq!(fetcher.calls(), vec!["en"]);
    assert_eq!(loader.last_loaded_lang(), "en");
}

#[tokio::test]
async fn missing_data_defeats_deduplication() {
    let fetcher = Arc::new(CountingFetcher::default());
    // No has_data predicate: data is assumed missing.
    let loader = ResourceLoader::new(fetcher.clone());

    loader.load_for_lang("en", false).await.unwrap();
    loader.load_for_lang("en", false).await.unwrap();

    assert_eq!(fetcher.calls(), vec!["en", "en"]);
}

#[tokio::test]
async fn language_change_triggers_a_new_fetch() {
    let fetcher = Arc::new(CountingFetcher::default());
    let loader = ResourceLoader::new(fetcher.clone()).with_has_data(|| true);

    loader.load_for_lang("en", false).await.unwrap();
    loader.load_for_lang("ka", false).await.unwrap();

    assert_eq!(fetcher.calls(), vec!["en", "ka"]);
    assert_eq!(loader.last_loaded_lang(), "ka");
}

#[tokio::test]
async fn forced_reload_always_fetches() {
    let fetcher = Arc::new(CountingFetcher::default());
    let loader = ResourceLoader::new(fetcher.clone()).with_has_data(|| true);

    loader.load_for_lang("en", false).await.unwrap();
    loader.load_for_lang("en", true).await.unwrap();

    assert_eq!(fetcher.calls(), vec!["en", "en"]);
}

#[tokio::test]
async fn load_current_forces_a_fetch_of_the_observed_language() {
    let fetcher = Arc::new(CountingFetcher::default());
    let (_tx, rx) = watch::channel("en".to_string());
    let loader = ResourceLoader::new(fetcher.clone())
        .with_has_data(|| true)
        .with_language(rx);

    loader.load_current().await.unwrap();
    loader.load_current().await.unwrap();

    assert_eq!(fetcher.calls(), vec!["en", "en"]);
    assert_eq!(loader.last_loaded_lang(), "en");
}

#[tokio::test]
async fn load_current_without_language_is_a_noop() {
    let fetcher = Arc::new(CountingFetcher::default());
    let loader = ResourceLoader::new(fetcher.clone());

    loader.load_current().await.unwrap();
    assert!(fetcher.calls().is_empty());
}

// ============================================================================
// Failure handling
// ============================================================================

#[tokio::test]
async fn failure_runs_hook_and_clears_tracking_without_data() {
    let fetcher = Arc::new(CountingFetcher::default());
    fetcher.set_failing(true);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let loader = ResourceLoader::new(fetcher.clone()).with_error_hook({
        let seen = seen.clone();
        move |err: &ApiError| seen.lock().unwrap().push(err.message.clone())
    });

    let err = loader.load_for_lang("en", false).await.unwrap_err();
    assert_eq!(err.message, "fetch failed");
    assert_eq!(*seen.lock().unwrap(), ["fetch failed"]);
    assert_eq!(loader.last_loaded_lang(), "");

    // Tracking was cleared, so the same language retries unforced.
    fetcher.set_failing(false);
    loader.load_for_lang("en", false).await.unwrap();
    assert_eq!(fetcher.calls(), vec!["en", "en"]);
    assert_eq!(loader.last_loaded_lang(), "en");
}

#[tokio::test]
async fn failure_keeps_tracking_when_data_is_still_present() {
    let fetcher = Arc::new(CountingFetcher::default());
    let loader = ResourceLoader::new(fetcher.clone()).with_has_data(|| true);

    loader.load_for_lang("en", false).await.unwrap();

    fetcher.set_failing(true);
    let result = loader.load_for_lang("en", true).await;
    assert!(result.is_err());

    // Cached data survived the failed reload, so no retry is forced.
    assert_eq!(loader.last_loaded_lang(), "en");
}

// ============================================================================
// Observation
// ============================================================================

#[tokio::test]
async fn watch_loads_initial_and_changed_languages() {
    let fetcher = Arc::new(CountingFetcher::default());
    let (tx, rx) = watch::channel("en".to_string());
    let loader = Arc::new(
        ResourceLoader::new(fetcher.clone())
            .with_has_data(|| true)
            .with_language(rx),
    );

    let handle = loader.clone().spawn_watch().unwrap();
    wait_for_calls(&fetcher, 1).await;

    tx.send("ka".to_string()).unwrap();
    wait_for_calls(&fetcher, 2).await;

    assert_eq!(fetcher.calls(), vec!["en", "ka"]);
    assert_eq!(loader.last_loaded_lang(), "ka");
    handle.abort();
}

#[tokio::test]
async fn watch_without_immediate_waits_for_a_change() {
    let fetcher = Arc::new(CountingFetcher::default());
    let (tx, rx) = watch::channel("en".to_string());
    let loader = Arc::new(
        ResourceLoader::new(fetcher.clone())
            .with_language(rx)
            .with_immediate(false),
    );

    let handle = loader.clone().spawn_watch().unwrap();
    sleep(Duration::from_millis(30)).await;
    assert!(fetcher.calls().is_empty());

    tx.send("ka".to_string()).unwrap();
    wait_for_calls(&fetcher, 1).await;
    assert_eq!(fetcher.calls(), vec!["ka"]);
    handle.abort();
}

#[tokio::test]
async fn watch_survives_fetch_failures() {
    let fetcher = Arc::new(CountingFetcher::default());
    fetcher.set_failing(true);

    let (tx, rx) = watch::channel("en".to_string());
    let loader = Arc::new(ResourceLoader::new(fetcher.clone()).with_language(rx));

    let handle = loader.clone().spawn_watch().unwrap();
    wait_for_calls(&fetcher, 1).await;

    // The observation task swallowed the failure and keeps observing.
    fetcher.set_failing(false);
    tx.send("ka".to_string()).unwrap();
    wait_for_calls(&fetcher, 2).await;

    assert_eq!(fetcher.calls(), vec!["en", "ka"]);
    assert_eq!(loader.last_loaded_lang(), "ka");
    handle.abort();
}

#[tokio::test]
async fn spawn_watch_requires_a_language_receiver() {
    let fetcher = Arc::new(CountingFetcher::default());
    let loader = Arc::new(ResourceLoader::new(fetcher));
    assert!(loader.clone().spawn_watch().is_none());
}

// ============================================================================
// In-flight races
// ============================================================================

#[tokio::test]
async fn superseded_slow_load_does_not_commit_tracking() {
    let loader = Arc::new(ResourceLoader::new(Arc::new(SlowEnglishFetcher)));

    // "en" is issued first but resolves last; "ka" is the newest request
    // and must win regardless of completion order.
    let (en, ka) = tokio::join!(
        loader.load_for_lang("en", true),
        loader.load_for_lang("ka", true),
    );
    en.unwrap();
    ka.unwrap();

    assert_eq!(loader.last_loaded_lang(), "ka");
}

#[tokio::test]
async fn superseded_failed_load_does_not_clear_tracking() {
    let loader = Arc::new(ResourceLoader::new(Arc::new(SlowFailingEnglishFetcher)));

    // The stale "en" load fails after the newer "ka" load already
    // committed; its failure must not wipe that tracking.
    let (en, ka) = tokio::join!(
        loader.load_for_lang("en", true),
        loader.load_for_lang("ka", true),
    );
    assert!(en.is_err());
    ka.unwrap();

    assert_eq!(loader.last_loaded_lang(), "ka");
}
