use std::sync::Arc;
use std::time::Duration;

use skill_core::quiz::QuizIntent;
use storage::repository::{InMemoryKeyValueStore, KeyValueStore, Storage, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

const PROGRESS_KEY: &str = "skill-enhancer-hooks-progress";

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_lists_topics() {
    let mut harness = setup_view_harness(ViewKind::Topics);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("React Hooks"), "missing topic in {html}");
    assert!(html.contains("2 scenarios"), "missing count in {html}");
    assert!(html.contains("Coming Soon"), "missing coming soon in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn topics_view_smoke_shows_mastery_for_started_topics() {
    let storage = Storage::in_memory();
    storage
        .slots
        .set(
            PROGRESS_KEY,
            r#"{"currentIndex":0,"completed":1,"revealed":0,"completedIds":["hooks-1"]}"#,
        )
        .await
        .unwrap();
    let mut harness = setup_view_harness_with_storage(ViewKind::Topics, storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("50% mastered"), "missing mastery in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Practice("hooks"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Progress: 1/2"), "missing progress in {html}");
    assert!(html.contains("A counter must re-render"), "missing problem in {html}");
    assert!(html.contains("let count = 0;"), "missing code in {html}");
    assert!(html.contains("useMemo"), "missing option in {html}");
    assert!(!html.contains("Correct!"), "explanation shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_answer_shows_explanation() {
    let mut harness = setup_view_harness(ViewKind::Practice("hooks"));
    harness.settle().await;

    let handles = harness.practice_handles.clone().expect("handles");
    handles.dispatch().call(QuizIntent::Select(0));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Correct!"), "missing verdict in {html}");
    assert!(html.contains("useState triggers a re-render."), "missing explanation in {html}");
    assert!(html.contains("Next Challenge"), "missing next button in {html}");

    let stored = harness.slots.get(PROGRESS_KEY).await.unwrap();
    assert!(stored.is_some_and(|raw| raw.contains("\"completed\":1")));
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_hint_and_reveal() {
    let mut harness = setup_view_harness(ViewKind::Practice("hooks"));
    harness.settle().await;
    let handles = harness.practice_handles.clone().expect("handles");

    handles.dispatch().call(QuizIntent::Hint);
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Does the UI need to update?"), "missing hint in {html}");

    handles.dispatch().call(QuizIntent::Reveal);
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Answer Revealed"), "missing reveal title in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_completion() {
    let storage = Storage::in_memory();
    storage
        .slots
        .set(
            PROGRESS_KEY,
            r#"{"currentIndex":1,"completed":2,"revealed":1,"completedIds":["hooks-1","hooks-2"]}"#,
        )
        .await
        .unwrap();
    let mut harness = setup_view_harness_with_storage(ViewKind::Practice("hooks"), storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Start Over"), "missing reset in {html}");
    assert!(html.contains("50%"), "missing mastery rate in {html}");

    let handles = harness.practice_handles.clone().expect("handles");
    handles.reset().call(());
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Progress: 1/2"), "missing restart in {html}");
    assert_eq!(harness.slots.get(PROGRESS_KEY).await.unwrap(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_offers_restart_when_last_answer_leaves_gaps() {
    let storage = Storage::in_memory();
    storage
        .slots
        .set(
            PROGRESS_KEY,
            r#"{"currentIndex":1,"completed":0,"revealed":0,"completedIds":[]}"#,
        )
        .await
        .unwrap();
    let mut harness = setup_view_harness_with_storage(ViewKind::Practice("hooks"), storage);
    harness.settle().await;

    let handles = harness.practice_handles.clone().expect("handles");
    handles.dispatch().call(QuizIntent::Select(1));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Correct!"), "missing verdict in {html}");
    assert!(html.contains("Start Over"), "missing restart in {html}");
    assert!(!html.contains("All scenarios completed!"), "claims completion in {html}");

    handles.reset().call(());
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Progress: 1/2"), "missing restart in {html}");
    assert!(html.contains("A counter must re-render"), "missing first question in {html}");
}

/// Holds every write for a while, like a busy disk.
struct SlowStore {
    inner: InMemoryKeyValueStore,
}

#[async_trait::async_trait]
impl KeyValueStore for SlowStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::time::sleep(Duration::from_millis(200)).await;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_keeps_card_while_saving() {
    let storage = Storage {
        slots: Arc::new(SlowStore {
            inner: InMemoryKeyValueStore::new(),
        }),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Practice("hooks"), storage);
    harness.settle().await;

    let handles = harness.practice_handles.clone().expect("handles");
    handles.dispatch().call(QuizIntent::Select(0));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("A counter must re-render"), "card vanished in {html}");
    assert!(html.contains("Progress: 1/2"), "progress vanished in {html}");

    for _ in 0..8 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Correct!"), "missing verdict in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_unknown_topic() {
    let mut harness = setup_view_harness(ViewKind::Practice("cobol"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Topic not found."), "missing message in {html}");
    assert!(html.contains("Back to topics"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_empty_topic() {
    let mut harness = setup_view_harness(ViewKind::Practice("sql"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No scenarios for this topic yet."), "missing message in {html}");
}

struct FailingStore;

#[async_trait::async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_survives_storage_failure() {
    let storage = Storage {
        slots: Arc::new(FailingStore),
    };
    let mut harness = setup_view_harness_with_storage(ViewKind::Practice("hooks"), storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Progress: 1/2"), "missing question in {html}");
}
