#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::time::Duration;

use integration_hub_provider::{DetailPayload, DetailSource, ListSource};
use serde_json::json;

use super::{ControllerOptions, PollingListController};
use crate::test_utils::{
    CountingListSource, GatedDetailSource, GatedListSource, RecordingNotifier, ids, labelled,
    records, remote_failure,
};

fn controller(
    list: Arc<dyn ListSource>,
    detail: Option<Arc<dyn DetailSource>>,
    notifier: Arc<RecordingNotifier>,
) -> PollingListController {
    PollingListController::new(
        ControllerOptions::new("workflow-runs"),
        list,
        detail,
        notifier,
    )
}

fn detail(value: serde_json::Value) -> DetailPayload {
    DetailPayload(value)
}

// ===== Refresh =====

#[tokio::test]
async fn loading_is_set_at_dispatch() {
    let source = GatedListSource::new();
    let c = controller(source.clone(), None, RecordingNotifier::new());

    let pending = tokio::spawn(c.refresh(labelled("a")));
    let state = c.snapshot();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert_eq!(c.filter().search_text, "a");

    source.release("a", Ok(records(&["1"]))).await;
    pending.await.unwrap();
    assert!(!c.snapshot().loading);
}

#[tokio::test]
async fn older_refresh_arriving_last_is_discarded() {
    let source = GatedListSource::new();
    let notifier = RecordingNotifier::new();
    let c = controller(source.clone(), None, notifier.clone());

    let a = tokio::spawn(c.refresh(labelled("a")));
    let b = tokio::spawn(c.refresh(labelled("b")));

    source.release("b", Ok(records(&["b1", "b2"]))).await;
    b.await.unwrap();
    source.release("a", Ok(records(&["a1"]))).await;
    a.await.unwrap();

    let state = c.snapshot();
    assert_eq!(ids(&state.records), vec!["b1", "b2"]);
    assert!(!state.loading);
    assert!(notifier.all().is_empty());
}

#[tokio::test]
async fn failed_refresh_keeps_records_and_notifies() {
    let source = GatedListSource::new();
    let notifier = RecordingNotifier::new();
    let c = controller(source.clone(), None, notifier.clone());

    let first = tokio::spawn(c.refresh(labelled("a")));
    source.release("a", Ok(records(&["1", "2"]))).await;
    first.await.unwrap();

    let second = tokio::spawn(c.reload());
    source
        .release("a", Err(remote_failure("Database connection failed")))
        .await;
    second.await.unwrap();

    let state = c.snapshot();
    assert_eq!(ids(&state.records), vec!["1", "2"]);
    assert_eq!(state.error.as_deref(), Some("Database connection failed"));
    assert!(!state.loading);
    assert_eq!(notifier.errors(), vec!["Database connection failed"]);
    assert_eq!(notifier.all()[0].title, "workflow-runs");
}

#[tokio::test]
async fn stale_failure_does_not_notify() {
    let source = GatedListSource::new();
    let notifier = RecordingNotifier::new();
    let c = controller(source.clone(), None, notifier.clone());

    let a = tokio::spawn(c.refresh(labelled("a")));
    let b = tokio::spawn(c.refresh(labelled("b")));
    source.release("b", Ok(records(&["b1"]))).await;
    b.await.unwrap();
    source.release("a", Err(remote_failure("too late"))).await;
    a.await.unwrap();

    assert!(c.snapshot().error.is_none());
    assert!(notifier.all().is_empty());
}

#[tokio::test]
async fn discarded_arrival_does_not_wake_subscribers() {
    let source = GatedListSource::new();
    let c = controller(source.clone(), None, RecordingNotifier::new());
    let mut rx = c.subscribe();

    let a = tokio::spawn(c.refresh(labelled("a")));
    let b = tokio::spawn(c.refresh(labelled("b")));
    let third = tokio::spawn(c.refresh(labelled("c")));
    rx.borrow_and_update();

    source.release("c", Ok(records(&["c1"]))).await;
    third.await.unwrap();
    assert!(rx.has_changed().unwrap());
    rx.borrow_and_update();

    // `b` is still in flight, so `loading` does not change either.
    source.release("a", Ok(records(&["a1"]))).await;
    a.await.unwrap();
    assert!(!rx.has_changed().unwrap());

    source.release("b", Ok(records(&["b1"]))).await;
    b.await.unwrap();
    assert!(rx.has_changed().unwrap());
    assert!(!rx.borrow_and_update().state().loading);
    assert_eq!(ids(&c.snapshot().records), vec!["c1"]);
}

#[tokio::test]
async fn set_filter_does_not_fetch() {
    let source = CountingListSource::new(records(&["1"]));
    let c = controller(source.clone(), None, RecordingNotifier::new());

    c.set_filter(labelled("invoice"));
    assert_eq!(c.filter().search_text, "invoice");
    assert!(!c.snapshot().loading);
    assert_eq!(source.calls(), 0);

    c.reload().await;
    assert_eq!(source.calls(), 1);
}

// ===== Selection =====

#[tokio::test]
async fn toggling_same_id_twice_collapses() {
    let list = CountingListSource::new(records(&["42"]));
    let details = GatedDetailSource::new();
    let c = controller(list, Some(details.clone()), RecordingNotifier::new());
    c.reload().await;

    let fetch = tokio::spawn(c.toggle_selection("42"));
    assert!(c.snapshot().detail_loading);
    details
        .release("42", Ok(detail(json!({"id": "42", "foo": "bar"}))))
        .await;
    fetch.await.unwrap();

    let state = c.snapshot();
    assert_eq!(state.selected_id.as_deref(), Some("42"));
    assert_eq!(state.detail.unwrap().get("foo"), Some(&json!("bar")));

    c.toggle_selection("42").await;
    let state = c.snapshot();
    assert!(state.selected_id.is_none());
    assert!(state.detail.is_none());
    assert!(!state.detail_loading);
}

#[tokio::test]
async fn detail_of_previous_selection_is_discarded() {
    let list = CountingListSource::new(records(&["a", "b"]));
    let details = GatedDetailSource::new();
    let notifier = RecordingNotifier::new();
    let c = controller(list, Some(details.clone()), notifier.clone());
    c.reload().await;

    let fetch_a = tokio::spawn(c.toggle_selection("a"));
    let fetch_b = tokio::spawn(c.toggle_selection("b"));
    let before = c.snapshot();

    details.release("a", Ok(detail(json!({"id": "a"})))).await;
    fetch_a.await.unwrap();
    assert_eq!(c.snapshot(), before);

    details.release("b", Ok(detail(json!({"id": "b"})))).await;
    fetch_b.await.unwrap();
    let state = c.snapshot();
    assert_eq!(state.selected_id.as_deref(), Some("b"));
    assert_eq!(state.detail.unwrap().get("id"), Some(&json!("b")));
    assert!(notifier.all().is_empty());
}

#[tokio::test]
async fn collapsed_row_ignores_its_late_detail() {
    let list = CountingListSource::new(records(&["a"]));
    let details = GatedDetailSource::new();
    let c = controller(list, Some(details.clone()), RecordingNotifier::new());
    c.reload().await;

    let fetch = tokio::spawn(c.toggle_selection("a"));
    c.toggle_selection("a").await;
    details.release("a", Ok(detail(json!({"id": "a"})))).await;
    fetch.await.unwrap();

    let state = c.snapshot();
    assert!(state.selected_id.is_none());
    assert!(state.detail.is_none());
}

#[tokio::test]
async fn detail_failure_collapses_and_notifies() {
    let list = CountingListSource::new(records(&["a"]));
    let details = GatedDetailSource::new();
    let notifier = RecordingNotifier::new();
    let c = controller(list, Some(details.clone()), notifier.clone());
    c.reload().await;

    let fetch = tokio::spawn(c.toggle_selection("a"));
    details.release("a", Err(remote_failure("Run not found"))).await;
    fetch.await.unwrap();

    let state = c.snapshot();
    assert!(state.selected_id.is_none());
    assert!(!state.detail_loading);
    assert_eq!(notifier.errors(), vec!["Run not found"]);
}

#[tokio::test]
async fn selection_without_detail_source_only_highlights() {
    let list = CountingListSource::new(records(&["a"]));
    let c = controller(list, None, RecordingNotifier::new());
    c.reload().await;

    c.toggle_selection("a").await;
    let state = c.snapshot();
    assert_eq!(state.selected_id.as_deref(), Some("a"));
    assert!(!state.detail_loading);
    assert!(state.detail.is_none());
}

// ===== Auto refresh =====

#[tokio::test(start_paused = true)]
async fn first_tick_comes_one_interval_after_enabling() {
    let source = CountingListSource::new(records(&["1"]));
    let mut c = controller(source.clone(), None, RecordingNotifier::new());

    c.set_auto_refresh(true);
    tokio::time::sleep(Duration::from_secs(9)).await;
    assert_eq!(source.calls(), 0);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(source.calls(), 1);
    assert_eq!(ids(&c.snapshot().records), vec!["1"]);
}

#[tokio::test(start_paused = true)]
async fn enabling_twice_runs_a_single_timer() {
    let source = CountingListSource::new(records(&["1"]));
    let mut c = controller(source.clone(), None, RecordingNotifier::new());

    c.set_auto_refresh(true);
    c.set_auto_refresh(true);
    assert!(c.snapshot().auto_refresh_enabled);

    tokio::time::sleep(Duration::from_secs(35)).await;
    assert_eq!(source.calls(), 3);

    c.set_auto_refresh(false);
    assert!(!c.snapshot().auto_refresh_enabled);
    assert!(!c.auto_refresh_enabled());
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(source.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn disabling_keeps_in_flight_refresh() {
    let source = GatedListSource::new();
    let mut c = controller(source.clone(), None, RecordingNotifier::new());

    c.set_auto_refresh(true);
    tokio::time::sleep(Duration::from_millis(10_500)).await;
    assert_eq!(source.calls(), 1);

    c.set_auto_refresh(false);
    source.release("", Ok(records(&["late"]))).await;

    let mut rx = c.subscribe();
    rx.wait_for(|m| !m.state().loading).await.unwrap();
    assert_eq!(ids(&c.snapshot().records), vec!["late"]);
}

#[tokio::test(start_paused = true)]
async fn timer_uses_current_filter() {
    let source = GatedListSource::new();
    let mut c = controller(source.clone(), None, RecordingNotifier::new());

    c.set_filter(labelled("invoice"));
    c.set_auto_refresh(true);
    tokio::time::sleep(Duration::from_millis(10_500)).await;

    // The pending fetch is keyed by the filter's search text.
    source.release("invoice", Ok(records(&["7"]))).await;
    let mut rx = c.subscribe();
    rx.wait_for(|m| !m.state().records.is_empty()).await.unwrap();
    c.set_auto_refresh(false);
}

// ===== Teardown =====

#[tokio::test]
async fn shutdown_ignores_in_flight_results() {
    let source = GatedListSource::new();
    let notifier = RecordingNotifier::new();
    let mut c = controller(source.clone(), None, notifier.clone());

    let pending = tokio::spawn(c.refresh(labelled("a")));
    c.shutdown();
    source.release("a", Err(remote_failure("gone"))).await;
    pending.await.unwrap();

    assert!(c.snapshot().records.is_empty());
    assert!(c.snapshot().error.is_none());
    assert!(notifier.all().is_empty());

    // Dispatches after teardown do nothing.
    c.reload().await;
    assert_eq!(source.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn dropping_controller_stops_timer() {
    let source = CountingListSource::new(records(&["1"]));
    let mut c = controller(source.clone(), None, RecordingNotifier::new());
    c.set_auto_refresh(true);
    drop(c);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(source.calls(), 0);
}
