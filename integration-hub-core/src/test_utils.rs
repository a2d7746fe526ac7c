//! Test helper module
//!
//! Provides mock sources whose responses are released by the test, so
//! arrival order can be chosen independently of dispatch order.

#![allow(clippy::expect_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use integration_hub_provider::{
    CommandRequest, CommandSink, DetailPayload, DetailSource, ListSource, QueryFilter, Record,
    RecordShape, RemoteError,
};
use serde_json::{Value, json};
use tokio::sync::oneshot;

use crate::traits::Notifier;
use crate::types::Notification;

type ListReply = Result<Vec<Record>, RemoteError>;
type DetailReply = Result<DetailPayload, RemoteError>;

// ===== Fixtures =====

pub fn record(id: &str, status: &str) -> Record {
    Record::from_json(json!({"id": id, "status": status}), &RecordShape::default())
        .expect("fixture record always has an id")
}

pub fn records(ids: &[&str]) -> Vec<Record> {
    ids.iter().map(|id| record(id, "completed")).collect()
}

pub fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

pub fn remote_failure(message: &str) -> RemoteError {
    RemoteError::RemoteFailure {
        source: "mock".to_string(),
        status: Some(500),
        message: message.to_string(),
    }
}

/// Filter whose search text labels a dispatch for [`GatedListSource`].
pub fn labelled(label: &str) -> QueryFilter {
    QueryFilter {
        search_text: label.to_string(),
        ..QueryFilter::default()
    }
}

fn gate_closed(source: &str) -> RemoteError {
    RemoteError::NetworkError {
        source: source.to_string(),
        detail: "gate dropped".to_string(),
    }
}

async fn wait_for_key<T>(pending: &Mutex<HashMap<String, T>>, key: &str) -> T {
    loop {
        let taken = pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        if let Some(value) = taken {
            return value;
        }
        tokio::task::yield_now().await;
    }
}

// ===== GatedListSource =====

/// List source that blocks each fetch until the test releases it.
///
/// Fetches are keyed by the filter's search text.
#[derive(Default)]
pub struct GatedListSource {
    pending: Mutex<HashMap<String, oneshot::Sender<ListReply>>>,
    calls: AtomicUsize,
}

impl GatedListSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Wait until a fetch labelled `label` is pending, then answer it.
    pub async fn release(&self, label: &str, reply: ListReply) {
        let tx = wait_for_key(&self.pending, label).await;
        let _ = tx.send(reply);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListSource for GatedListSource {
    fn name(&self) -> &str {
        "gated-list"
    }

    async fn fetch_list(&self, filter: &QueryFilter) -> ListReply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = oneshot::channel();
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(filter.search_text.clone(), tx);
        rx.await.unwrap_or_else(|_| Err(gate_closed(self.name())))
    }
}

// ===== GatedDetailSource =====

/// Detail source that blocks each fetch until the test releases it.
#[derive(Default)]
pub struct GatedDetailSource {
    pending: Mutex<HashMap<String, oneshot::Sender<DetailReply>>>,
}

impl GatedDetailSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Wait until the fetch for `id` is pending, then answer it.
    pub async fn release(&self, id: &str, reply: DetailReply) {
        let tx = wait_for_key(&self.pending, id).await;
        let _ = tx.send(reply);
    }
}

#[async_trait]
impl DetailSource for GatedDetailSource {
    fn name(&self) -> &str {
        "gated-detail"
    }

    async fn fetch_detail(&self, id: &str) -> DetailReply {
        let (tx, rx) = oneshot::channel();
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.to_string(), tx);
        rx.await.unwrap_or_else(|_| Err(gate_closed(self.name())))
    }
}

// ===== CountingListSource =====

/// List source answering immediately with a fixed snapshot.
pub struct CountingListSource {
    records: Vec<Record>,
    calls: AtomicUsize,
}

impl CountingListSource {
    pub fn new(records: Vec<Record>) -> Arc<Self> {
        Arc::new(Self {
            records,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListSource for CountingListSource {
    fn name(&self) -> &str {
        "counting-list"
    }

    async fn fetch_list(&self, _filter: &QueryFilter) -> ListReply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

// ===== RecordingNotifier =====

#[derive(Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn all(&self) -> Vec<Notification> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .filter(Notification::is_error)
            .map(|n| n.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

// ===== MockCommandSink =====

/// A request seen by [`MockCommandSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SentCommand {
    Post(Value),
    Get(Vec<(String, String)>),
}

/// Command sink replaying scripted replies and recording requests.
///
/// Without a scripted reply it answers `{"success": true}`.
#[derive(Default)]
pub struct MockCommandSink {
    replies: tokio::sync::Mutex<VecDeque<Result<Value, RemoteError>>>,
    sent: tokio::sync::Mutex<Vec<SentCommand>>,
}

impl MockCommandSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn push_reply(&self, reply: Result<Value, RemoteError>) {
        self.replies.lock().await.push_back(reply);
    }

    pub async fn sent(&self) -> Vec<SentCommand> {
        self.sent.lock().await.clone()
    }

    async fn next_reply(&self) -> Result<Value, RemoteError> {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(json!({"success": true})))
    }
}

#[async_trait]
impl CommandSink for MockCommandSink {
    fn name(&self) -> &str {
        "mock-commands"
    }

    async fn post(&self, request: CommandRequest) -> Result<Value, RemoteError> {
        self.sent
            .lock()
            .await
            .push(SentCommand::Post(request.into_value()));
        self.next_reply().await
    }

    async fn get(&self, params: &[(&str, &str)]) -> Result<Value, RemoteError> {
        let params = params
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        self.sent.lock().await.push(SentCommand::Get(params));
        self.next_reply().await
    }
}
