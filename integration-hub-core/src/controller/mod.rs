//! Polling list controller
//!
//! Keeps an eventually consistent local copy of one remote collection, drives
//! manual and timer refreshes, and expands one record at a time with a lazily
//! fetched detail payload.
//!
//! State lives in a [`tokio::sync::watch`] channel holding a [`ListModel`].
//! Every operation mutates it once at dispatch time and once on arrival; stale
//! arrivals are dropped without waking subscribers.
//!
//! Operations return a `'static` future that performs the request and applies
//! the result. Await it to wait for the arrival, or use the `spawn_*`
//! variants to run it on the current tokio runtime.

mod model;

pub use model::{Arrival, ControllerState, DetailTicket, ListModel, RefreshTicket};

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use integration_hub_provider::{
    DetailPayload, DetailSource, ListSource, QueryFilter, Record, RemoteError,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::traits::Notifier;
use crate::types::Notification;

/// Default auto-refresh period
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// Construction parameters of a controller.
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Name used in logs and as notification title.
    pub name: String,
    pub refresh_interval: Duration,
    pub initial_filter: QueryFilter,
}

impl ControllerOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            initial_filter: QueryFilter::default(),
        }
    }

    #[must_use]
    pub fn with_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: QueryFilter) -> Self {
        self.initial_filter = filter;
        self
    }
}

struct Inner {
    name: String,
    refresh_interval: Duration,
    model: watch::Sender<ListModel>,
    list: Arc<dyn ListSource>,
    detail: Option<Arc<dyn DetailSource>>,
    notifier: Arc<dyn Notifier>,
}

impl Inner {
    fn dispatch_refresh(self: &Arc<Self>, filter: Option<QueryFilter>) -> BoxFuture<'static, ()> {
        let mut dispatched = None;
        self.model.send_if_modified(|m| {
            dispatched = m
                .begin_refresh(filter)
                .map(|ticket| (ticket, m.filter().clone()));
            dispatched.is_some()
        });
        let Some((ticket, filter)) = dispatched else {
            return future::ready(()).boxed();
        };

        log::debug!("[{}] refresh #{} dispatched", self.name, ticket.seq());

        let inner = Arc::clone(self);
        async move {
            let result = inner.list.fetch_list(&filter).await;
            inner.apply_refresh(ticket, result);
        }
        .boxed()
    }

    fn apply_refresh(
        &self,
        ticket: RefreshTicket,
        result: Result<Vec<Record>, RemoteError>,
    ) {
        let failure = result.as_ref().err().cloned();
        let result = result.map_err(|e| e.user_message());

        let mut arrival = Arrival::Discarded;
        self.model.send_if_modified(|m| {
            let was_loading = m.state().loading;
            arrival = m.finish_refresh(ticket, result);
            arrival != Arrival::Discarded || m.state().loading != was_loading
        });

        match arrival {
            Arrival::Applied => {
                log::debug!("[{}] refresh #{} applied", self.name, ticket.seq());
            }
            Arrival::Failed(message) => {
                if failure.as_ref().is_some_and(RemoteError::is_expected) {
                    log::warn!("[{}] refresh #{} failed: {message}", self.name, ticket.seq());
                } else {
                    log::error!("[{}] refresh #{} failed: {message}", self.name, ticket.seq());
                }
                self.notifier.notify(Notification::error(&self.name, message));
            }
            Arrival::Discarded => {
                log::debug!("[{}] refresh #{} discarded (stale)", self.name, ticket.seq());
            }
        }
    }

    fn dispatch_toggle(self: &Arc<Self>, id: &str) -> BoxFuture<'static, ()> {
        let fetch_detail = self.detail.is_some();
        let mut ticket = None;
        self.model.send_if_modified(|m| {
            if m.is_torn_down() {
                return false;
            }
            ticket = m.toggle_selection(id, fetch_detail);
            true
        });
        let (Some(ticket), Some(detail)) = (ticket, self.detail.clone()) else {
            return future::ready(()).boxed();
        };

        let inner = Arc::clone(self);
        async move {
            let result = detail.fetch_detail(ticket.id()).await;
            inner.apply_detail(&ticket, result);
        }
        .boxed()
    }

    fn apply_detail(
        &self,
        ticket: &DetailTicket,
        result: Result<DetailPayload, RemoteError>,
    ) {
        let result = result.map_err(|e| e.user_message());

        let mut arrival = Arrival::Discarded;
        self.model.send_if_modified(|m| {
            arrival = m.finish_detail(ticket, result);
            arrival != Arrival::Discarded
        });

        match arrival {
            Arrival::Applied => log::debug!("[{}] detail {} loaded", self.name, ticket.id()),
            Arrival::Failed(message) => {
                log::warn!("[{}] detail {} failed: {message}", self.name, ticket.id());
                self.notifier.notify(Notification::error(&self.name, message));
            }
            Arrival::Discarded => {
                log::debug!("[{}] detail {} discarded (stale)", self.name, ticket.id());
            }
        }
    }
}

/// Polling + selection + detail-expansion controller for one list view.
///
/// Dropping the controller cancels the auto-refresh timer and ignores every
/// response that is still in flight.
pub struct PollingListController {
    inner: Arc<Inner>,
    timer: Option<JoinHandle<()>>,
}

impl PollingListController {
    /// Create a controller. Nothing is fetched until the first refresh.
    pub fn new(
        options: ControllerOptions,
        list: Arc<dyn ListSource>,
        detail: Option<Arc<dyn DetailSource>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (model, _) = watch::channel(ListModel::new(options.initial_filter));
        Self {
            inner: Arc::new(Inner {
                name: options.name,
                refresh_interval: options.refresh_interval,
                model,
                list,
                detail,
                notifier,
            }),
            timer: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn has_detail(&self) -> bool {
        self.inner.detail.is_some()
    }

    // ===== Refresh =====

    /// Fetch the list with `filter`, which also becomes the current filter.
    ///
    /// `loading` is set before this returns. Failures end up in
    /// `ControllerState::error` and in a notification, never in the caller.
    pub fn refresh(&self, filter: QueryFilter) -> BoxFuture<'static, ()> {
        self.inner.dispatch_refresh(Some(filter))
    }

    /// Fetch the list with the current filter.
    pub fn reload(&self) -> BoxFuture<'static, ()> {
        self.inner.dispatch_refresh(None)
    }

    pub fn spawn_refresh(&self, filter: QueryFilter) -> JoinHandle<()> {
        tokio::spawn(self.refresh(filter))
    }

    pub fn spawn_reload(&self) -> JoinHandle<()> {
        tokio::spawn(self.reload())
    }

    /// Replace the current filter without fetching.
    pub fn set_filter(&self, filter: QueryFilter) {
        self.inner.model.send_if_modified(|m| m.set_filter(filter));
    }

    pub fn filter(&self) -> QueryFilter {
        self.inner.model.borrow().filter().clone()
    }

    // ===== Selection =====

    /// Expand `id`, or collapse it when it is already expanded.
    ///
    /// Expanding a new id fetches its detail (when the controller has a detail
    /// source); the result is shown only if the selection has not changed in
    /// the meantime.
    pub fn toggle_selection(&self, id: &str) -> BoxFuture<'static, ()> {
        self.inner.dispatch_toggle(id)
    }

    pub fn spawn_toggle_selection(&self, id: &str) -> JoinHandle<()> {
        tokio::spawn(self.toggle_selection(id))
    }

    // ===== Auto refresh =====

    /// Start or stop the periodic refresh.
    ///
    /// Enabling twice keeps the one timer; the first tick comes one interval
    /// after enabling. Disabling stops the timer at once, while refreshes
    /// already in flight still arrive. Must be called inside a tokio runtime
    /// when enabling.
    pub fn set_auto_refresh(&mut self, enabled: bool) {
        if self.inner.model.borrow().is_torn_down() {
            return;
        }

        if enabled {
            if self.timer.is_none() {
                self.timer = Some(self.start_timer());
                log::info!(
                    "[{}] auto-refresh on, every {:?}",
                    self.inner.name,
                    self.inner.refresh_interval
                );
            }
        } else if let Some(timer) = self.timer.take() {
            timer.abort();
            log::info!("[{}] auto-refresh off", self.inner.name);
        }

        self.inner
            .model
            .send_if_modified(|m| m.set_auto_refresh_flag(enabled));
    }

    pub fn auto_refresh_enabled(&self) -> bool {
        self.timer.is_some()
    }

    fn start_timer(&self) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        let period = inner.refresh_interval;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                // Each tick runs on its own task so aborting the timer leaves
                // in-flight refreshes alone.
                tokio::spawn(inner.dispatch_refresh(None));
            }
        })
    }

    // ===== Observation =====

    /// Copy of the current state.
    pub fn snapshot(&self) -> ControllerState {
        self.inner.model.borrow().state().clone()
    }

    /// Change-notified handle on the model.
    pub fn subscribe(&self) -> watch::Receiver<ListModel> {
        self.inner.model.subscribe()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&ControllerState) -> R) -> R {
        f(self.inner.model.borrow().state())
    }

    // ===== Teardown =====

    /// Cancel the timer and ignore every later arrival.
    pub fn shutdown(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        if self.inner.model.send_if_modified(ListModel::tear_down) {
            log::debug!("[{}] controller shut down", self.inner.name);
        }
    }
}

impl Drop for PollingListController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests;
