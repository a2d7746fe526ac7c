//! Pure list/selection state machine.
//!
//! [`ListModel`] holds no I/O. Every operation is split into a dispatch step
//! (`begin_*`), which updates the state and hands out a ticket, and an arrival
//! step (`finish_*`), which applies a result only if its ticket is still
//! current.

use integration_hub_provider::{DetailPayload, QueryFilter, Record};
use serde::Serialize;

/// Everything a list view renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerState {
    /// Last successfully fetched snapshot, in server order.
    pub records: Vec<Record>,
    /// At least one refresh has been dispatched and not yet resolved.
    pub loading: bool,
    /// Message of the last applied refresh failure.
    pub error: Option<String>,
    pub selected_id: Option<String>,
    /// Detail of `selected_id`. Never present without a selection.
    pub detail: Option<DetailPayload>,
    pub detail_loading: bool,
    pub auto_refresh_enabled: bool,
}

impl ControllerState {
    pub fn selected_record(&self) -> Option<&Record> {
        let id = self.selected_id.as_deref()?;
        self.records.iter().find(|r| r.id == id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }
}

/// Issued when a refresh is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    seq: u64,
}

impl RefreshTicket {
    pub fn seq(self) -> u64 {
        self.seq
    }
}

/// Issued when a detail fetch is dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    id: String,
    generation: u64,
}

impl DetailTicket {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// What an arrival did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arrival {
    /// Result was current and is now visible.
    Applied,
    /// Result was a current failure; carries the user-facing message.
    Failed(String),
    /// Result was stale and was dropped.
    Discarded,
}

/// List state plus the bookkeeping that keeps late responses out.
#[derive(Debug, Clone, Default)]
pub struct ListModel {
    state: ControllerState,
    filter: QueryFilter,
    /// Last sequence number handed out.
    issued_seq: u64,
    /// Highest sequence number whose result (success or failure) was applied.
    applied_seq: u64,
    /// Dispatched refreshes that have not arrived yet.
    in_flight: usize,
    /// Bumped on every selection change; detail tickets from older
    /// generations are stale.
    detail_generation: u64,
    torn_down: bool,
}

impl ListModel {
    pub fn new(filter: QueryFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn filter(&self) -> &QueryFilter {
        &self.filter
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Replace the current filter without fetching.
    pub fn set_filter(&mut self, filter: QueryFilter) -> bool {
        if self.torn_down || self.filter == filter {
            return false;
        }
        self.filter = filter;
        true
    }

    // ===== Refresh =====

    /// Start a refresh. `filter` replaces the current filter when given.
    ///
    /// Returns `None` after teardown.
    pub fn begin_refresh(&mut self, filter: Option<QueryFilter>) -> Option<RefreshTicket> {
        if self.torn_down {
            return None;
        }
        if let Some(filter) = filter {
            self.filter = filter;
        }
        self.issued_seq += 1;
        self.in_flight += 1;
        self.state.loading = true;
        self.state.error = None;
        Some(RefreshTicket {
            seq: self.issued_seq,
        })
    }

    /// Apply the result of a refresh.
    ///
    /// A result older than the newest applied one is dropped. Either way the
    /// in-flight count goes down, so `loading` clears once every dispatched
    /// refresh has come back.
    pub fn finish_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Record>, String>,
    ) -> Arrival {
        if self.torn_down {
            return Arrival::Discarded;
        }
        self.in_flight = self.in_flight.saturating_sub(1);
        self.state.loading = self.in_flight > 0;

        if ticket.seq <= self.applied_seq {
            return Arrival::Discarded;
        }
        self.applied_seq = ticket.seq;

        match result {
            Ok(records) => {
                self.state.records = records;
                self.state.error = None;
                Arrival::Applied
            }
            Err(message) => {
                self.state.error = Some(message.clone());
                Arrival::Failed(message)
            }
        }
    }

    // ===== Selection =====

    /// Toggle the expansion of `id`.
    ///
    /// Returns a ticket when a detail fetch must be issued, that is when a new
    /// id is selected and `fetch_detail` is set.
    pub fn toggle_selection(&mut self, id: &str, fetch_detail: bool) -> Option<DetailTicket> {
        if self.torn_down {
            return None;
        }
        // Any change of selection invalidates every outstanding detail fetch.
        self.detail_generation += 1;
        self.state.detail = None;

        if self.state.selected_id.as_deref() == Some(id) {
            self.state.selected_id = None;
            self.state.detail_loading = false;
            return None;
        }

        self.state.selected_id = Some(id.to_string());
        self.state.detail_loading = fetch_detail;
        fetch_detail.then(|| DetailTicket {
            id: id.to_string(),
            generation: self.detail_generation,
        })
    }

    /// Apply the result of a detail fetch.
    ///
    /// A failure collapses the row.
    pub fn finish_detail(
        &mut self,
        ticket: &DetailTicket,
        result: Result<DetailPayload, String>,
    ) -> Arrival {
        let current = !self.torn_down
            && ticket.generation == self.detail_generation
            && self.state.selected_id.as_deref() == Some(ticket.id.as_str());
        if !current {
            return Arrival::Discarded;
        }

        self.state.detail_loading = false;
        match result {
            Ok(detail) => {
                self.state.detail = Some(detail);
                Arrival::Applied
            }
            Err(message) => {
                self.state.selected_id = None;
                self.state.detail = None;
                self.detail_generation += 1;
                Arrival::Failed(message)
            }
        }
    }

    // ===== Lifecycle =====

    pub fn set_auto_refresh_flag(&mut self, enabled: bool) -> bool {
        if self.torn_down || self.state.auto_refresh_enabled == enabled {
            return false;
        }
        self.state.auto_refresh_enabled = enabled;
        true
    }

    /// Make every later dispatch and arrival a no-op.
    pub fn tear_down(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        self.torn_down = true;
        self.state.auto_refresh_enabled = false;
        true
    }
}
