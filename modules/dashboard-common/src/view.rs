//! Per-view request state.
//!
//! Each data view on a page (snapshot, report, map analysis, ...) moves
//! through `Idle -> Loading -> {Success, Error}` independently of the others.
//! Requests are tagged with a [`Ticket`]; only the most recently issued
//! ticket may write its result back, so a slow response for an old selection
//! can never overwrite a newer one.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Sequence number of a dispatched request for one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct ViewState<T> {
    data: Option<T>,
    error: Option<String>,
    loading: bool,
    seq: u64,
    fetched_at: Option<DateTime<Utc>>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
            seq: 0,
            fetched_at: None,
        }
    }
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ViewStatus {
        if self.loading {
            ViewStatus::Loading
        } else if self.error.is_some() {
            ViewStatus::Error
        } else if self.data.is_some() {
            ViewStatus::Success
        } else {
            ViewStatus::Idle
        }
    }

    /// Start a request, keeping whatever data is currently displayed.
    pub fn begin(&mut self) -> Ticket {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        Ticket(self.seq)
    }

    /// Start a request and blank the view while it runs.
    pub fn begin_fresh(&mut self) -> Ticket {
        self.data = None;
        self.fetched_at = None;
        self.begin()
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.seq
    }

    /// Apply a finished request. Returns `false` (and changes nothing) when
    /// a newer request has been issued since `ticket`.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.fetched_at = Some(Utc::now());
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    /// Display `data` immediately (e.g. from a cache) and invalidate any
    /// request still in flight.
    pub fn show(&mut self, data: T) {
        self.seq += 1;
        self.loading = false;
        self.error = None;
        self.data = Some(data);
        self.fetched_at = Some(Utc::now());
    }

    /// Record an error that was detected before any request was sent.
    /// In-flight requests are invalidated.
    pub fn reject(&mut self, message: impl Into<String>) {
        self.seq += 1;
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Clear the error slot. Does not retry.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}
