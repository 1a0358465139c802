//! List view state machine
//!
//! A [`ListView`] owns a [`FilterController`] and a [`ListSource`]. The
//! committed filter state is the query key: every commit issues a fetch,
//! fetches run as spawned tasks, and their results come back through
//! [`ListView::next_event`]. A renderer only reads `rows()`, `phase()` and
//! `notifications()`.

use std::sync::Arc;

use async_trait::async_trait;
use shared::Page;
use shopdesk_client::{ClientError, ClientResult};
use tokio::sync::{mpsc, watch};

use crate::config::ViewConfig;
use crate::filter::{FilterController, FilterError, FilterSchema, FilterState, Location};
use crate::notify::Notifications;

/// Where a list page gets its rows from
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    type Item: Clone + Send + 'static;

    fn schema(&self) -> &'static FilterSchema;

    async fn fetch(&self, filters: &FilterState, page_size: u32) -> ClientResult<Page<Self::Item>>;

    async fn delete(&self, id: &str) -> ClientResult<()>;

    async fn update_status(&self, _id: &str, _status: &str) -> ClientResult<()> {
        Err(ClientError::Unsupported("update_status"))
    }
}

/// Loading indicator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing requested yet
    Initial,
    /// First fetch in flight, no rows to show
    Loading,
    /// Refetch in flight, previous rows stay visible
    Refreshing,
    Idle,
}

impl LoadPhase {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Loading | Self::Refreshing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// A fetch was issued for this committed state
    Fetching { seq: u64, page: u32 },
    Loaded { seq: u64, total: u64 },
    /// The fetch failed; the table is left empty
    Failed { seq: u64, message: String },
    /// A response overtaken by a newer fetch was dropped
    Stale { seq: u64 },
    /// The committed state can no longer change
    Closed,
}

struct Completion<T> {
    seq: u64,
    result: ClientResult<Page<T>>,
}

pub struct ListView<S: ListSource, L: Location> {
    source: Arc<S>,
    filters: FilterController<L>,
    committed: watch::Receiver<FilterState>,
    page_size: u32,
    rows: Vec<S::Item>,
    total: u64,
    phase: LoadPhase,
    has_data: bool,
    issued: u64,
    done_tx: mpsc::UnboundedSender<Completion<S::Item>>,
    done_rx: mpsc::UnboundedReceiver<Completion<S::Item>>,
    confirming: Option<String>,
    notifications: Notifications,
}

impl<S: ListSource, L: Location> ListView<S, L> {
    pub fn new(source: S, location: L, config: &ViewConfig) -> Self {
        let filters = FilterController::new(source.schema(), location, config.debounce);
        let committed = filters.subscribe();
        let (done_tx, done_rx) = mpsc::unbounded_channel();
        Self {
            source: Arc::new(source),
            filters,
            committed,
            page_size: config.page_size.max(1),
            rows: Vec::new(),
            total: 0,
            phase: LoadPhase::Initial,
            has_data: false,
            issued: 0,
            done_tx,
            done_rx,
            confirming: None,
            notifications: Notifications::default(),
        }
    }

    pub fn filters(&self) -> &FilterController<L> {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterController<L> {
        &mut self.filters
    }

    pub fn update_filter(&mut self, key: &str, value: &str) -> Result<(), FilterError> {
        self.filters.update_filter(key, value)
    }

    pub fn rows(&self) -> &[S::Item] {
        &self.rows
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.page_size))
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Render the "no data" row
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Notifications {
        &mut self.notifications
    }

    /// Drive the view: issue the first fetch, react to committed filter
    /// changes, and apply fetch results
    pub async fn next_event(&mut self) -> ListEvent {
        if self.issued == 0 {
            self.committed.mark_unchanged();
            return self.refresh();
        }

        tokio::select! {
            changed = self.committed.changed() => match changed {
                Ok(()) => {
                    self.committed.mark_unchanged();
                    self.refresh()
                }
                Err(_) => ListEvent::Closed,
            },
            Some(done) = self.done_rx.recv() => self.complete(done),
        }
    }

    /// Refetch with the current committed filters
    pub fn refresh(&mut self) -> ListEvent {
        let state = self.committed.borrow().clone();
        self.issued += 1;
        let seq = self.issued;
        self.phase = if self.has_data {
            LoadPhase::Refreshing
        } else {
            LoadPhase::Loading
        };

        let page = state.page();
        let page_size = self.page_size;
        let source = Arc::clone(&self.source);
        let done = self.done_tx.clone();
        tracing::debug!(list = state.schema().name, seq, page, "Fetching list");
        tokio::spawn(async move {
            let result = source.fetch(&state, page_size).await;
            let _ = done.send(Completion { seq, result });
        });

        ListEvent::Fetching { seq, page }
    }

    fn complete(&mut self, done: Completion<S::Item>) -> ListEvent {
        let seq = done.seq;
        if seq < self.issued {
            tracing::debug!(seq, latest = self.issued, "Dropping stale list response");
            return ListEvent::Stale { seq };
        }

        self.phase = LoadPhase::Idle;
        match done.result {
            Ok(page) => {
                self.rows = page.items;
                self.total = page.total;
                self.has_data = true;
                ListEvent::Loaded {
                    seq,
                    total: self.total,
                }
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "List fetch failed");
                self.rows.clear();
                self.total = 0;
                ListEvent::Failed {
                    seq,
                    message: e.user_message(),
                }
            }
        }
    }

    /// Ask for confirmation before deleting `id`
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.confirming = Some(id.into());
    }

    pub fn cancel_delete(&mut self) {
        self.confirming = None;
    }

    /// Row awaiting delete confirmation
    pub fn confirming(&self) -> Option<&str> {
        self.confirming.as_deref()
    }

    /// Delete the row awaiting confirmation. Returns whether it was deleted.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.confirming.take() else {
            return false;
        };
        let result = self.source.delete(&id).await;
        self.after_mutation(result, "Deleted successfully")
    }

    pub async fn update_status(&mut self, id: &str, status: &str) -> bool {
        let result = self.source.update_status(id, status).await;
        self.after_mutation(result, "Status updated")
    }

    fn after_mutation(&mut self, result: ClientResult<()>, success: &str) -> bool {
        match result {
            Ok(()) => {
                self.notifications.success(success);
                self.refresh();
                true
            }
            Err(e) => {
                self.notifications.error(e.user_message());
                false
            }
        }
    }
}
