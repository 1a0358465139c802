use std::time::Duration;

use tokio::sync::watch;

use super::state::{FilterSchema, FilterState, PAGE_KEY};
use super::{FilterError, Location};
use crate::debounce::Debounced;

/// Pending and committed filter state for one list page
///
/// - Any `update_filter` changes the pending state at once and rewrites the
///   location's query string.
/// - A non-page change also resets the page to 1 and is committed after
///   the debounce delay; each further change restarts the delay.
/// - A page change is committed immediately, together with whatever else
///   was pending.
#[derive(Debug)]
pub struct FilterController<L: Location> {
    schema: &'static FilterSchema,
    pending: FilterState,
    committed: Debounced<FilterState>,
    location: L,
}

impl<L: Location> FilterController<L> {
    /// Initialize both states from the current location
    pub fn new(schema: &'static FilterSchema, location: L, delay: Duration) -> Self {
        let initial = FilterState::from_url(schema, location.url());
        Self {
            schema,
            committed: Debounced::new(initial.clone(), delay),
            pending: initial,
            location,
        }
    }

    pub fn schema(&self) -> &'static FilterSchema {
        self.schema
    }

    pub fn pending(&self) -> &FilterState {
        &self.pending
    }

    pub fn committed(&self) -> FilterState {
        self.committed.current()
    }

    /// Receiver of committed states, for whoever fetches data
    pub fn subscribe(&self) -> watch::Receiver<FilterState> {
        self.committed.subscribe()
    }

    /// Number of commits so far
    pub fn generation(&self) -> u64 {
        self.committed.generation()
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn update_filter(&mut self, key: &str, value: &str) -> Result<(), FilterError> {
        if key == PAGE_KEY {
            self.pending.set_page_str(value)?;
            self.sync_location();
            self.committed.set_now(self.pending.clone());
            return Ok(());
        }

        if !self.schema.contains(key) {
            return Err(FilterError::UnknownKey {
                schema: self.schema.name,
                key: key.to_string(),
            });
        }
        if self.pending.get(key).as_deref() == Some(value) {
            return Ok(());
        }
        self.pending.set(key, value)?;
        self.pending.reset_page();
        self.sync_location();
        self.committed.set(self.pending.clone());
        Ok(())
    }

    pub fn set_page(&mut self, page: u32) -> Result<(), FilterError> {
        self.update_filter(PAGE_KEY, &page.to_string())
    }

    /// Clear every filter and go back to page 1, committed at once
    pub fn reset(&mut self) {
        self.pending = FilterState::new(self.schema);
        self.sync_location();
        self.committed.set_now(self.pending.clone());
    }

    /// Re-read the location after an outside navigation (back/forward)
    ///
    /// Both states are re-initialized; a pending debounce is dropped.
    pub fn on_location_change(&mut self) {
        let state = FilterState::from_url(self.schema, self.location.url());
        tracing::debug!(list = self.schema.name, page = state.page(), "Filters reloaded from location");
        self.pending = state.clone();
        if self.committed.current() == state {
            self.committed.cancel();
        } else {
            self.committed.set_now(state);
        }
    }

    fn sync_location(&mut self) {
        let mut url = self.location.url().clone();
        self.pending.write_to(&mut url);
        self.location.replace(url);
    }
}
