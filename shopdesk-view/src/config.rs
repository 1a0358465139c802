//! View configuration
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | SHOPDESK_SEARCH_DEBOUNCE_MS | 500 | Quiet period before filters are committed |
//! | SHOPDESK_PAGE_SIZE | 10 | Rows per list page |

use std::time::Duration;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub debounce: Duration,
    pub page_size: u32,
}

impl ViewConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            debounce: std::env::var("SHOPDESK_SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_DEBOUNCE),
            page_size: std::env::var("SHOPDESK_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &u32| n > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
