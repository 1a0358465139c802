use std::num::NonZeroU32;

use reqwest::Url;

use super::FilterError;

/// Query key of the page number
pub const PAGE_KEY: &str = "page";

/// Filter keys a list page understands, in URL order
#[derive(Debug, PartialEq, Eq)]
pub struct FilterSchema {
    pub name: &'static str,
    pub keys: &'static [&'static str],
}

impl FilterSchema {
    fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| *k == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        key == PAGE_KEY || self.index_of(key).is_some()
    }
}

pub static PRODUCT_FILTERS: FilterSchema = FilterSchema {
    name: "products",
    keys: &["search", "category", "status"],
};

pub static ORDER_FILTERS: FilterSchema = FilterSchema {
    name: "orders",
    keys: &["search", "status", "date"],
};

pub static USER_FILTERS: FilterSchema = FilterSchema {
    name: "users",
    keys: &["search", "role"],
};

pub static VOUCHER_FILTERS: FilterSchema = FilterSchema {
    name: "vouchers",
    keys: &["search", "status"],
};

pub static POST_FILTERS: FilterSchema = FilterSchema {
    name: "posts",
    keys: &["search", "category"],
};

/// String-valued filters plus a 1-based page
///
/// An empty value means "no filter". The page is always a positive integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    schema: &'static FilterSchema,
    values: Vec<String>,
    page: NonZeroU32,
}

impl FilterState {
    /// Every filter empty, page 1
    pub fn new(schema: &'static FilterSchema) -> Self {
        Self {
            schema,
            values: vec![String::new(); schema.keys.len()],
            page: NonZeroU32::MIN,
        }
    }

    /// Read the known filter keys from a URL's query string
    ///
    /// Unknown keys are ignored and a missing, zero or garbled page reads
    /// as page 1.
    pub fn from_url(schema: &'static FilterSchema, url: &Url) -> Self {
        let mut state = Self::new(schema);
        for (key, value) in url.query_pairs() {
            if key == PAGE_KEY {
                if let Ok(page) = value.trim().parse::<NonZeroU32>() {
                    state.page = page;
                }
            } else if let Some(i) = schema.index_of(&key) {
                state.values[i] = value.into_owned();
            }
        }
        state
    }

    /// Write the filters into `url`, keeping unrelated query parameters
    ///
    /// Non-empty filters go first in schema order, then `page`, then any
    /// foreign parameters as they were.
    pub fn write_to(&self, url: &mut Url) {
        let foreign: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| !self.schema.contains(k))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in self.schema.keys.iter().zip(&self.values) {
            if !value.is_empty() {
                pairs.append_pair(key, value);
            }
        }
        pairs.append_pair(PAGE_KEY, &self.page.to_string());
        for (key, value) in &foreign {
            pairs.append_pair(key, value);
        }
    }

    pub fn schema(&self) -> &'static FilterSchema {
        self.schema
    }

    /// Filter value by key; `page` yields its string form
    pub fn get(&self, key: &str) -> Option<String> {
        if key == PAGE_KEY {
            return Some(self.page.to_string());
        }
        self.schema.index_of(key).map(|i| self.values[i].clone())
    }

    /// Trimmed value of a filter that is actually set
    pub fn active(&self, key: &str) -> Option<&str> {
        self.schema
            .index_of(key)
            .map(|i| self.values[i].trim())
            .filter(|v| !v.is_empty())
    }

    pub fn page(&self) -> u32 {
        self.page.get()
    }

    /// Set a non-page filter. The page is left alone.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), FilterError> {
        if key == PAGE_KEY {
            return self.set_page_str(value);
        }
        let i = self.schema.index_of(key).ok_or_else(|| FilterError::UnknownKey {
            schema: self.schema.name,
            key: key.to_string(),
        })?;
        self.values[i] = value.to_string();
        Ok(())
    }

    pub fn set_page_str(&mut self, value: &str) -> Result<(), FilterError> {
        self.page = value
            .trim()
            .parse()
            .map_err(|_| FilterError::InvalidPage(value.to_string()))?;
        Ok(())
    }

    pub fn reset_page(&mut self) {
        self.page = NonZeroU32::MIN;
    }

    /// No filter set (the page does not count)
    pub fn is_unfiltered(&self) -> bool {
        self.values.iter().all(|v| v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_from_url_reads_known_keys() {
        let state = FilterState::from_url(
            &PRODUCT_FILTERS,
            &url("http://admin.test/products?search=abc&page=2&tab=x"),
        );
        assert_eq!(state.get("search").as_deref(), Some("abc"));
        assert_eq!(state.get("category").as_deref(), Some(""));
        assert_eq!(state.get("status").as_deref(), Some(""));
        assert_eq!(state.get("page").as_deref(), Some("2"));
        assert_eq!(state.get("tab"), None);
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let original = url("http://admin.test/products?search=abc&page=2");
        let state = FilterState::from_url(&PRODUCT_FILTERS, &original);

        let mut written = url("http://admin.test/products");
        state.write_to(&mut written);
        assert_eq!(written.query(), Some("search=abc&page=2"));

        let reread = FilterState::from_url(&PRODUCT_FILTERS, &written);
        assert_eq!(reread, state);
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let mut state = FilterState::new(&ORDER_FILTERS);
        state.set("status", "pending").unwrap();
        state.set("search", "").unwrap();
        let mut u = url("http://admin.test/orders?search=old");
        state.write_to(&mut u);
        assert_eq!(u.query(), Some("status=pending&page=1"));
    }

    #[test]
    fn test_foreign_params_survive() {
        let state = FilterState::new(&USER_FILTERS);
        let mut u = url("http://admin.test/users?tab=admins&search=x");
        state.write_to(&mut u);
        assert_eq!(u.query(), Some("page=1&tab=admins"));
    }

    #[test]
    fn test_garbled_page_reads_as_one() {
        for q in ["page=0", "page=-3", "page=abc", ""] {
            let state =
                FilterState::from_url(&VOUCHER_FILTERS, &url(&format!("http://a.test/v?{q}")));
            assert_eq!(state.page(), 1, "query {q}");
        }
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let mut state = FilterState::new(&POST_FILTERS);
        state.set("search", "trà sữa & bánh").unwrap();
        let mut u = url("http://admin.test/posts");
        state.write_to(&mut u);
        let reread = FilterState::from_url(&POST_FILTERS, &u);
        assert_eq!(reread.get("search").as_deref(), Some("trà sữa & bánh"));
    }

    #[test]
    fn test_unknown_key_and_bad_page_rejected() {
        let mut state = FilterState::new(&PRODUCT_FILTERS);
        assert!(matches!(
            state.set("color", "red"),
            Err(FilterError::UnknownKey { .. })
        ));
        assert_eq!(
            state.set("page", "0"),
            Err(FilterError::InvalidPage("0".into()))
        );
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_active_trims_and_skips_empty() {
        let mut state = FilterState::new(&PRODUCT_FILTERS);
        state.set("search", "  tea ").unwrap();
        state.set("category", "   ").unwrap();
        assert_eq!(state.active("search"), Some("tea"));
        assert_eq!(state.active("category"), None);
        assert!(!state.is_unfiltered());
    }
}
