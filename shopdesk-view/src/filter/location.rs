use reqwest::Url;

use super::FilterError;

/// The address bar a list page reads its filters from and writes them to
pub trait Location: Send {
    fn url(&self) -> &Url;

    /// Replace the current entry without adding history
    fn replace(&mut self, url: Url);
}

/// In-memory browser location with back/forward history
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    entries: Vec<Url>,
    index: usize,
}

impl MemoryLocation {
    pub fn new(url: &str) -> Result<Self, FilterError> {
        let url = Url::parse(url).map_err(|e| FilterError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            entries: vec![url],
            index: 0,
        })
    }

    /// Navigate to a new entry, dropping any forward history
    pub fn push(&mut self, url: &str) -> Result<(), FilterError> {
        let url = self
            .current()
            .join(url)
            .map_err(|e| FilterError::InvalidUrl(e.to_string()))?;
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index += 1;
        Ok(())
    }

    /// Returns false when there is nothing to go back to
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    fn current(&self) -> &Url {
        &self.entries[self.index]
    }
}

impl Location for MemoryLocation {
    fn url(&self) -> &Url {
        self.current()
    }

    fn replace(&mut self, url: Url) {
        self.entries[self.index] = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_forward() {
        let mut loc = MemoryLocation::new("http://admin.test/products?page=1").unwrap();
        loc.push("/products?page=2").unwrap();
        assert_eq!(loc.url().query(), Some("page=2"));

        assert!(loc.back());
        assert_eq!(loc.url().query(), Some("page=1"));
        assert!(!loc.back());

        assert!(loc.forward());
        assert_eq!(loc.url().query(), Some("page=2"));
        assert!(!loc.forward());
    }

    #[test]
    fn test_replace_keeps_history_length() {
        let mut loc = MemoryLocation::new("http://admin.test/orders").unwrap();
        let mut url = loc.url().clone();
        url.set_query(Some("status=pending"));
        loc.replace(url);
        assert_eq!(loc.history_len(), 1);
        assert_eq!(loc.url().query(), Some("status=pending"));
    }

    #[test]
    fn test_push_truncates_forward_history() {
        let mut loc = MemoryLocation::new("http://admin.test/users").unwrap();
        loc.push("?page=2").unwrap();
        loc.push("?page=3").unwrap();
        loc.back();
        loc.back();
        loc.push("?search=an").unwrap();
        assert_eq!(loc.history_len(), 2);
        assert!(!loc.forward());
    }
}
