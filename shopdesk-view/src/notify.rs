//! Transient notifications raised by list mutations

use std::collections::VecDeque;

/// Oldest notifications are dropped beyond this
pub const MAX_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    queue: VecDeque<Notification>,
    capacity: usize,
}

impl Notifications {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) {
        if self.queue.len() == self.capacity {
            self.queue.pop_front();
        }
        self.queue.push_back(Notification {
            level,
            message: message.into(),
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take everything shown so far, oldest first
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    /// Dismiss one notification; out of range is ignored
    pub fn dismiss(&mut self, index: usize) -> Option<Notification> {
        self.queue.remove(index)
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(MAX_NOTIFICATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_drops_oldest() {
        let mut n = Notifications::new(2);
        n.success("a");
        n.error("b");
        n.success("c");
        let all = n.drain();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].message, "b");
        assert_eq!(all[1].message, "c");
        assert!(n.is_empty());
    }

    #[test]
    fn test_dismiss() {
        let mut n = Notifications::default();
        n.error("first");
        n.success("second");
        assert_eq!(n.dismiss(0).map(|x| x.message), Some("first".to_string()));
        assert!(n.dismiss(7).is_none());
        assert_eq!(n.len(), 1);
    }
}
