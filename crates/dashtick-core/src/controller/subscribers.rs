use std::fmt;

use crate::interval::RefreshInterval;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(RefreshInterval)>;

/// Ordered list of selection-change callbacks.
#[derive(Default)]
pub struct SubscriberList {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl SubscriberList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Returns `false` if `id` was not subscribed (already removed, or from another list).
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Call every subscriber, in subscription order.
    pub fn notify(&mut self, interval: RefreshInterval) {
        for (_, callback) in self.entries.iter_mut() {
            callback(interval);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for SubscriberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberList")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_runs_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut list = SubscriberList::new();

        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            list.add(Box::new(move |interval| {
                log.borrow_mut().push(format!("{}:{}", name, interval))
            }));
        }

        list.notify(RefreshInterval::OneMin);

        assert_eq!(
            *log.borrow(),
            vec!["first:ONE_MIN", "second:ONE_MIN", "third:ONE_MIN"]
        );
    }

    #[test]
    fn test_remove_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut list = SubscriberList::new();

        let counter = Rc::clone(&count);
        let id = list.add(Box::new(move |_| *counter.borrow_mut() += 1));

        assert!(list.remove(id));
        assert!(!list.remove(id), "second remove should report nothing removed");
        assert!(list.is_empty());

        list.notify(RefreshInterval::TenSeconds);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut list = SubscriberList::new();
        let a = list.add(Box::new(|_| {}));
        list.remove(a);
        let b = list.add(Box::new(|_| {}));
        assert_ne!(a, b);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_debug_shows_count() {
        let mut list = SubscriberList::new();
        list.add(Box::new(|_| {}));
        assert_eq!(format!("{:?}", list), "SubscriberList { count: 1 }");
    }
}
