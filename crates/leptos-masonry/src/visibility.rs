//! Visibility Tracking
//!
//! Per-item "visible once" tracking and the edge-triggered end-of-grid
//! sentinel. Both are driven by intersection reports and own no browser
//! state, so they can be exercised without a DOM.

use std::collections::HashSet;
use std::hash::Hash;

/// Lifecycle of one tracked item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Unobserved,
    Pending,
    Visible,
}

/// Reports each key's first visibility exactly once.
///
/// The set of seen keys only grows. After `disconnect` no report produces a
/// delivery.
#[derive(Debug)]
pub struct VisibilityTracker<K> {
    pending: HashSet<K>,
    seen: HashSet<K>,
    connected: bool,
}

impl<K> Default for VisibilityTracker<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> VisibilityTracker<K>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            pending: HashSet::new(),
            seen: HashSet::new(),
            connected: true,
        }
    }

    pub fn state(&self, key: &K) -> ItemState {
        if self.seen.contains(key) {
            ItemState::Visible
        } else if self.pending.contains(key) {
            ItemState::Pending
        } else {
            ItemState::Unobserved
        }
    }

    /// Start watching `key`. Returns false if it needs no observation
    /// (already visible, or tracker disconnected).
    pub fn observe(&mut self, key: K) -> bool {
        if !self.connected || self.seen.contains(&key) {
            return false;
        }
        self.pending.insert(key);
        true
    }

    /// Drop pending keys rejected by `keep`. Visible keys are never dropped.
    pub fn retain_pending<F>(&mut self, keep: F)
    where
        F: Fn(&K) -> bool,
    {
        self.pending.retain(|k| keep(k));
    }

    /// Feed one intersection report. Returns true when this report is the
    /// item's first visibility and the caller should deliver it.
    pub fn report(&mut self, key: &K, in_view: bool) -> bool {
        if !self.connected || !in_view {
            return false;
        }
        if !self.pending.remove(key) {
            return false;
        }
        self.seen.insert(key.clone());
        true
    }

    /// Fail-open path: mark a key visible without an observer.
    /// Returns true if this is its first visibility.
    pub fn force_visible(&mut self, key: K) -> bool {
        if !self.connected || self.seen.contains(&key) {
            return false;
        }
        self.pending.remove(&key);
        self.seen.insert(key);
        true
    }

    pub fn is_visible(&self, key: &K) -> bool {
        self.seen.contains(key)
    }

    pub fn visible_count(&self) -> usize {
        self.seen.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Keys seen so far
    pub fn visible_set(&self) -> &HashSet<K> {
        &self.seen
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Drop all pending observation; no delivery happens afterwards
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.pending.clear();
    }
}

/// Fires on every transition of the sentinel into view.
///
/// Holds only the last in-view flag. Repeated "in view" reports without an
/// intervening exit do not fire again.
#[derive(Debug, Default)]
pub struct SentinelTrigger {
    in_view: bool,
    fired: u64,
    disconnected: bool,
}

impl SentinelTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller should signal "load more"
    pub fn report(&mut self, in_view: bool) -> bool {
        if self.disconnected {
            return false;
        }
        let entered = in_view && !self.in_view;
        self.in_view = in_view;
        if entered {
            self.fired += 1;
        }
        entered
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    /// Number of times the sentinel has entered the viewport
    pub fn fire_count(&self) -> u64 {
        self.fired
    }

    /// Forget the last in-view flag so the next "in view" report fires.
    /// Used after the grid grows, when the sentinel may still be on screen.
    pub fn rearm(&mut self) {
        self.in_view = false;
    }

    pub fn disconnect(&mut self) {
        self.disconnected = true;
        self.in_view = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_states() {
        let mut tracker = VisibilityTracker::new();
        assert_eq!(tracker.state(&"a"), ItemState::Unobserved);

        assert!(tracker.observe("a"));
        assert_eq!(tracker.state(&"a"), ItemState::Pending);

        assert!(!tracker.report(&"a", false));
        assert_eq!(tracker.state(&"a"), ItemState::Pending);

        assert!(tracker.report(&"a", true));
        assert_eq!(tracker.state(&"a"), ItemState::Visible);
    }

    #[test]
    fn test_visible_once_across_reentry() {
        let mut tracker = VisibilityTracker::new();
        tracker.observe(7u32);

        let mut delivered = 0;
        for in_view in [true, false, true, true, false, true] {
            if tracker.report(&7, in_view) {
                delivered += 1;
            }
        }
        assert_eq!(delivered, 1);
        assert_eq!(tracker.visible_count(), 1);
    }

    #[test]
    fn test_reobserve_after_visible_is_noop() {
        let mut tracker = VisibilityTracker::new();
        tracker.observe(1u32);
        assert!(tracker.report(&1, true));

        // Column reassignment remounts the wrapper and observes again
        assert!(!tracker.observe(1));
        assert!(!tracker.report(&1, true));
        assert_eq!(tracker.pending_count(), 0);
    }

    #[test]
    fn test_report_for_unobserved_key_ignored() {
        let mut tracker: VisibilityTracker<u32> = VisibilityTracker::new();
        assert!(!tracker.report(&99, true));
        assert!(tracker.visible_set().is_empty());
    }

    #[test]
    fn test_retain_pending_keeps_visible_set() {
        let mut tracker = VisibilityTracker::new();
        tracker.observe(1u32);
        tracker.observe(2u32);
        tracker.observe(3u32);
        tracker.report(&1, true);
        tracker.retain_pending(|k| *k == 3);

        assert!(tracker.is_visible(&1));
        assert_eq!(tracker.state(&2), ItemState::Unobserved);
        assert_eq!(tracker.state(&3), ItemState::Pending);
        assert!(!tracker.report(&2, true));
    }

    #[test]
    fn test_no_delivery_after_disconnect() {
        let mut tracker = VisibilityTracker::new();
        tracker.observe(1u32);
        tracker.observe(2u32);
        tracker.report(&1, true);
        tracker.disconnect();

        assert!(!tracker.report(&2, true));
        assert!(!tracker.observe(3));
        assert!(!tracker.force_visible(4));
        assert_eq!(tracker.visible_count(), 1);
    }

    #[test]
    fn test_force_visible_once() {
        let mut tracker = VisibilityTracker::new();
        assert!(tracker.force_visible("x"));
        assert!(!tracker.force_visible("x"));
        assert!(!tracker.observe("x"));
    }

    #[test]
    fn test_sentinel_fires_every_entry() {
        let mut sentinel = SentinelTrigger::new();
        // scroll down past it, back up, then down again
        let fires: Vec<bool> = [true, false, true].iter().map(|&v| sentinel.report(v)).collect();
        assert_eq!(fires, vec![true, false, true]);
        assert_eq!(sentinel.fire_count(), 2);
    }

    #[test]
    fn test_sentinel_duplicate_reports_fire_once() {
        let mut sentinel = SentinelTrigger::new();
        assert!(sentinel.report(true));
        assert!(!sentinel.report(true));
        assert!(sentinel.is_in_view());
        assert!(!sentinel.report(false));
        assert!(!sentinel.report(false));
        assert_eq!(sentinel.fire_count(), 1);
    }

    #[test]
    fn test_sentinel_rearm_fires_while_still_in_view() {
        let mut sentinel = SentinelTrigger::new();
        assert!(sentinel.report(true));
        sentinel.rearm();
        assert!(sentinel.report(true));
        assert_eq!(sentinel.fire_count(), 2);
    }

    #[test]
    fn test_sentinel_silent_after_disconnect() {
        let mut sentinel = SentinelTrigger::new();
        sentinel.disconnect();
        assert!(!sentinel.report(true));
        assert_eq!(sentinel.fire_count(), 0);
    }

    #[test]
    fn test_item_and_sentinel_contrast() {
        let mut tracker = VisibilityTracker::new();
        let mut sentinel = SentinelTrigger::new();
        tracker.observe("pin");

        let mut item_calls = 0;
        let mut load_calls = 0;
        for in_view in [true, false, true] {
            if tracker.report(&"pin", in_view) {
                item_calls += 1;
            }
            if sentinel.report(in_view) {
                load_calls += 1;
            }
        }
        assert_eq!(item_calls, 1);
        assert_eq!(load_calls, 2);
    }
}
