//! Handler storage for the hook bus.
//!
//! Handlers are kept per (kind, name) in a sequence sorted by priority. The
//! callbacks themselves are type-erased; the bus downcasts them back to the
//! payload type of each dispatch.

use fieldhook_core::{HookKind, HookName};
use std::{
    any::Any,
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

/// A type-erased handler slot, shared so dispatch can snapshot cheaply.
pub(crate) type Callback = Arc<dyn Any + Send + Sync>;

/// A registered handler with its ordering metadata.
#[derive(Clone)]
pub(crate) struct HandlerEntry {
    pub(crate) callback: Callback,
    pub(crate) priority: i32,
    /// Payload type the handler was registered for, kept for diagnostics.
    pub(crate) payload: &'static str,
}

/// Handlers for one hook, sorted ascending by priority.
#[derive(Default, Clone)]
pub(crate) struct HandlerList {
    entries: Vec<HandlerEntry>,
}

impl HandlerList {
    /// Insert after every entry of lower or equal priority, so equal
    /// priorities keep registration order.
    pub(crate) fn insert(&mut self, entry: HandlerEntry) {
        let at = self
            .entries
            .partition_point(|e| e.priority <= entry.priority);
        self.entries.insert(at, entry);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn entries(&self) -> &[HandlerEntry] {
        &self.entries
    }
}

/// The action and filter tables.
#[derive(Default)]
pub(crate) struct HookTable {
    actions: HashMap<HookName, HandlerList>,
    filters: HashMap<HookName, HandlerList>,
}

impl HookTable {
    fn table(&self, kind: HookKind) -> &HashMap<HookName, HandlerList> {
        match kind {
            HookKind::Action => &self.actions,
            HookKind::Filter => &self.filters,
        }
    }

    fn table_mut(&mut self, kind: HookKind) -> &mut HashMap<HookName, HandlerList> {
        match kind {
            HookKind::Action => &mut self.actions,
            HookKind::Filter => &mut self.filters,
        }
    }

    pub(crate) fn insert(&mut self, kind: HookKind, name: HookName, entry: HandlerEntry) {
        self.table_mut(kind).entry(name).or_default().insert(entry);
    }

    /// Empties the handler list but keeps the entry. Returns how many
    /// handlers were dropped.
    pub(crate) fn clear(&mut self, kind: HookKind, name: &HookName) -> usize {
        match self.table_mut(kind).get_mut(name) {
            Some(list) => {
                let dropped = list.len();
                list.clear();
                dropped
            }
            None => 0,
        }
    }

    /// Copy of the current handler sequence; dispatch iterates this so the
    /// table may change while handlers run.
    pub(crate) fn snapshot(&self, kind: HookKind, name: &HookName) -> Vec<HandlerEntry> {
        self.table(kind)
            .get(name)
            .map(|list| list.entries().to_vec())
            .unwrap_or_default()
    }

    pub(crate) fn len(&self, kind: HookKind, name: &HookName) -> usize {
        self.table(kind).get(name).map_or(0, HandlerList::len)
    }

    pub(crate) fn hook_count(&self, kind: HookKind) -> usize {
        self.table(kind).values().filter(|l| l.len() > 0).count()
    }
}

/// Per-action dispatch counters, locked apart from the handler tables.
#[derive(Default)]
pub(crate) struct DispatchCounts {
    counts: Mutex<HashMap<HookName, usize>>,
}

impl DispatchCounts {
    pub(crate) fn record(&self, name: &HookName) {
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        *counts.entry(name.clone()).or_default() += 1;
    }

    pub(crate) fn get(&self, name: &HookName) -> usize {
        let counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        counts.get(name).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(priority: i32, tag: u32) -> HandlerEntry {
        HandlerEntry {
            callback: Arc::new(tag),
            priority,
            payload: "u32",
        }
    }

    fn tags(list: &HandlerList) -> Vec<u32> {
        list.entries()
            .iter()
            .map(|e| *e.callback.downcast_ref::<u32>().unwrap())
            .collect()
    }

    #[test]
    fn test_stable_priority_insert() {
        let mut list = HandlerList::default();
        list.insert(entry(5, 0));
        list.insert(entry(1, 1));
        list.insert(entry(10, 2));
        list.insert(entry(1, 3));
        assert_eq!(tags(&list), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_clear_keeps_entry() {
        let name = HookName::parse("core.ready").unwrap();
        let mut table = HookTable::default();
        table.insert(HookKind::Action, name.clone(), entry(10, 0));
        assert_eq!(table.clear(HookKind::Action, &name), 1);
        assert_eq!(table.len(HookKind::Action, &name), 0);
        assert!(table.actions.contains_key(&name));
        assert_eq!(table.clear(HookKind::Filter, &name), 0);
    }

    #[test]
    fn test_kinds_are_disjoint() {
        let name = HookName::parse("core.title").unwrap();
        let mut table = HookTable::default();
        table.insert(HookKind::Filter, name.clone(), entry(10, 0));
        assert_eq!(table.len(HookKind::Filter, &name), 1);
        assert_eq!(table.len(HookKind::Action, &name), 0);
        assert_eq!(table.hook_count(HookKind::Filter), 1);
        assert_eq!(table.hook_count(HookKind::Action), 0);
    }

    #[test]
    fn test_dispatch_counts_through_shared_ref() {
        let ready = HookName::parse("core.ready").unwrap();
        let load = HookName::parse("core.load").unwrap();
        let counts = DispatchCounts::default();
        counts.record(&ready);
        counts.record(&ready);

        assert_eq!(counts.get(&ready), 2);
        assert_eq!(counts.get(&load), 0);
    }
}
