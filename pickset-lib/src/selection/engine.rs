//! Key-based selection engine.
//!
//! Keys (rather than positions) are used so selection stays stable when the
//! host adds, removes or reorders items.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::SelectionError;

use super::event::{Interaction, SelectionChange, SelectionDecision, SelectionOutcome};
use super::mode::SelectionMode;

/// Handler invoked once per pending selection change.
pub type SelectionHandler<K> = Box<dyn FnMut(&SelectionChange<K>) -> SelectionDecision<K>>;

/// Bound for keys the engine can track.
pub trait SelectionKey: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> SelectionKey for T {}

/// Selection state with cancelable, overridable change notification.
///
/// Every mutating operation computes the next selection plus its
/// added/removed delta, skips the handler when the next selection has the
/// same members as the current one, and otherwise lets the handler decide
/// what gets committed.
///
/// # Example
///
/// ```
/// use pickset_lib::selection::{SelectionDecision, SelectionEngine, SelectionMode};
///
/// let mut engine = SelectionEngine::with_handler(SelectionMode::Multiple, |change| {
///     if change.added.contains(&"locked") {
///         SelectionDecision::Cancel
///     } else {
///         SelectionDecision::Proceed
///     }
/// });
///
/// engine.select_single("a", None);
/// engine.select_single("locked", None);
/// assert!(engine.is_selected(&"a"));
/// assert!(!engine.is_selected(&"locked"));
/// ```
pub struct SelectionEngine<K: SelectionKey> {
    mode: SelectionMode,
    /// Membership, for O(1) lookups.
    members: HashSet<K>,
    /// Selection order, mirrors `members`.
    order: Vec<K>,
    /// Starting point for range selection.
    anchor: Option<K>,
    handler: Option<SelectionHandler<K>>,
}

impl<K: SelectionKey> Default for SelectionEngine<K> {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}

impl<K: SelectionKey> fmt::Debug for SelectionEngine<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("mode", &self.mode)
            .field("selected", &self.order)
            .field("anchor", &self.anchor)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

impl<K: SelectionKey> SelectionEngine<K> {
    /// Create an empty engine without a handler. Every change proceeds.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            members: HashSet::new(),
            order: Vec::new(),
            anchor: None,
            handler: None,
        }
    }

    /// Create an empty engine that routes changes through `handler`.
    pub fn with_handler<F>(mode: SelectionMode, handler: F) -> Self
    where
        F: FnMut(&SelectionChange<K>) -> SelectionDecision<K> + 'static,
    {
        let mut engine = Self::new(mode);
        engine.handler = Some(Box::new(handler));
        engine
    }

    /// Replace (or remove) the change handler.
    pub fn set_handler(&mut self, handler: Option<SelectionHandler<K>>) {
        self.handler = handler;
    }

    // -------------------------------------------------------------------------
    // Mode
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Set the selection mode.
    ///
    /// Switching to a different mode clears the selection without an event.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode != mode {
            debug!("selection mode {} -> {}", self.mode, mode);
            self.mode = mode;
            self.clear_without_event(None);
        }
    }

    /// Set the selection mode from its name.
    ///
    /// On an unknown name the current mode and selection are kept.
    pub fn set_mode_str(&mut self, mode: &str) -> Result<(), SelectionError> {
        let mode = mode.parse::<SelectionMode>()?;
        self.set_mode(mode);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.members.contains(key)
    }

    /// Get all selected keys in selection order.
    pub fn selected(&self) -> Vec<K> {
        self.order.clone()
    }

    /// Get the number of selected keys.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Get the anchor key for range selection.
    pub fn anchor(&self) -> Option<&K> {
        self.anchor.as_ref()
    }

    // -------------------------------------------------------------------------
    // Evented operations
    // -------------------------------------------------------------------------

    /// Select one key.
    ///
    /// In `Single` mode the key replaces the selection, in `Multiple` mode it
    /// is added to it. Does nothing in `None` mode.
    pub fn select_single(&mut self, key: K, interaction: Option<Interaction>) -> SelectionOutcome<K> {
        if !self.mode.allows_selection() {
            trace!("select_single ignored, selection mode is none");
            return SelectionOutcome::Unchanged;
        }

        let added = if self.is_selected(&key) {
            Vec::new()
        } else {
            vec![key.clone()]
        };

        let (next, removed) = if self.mode.is_exclusive() {
            let removed = self.order.iter().filter(|k| **k != key).cloned().collect();
            (vec![key.clone()], removed)
        } else {
            let mut next = self.order.clone();
            next.extend(added.iter().cloned());
            (next, Vec::new())
        };

        let outcome = self.emit(next, added, removed, interaction);
        if outcome != SelectionOutcome::Cancelled {
            self.anchor = Some(key);
        }
        outcome
    }

    /// Select several keys.
    ///
    /// With `clear_previous` the keys become the whole selection; otherwise
    /// they are added to it. In `Single` mode only the last key is used.
    pub fn select_multiple(
        &mut self,
        keys: &[K],
        clear_previous: bool,
        interaction: Option<Interaction>,
    ) -> SelectionOutcome<K> {
        if !self.mode.allows_selection() {
            trace!("select_multiple ignored, selection mode is none");
            return SelectionOutcome::Unchanged;
        }

        let mut keys = dedup(keys);
        if self.mode.is_exclusive() && keys.len() > 1 {
            keys = keys.split_off(keys.len() - 1);
        }
        // Exclusive mode always replaces.
        let clear_previous = clear_previous || (self.mode.is_exclusive() && !keys.is_empty());

        let added: Vec<K> = keys.iter().filter(|k| !self.is_selected(k)).cloned().collect();
        let (next, removed) = if clear_previous {
            let requested: HashSet<&K> = keys.iter().collect();
            let removed = self
                .order
                .iter()
                .filter(|k| !requested.contains(k))
                .cloned()
                .collect();
            (keys, removed)
        } else {
            let mut next = self.order.clone();
            next.extend(added.iter().cloned());
            (next, Vec::new())
        };

        self.emit(next, added, removed, interaction)
    }

    /// Add every key of `all_keys` to the selection. `Multiple` mode only.
    pub fn select_all(&mut self, all_keys: &[K], interaction: Option<Interaction>) -> SelectionOutcome<K> {
        if self.mode != SelectionMode::Multiple {
            trace!("select_all ignored in {} mode", self.mode);
            return SelectionOutcome::Unchanged;
        }
        self.select_multiple(all_keys, false, interaction)
    }

    /// Select the contiguous run of `ordered` between `anchor` and `target`.
    ///
    /// The run replaces the selection. If either key is missing from
    /// `ordered`, if both are the same key, or if the mode is not
    /// `Multiple`, this degrades to [`select_single`](Self::select_single)
    /// on `target`.
    pub fn select_range(
        &mut self,
        anchor: &K,
        target: K,
        ordered: &[K],
        interaction: Option<Interaction>,
    ) -> SelectionOutcome<K> {
        self.range(anchor, target, ordered, false, interaction)
    }

    /// Like [`select_range`](Self::select_range) but the run is added to the
    /// existing selection instead of replacing it.
    pub fn extend_range(
        &mut self,
        anchor: &K,
        target: K,
        ordered: &[K],
        interaction: Option<Interaction>,
    ) -> SelectionOutcome<K> {
        self.range(anchor, target, ordered, true, interaction)
    }

    /// Range select from the current anchor to `target` (Shift+click).
    ///
    /// The anchor is the last key passed to `select_single`, falling back to
    /// the most recently selected key. Without either, selects `target`.
    pub fn select_range_from_anchor(
        &mut self,
        target: K,
        ordered: &[K],
        extend: bool,
        interaction: Option<Interaction>,
    ) -> SelectionOutcome<K> {
        let anchor = self.anchor.clone().or_else(|| self.order.last().cloned());
        match anchor {
            Some(anchor) => self.range(&anchor, target, ordered, extend, interaction),
            None => self.select_single(target, interaction),
        }
    }

    /// Deselect one key.
    pub fn deselect(&mut self, key: &K, interaction: Option<Interaction>) -> SelectionOutcome<K> {
        if !self.is_selected(key) {
            return SelectionOutcome::Unchanged;
        }
        let next = self.order.iter().filter(|k| *k != key).cloned().collect();
        self.emit(next, Vec::new(), vec![key.clone()], interaction)
    }

    /// Deselect the listed keys, or everything when `keys` is `None`.
    pub fn deselect_all(&mut self, keys: Option<&[K]>, interaction: Option<Interaction>) -> SelectionOutcome<K> {
        let (next, removed): (Vec<K>, Vec<K>) = match keys {
            None => (Vec::new(), self.order.clone()),
            Some(keys) => {
                let listed: HashSet<&K> = keys.iter().collect();
                self.order.iter().cloned().partition(|k| !listed.contains(k))
            }
        };
        self.emit(next, Vec::new(), removed, interaction)
    }

    /// Deselect `key` if selected, otherwise select it (Ctrl+click).
    pub fn toggle(&mut self, key: K, interaction: Option<Interaction>) -> SelectionOutcome<K> {
        if self.is_selected(&key) {
            let outcome = self.deselect(&key, interaction);
            if outcome.is_changed() {
                self.anchor = Some(key);
            }
            outcome
        } else {
            self.select_single(key, interaction)
        }
    }

    // -------------------------------------------------------------------------
    // Silent operations
    // -------------------------------------------------------------------------

    /// Add keys without notifying the handler.
    ///
    /// With `replace` the keys become the whole selection. Mode is not
    /// consulted: this is for syncing state that was already approved.
    pub fn select_without_event(&mut self, keys: &[K], replace: bool) {
        if replace {
            self.members.clear();
            self.order.clear();
        }
        for key in keys {
            if self.members.insert(key.clone()) {
                self.order.push(key.clone());
            }
        }
        if self.members.is_empty() {
            self.anchor = None;
        }
    }

    /// Remove the listed keys, or everything when `keys` is `None`, without
    /// notifying the handler.
    pub fn clear_without_event(&mut self, keys: Option<&[K]>) {
        match keys {
            None => {
                self.members.clear();
                self.order.clear();
            }
            Some(keys) => {
                for key in keys {
                    self.members.remove(key);
                }
                let members = &self.members;
                self.order.retain(|k| members.contains(k));
            }
        }
        if self.members.is_empty() {
            self.anchor = None;
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn range(
        &mut self,
        anchor: &K,
        target: K,
        ordered: &[K],
        extend: bool,
        interaction: Option<Interaction>,
    ) -> SelectionOutcome<K> {
        if self.mode != SelectionMode::Multiple || *anchor == target {
            return self.select_single(target, interaction);
        }

        let anchor_pos = ordered.iter().position(|k| k == anchor);
        let target_pos = ordered.iter().position(|k| *k == target);
        let (start, end) = match (anchor_pos, target_pos) {
            (Some(a), Some(t)) => (a.min(t), a.max(t)),
            _ => {
                debug!(
                    "range anchor {:?} or target {:?} not in visible ordering, selecting target",
                    anchor, target
                );
                return self.select_single(target, interaction);
            }
        };

        let run = dedup(&ordered[start..=end]);
        let added: Vec<K> = run.iter().filter(|k| !self.is_selected(k)).cloned().collect();
        let (next, removed) = if extend {
            let mut next = self.order.clone();
            next.extend(added.iter().cloned());
            (next, Vec::new())
        } else {
            let in_run: HashSet<&K> = run.iter().collect();
            let removed = self
                .order
                .iter()
                .filter(|k| !in_run.contains(k))
                .cloned()
                .collect();
            (run, removed)
        };

        self.emit(next, added, removed, interaction)
    }

    /// Run the commit protocol for a computed change.
    fn emit(
        &mut self,
        next: Vec<K>,
        added: Vec<K>,
        removed: Vec<K>,
        interaction: Option<Interaction>,
    ) -> SelectionOutcome<K> {
        if self.same_members(&next) {
            trace!("selection unchanged, no event");
            return SelectionOutcome::Unchanged;
        }

        let change = SelectionChange {
            previous_selection: self.order.clone(),
            next_selection: next,
            added,
            removed,
            interaction,
        };

        let decision = match self.handler.as_mut() {
            Some(handler) => handler(&change),
            None => SelectionDecision::Proceed,
        };

        match decision {
            SelectionDecision::Cancel => {
                debug!(
                    "selection change cancelled (added {:?}, removed {:?})",
                    change.added, change.removed
                );
                SelectionOutcome::Cancelled
            }
            SelectionDecision::Override(selection) => {
                debug!("selection change overridden with {:?}", selection);
                self.select_without_event(&selection, true);
                SelectionOutcome::Overridden {
                    selection: self.order.clone(),
                }
            }
            SelectionDecision::Proceed => {
                debug!(
                    "selection committed (added {:?}, removed {:?})",
                    change.added, change.removed
                );
                self.select_without_event(&change.next_selection, true);
                SelectionOutcome::Committed {
                    added: change.added,
                    removed: change.removed,
                }
            }
        }
    }

    /// Order-insensitive comparison of the current selection with `keys`.
    fn same_members(&self, keys: &[K]) -> bool {
        let other: HashSet<&K> = keys.iter().collect();
        other.len() == self.members.len() && other.iter().all(|k| self.members.contains(*k))
    }
}

/// Drop repeated keys, keeping first occurrences in order.
fn dedup<K: SelectionKey>(keys: &[K]) -> Vec<K> {
    let mut seen = HashSet::with_capacity(keys.len());
    keys.iter().filter(|k| seen.insert(*k)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        assert_eq!(dedup(&["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_same_members_ignores_order() {
        let mut engine = SelectionEngine::new(SelectionMode::Multiple);
        engine.select_without_event(&[1, 2, 3], false);
        assert!(engine.same_members(&[3, 1, 2]));
        assert!(engine.same_members(&[3, 1, 2, 2]));
        assert!(!engine.same_members(&[1, 2]));
        assert!(!engine.same_members(&[1, 2, 4]));
    }
}
