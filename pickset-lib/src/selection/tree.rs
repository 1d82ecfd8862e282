//! Headless tree host for the selection engine.

use std::collections::HashSet;

use super::engine::{SelectionEngine, SelectionHandler, SelectionKey};
use super::event::{Interaction, SelectionOutcome};
use super::mode::SelectionMode;

/// A node of a selectable tree.
///
/// # Example
///
/// ```
/// use pickset_lib::selection::TreeItem;
///
/// #[derive(Clone)]
/// struct FileNode {
///     path: String,
///     children: Vec<FileNode>,
/// }
///
/// impl TreeItem for FileNode {
///     type Key = String;
///     fn key(&self) -> String { self.path.clone() }
///     fn children(&self) -> Vec<Self> { self.children.clone() }
/// }
/// ```
pub trait TreeItem: Clone {
    /// Key type identifying a node.
    type Key: SelectionKey;

    /// Unique, stable key for this node.
    ///
    /// Must be unique across the entire tree and stable across updates to
    /// keep expand/collapse and selection state.
    fn key(&self) -> Self::Key;

    /// Child items. Empty for leaf nodes.
    fn children(&self) -> Vec<Self>;
}

/// A visible node in the flattened tree.
#[derive(Debug, Clone)]
pub struct FlatNode<T: TreeItem> {
    /// The item itself.
    pub item: T,
    /// Depth in tree (0 = root).
    pub depth: u16,
    /// Whether this node has children.
    pub has_children: bool,
    /// Whether this node is currently expanded.
    pub is_expanded: bool,
}

/// A tree of items with expand/collapse state and key-based selection.
///
/// The flattened list of visible nodes is the ordering used for range
/// selection, so a Shift+click only spans what the user can see.
#[derive(Debug)]
pub struct TreeSelection<T: TreeItem> {
    roots: Vec<T>,
    expanded: HashSet<T::Key>,
    /// Rebuilt on every expand/collapse or item change.
    visible: Vec<FlatNode<T>>,
    selection: SelectionEngine<T::Key>,
}

impl<T: TreeItem> TreeSelection<T> {
    /// Create a tree with root items and a selection mode.
    pub fn new(roots: Vec<T>, mode: SelectionMode) -> Self {
        let mut tree = Self {
            roots,
            expanded: HashSet::new(),
            visible: Vec::new(),
            selection: SelectionEngine::new(mode),
        };
        tree.rebuild_visible();
        tree
    }

    /// Route selection changes through `handler`.
    pub fn with_handler(mut self, handler: SelectionHandler<T::Key>) -> Self {
        self.selection.set_handler(Some(handler));
        self
    }

    /// The underlying selection engine.
    pub fn selection(&self) -> &SelectionEngine<T::Key> {
        &self.selection
    }

    /// Mutable access to the underlying selection engine.
    pub fn selection_mut(&mut self) -> &mut SelectionEngine<T::Key> {
        &mut self.selection
    }

    // -------------------------------------------------------------------------
    // Item access
    // -------------------------------------------------------------------------

    /// Get the root items.
    pub fn roots(&self) -> &[T] {
        &self.roots
    }

    /// Replace the root items.
    ///
    /// Expanded state is kept. Selected keys that no longer exist are
    /// dropped without an event.
    pub fn set_items(&mut self, roots: Vec<T>) {
        self.roots = roots;
        self.rebuild_visible();

        let existing: HashSet<T::Key> = self.all_keys().into_iter().collect();
        let stale: Vec<T::Key> = self
            .selection
            .selected()
            .into_iter()
            .filter(|k| !existing.contains(k))
            .collect();
        if !stale.is_empty() {
            log::debug!("dropping {} stale selected keys", stale.len());
            self.selection.clear_without_event(Some(&stale));
        }
    }

    /// Get the number of visible nodes.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Get a visible node by index.
    pub fn visible_node(&self, index: usize) -> Option<&FlatNode<T>> {
        self.visible.get(index)
    }

    /// Keys of all visible nodes, top to bottom.
    pub fn visible_keys(&self) -> Vec<T::Key> {
        self.visible.iter().map(|n| n.item.key()).collect()
    }

    /// Keys of every node, depth first, including collapsed subtrees.
    pub fn all_keys(&self) -> Vec<T::Key> {
        let mut out = Vec::new();
        Self::collect_keys(&self.roots, &mut out);
        out
    }

    fn collect_keys(items: &[T], out: &mut Vec<T::Key>) {
        for item in items {
            out.push(item.key());
            Self::collect_keys(&item.children(), out);
        }
    }

    /// Find a node by key in the entire tree (including collapsed).
    pub fn find(&self, key: &T::Key) -> Option<T> {
        Self::find_in_items(&self.roots, key)
    }

    fn find_in_items(items: &[T], key: &T::Key) -> Option<T> {
        for item in items {
            if item.key() == *key {
                return Some(item.clone());
            }
            if let Some(found) = Self::find_in_items(&item.children(), key) {
                return Some(found);
            }
        }
        None
    }

    // -------------------------------------------------------------------------
    // Expand/Collapse
    // -------------------------------------------------------------------------

    /// Expand a node.
    pub fn expand(&mut self, key: &T::Key) {
        if self.expanded.insert(key.clone()) {
            self.rebuild_visible();
        }
    }

    /// Collapse a node.
    pub fn collapse(&mut self, key: &T::Key) {
        if self.expanded.remove(key) {
            self.rebuild_visible();
        }
    }

    /// Toggle expand/collapse for a node.
    pub fn toggle_expanded(&mut self, key: &T::Key) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.clone());
        }
        self.rebuild_visible();
    }

    /// Check if a node is expanded.
    pub fn is_expanded(&self, key: &T::Key) -> bool {
        self.expanded.contains(key)
    }

    /// Expand all expandable nodes.
    pub fn expand_all(&mut self) {
        Self::collect_expandable(&self.roots, &mut self.expanded);
        self.rebuild_visible();
    }

    /// Collapse all nodes.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.rebuild_visible();
    }

    fn collect_expandable(items: &[T], expanded: &mut HashSet<T::Key>) {
        for item in items {
            let children = item.children();
            if !children.is_empty() {
                expanded.insert(item.key());
                Self::collect_expandable(&children, expanded);
            }
        }
    }

    fn rebuild_visible(&mut self) {
        self.visible.clear();
        Self::collect_visible(&self.roots, &self.expanded, 0, &mut self.visible);
    }

    fn collect_visible(
        items: &[T],
        expanded: &HashSet<T::Key>,
        depth: u16,
        out: &mut Vec<FlatNode<T>>,
    ) {
        for item in items {
            let children = item.children();
            let has_children = !children.is_empty();
            let is_expanded = expanded.contains(&item.key());

            out.push(FlatNode {
                item: item.clone(),
                depth,
                has_children,
                is_expanded,
            });

            if is_expanded && has_children {
                Self::collect_visible(&children, expanded, depth + 1, out);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Check if a node is selected.
    pub fn is_selected(&self, key: &T::Key) -> bool {
        self.selection.is_selected(key)
    }

    /// Selected nodes in selection order.
    pub fn selected_items(&self) -> Vec<T> {
        self.selection
            .selected()
            .iter()
            .filter_map(|k| self.find(k))
            .collect()
    }

    /// Select a node (click).
    pub fn select(&mut self, key: T::Key, interaction: Option<Interaction>) -> SelectionOutcome<T::Key> {
        self.selection.select_single(key, interaction)
    }

    /// Toggle a node's selection (Ctrl+click).
    pub fn toggle(&mut self, key: T::Key, interaction: Option<Interaction>) -> SelectionOutcome<T::Key> {
        self.selection.toggle(key, interaction)
    }

    /// Deselect a node.
    pub fn deselect(&mut self, key: &T::Key, interaction: Option<Interaction>) -> SelectionOutcome<T::Key> {
        self.selection.deselect(key, interaction)
    }

    /// Range select from the anchor to `target` over the visible nodes
    /// (Shift+click). With `extend` the range is added to the selection.
    pub fn select_range_to(
        &mut self,
        target: T::Key,
        extend: bool,
        interaction: Option<Interaction>,
    ) -> SelectionOutcome<T::Key> {
        let ordered = self.visible_keys();
        self.selection
            .select_range_from_anchor(target, &ordered, extend, interaction)
    }

    /// Select every node in the tree, including collapsed ones.
    pub fn select_all(&mut self, interaction: Option<Interaction>) -> SelectionOutcome<T::Key> {
        let all = self.all_keys();
        self.selection.select_all(&all, interaction)
    }

    /// Deselect the listed nodes, or every node when `keys` is `None`.
    pub fn deselect_all(
        &mut self,
        keys: Option<&[T::Key]>,
        interaction: Option<Interaction>,
    ) -> SelectionOutcome<T::Key> {
        self.selection.deselect_all(keys, interaction)
    }
}
