//! Change payloads and handler decisions for the selection engine.

/// Modifier keys state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key held
    pub ctrl: bool,
    /// Shift key held
    pub shift: bool,
    /// Alt key held
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// Only Ctrl held
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };

    /// Only Shift held
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
        alt: false,
    };

    /// Check if any modifier is active
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.alt
    }
}

/// What kind of user action caused a selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionKind {
    /// Mouse click or tap
    Pointer,
    /// Key press (e.g. "Space", "Enter")
    Keyboard(String),
    /// Called from code, not from user input
    Programmatic,
}

/// The external event that caused a selection change.
///
/// Carried through to the change payload untouched so handlers can tell
/// a Shift+click from an API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    /// Kind of action
    pub kind: InteractionKind,
    /// Modifier keys held during the action
    pub modifiers: Modifiers,
}

impl Interaction {
    /// A pointer click with the given modifiers.
    pub fn click(modifiers: Modifiers) -> Self {
        Self {
            kind: InteractionKind::Pointer,
            modifiers,
        }
    }

    /// A key press with the given modifiers.
    pub fn key(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            kind: InteractionKind::Keyboard(key.into()),
            modifiers,
        }
    }

    /// A programmatic change.
    pub fn programmatic() -> Self {
        Self {
            kind: InteractionKind::Programmatic,
            modifiers: Modifiers::NONE,
        }
    }
}

/// Pre-commit payload handed to the selection handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange<K> {
    /// Selection before the operation, in selection order.
    pub previous_selection: Vec<K>,
    /// Selection the engine will commit if the handler proceeds.
    pub next_selection: Vec<K>,
    /// Keys in `next_selection` that are not in `previous_selection`.
    pub added: Vec<K>,
    /// Keys in `previous_selection` that are not in `next_selection`.
    pub removed: Vec<K>,
    /// The causing interaction, if the host supplied one.
    pub interaction: Option<Interaction>,
}

/// What the handler wants the engine to do with a pending change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionDecision<K> {
    /// Commit the computed `next_selection`.
    #[default]
    Proceed,
    /// Discard the change; the selection stays as it was.
    Cancel,
    /// Commit this selection instead, verbatim.
    Override(Vec<K>),
}

/// Result of a mutating selection operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome<K> {
    /// Nothing to do: the mode forbids it or the selection would not change.
    /// The handler was not called.
    Unchanged,
    /// The handler cancelled the change.
    Cancelled,
    /// The computed selection was committed.
    Committed {
        /// Newly selected keys.
        added: Vec<K>,
        /// Deselected keys.
        removed: Vec<K>,
    },
    /// The handler replaced the selection; `selection` is what was committed.
    Overridden {
        /// The committed selection.
        selection: Vec<K>,
    },
}

impl<K> SelectionOutcome<K> {
    /// Whether the selection was mutated.
    pub fn is_changed(&self) -> bool {
        matches!(
            self,
            SelectionOutcome::Committed { .. } | SelectionOutcome::Overridden { .. }
        )
    }
}
