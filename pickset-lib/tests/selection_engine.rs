//! Tests for the selection engine's commit protocol and set operations.

use std::cell::RefCell;
use std::rc::Rc;

use pickset_lib::error::SelectionError;
use pickset_lib::selection::{
    Interaction, InteractionKind, Modifiers, SelectionChange, SelectionDecision, SelectionEngine, SelectionMode,
    SelectionOutcome,
};

type Log = Rc<RefCell<Vec<SelectionChange<&'static str>>>>;

/// Engine whose handler records every payload and proceeds.
fn recording(mode: SelectionMode) -> (SelectionEngine<&'static str>, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let engine = SelectionEngine::with_handler(mode, move |change| {
        sink.borrow_mut().push(change.clone());
        SelectionDecision::Proceed
    });
    (engine, log)
}

fn sorted(mut keys: Vec<&'static str>) -> Vec<&'static str> {
    keys.sort_unstable();
    keys
}

const NODES: [&str; 5] = ["n0", "n1", "n2", "n3", "n4"];

// =============================================================================
// Modes
// =============================================================================

#[test]
fn test_none_mode_ignores_selection() {
    let (mut engine, log) = recording(SelectionMode::None);
    assert_eq!(engine.select_single("a", None), SelectionOutcome::Unchanged);
    assert_eq!(
        engine.select_multiple(&["a", "b"], true, None),
        SelectionOutcome::Unchanged
    );
    assert!(engine.is_empty());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_invalid_mode_keeps_previous() {
    let mut engine: SelectionEngine<&str> = SelectionEngine::new(SelectionMode::Multiple);
    engine.select_single("a", None);

    let err = engine.set_mode_str("cascading").unwrap_err();
    assert_eq!(err, SelectionError::InvalidMode("cascading".to_string()));
    assert_eq!(engine.mode(), SelectionMode::Multiple);
    assert!(engine.is_selected(&"a"));
}

#[test]
fn test_mode_change_clears_without_event() {
    let (mut engine, log) = recording(SelectionMode::Multiple);
    engine.select_multiple(&["a", "b"], false, None);
    assert_eq!(log.borrow().len(), 1);

    engine.set_mode_str("single").unwrap();
    assert_eq!(engine.mode(), SelectionMode::Single);
    assert!(engine.is_empty());
    assert_eq!(log.borrow().len(), 1);
}

// =============================================================================
// Single selection
// =============================================================================

#[test]
fn test_select_single_is_idempotent() {
    let (mut engine, log) = recording(SelectionMode::Single);

    let first = engine.select_single("a", None);
    assert_eq!(
        first,
        SelectionOutcome::Committed {
            added: vec!["a"],
            removed: vec![]
        }
    );
    assert_eq!(engine.select_single("a", None), SelectionOutcome::Unchanged);
    assert_eq!(engine.len(), 1);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_select_single_exclusive_replaces() {
    let (mut engine, log) = recording(SelectionMode::Single);
    engine.select_single("a", None);

    let outcome = engine.select_single("b", None);
    assert_eq!(
        outcome,
        SelectionOutcome::Committed {
            added: vec!["b"],
            removed: vec!["a"]
        }
    );
    assert_eq!(engine.selected(), vec!["b"]);

    let log = log.borrow();
    assert_eq!(log[1].previous_selection, vec!["a"]);
    assert_eq!(log[1].next_selection, vec!["b"]);
}

#[test]
fn test_select_single_multiple_mode_adds() {
    let (mut engine, log) = recording(SelectionMode::Multiple);
    engine.select_single("a", None);
    engine.select_single("b", None);

    assert_eq!(engine.selected(), vec!["a", "b"]);
    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].added, vec!["b"]);
    assert!(log[1].removed.is_empty());
    assert_eq!(log[1].next_selection, vec!["a", "b"]);
}

#[test]
fn test_interaction_is_forwarded() {
    let (mut engine, log) = recording(SelectionMode::Multiple);
    let click = Interaction::click(Modifiers::CTRL);
    engine.select_single("a", Some(click.clone()));

    assert_eq!(log.borrow()[0].interaction, Some(click));
}

#[test]
fn test_handler_can_branch_on_interaction() {
    // Plain key presses may select; anything with a modifier held is refused.
    let mut engine = SelectionEngine::with_handler(SelectionMode::Multiple, |change: &SelectionChange<&'static str>| {
        match &change.interaction {
            Some(Interaction {
                kind: InteractionKind::Keyboard(_),
                modifiers,
            }) if !modifiers.any() => SelectionDecision::Proceed,
            _ => SelectionDecision::Cancel,
        }
    });

    let space = Interaction::key("Space", Modifiers::NONE);
    assert_eq!(space.kind, InteractionKind::Keyboard("Space".to_string()));
    assert!(!space.modifiers.any());
    assert!(matches!(engine.select_single("a", Some(space)), SelectionOutcome::Committed { .. }));

    let shift_space = Interaction::key("Space", Modifiers::SHIFT);
    assert!(shift_space.modifiers.any());
    assert_eq!(engine.select_single("b", Some(shift_space)), SelectionOutcome::Cancelled);
    assert_eq!(engine.select_single("b", Some(Interaction::click(Modifiers::NONE))), SelectionOutcome::Cancelled);
    assert_eq!(engine.selected(), vec!["a"]);
}

// =============================================================================
// Multiple selection
// =============================================================================

#[test]
fn test_select_multiple_clear_previous_scenario() {
    let (mut engine, log) = recording(SelectionMode::Multiple);

    engine.select_multiple(&["A", "B", "C"], true, None);
    let outcome = engine.select_multiple(&["B", "D"], true, None);

    assert_eq!(
        outcome,
        SelectionOutcome::Committed {
            added: vec!["D"],
            removed: vec!["A", "C"]
        }
    );
    assert_eq!(sorted(engine.selected()), vec!["B", "D"]);

    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].previous_selection, vec!["A", "B", "C"]);
    assert_eq!(log[1].next_selection, vec!["B", "D"]);
}

#[test]
fn test_select_multiple_appends_without_clear() {
    let (mut engine, log) = recording(SelectionMode::Multiple);
    engine.select_single("n0", None);

    engine.select_multiple(&["n1", "n0", "n2"], false, None);

    assert_eq!(engine.selected(), vec!["n0", "n1", "n2"]);
    let log = log.borrow();
    assert_eq!(log[1].added, vec!["n1", "n2"]);
    assert!(log[1].removed.is_empty());
}

#[test]
fn test_select_multiple_single_mode_uses_last() {
    let mut engine = SelectionEngine::new(SelectionMode::Single);
    engine.select_single("x", None);
    engine.select_multiple(&["a", "b", "c"], false, None);
    assert_eq!(engine.selected(), vec!["c"]);
}

#[test]
fn test_select_all() {
    let (mut engine, log) = recording(SelectionMode::Multiple);
    engine.select_single("n2", None);

    let outcome = engine.select_all(&NODES, None);
    assert_eq!(
        outcome,
        SelectionOutcome::Committed {
            added: vec!["n0", "n1", "n3", "n4"],
            removed: vec![]
        }
    );
    assert_eq!(engine.len(), NODES.len());
    assert_eq!(engine.select_all(&NODES, None), SelectionOutcome::Unchanged);
    assert_eq!(log.borrow().len(), 2);
}

// =============================================================================
// Range selection
// =============================================================================

#[test]
fn test_select_range_is_contiguous() {
    let (mut engine, log) = recording(SelectionMode::Multiple);
    engine.select_single("n0", None);

    let outcome = engine.select_range(&"n1", "n3", &NODES, None);
    assert_eq!(
        outcome,
        SelectionOutcome::Committed {
            added: vec!["n1", "n2", "n3"],
            removed: vec!["n0"]
        }
    );
    assert_eq!(engine.selected(), vec!["n1", "n2", "n3"]);
    assert_eq!(log.borrow()[1].next_selection, vec!["n1", "n2", "n3"]);
}

#[test]
fn test_select_range_is_symmetric() {
    let mut forward: SelectionEngine<&str> = SelectionEngine::new(SelectionMode::Multiple);
    let mut backward: SelectionEngine<&str> = SelectionEngine::new(SelectionMode::Multiple);

    forward.select_range(&"n1", "n4", &NODES, None);
    backward.select_range(&"n4", "n1", &NODES, None);

    assert_eq!(sorted(forward.selected()), sorted(backward.selected()));
    assert_eq!(forward.selected(), vec!["n1", "n2", "n3", "n4"]);
}

#[test]
fn test_extend_range_keeps_existing() {
    let mut engine = SelectionEngine::new(SelectionMode::Multiple);
    engine.select_single("n0", None);

    let outcome = engine.extend_range(&"n3", "n4", &NODES, None);
    assert_eq!(
        outcome,
        SelectionOutcome::Committed {
            added: vec!["n3", "n4"],
            removed: vec![]
        }
    );
    assert_eq!(engine.selected(), vec!["n0", "n3", "n4"]);
}

#[test]
fn test_range_missing_key_degrades_to_single() {
    let mut engine = SelectionEngine::new(SelectionMode::Multiple);
    engine.select_single("n0", None);

    let outcome = engine.select_range(&"gone", "n2", &NODES, None);
    assert_eq!(
        outcome,
        SelectionOutcome::Committed {
            added: vec!["n2"],
            removed: vec![]
        }
    );
    assert_eq!(engine.selected(), vec!["n0", "n2"]);
}

#[test]
fn test_range_same_anchor_and_target_degrades_to_single() {
    let (mut engine, log) = recording(SelectionMode::Multiple);
    engine.select_range(&"n2", "n2", &NODES, None);

    assert_eq!(engine.selected(), vec!["n2"]);
    assert_eq!(log.borrow()[0].added, vec!["n2"]);
}

#[test]
fn test_range_from_anchor() {
    let mut engine = SelectionEngine::new(SelectionMode::Multiple);
    engine.select_single("n1", None);
    assert_eq!(engine.anchor(), Some(&"n1"));

    let shift_click = Some(Interaction::click(Modifiers::SHIFT));
    engine.select_range_from_anchor("n3", &NODES, false, shift_click);
    assert_eq!(engine.selected(), vec!["n1", "n2", "n3"]);

    // Anchor stays put: a second Shift+click re-spans from n1.
    engine.select_range_from_anchor("n0", &NODES, false, None);
    assert_eq!(engine.selected(), vec!["n0", "n1"]);
}

#[test]
fn test_range_from_anchor_without_selection_selects_target() {
    let mut engine = SelectionEngine::new(SelectionMode::Multiple);
    engine.select_range_from_anchor("n3", &NODES, true, None);
    assert_eq!(engine.selected(), vec!["n3"]);
}

// =============================================================================
// Deselection
// =============================================================================

#[test]
fn test_deselect() {
    let (mut engine, log) = recording(SelectionMode::Multiple);
    assert_eq!(engine.deselect(&"n0", None), SelectionOutcome::Unchanged);
    assert!(log.borrow().is_empty());

    engine.select_multiple(&["n0", "n1"], false, None);
    let outcome = engine.deselect(&"n0", None);
    assert_eq!(
        outcome,
        SelectionOutcome::Committed {
            added: vec![],
            removed: vec!["n0"]
        }
    );
    assert!(!engine.is_selected(&"n0"));
    assert!(engine.is_selected(&"n1"));
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_deselect_all() {
    let mut engine = SelectionEngine::new(SelectionMode::Multiple);
    engine.select_all(&NODES, None);

    engine.deselect_all(Some(&["n1", "n3", "missing"][..]), None);
    assert_eq!(engine.selected(), vec!["n0", "n2", "n4"]);

    engine.deselect_all(None, None);
    assert_eq!(engine.len(), 0);
    for node in NODES {
        assert!(!engine.is_selected(&node));
    }
    assert_eq!(engine.anchor(), None);
}

#[test]
fn test_toggle() {
    let mut engine = SelectionEngine::new(SelectionMode::Multiple);
    engine.toggle("n1", None);
    engine.toggle("n2", None);
    engine.toggle("n1", None);
    assert_eq!(engine.selected(), vec!["n2"]);
}

// =============================================================================
// Handler decisions
// =============================================================================

#[test]
fn test_cancel_keeps_selection() {
    let mut engine = SelectionEngine::with_handler(SelectionMode::Multiple, |change| {
        if change.added.contains(&"n3") {
            SelectionDecision::Cancel
        } else {
            SelectionDecision::Proceed
        }
    });
    engine.select_multiple(&["n0", "n1"], false, None);
    let before = engine.selected();

    assert_eq!(
        engine.select_multiple(&["n3", "n4"], true, None),
        SelectionOutcome::Cancelled
    );
    assert_eq!(engine.selected(), before);
}

#[test]
fn test_override_is_committed_verbatim() {
    let mut engine = SelectionEngine::with_handler(SelectionMode::Multiple, |change| {
        // Keep only the first requested key.
        SelectionDecision::Override(change.next_selection.iter().take(1).cloned().collect())
    });

    let outcome = engine.select_multiple(&["n2", "n3", "n4"], true, None);
    assert_eq!(
        outcome,
        SelectionOutcome::Overridden {
            selection: vec!["n2"]
        }
    );
    assert_eq!(engine.selected(), vec!["n2"]);
}

#[test]
fn test_override_may_add_unrelated_keys() {
    let mut engine = SelectionEngine::with_handler(SelectionMode::Multiple, |_| {
        SelectionDecision::Override(vec!["n4", "n4", "n0"])
    });
    engine.select_single("n1", None);
    assert_eq!(engine.selected(), vec!["n4", "n0"]);
}

// =============================================================================
// Silent operations
// =============================================================================

#[test]
fn test_silent_operations_skip_handler() {
    let (mut engine, log) = recording(SelectionMode::Multiple);

    engine.select_without_event(&["n0", "n1"], false);
    engine.select_without_event(&["n2"], false);
    assert_eq!(engine.selected(), vec!["n0", "n1", "n2"]);

    engine.select_without_event(&["n4"], true);
    assert_eq!(engine.selected(), vec!["n4"]);

    engine.clear_without_event(Some(&["n4"][..]));
    assert!(engine.is_empty());

    engine.select_without_event(&NODES, false);
    engine.clear_without_event(None);
    assert!(engine.is_empty());

    assert!(log.borrow().is_empty());
}
