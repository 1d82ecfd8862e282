//! Scripted selection command
//!
//! Usage: pickset select --keys a,b,c [--mode multiple] [--locked KEY]... <OPS>...
//!
//! Each operation is applied in order and its outcome printed, e.g.
//! `pickset select --keys a,b,c,d select:a range:c toggle:b`.

use std::collections::HashSet;
use std::str::FromStr;

use clap::Args;
use pickset_lib::selection::{
    Interaction, Modifiers, SelectionChange, SelectionDecision, SelectionEngine, SelectionMode,
    SelectionOutcome,
};

use crate::error::{CliError, Result};

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Selection mode: none, single or multiple
    #[arg(long, default_value = "multiple")]
    pub mode: SelectionMode,

    /// Keys in display order, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub keys: Vec<String>,

    /// Keys that may not be selected; changes adding them are cancelled
    #[arg(long)]
    pub locked: Vec<String>,

    /// Operations: select:KEY, toggle:KEY, deselect:KEY, range:KEY, extend:KEY, all, clear
    #[arg(required = true)]
    pub ops: Vec<String>,
}

/// One step of a selection script.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    Select(String),
    Toggle(String),
    Deselect(String),
    Range(String),
    Extend(String),
    All,
    Clear,
}

impl FromStr for Op {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CliError::InvalidOperation(s.to_string());
        match s.split_once(':') {
            Some((name, key)) if !key.is_empty() => {
                let key = key.to_string();
                match name {
                    "select" => Ok(Op::Select(key)),
                    "toggle" => Ok(Op::Toggle(key)),
                    "deselect" => Ok(Op::Deselect(key)),
                    "range" => Ok(Op::Range(key)),
                    "extend" => Ok(Op::Extend(key)),
                    _ => Err(invalid()),
                }
            }
            Some(_) => Err(invalid()),
            None => match s {
                "all" => Ok(Op::All),
                "clear" => Ok(Op::Clear),
                _ => Err(invalid()),
            },
        }
    }
}

/// Execute select command
pub fn execute(args: SelectArgs) -> Result<()> {
    // Parse the whole script before touching any state.
    let ops = args
        .ops
        .iter()
        .map(|op| op.parse::<Op>())
        .collect::<Result<Vec<_>>>()?;

    let mut engine = locking_engine(args.mode, args.locked);
    for (raw, op) in args.ops.iter().zip(ops) {
        let outcome = apply(&mut engine, &args.keys, op);
        println!("{:<16} {:<28} [{}]", raw, describe(&outcome), engine.selected().join(", "));
    }
    Ok(())
}

/// Engine that cancels any change adding one of the `locked` keys.
fn locking_engine(mode: SelectionMode, locked: Vec<String>) -> SelectionEngine<String> {
    let locked: HashSet<String> = locked.into_iter().collect();
    SelectionEngine::with_handler(mode, move |change: &SelectionChange<String>| {
        if change.added.iter().any(|k| locked.contains(k)) {
            SelectionDecision::Cancel
        } else {
            SelectionDecision::Proceed
        }
    })
}

fn apply(engine: &mut SelectionEngine<String>, keys: &[String], op: Op) -> SelectionOutcome<String> {
    let click = Some(Interaction::click(Modifiers::NONE));
    match op {
        Op::Select(key) => engine.select_single(key, click),
        Op::Toggle(key) => engine.toggle(key, Some(Interaction::click(Modifiers::CTRL))),
        Op::Deselect(key) => engine.deselect(&key, click),
        Op::Range(key) => {
            engine.select_range_from_anchor(key, keys, false, Some(Interaction::click(Modifiers::SHIFT)))
        }
        Op::Extend(key) => {
            let mods = Modifiers {
                ctrl: true,
                shift: true,
                alt: false,
            };
            engine.select_range_from_anchor(key, keys, true, Some(Interaction::click(mods)))
        }
        Op::All => engine.select_all(keys, Some(Interaction::programmatic())),
        Op::Clear => engine.deselect_all(None, Some(Interaction::programmatic())),
    }
}

fn describe(outcome: &SelectionOutcome<String>) -> String {
    match outcome {
        SelectionOutcome::Unchanged => "unchanged".to_string(),
        SelectionOutcome::Cancelled => "cancelled".to_string(),
        SelectionOutcome::Committed { added, removed } => {
            format!("+[{}] -[{}]", added.join(","), removed.join(","))
        }
        SelectionOutcome::Overridden { selection } => format!("overridden [{}]", selection.join(",")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ops() {
        assert_eq!("select:a".parse::<Op>().unwrap(), Op::Select("a".to_string()));
        assert_eq!("range:b:c".parse::<Op>().unwrap(), Op::Range("b:c".to_string()));
        assert_eq!("all".parse::<Op>().unwrap(), Op::All);
        assert!("select:".parse::<Op>().is_err());
        assert!("pick:a".parse::<Op>().is_err());
        assert!("everything".parse::<Op>().is_err());
    }

    #[test]
    fn test_locked_keys_cancel() {
        let keys: Vec<String> = ["a", "b", "c"].iter().map(|k| k.to_string()).collect();
        let mut engine = locking_engine(SelectionMode::Multiple, vec!["b".into()]);

        apply(&mut engine, &keys, Op::Select("a".into()));
        assert_eq!(engine.selected(), vec!["a"]);

        let outcome = apply(&mut engine, &keys, Op::Toggle("b".into()));
        assert_eq!(outcome, SelectionOutcome::Cancelled);
        assert_eq!(describe(&outcome), "cancelled");
        assert_eq!(engine.selected(), vec!["a"]);

        // A range through the locked key is refused as a whole.
        let outcome = apply(&mut engine, &keys, Op::Range("c".into()));
        assert_eq!(outcome, SelectionOutcome::Cancelled);
        assert_eq!(engine.selected(), vec!["a"]);

        // Removing keys never touches the lock.
        let outcome = apply(&mut engine, &keys, Op::Clear);
        assert!(matches!(outcome, SelectionOutcome::Committed { .. }));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_execute_rejects_bad_script() {
        let args = SelectArgs {
            mode: SelectionMode::Multiple,
            keys: vec!["a".into()],
            locked: Vec::new(),
            ops: vec!["select:a".into(), "jump:a".into()],
        };
        assert!(matches!(execute(args), Err(CliError::InvalidOperation(op)) if op == "jump:a"));
    }

    #[test]
    fn test_range_script() {
        let keys: Vec<String> = ["a", "b", "c", "d"].iter().map(|k| k.to_string()).collect();
        let mut engine = SelectionEngine::new(SelectionMode::Multiple);

        apply(&mut engine, &keys, Op::Select("b".into()));
        let outcome = apply(&mut engine, &keys, Op::Range("d".into()));
        assert_eq!(describe(&outcome), "+[c,d] -[]");
        assert_eq!(engine.selected(), vec!["b", "c", "d"]);

        apply(&mut engine, &keys, Op::Clear);
        assert!(engine.is_empty());
    }
}
