//! The per-file variable table.
//!
//! One flat namespace per file: a name is a single identity for the whole
//! file, with no notion of lexical scope or shadowing. The table is built
//! fresh for each file and never outlives it.

use std::collections::HashMap;

use crate::issue::Location;

/// A tracked local variable.
///
/// The `initialized` flag is monotonic: it may go `false -> true` (via a
/// declaration initializer or a later assignment) and never reverts. There
/// is no "possibly initialized" tri-state; an assignment seen in only one
/// branch still counts as initializing for the rest of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub decl: Location,
    pub initialized: bool,
}

/// Flat mapping from identifier name to its tracked state for one file.
#[derive(Debug, Default)]
pub struct VariableTable {
    vars: HashMap<String, Variable>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration of `name`.
    ///
    /// A new name is inserted with the given initialized state. A
    /// re-declared name only escalates `false -> true` when this occurrence
    /// carries an initializer; it never downgrades.
    pub fn declare(&mut self, name: &str, decl: Location, initialized: bool) {
        match self.vars.get_mut(name) {
            Some(existing) => {
                if initialized {
                    existing.initialized = true;
                }
            }
            None => {
                self.vars.insert(
                    name.to_string(),
                    Variable {
                        name: name.to_string(),
                        decl,
                        initialized,
                    },
                );
            }
        }
    }

    /// Mark a tracked name as initialized. Idempotent; unknown names are
    /// ignored. Returns true when this call made the transition.
    pub fn mark_initialized(&mut self, name: &str) -> bool {
        match self.vars.get_mut(name) {
            Some(var) if !var.initialized => {
                var.initialized = true;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.vars.get(name)
    }

    /// All variables still waiting for a first assignment.
    pub fn uninitialized(&self) -> impl Iterator<Item = &Variable> {
        self.vars.values().filter(|v| !v.initialized)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
