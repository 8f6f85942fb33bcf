//! Bidirectional association between variables and the clauses they denote.
//!
//! Entries keep discovery order for display. Lookups go through two indexes:
//! variable → entry and normalized clause → entry, so deduplication is O(1).

use std::collections::HashMap;

use serde::{Serialize, Serializer};
use serde::ser::SerializeSeq;

use crate::variable::{LetterAllocator, Variable};

/// One `(variable, clause)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proposition {
    pub variable: Variable,
    pub clause: String,
}

/// Ordered variable ⇄ clause table.
///
/// No two entries share a clause under case-insensitive comparison.
#[derive(Debug, Clone, Default)]
pub struct PropositionMapping {
    entries: Vec<Proposition>,
    by_variable: HashMap<Variable, usize>,
    by_clause: HashMap<String, usize>,
}

/// Key used by the reverse index.
fn normalize(clause: &str) -> String {
    clause.trim().to_lowercase()
}

impl PropositionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the variable already bound to `clause`, or binds a fresh one
    /// taken from `allocator`.
    pub fn resolve(&mut self, clause: &str, allocator: &mut LetterAllocator) -> Variable {
        if let Some(existing) = self.variable_for(clause) {
            return existing.clone();
        }
        let variable = allocator.next();
        self.push(variable.clone(), clause.trim().to_string());
        variable
    }

    /// Binds `variable` to `clause` directly.
    ///
    /// If the clause is already known, nothing changes and the variable it is
    /// bound to is returned. If `variable` is already bound to another
    /// clause, that binding is replaced.
    pub fn insert(&mut self, variable: Variable, clause: &str) -> Variable {
        if let Some(existing) = self.variable_for(clause) {
            return existing.clone();
        }
        let clause = clause.trim().to_string();
        if let Some(&idx) = self.by_variable.get(&variable) {
            let old = std::mem::replace(&mut self.entries[idx].clause, clause.clone());
            self.by_clause.remove(&normalize(&old));
            self.by_clause.insert(normalize(&clause), idx);
            return variable;
        }
        self.push(variable.clone(), clause);
        variable
    }

    fn push(&mut self, variable: Variable, clause: String) {
        let idx = self.entries.len();
        self.by_variable.insert(variable.clone(), idx);
        self.by_clause.insert(normalize(&clause), idx);
        self.entries.push(Proposition { variable, clause });
    }

    /// Clause bound to `variable`.
    pub fn get(&self, variable: &Variable) -> Option<&str> {
        self.by_variable
            .get(variable)
            .map(|&idx| self.entries[idx].clause.as_str())
    }

    /// Variable bound to `clause` (case-insensitive).
    pub fn variable_for(&self, clause: &str) -> Option<&Variable> {
        self.by_clause
            .get(&normalize(clause))
            .map(|&idx| &self.entries[idx].variable)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Proposition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for PropositionMapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for PropositionMapping {}

impl Serialize for PropositionMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

impl<'a> IntoIterator for &'a PropositionMapping {
    type Item = &'a Proposition;
    type IntoIter = std::slice::Iter<'a, Proposition>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn var(name: &str) -> Variable {
        Variable::parse(name).unwrap()
    }

    #[test]
    fn resolve_allocates_in_discovery_order() {
        let mut alloc = LetterAllocator::new();
        let mut map = PropositionMapping::new();
        assert_eq!(map.resolve("Maria estuda", &mut alloc), var("P"));
        assert_eq!(map.resolve("João trabalha", &mut alloc), var("Q"));

        let pairs: Vec<(String, String)> = map
            .entries()
            .map(|p| (p.variable.to_string(), p.clause.clone()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("P".to_string(), "Maria estuda".to_string()),
                ("Q".to_string(), "João trabalha".to_string()),
            ]
        );
    }

    #[test]
    fn resolve_reuses_variable_ignoring_case() {
        let mut alloc = LetterAllocator::new();
        let mut map = PropositionMapping::new();
        let first = map.resolve("A ocorre", &mut alloc);
        let second = map.resolve("a OCORRE", &mut alloc);
        assert_eq!(first, second);
        assert_eq!(map.len(), 1);
        assert_eq!(alloc.allocated(), 1);
        // First spelling wins.
        assert_eq!(map.get(&first), Some("A ocorre"));
    }

    #[test]
    fn case_folding_covers_accented_letters() {
        let mut alloc = LetterAllocator::new();
        let mut map = PropositionMapping::new();
        let a = map.resolve("ÁGUA ferve", &mut alloc);
        let b = map.resolve("água ferve", &mut alloc);
        assert_eq!(a, b);
    }

    #[test]
    fn lookups_in_both_directions() {
        let mut map = PropositionMapping::new();
        map.insert(var("P"), "chove");
        assert_eq!(map.get(&var("P")), Some("chove"));
        assert_eq!(map.variable_for("CHOVE"), Some(&var("P")));
        assert_eq!(map.get(&var("Q")), None);
        assert_eq!(map.variable_for("neva"), None);
    }

    #[test]
    fn insert_keeps_clause_unique() {
        let mut map = PropositionMapping::new();
        map.insert(var("P"), "chove");
        let bound = map.insert(var("Q"), "Chove");
        assert_eq!(bound, var("P"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn insert_rebinds_existing_variable() {
        let mut map = PropositionMapping::new();
        map.insert(var("P"), "chove");
        map.insert(var("P"), "neva");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&var("P")), Some("neva"));
        assert_eq!(map.variable_for("chove"), None);
        assert_eq!(map.variable_for("neva"), Some(&var("P")));
    }

    #[test]
    fn serializes_as_ordered_list() {
        let mut map = PropositionMapping::new();
        map.insert(var("P"), "chove");
        map.insert(var("Q"), "faz frio");
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"variable": "P", "clause": "chove"},
                {"variable": "Q", "clause": "faz frio"},
            ])
        );
    }
}
