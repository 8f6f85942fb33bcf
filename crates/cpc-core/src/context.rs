//! Per-parse state: one allocator paired with one mapping.

use crate::mapping::PropositionMapping;
use crate::variable::{LetterAllocator, Variable};

/// State threaded through one sentence parse.
///
/// Created fresh for every parse and consumed by [`ParseContext::into_mapping`]
/// when the parse finishes, so nothing leaks between calls.
#[derive(Debug, Default)]
pub struct ParseContext {
    allocator: LetterAllocator,
    mapping: PropositionMapping,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variable for `clause`, allocating one on first sight.
    pub fn resolve(&mut self, clause: &str) -> Variable {
        self.mapping.resolve(clause, &mut self.allocator)
    }

    pub fn mapping(&self) -> &PropositionMapping {
        &self.mapping
    }

    pub fn into_mapping(self) -> PropositionMapping {
        self.mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_shares_allocator_and_mapping() {
        let mut ctx = ParseContext::new();
        let p = ctx.resolve("chove");
        let q = ctx.resolve("faz frio");
        let p_again = ctx.resolve("Chove");
        assert_eq!(p.as_str(), "P");
        assert_eq!(q.as_str(), "Q");
        assert_eq!(p, p_again);
        assert_eq!(ctx.mapping().len(), 2);
    }

    #[test]
    fn fresh_contexts_do_not_share_state() {
        let mut first = ParseContext::new();
        first.resolve("chove");
        first.resolve("neva");

        let mut second = ParseContext::new();
        assert_eq!(second.resolve("neva").as_str(), "P");
    }
}
