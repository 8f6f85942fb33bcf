//! Core types for the cpc translator.
//!
//! This crate holds the pieces shared by both translation directions:
//! propositional [`variable::Variable`]s and the allocator that hands them
//! out, the [`mapping::PropositionMapping`] between variables and the
//! clauses they stand for, and the per-parse [`context::ParseContext`].

pub mod context;
pub mod mapping;
pub mod variable;

