//! Mutation-graph collaborator.

use natlog_core::Edge;

/// Knows which single-word deletions are valid mutation targets.
///
/// While indexing, a trie node only records an incoming edge when the
/// graph confirms it as a registered deletion.
pub trait MutationGraph {
    /// Returns true if `edge` is a registered deletion.
    fn contains_deletion(&self, edge: &Edge) -> bool;
}

impl<F> MutationGraph for F
where
    F: Fn(&Edge) -> bool,
{
    fn contains_deletion(&self, edge: &Edge) -> bool {
        self(edge)
    }
}
