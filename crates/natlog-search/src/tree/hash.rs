//! Fact hashing over a tree, from scratch and incrementally.

use natlog_core::{hash_edge, DeleteMask, Word};

use super::Tree;

impl Tree {
    /// Order-independent hash of every edge and the quantifier table.
    pub fn hash(&self) -> u64 {
        (0..self.len() as u8)
            .map(|i| hash_edge(self.edge_into(i)))
            .fold(self.quantifier_table.hash(), |acc, h| acc ^ h)
    }

    /// Updates `old_hash` after the token at `index` changed from
    /// `old_word` to `new_word`.
    ///
    /// Rewrites the incoming edge of `index` and the incoming edge of each
    /// of its children, which name the mutated word as governor.
    pub fn update_hash_from_mutation(
        &self,
        old_hash: u64,
        index: u8,
        old_word: Word,
        governor: Word,
        new_word: Word,
    ) -> u64 {
        let mut hash = old_hash;
        hash ^= hash_edge(self.edge_into_with(index, old_word, governor));
        hash ^= hash_edge(self.edge_into_with(index, new_word, governor));
        for (i, node) in self.nodes.iter().enumerate() {
            if node.governor == index {
                let child = i as u8;
                hash ^= hash_edge(self.edge_into_with(child, node.word, old_word));
                hash ^= hash_edge(self.edge_into_with(child, node.word, new_word));
            }
        }
        hash
    }

    /// Removes the edges of every token in `new_deletions` from `old_hash`.
    ///
    /// The chunk root `deletion_index` is hashed with `deletion_word` under
    /// `governor`, the words it had when it was cut. Every other token
    /// uses its own edge from the tree.
    pub fn update_hash_from_deletions(
        &self,
        old_hash: u64,
        deletion_index: u8,
        deletion_word: Word,
        governor: Word,
        new_deletions: DeleteMask,
    ) -> u64 {
        new_deletions
            .iter()
            .take_while(|&i| (i as usize) < self.len())
            .fold(old_hash, |hash, i| {
                let edge = if i == deletion_index {
                    self.edge_into_with(i, deletion_word, governor)
                } else {
                    self.edge_into(i)
                };
                hash ^ hash_edge(edge)
            })
    }
}
