//! Search states.
//!
//! A [`SearchNode`] is one proof state. Nodes are plain `Copy` values: a
//! search driver keeps them in a history vector and links them through
//! back-pointer indices. Every edit derives a new node; the only in-place
//! change is [`SearchNode::mutate_quantifier`].

#[cfg(test)]
mod tests;

use natlog_core::{DeleteMask, QuantifierMonotonicity, QuantifierTable, TaggedWord, Word};

use crate::tree::Tree;

/// One state of the search: focus token, truth, deletions, fact hash and
/// quantifier snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchNode {
    fact_hash: u64,
    index: u8,
    truth: bool,
    delete_mask: DeleteMask,
    current: TaggedWord,
    governor: Word,
    backpointer: u32,
    all_quantifiers_seen: bool,
    quantifiers: QuantifierTable,
}

impl SearchNode {
    /// Initial state focused on the tree's root, assumed true.
    pub fn new(tree: &Tree) -> Self {
        Self::at_with_truth(tree, tree.root(), true)
    }

    /// Initial state focused on the root with an assumed truth value.
    pub fn with_truth(tree: &Tree, truth: bool) -> Self {
        Self::at_with_truth(tree, tree.root(), truth)
    }

    /// Initial state focused on `index`, assumed true.
    pub fn at(tree: &Tree, index: u8) -> Self {
        Self::at_with_truth(tree, index, true)
    }

    /// Initial state focused on `index` with an assumed truth value.
    pub fn at_with_truth(tree: &Tree, index: u8, truth: bool) -> Self {
        Self {
            fact_hash: tree.hash(),
            index,
            truth,
            delete_mask: DeleteMask::EMPTY,
            current: tree.token(index),
            governor: tree.governor_word(index),
            backpointer: 0,
            all_quantifiers_seen: false,
            quantifiers: *tree.quantifier_table(),
        }
    }

    /// The state after replacing the focus token.
    pub fn mutation(
        &self,
        new_hash: u64,
        new_token: TaggedWord,
        new_truth: bool,
        backpointer: u32,
    ) -> Self {
        Self {
            fact_hash: new_hash,
            truth: new_truth,
            current: new_token,
            backpointer,
            ..*self
        }
    }

    /// The state after deleting `added_deletions`. Deletions accumulate.
    pub fn deletions(
        &self,
        new_hash: u64,
        new_truth: bool,
        added_deletions: DeleteMask,
        backpointer: u32,
    ) -> Self {
        Self {
            fact_hash: new_hash,
            truth: new_truth,
            delete_mask: self.delete_mask | added_deletions,
            backpointer,
            ..*self
        }
    }

    /// The state after moving the focus to `new_index`.
    pub fn moved(&self, tree: &Tree, new_index: u8, backpointer: u32) -> Self {
        Self {
            index: new_index,
            current: tree.token(new_index),
            governor: tree.governor_word(new_index),
            backpointer,
            ..*self
        }
    }

    /// The same state with every quantifier marked as visited.
    pub fn with_all_quantifiers_seen(&self) -> Self {
        Self {
            all_quantifiers_seen: true,
            ..*self
        }
    }

    /// Rewrites the quantifier in `slot`, keeping the fact hash in step.
    ///
    /// Setting a slot back to its previous value restores the previous
    /// hash exactly.
    pub fn mutate_quantifier(&mut self, slot: usize, quantifier: QuantifierMonotonicity) {
        self.fact_hash ^= self.quantifiers.hash();
        self.quantifiers.set(slot, quantifier);
        self.fact_hash ^= self.quantifiers.hash();
    }

    /// The state after deleting the subtree under `dependent_index`, a
    /// child of the focus token.
    ///
    /// Tokens already deleted are not hashed out again. Quantifiers headed
    /// inside the deleted subtree are cleared from the snapshot and the
    /// hash. The caller decides `new_truth`.
    pub fn deletion(
        &self,
        history_index: u32,
        new_truth: bool,
        tree: &Tree,
        dependent_index: u8,
    ) -> Self {
        let closure = tree.create_delete_mask(dependent_index);
        let added = closure.difference(&self.delete_mask);
        let new_hash = tree.update_hash_from_deletions(
            self.fact_hash,
            dependent_index,
            tree.word(dependent_index),
            self.word(),
            added,
        );
        let mut derived = self.deletions(new_hash, new_truth, added, history_index);

        let old_quantifier_hash = derived.quantifiers.hash();
        let mut cleared = false;
        for index in added.iter() {
            if let Some(slot) = tree.quantifier_index(index) {
                derived.quantifiers.clear(slot);
                cleared = true;
            }
        }
        if cleared {
            derived.fact_hash ^= old_quantifier_hash ^ derived.quantifiers.hash();
        }
        derived
    }

    #[inline]
    pub fn fact_hash(&self) -> u64 {
        self.fact_hash
    }

    /// Index of the focus token in the tree.
    #[inline]
    pub fn token_index(&self) -> u8 {
        self.index
    }

    #[inline]
    pub fn truth(&self) -> bool {
        self.truth
    }

    #[inline]
    pub fn delete_mask(&self) -> DeleteMask {
        self.delete_mask
    }

    /// Returns true if the token at `index` has been deleted.
    #[inline]
    pub fn is_deleted(&self, index: u8) -> bool {
        self.delete_mask.contains(index)
    }

    /// The focus token as it currently reads.
    #[inline]
    pub fn token(&self) -> TaggedWord {
        self.current
    }

    #[inline]
    pub fn word(&self) -> Word {
        self.current.word
    }

    #[inline]
    pub fn sense(&self) -> u8 {
        self.current.sense
    }

    /// Word of the focus token's governor.
    #[inline]
    pub fn governor(&self) -> Word {
        self.governor
    }

    /// Index of the parent state in the driver's history.
    #[inline]
    pub fn backpointer(&self) -> u32 {
        self.backpointer
    }

    #[inline]
    pub fn all_quantifiers_seen(&self) -> bool {
        self.all_quantifiers_seen
    }

    /// Quantifier snapshot used for projection.
    #[inline]
    pub fn quantifiers(&self) -> &QuantifierTable {
        &self.quantifiers
    }
}
