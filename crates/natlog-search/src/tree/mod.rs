//! Dependency trees.
//!
//! A [`Tree`] is built once, either from a serialized CoNLL-style record
//! batch ([`Tree::from_conll`]) or programmatically ([`TreeBuilder`]), and
//! is immutable afterwards. Tokens live in a flat arena addressed by `u8`
//! indices; the root's governor is the [`ABSENT`] sentinel.
//!
//! Every token's quantifier scope is resolved once at construction: the
//! quantifiers whose subject or object span contains the token, ordered by
//! increasing distance to the nearer span edge. Projection composes them in
//! that order, innermost first.

mod builder;
mod hash;
mod parse;

#[cfg(test)]
mod tests;

use natlog_core::hash::DependencyEdge;
use natlog_core::{
    project, DeleteMask, DepLabel, Monotonicity, NatlogError, NatlogRelation,
    QuantifierMonotonicity, QuantifierSpan, QuantifierTable, QuantifierType, Result, TaggedWord,
    Word, ABSENT, MAX_QUANTIFIER_COUNT, MAX_TOKEN_COUNT, TREE_ROOT_WORD,
};
use smallvec::SmallVec;
use tracing::warn;

use crate::node::SearchNode;

pub use builder::TreeBuilder;

/// Quantifier slots in scope at one token, innermost first.
type ScopeList = SmallVec<[u8; MAX_QUANTIFIER_COUNT]>;

/// One token of a dependency tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeNode {
    pub word: Word,
    pub sense: u8,
    /// Index of the governing token, or [`ABSENT`] for the root.
    pub governor: u8,
    pub relation: DepLabel,
    /// The token denotes a location.
    pub is_location: bool,
}

impl TreeNode {
    /// Creates a token with sense 0 and no flags.
    pub fn new(word: Word, governor: u8, relation: DepLabel) -> Self {
        Self {
            word,
            sense: 0,
            governor,
            relation,
            is_location: false,
        }
    }

    /// Returns true if this token is governed by the root sentinel.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.governor == ABSENT
    }
}

/// A direct child of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dependent {
    pub index: u8,
    pub relation: DepLabel,
}

/// An immutable dependency tree with quantifier scopes.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    root: u8,
    quantifier_spans: SmallVec<[QuantifierSpan; MAX_QUANTIFIER_COUNT]>,
    quantifier_table: QuantifierTable,
    scopes: Vec<ScopeList>,
}

impl Tree {
    /// Builds a tree from its tokens and quantifiers.
    ///
    /// Quantifiers take slots in the order given. Quantifiers beyond
    /// [`MAX_QUANTIFIER_COUNT`] are dropped with a warning.
    ///
    /// # Errors
    ///
    /// Fails if the tree is too long, a governor points outside the tree,
    /// or the tree does not have exactly one root.
    pub fn from_parts(
        nodes: Vec<TreeNode>,
        quantifiers: &[(QuantifierSpan, QuantifierMonotonicity)],
    ) -> Result<Self> {
        if nodes.len() > MAX_TOKEN_COUNT {
            return Err(NatlogError::TreeTooLong {
                length: nodes.len(),
                max: MAX_TOKEN_COUNT,
            });
        }

        let mut root = None;
        for (i, node) in nodes.iter().enumerate() {
            let index = i as u8;
            if node.is_root() {
                if root.is_some() {
                    return Err(NatlogError::MultipleRoots { index });
                }
                root = Some(index);
            } else if node.governor as usize >= nodes.len() {
                return Err(NatlogError::GovernorOutOfRange {
                    index,
                    governor: node.governor as usize,
                });
            }
        }
        let root = root.ok_or(NatlogError::NoRoot)?;

        let mut quantifier_spans = SmallVec::new();
        let mut quantifier_table = QuantifierTable::new();
        for (span, monotonicity) in quantifiers {
            if quantifier_spans.len() >= MAX_QUANTIFIER_COUNT {
                warn!(
                    event = "quantifier_overflow",
                    token = span.quantifier_index,
                    max = MAX_QUANTIFIER_COUNT,
                    "too many quantifiers; dropping"
                );
                continue;
            }
            quantifier_table.set(quantifier_spans.len(), *monotonicity);
            quantifier_spans.push(*span);
        }

        let mut tree = Self {
            nodes,
            root,
            quantifier_spans,
            quantifier_table,
            scopes: Vec::new(),
        };
        tree.scopes = (0..tree.nodes.len())
            .map(|i| tree.resolve_scope(i as u8))
            .collect();
        Ok(tree)
    }

    /// Orders the quantifiers containing `index` by distance to the nearer
    /// edge of the containing span. Ties keep registration order.
    fn resolve_scope(&self, index: u8) -> ScopeList {
        let mut in_scope: SmallVec<[(u8, u8); MAX_QUANTIFIER_COUNT]> = self
            .quantifier_spans
            .iter()
            .enumerate()
            .filter_map(|(slot, span)| span.scope_distance(index).map(|d| (d, slot as u8)))
            .collect();
        in_scope.sort_by_key(|&(distance, _)| distance);
        in_scope.into_iter().map(|(_, slot)| slot).collect()
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no tokens. Never true for a built tree.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the unique root token.
    #[inline]
    pub fn root(&self) -> u8 {
        self.root
    }

    /// The token at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a token of this tree.
    #[inline]
    pub fn node(&self, index: u8) -> &TreeNode {
        &self.nodes[index as usize]
    }

    /// Iterates over every token in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        self.nodes.iter()
    }

    #[inline]
    pub fn token(&self, index: u8) -> TaggedWord {
        let node = self.node(index);
        TaggedWord::new(node.word, node.sense)
    }

    #[inline]
    pub fn word(&self, index: u8) -> Word {
        self.node(index).word
    }

    #[inline]
    pub fn sense(&self, index: u8) -> u8 {
        self.node(index).sense
    }

    /// Governor index of `index`, or [`ABSENT`] for the root.
    #[inline]
    pub fn governor(&self, index: u8) -> u8 {
        self.node(index).governor
    }

    /// Word of the governor of `index`; [`TREE_ROOT_WORD`] for the root.
    #[inline]
    pub fn governor_word(&self, index: u8) -> Word {
        match self.governor(index) {
            ABSENT => TREE_ROOT_WORD,
            governor => self.word(governor),
        }
    }

    #[inline]
    pub fn relation(&self, index: u8) -> DepLabel {
        self.node(index).relation
    }

    #[inline]
    pub fn is_location(&self, index: u8) -> bool {
        self.node(index).is_location
    }

    /// The arc into `index` as it currently stands in the tree.
    #[inline]
    pub fn edge_into(&self, index: u8) -> DependencyEdge {
        self.edge_into_with(index, self.word(index), self.governor_word(index))
    }

    /// The arc into `index` with substituted dependent and governor words.
    #[inline]
    pub fn edge_into_with(&self, index: u8, word: Word, governor_word: Word) -> DependencyEdge {
        DependencyEdge {
            governor: governor_word,
            dependent: word,
            relation: self.relation(index),
        }
    }

    /// Up to `max_children` direct children of `index`, in ascending index
    /// order. Further children are silently dropped.
    pub fn dependents(&self, index: u8, max_children: usize) -> SmallVec<[Dependent; 8]> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.governor == index)
            .take(max_children)
            .map(|(i, node)| Dependent {
                index: i as u8,
                relation: node.relation,
            })
            .collect()
    }

    /// The set of tokens removed by deleting `root`: `root` itself and
    /// everything it transitively governs.
    pub fn create_delete_mask(&self, root: u8) -> DeleteMask {
        self.close_delete_mask(DeleteMask::single(root))
    }

    /// Extends `mask` until every token whose governor is marked is marked
    /// too. Idempotent.
    pub fn close_delete_mask(&self, mut mask: DeleteMask) -> DeleteMask {
        let mut clean_pass = false;
        while !clean_pass {
            clean_pass = true;
            for (i, node) in self.nodes.iter().enumerate() {
                if !node.is_root() && mask.contains(node.governor) && mask.insert(i as u8) {
                    clean_pass = false;
                }
            }
        }
        mask
    }

    /// Number of registered quantifiers.
    #[inline]
    pub fn quantifier_count(&self) -> usize {
        self.quantifier_spans.len()
    }

    /// Span of the quantifier in `slot`.
    pub fn quantifier_span(&self, slot: usize) -> Option<&QuantifierSpan> {
        self.quantifier_spans.get(slot)
    }

    /// The quantifier table as parsed.
    #[inline]
    pub fn quantifier_table(&self) -> &QuantifierTable {
        &self.quantifier_table
    }

    /// Slot of the quantifier whose head is `index`, if any.
    pub fn quantifier_index(&self, index: u8) -> Option<usize> {
        self.quantifier_spans
            .iter()
            .position(|span| span.quantifier_index == index)
    }

    /// Returns true if `index` heads a registered quantifier.
    #[inline]
    pub fn is_quantifier(&self, index: u8) -> bool {
        self.quantifier_index(index).is_some()
    }

    /// Quantifier slots in scope at `index`, innermost first.
    #[inline]
    pub fn quantifiers_in_scope(&self, index: u8) -> &[u8] {
        &self.scopes[index as usize]
    }

    /// Monotonicity and additivity of every quantifier argument enclosing
    /// `index`, innermost first, read from the tree's own table.
    pub fn quantifiers_at(
        &self,
        index: u8,
    ) -> impl Iterator<Item = (Monotonicity, QuantifierType)> + '_ {
        self.scoped_arguments(index, &self.quantifier_table)
    }

    fn scoped_arguments<'a>(
        &'a self,
        index: u8,
        table: &'a QuantifierTable,
    ) -> impl Iterator<Item = (Monotonicity, QuantifierType)> + 'a {
        self.quantifiers_in_scope(index)
            .iter()
            .filter_map(move |&slot| {
                let quantifier = table.get(slot as usize)?;
                let span = &self.quantifier_spans[slot as usize];
                Some(if span.in_subject(index) {
                    (quantifier.subj_mono, quantifier.subj_type)
                } else {
                    (quantifier.obj_mono, quantifier.obj_type)
                })
            })
    }

    /// Projects a lexical relation at `index` through every quantifier in
    /// scope there, innermost first.
    ///
    /// Monotonicities come from the search node's quantifier snapshot, so
    /// quantifier mutations made during search are honoured. A slot the
    /// node has cleared no longer projects.
    pub fn project_lexical_relation(
        &self,
        node: &SearchNode,
        lexical_relation: NatlogRelation,
        index: u8,
    ) -> NatlogRelation {
        self.scoped_arguments(index, node.quantifiers())
            .fold(lexical_relation, |relation, (mono, ty)| {
                project(mono, ty, relation)
            })
    }

    /// [`project_lexical_relation`](Self::project_lexical_relation) at the
    /// node's focus token.
    #[inline]
    pub fn project_at_focus(&self, node: &SearchNode, lexical_relation: NatlogRelation) -> NatlogRelation {
        self.project_lexical_relation(node, lexical_relation, node.token_index())
    }

    /// Pre-order depth-first traversal from the root.
    ///
    /// Returns at most [`MAX_TOKEN_COUNT`] indices. With
    /// `ignore_quantifiers`, quantifier heads are skipped but their
    /// dependents are still visited.
    pub fn topological_sort(&self, ignore_quantifiers: bool) -> Vec<u8> {
        let mut buffer = [ABSENT; MAX_TOKEN_COUNT + 1];
        let written = self.topological_sort_into(&mut buffer, ignore_quantifiers);
        buffer[..written].to_vec()
    }

    /// Writes the traversal of [`topological_sort`](Self::topological_sort)
    /// into `buffer`, followed by an [`ABSENT`] terminator.
    ///
    /// At most `buffer.len() - 1` indices are written, so the terminator
    /// always fits. Returns the number of indices written.
    pub fn topological_sort_into(&self, buffer: &mut [u8], ignore_quantifiers: bool) -> usize {
        let Some(capacity) = buffer.len().checked_sub(1) else {
            return 0;
        };
        let mut stack: Vec<u8> = Vec::with_capacity(self.nodes.len());
        stack.push(self.root);
        let mut written = 0;
        while let Some(index) = stack.pop() {
            if written >= capacity {
                break;
            }
            if !ignore_quantifiers || !self.is_quantifier(index) {
                buffer[written] = index;
                written += 1;
            }
            stack.extend(
                self.dependents(index, MAX_TOKEN_COUNT)
                    .iter()
                    .map(|dependent| dependent.index),
            );
        }
        buffer[written] = ABSENT;
        written
    }
}

/// Trees are equal when they have the same words, governors and relations.
/// Senses, flags and quantifiers are not compared.
impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.nodes.len() == other.nodes.len()
            && self.nodes.iter().zip(&other.nodes).all(|(a, b)| {
                a.word == b.word && a.governor == b.governor && a.relation == b.relation
            })
    }
}

impl Eq for Tree {}
