//! Prefix tree over fact chains.
//!
//! Each level of the trie consumes one word of a fact. A node is a leaf
//! when some fact ends there. Nodes also remember up to
//! [`MAX_EDGES_PER_NODE`] incoming edges, which become completion
//! candidates when a query asks what could be inserted at that position.

mod buffer;
mod root;


use std::collections::BTreeMap;
use std::mem::size_of;
use std::ops::{Add, AddAssign};

use natlog_core::{
    Edge, TaggedWord, Word, MAX_COMPLETIONS, MAX_EDGES_PER_NODE, MAX_FACT_LENGTH,
};
use smallvec::SmallVec;

use crate::graph::MutationGraph;

pub use buffer::CompletionBuffer;
pub use root::TrieRoot;

/// A fact store that can be filled by the bulk loader.
pub trait FactIndex {
    /// Inserts one fact chain.
    fn add(&mut self, facts: &[Edge], graph: Option<&dyn MutationGraph>);

    /// Current memory footprint.
    fn memory_usage(&self) -> MemoryUsage;
}

/// Byte usage of an index, split by purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoryUsage {
    /// Words stored on trie edges.
    pub on_facts: u64,
    /// Node bookkeeping.
    pub on_structure: u64,
    /// Completion caches and skip-grams.
    pub on_completion_caching: u64,
}

impl MemoryUsage {
    pub fn total(&self) -> u64 {
        self.on_facts + self.on_structure + self.on_completion_caching
    }
}

impl Add for MemoryUsage {
    type Output = MemoryUsage;

    fn add(mut self, rhs: MemoryUsage) -> MemoryUsage {
        self += rhs;
        self
    }
}

impl AddAssign for MemoryUsage {
    fn add_assign(&mut self, rhs: MemoryUsage) {
        self.on_facts += rhs.on_facts;
        self.on_structure += rhs.on_structure;
        self.on_completion_caching += rhs.on_completion_caching;
    }
}

/// One node of the fact trie. The node reached from the top is the
/// empty prefix.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    children: BTreeMap<Word, Trie>,
    edges: SmallVec<[Edge; MAX_EDGES_PER_NODE]>,
    is_leaf: bool,
    /// Children that end a fact, in insertion order. `None` when caching
    /// is off.
    completions: Option<Vec<Word>>,
}

impl Trie {
    /// Creates an empty trie without completion caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trie whose nodes keep completion caches for
    /// high-fan-out positions.
    pub fn with_completion_cache() -> Self {
        Self {
            completions: Some(Vec::new()),
            ..Self::default()
        }
    }

    fn empty_like(&self) -> Self {
        if self.completions.is_some() {
            Self::with_completion_cache()
        } else {
            Self::new()
        }
    }

    /// Returns true if a fact ends at this node.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of distinct next words.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Incoming edges recorded at this node.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Inserts a fact chain.
    ///
    /// Every node along the path records its incoming edge unless `graph`
    /// is given and rejects it. Chains containing the reserved word 0 are
    /// ignored; longer chains keep their first [`MAX_FACT_LENGTH`] words.
    pub fn add(&mut self, facts: &[Edge], graph: Option<&dyn MutationGraph>) {
        let facts = capped(facts);
        if facts.iter().any(|edge| edge.source == 0) {
            return;
        }
        self.insert(facts, graph);
    }

    fn insert(&mut self, facts: &[Edge], graph: Option<&dyn MutationGraph>) {
        let Some((first, rest)) = facts.split_first() else {
            return;
        };
        let fresh = self.empty_like();
        let child = self.children.entry(first.source).or_insert(fresh);
        if graph.map_or(true, |g| g.contains_deletion(first)) {
            child.register_edge(*first);
        }
        if rest.is_empty() {
            child.is_leaf = true;
            if let Some(completions) = &mut self.completions {
                if completions.len() < MAX_COMPLETIONS && !completions.contains(&first.source) {
                    completions.push(first.source);
                }
            }
        } else {
            child.insert(rest, graph);
        }
    }

    fn register_edge(&mut self, edge: Edge) {
        if self.edges.len() < MAX_EDGES_PER_NODE && !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }

    /// Checks whether `query` is a known fact and collects completions.
    ///
    /// `mutation_index` names the token after which something is being
    /// inserted; `-1` means before the first token. Completions are the
    /// recorded edges of the children at that position: all of them when
    /// there are at most [`MAX_COMPLETIONS`] children, otherwise the
    /// completion cache (if enabled). A `mutation_index` equal to the
    /// query length collects nothing.
    ///
    /// `out` is cleared first and sentinel-terminated when not full.
    pub fn contains(
        &self,
        query: &[TaggedWord],
        mutation_index: i32,
        out: &mut CompletionBuffer,
    ) -> bool {
        debug_assert!(
            (-1..=query.len() as i32).contains(&mutation_index),
            "mutation index {mutation_index} outside query of length {}",
            query.len()
        );
        out.clear();
        let found = self.contains_from(query, completion_depth(mutation_index), out);
        out.terminate();
        found
    }

    /// Checks whether `query` is a known fact.
    pub fn contains_fact(&self, query: &[TaggedWord]) -> bool {
        self.descend(query).is_some_and(Trie::is_leaf)
    }

    fn descend(&self, query: &[TaggedWord]) -> Option<&Trie> {
        query
            .iter()
            .try_fold(self, |node, token| node.children.get(&token.word))
    }

    /// Walks `query`; completions are collected `depth` levels down.
    fn contains_from(
        &self,
        query: &[TaggedWord],
        depth: Option<usize>,
        out: &mut CompletionBuffer,
    ) -> bool {
        if depth == Some(0) {
            self.fill_completions(out);
        }
        match query.split_first() {
            None => self.is_leaf,
            Some((token, rest)) => match self.children.get(&token.word) {
                Some(child) => {
                    child.contains_from(rest, depth.and_then(|d| d.checked_sub(1)), out)
                }
                None => false,
            },
        }
    }

    fn fill_completions(&self, out: &mut CompletionBuffer) {
        if self.children.len() <= MAX_COMPLETIONS {
            for (&word, child) in &self.children {
                if out.is_full() {
                    break;
                }
                out.push_completions(child, word);
            }
        } else if let Some(completions) = &self.completions {
            for word in completions {
                if out.is_full() {
                    break;
                }
                if let Some(child) = self.children.get(word) {
                    out.push_completions(child, *word);
                }
            }
        }
    }

    /// Byte usage of this subtree.
    pub fn memory_usage(&self) -> MemoryUsage {
        let mut usage = MemoryUsage {
            on_facts: 0,
            on_structure: size_of::<Trie>() as u64,
            on_completion_caching: self
                .completions
                .as_ref()
                .map_or(0, |c| (c.capacity() * size_of::<Word>()) as u64),
        };
        for child in self.children.values() {
            usage.on_facts += size_of::<Word>() as u64;
            usage += child.memory_usage();
        }
        usage
    }
}

impl FactIndex for Trie {
    fn add(&mut self, facts: &[Edge], graph: Option<&dyn MutationGraph>) {
        Trie::add(self, facts, graph);
    }

    fn memory_usage(&self) -> MemoryUsage {
        Trie::memory_usage(self)
    }
}

/// The first [`MAX_FACT_LENGTH`] edges of a chain.
#[inline]
fn capped(facts: &[Edge]) -> &[Edge] {
    &facts[..facts.len().min(MAX_FACT_LENGTH)]
}

/// Levels to descend before collecting completions; `None` when the
/// mutation point is not inside the query.
#[inline]
fn completion_depth(mutation_index: i32) -> Option<usize> {
    usize::try_from(mutation_index + 1).ok()
}
