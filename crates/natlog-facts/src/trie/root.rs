//! Top-level trie with a skip-gram index for sentence-initial
//! completions.

use std::collections::{BTreeMap, HashSet};
use std::mem::size_of;

use natlog_config::IndexConfig;
use natlog_core::{Edge, TaggedWord, Word};

use super::{capped, completion_depth, CompletionBuffer, FactIndex, MemoryUsage, Trie};
use crate::graph::MutationGraph;

/// The trie's top node plus a skip-gram index.
///
/// For every fact of two or more words, the skip-gram index maps the
/// second word to the first. Inserting before the first token of a query
/// then proposes words known to precede the query's current first word
/// instead of scanning the whole vocabulary. Each pair is recorded once,
/// in the order facts arrive.
#[derive(Debug, Clone, Default)]
pub struct TrieRoot {
    trie: Trie,
    skip_grams: BTreeMap<Word, Vec<Word>>,
    skip_gram_pairs: HashSet<(Word, Word)>,
}

impl TrieRoot {
    /// Creates an empty index without completion caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with completion caches.
    pub fn with_completion_cache() -> Self {
        Self {
            trie: Trie::with_completion_cache(),
            ..Self::default()
        }
    }

    /// Creates an empty index configured by `config`.
    pub fn from_config(config: &IndexConfig) -> Self {
        if config.completion_cache {
            Self::with_completion_cache()
        } else {
            Self::new()
        }
    }

    /// The underlying trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Words recorded as preceding `second` at the start of a fact.
    pub fn skip_gram(&self, second: Word) -> &[Word] {
        self.skip_grams
            .get(&second)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Inserts a fact chain and records its opening skip-gram.
    ///
    /// Chains are capped at [`MAX_FACT_LENGTH`](natlog_core::MAX_FACT_LENGTH)
    /// words, as in [`Trie::add`].
    pub fn add(&mut self, facts: &[Edge], graph: Option<&dyn MutationGraph>) {
        let facts = capped(facts);
        if facts.iter().any(|edge| edge.source == 0) {
            return;
        }
        self.trie.insert(facts, graph);
        if let [first, second, ..] = facts {
            if self.skip_gram_pairs.insert((first.source, second.source)) {
                self.skip_grams
                    .entry(second.source)
                    .or_default()
                    .push(first.source);
            }
        }
    }

    /// Checks whether `query` is a known fact and collects completions,
    /// as [`Trie::contains`].
    ///
    /// At `mutation_index == -1` candidates come from the skip-gram index
    /// keyed by the query's first word. Without a matching skip-gram the
    /// first root children are proposed; for an empty query, only
    /// single-word facts are.
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
        let found = if mutation_index == -1 {
            self.fill_initial_completions(query, out);
            self.trie.contains_from(query, None, out)
        } else {
            self.trie
                .contains_from(query, completion_depth(mutation_index), out)
        };
        out.terminate();
        found
    }

    /// Checks whether `query` is a known fact.
    pub fn contains_fact(&self, query: &[TaggedWord]) -> bool {
        self.trie.contains_fact(query)
    }

    fn fill_initial_completions(&self, query: &[TaggedWord], out: &mut CompletionBuffer) {
        let children = &self.trie.children;
        match query.first() {
            Some(first) => match self.skip_grams.get(&first.word) {
                Some(predecessors) => {
                    for &word in predecessors {
                        if out.is_full() {
                            break;
                        }
                        if let Some(child) = children.get(&word) {
                            out.push_completions(child, word);
                        }
                    }
                }
                None => {
                    for (&word, child) in children {
                        if out.is_full() {
                            break;
                        }
                        out.push_completions(child, word);
                    }
                }
            },
            None => {
                for (&word, child) in children.iter().filter(|(_, c)| c.is_leaf) {
                    if out.is_full() {
                        break;
                    }
                    out.push_completions(child, word);
                }
            }
        }
    }

    /// Byte usage of the trie plus the skip-gram index, which counts as
    /// completion caching.
    pub fn memory_usage(&self) -> MemoryUsage {
        let mut usage = self.trie.memory_usage();
        for predecessors in self.skip_grams.values() {
            usage.on_completion_caching += (size_of::<Word>()
                + size_of::<Vec<Word>>()
                + size_of::<Word>() * predecessors.len())
                as u64;
        }
        usage.on_completion_caching +=
            (size_of::<(Word, Word)>() * self.skip_gram_pairs.len()) as u64;
        usage
    }
}

impl FactIndex for TrieRoot {
    fn add(&mut self, facts: &[Edge], graph: Option<&dyn MutationGraph>) {
        TrieRoot::add(self, facts, graph);
    }

    fn memory_usage(&self) -> MemoryUsage {
        TrieRoot::memory_usage(self)
    }
}
