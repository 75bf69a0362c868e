//! natlog Facts - Trie fact index and bulk loading
//!
//! A [`TrieRoot`] is filled once from a [`FactSource`] through
//! [`load_facts`] and is read-only afterwards. Queries walk one trie level
//! per token and can collect completion candidates for the position being
//! edited.
//!
//! # Example
//!
//! ```
//! use natlog_core::{Edge, TaggedWord};
//! use natlog_facts::{CompletionBuffer, TrieRoot};
//!
//! let mut facts = TrieRoot::new();
//! let fact: Vec<Edge> = [10, 20, 30].into_iter().map(Edge::fact).collect();
//! facts.add(&fact, None);
//!
//! let query: Vec<TaggedWord> = [10, 20, 30].into_iter().map(|w| TaggedWord::new(w, 0)).collect();
//! let mut completions = CompletionBuffer::new();
//! assert!(facts.contains(&query, 3, &mut completions));
//! assert!(completions.is_empty());
//! ```

pub mod error;
pub mod graph;
pub mod load;
pub mod trie;

pub use error::FactLoadError;
pub use graph::MutationGraph;
pub use load::{
    load_facts, FactRecord, FactSource, LoadStats, TsvFactSource, VecFactSource, WordSenseTable,
};
pub use trie::{CompletionBuffer, FactIndex, MemoryUsage, Trie, TrieRoot};
