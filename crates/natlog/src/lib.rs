//! natlog - natural-logic inference core in Rust
//!
//! Parse a dependency tree, index known facts, then price the edits a
//! search driver proposes.
//!
//! # Example
//!
//! ```rust
//! use natlog::prelude::*;
//!
//! let tree = Tree::from_conll("11\t2\tnsubj\n12\t0\troot\n").unwrap();
//! let node = SearchNode::new(&tree);
//! assert_eq!(node.fact_hash(), tree.hash());
//!
//! let mut facts = TrieRoot::new();
//! facts.add(&[Edge::fact(11), Edge::fact(12)], None);
//! let query = [TaggedWord::new(11, 0), TaggedWord::new(12, 0)];
//! assert!(facts.contains_fact(&query));
//! ```

// Core value types and tables
pub use natlog_core::{
    project, reverse_transition, transition, DeleteMask, DepLabel, Edge, InputKind,
    Monotonicity, MutationType, NatlogError, NatlogRelation, QuantifierMonotonicity,
    QuantifierSpan, QuantifierTable, QuantifierType, Result, TaggedWord, Word,
};

// Configuration
pub use natlog_config::{ConfigError, CostConfig, IndexConfig, InvalidInputPolicy, NatlogConfig};

// Proof-state structures
pub use natlog_search::{Dependent, EditCost, SearchCosts, SearchNode, Tree, TreeBuilder, TreeNode};

// Fact index
pub use natlog_facts::{
    load_facts, CompletionBuffer, FactIndex, FactLoadError, FactRecord, FactSource, LoadStats,
    MemoryUsage, MutationGraph, Trie, TrieRoot, TsvFactSource, VecFactSource, WordSenseTable,
};

/// Fixed capacities and reserved values.
pub use natlog_core::constants;

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{DepLabel, Edge, MutationType, NatlogRelation, TaggedWord, Word};
    pub use super::{EditCost, SearchCosts, SearchNode, Tree, TreeBuilder};
    pub use super::{load_facts, CompletionBuffer, FactIndex, TrieRoot, WordSenseTable};
    pub use super::{IndexConfig, NatlogConfig};
}
