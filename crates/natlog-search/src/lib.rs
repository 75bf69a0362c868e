//! natlog Search - proof-state structures for natural-logic inference
//!
//! This crate provides the structures a search driver walks to find a
//! proof:
//! - [`Tree`]: an immutable dependency tree with quantifier scopes and
//!   incremental fact hashing
//! - [`SearchNode`]: one proof state, derived functionally from a tree or
//!   from a prior state
//! - [`SearchCosts`]: the cost of mutations, insertions and deletions under
//!   monotonicity projection
//!
//! The driver itself (frontier, scheduling, termination) lives outside this
//! crate.

pub mod costs;
pub mod node;
pub mod tree;

pub use costs::{EditCost, SearchCosts};
pub use node::SearchNode;
pub use tree::{Dependent, Tree, TreeBuilder, TreeNode};
