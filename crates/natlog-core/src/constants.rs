//! Fixed capacities shared by every natlog component.
//!
//! These are hard upper bounds, not soft limits. Outputs that would exceed
//! them are truncated silently.

use crate::label::DEPENDENCY_LABELS;
use crate::mutation::MutationType;
use crate::token::Word;

/// Maximum number of tokens in a dependency tree.
///
/// Token indices run `0..MAX_TOKEN_COUNT`; index [`ABSENT`] is never a token.
pub const MAX_TOKEN_COUNT: usize = 255;

/// Sentinel index meaning "no token": the governor of the root, and the
/// terminator of index buffers.
pub const ABSENT: u8 = 255;

/// Maximum number of quantifiers registered per tree. Extra quantifiers are
/// dropped with a warning.
pub const MAX_QUANTIFIER_COUNT: usize = 6;

/// Maximum number of completions a single containment query produces.
pub const MAX_COMPLETIONS: usize = 25;

/// Maximum number of words in an indexed fact. Longer facts are truncated.
pub const MAX_FACT_LENGTH: usize = 255;

/// Default minimum popularity weight for a fact to be indexed.
pub const MIN_FACT_WEIGHT: u32 = 1;

/// Maximum number of edges a trie node records for completion lookups.
pub const MAX_EDGES_PER_NODE: usize = 4;

/// Number of distinct mutation-edit types.
pub const NUM_MUTATION_TYPES: usize = MutationType::ALL.len();

/// Number of distinct dependency-relation labels.
pub const NUM_DEPENDENCY_LABELS: usize = DEPENDENCY_LABELS.len();

/// Number of natural-logic relations.
pub const NUM_RELATIONS: usize = 7;

/// The word the root token is attached to when hashing its incoming edge.
/// Word 0 is reserved and never names a real token.
pub const TREE_ROOT_WORD: Word = 0;
