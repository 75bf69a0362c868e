//! Order-independent fact hashing.
//!
//! A fact hash is the XOR of one contribution per dependency edge and one
//! per quantifier slot. XOR is commutative and self-inverse, so an edit
//! updates the hash by XOR-ing out the old contributions and XOR-ing in
//! the new ones.

use crate::label::DepLabel;
use crate::token::Word;

/// 64-bit mixing function used for every hash contribution.
#[inline]
pub fn mix(u: u64) -> u64 {
    let mut v = u
        .wrapping_mul(3_935_559_000_370_003_845)
        .wrapping_add(2_691_343_689_449_507_681);
    v ^= v >> 21;
    v ^= v << 37;
    v ^= v >> 4;
    v = v.wrapping_mul(4_768_777_513_237_032_717);
    v ^= v << 20;
    v ^= v >> 41;
    v ^= v << 5;
    v
}

/// A dependency arc as seen by the hash: governor word, dependent word and
/// relation label. Senses do not participate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub governor: Word,
    pub dependent: Word,
    pub relation: DepLabel,
}

/// Hash contribution of one dependency arc.
///
/// Negation arcs hash as determiner arcs, so "no" and "not" paraphrases
/// collide. Operator arcs contribute nothing.
#[inline]
pub fn hash_edge(edge: DependencyEdge) -> u64 {
    let relation = match edge.relation {
        DepLabel::OP => return 0,
        DepLabel::NEG => DepLabel::DET,
        other => other,
    };
    let words = (edge.governor as u64) | (edge.dependent as u64) << 32;
    mix(mix(words) ^ relation.code() as u64)
}
