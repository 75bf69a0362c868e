//! Truth transitions across a single edit.
//!
//! Forward entailment, reverse entailment, equivalence and independence
//! carry truth across an edit unchanged; negation, alternation and cover
//! flip it. The flip for alternation and cover is not logically valid in
//! every direction; the cost model prices those transitions instead of
//! forbidding them.

use super::relation::NatlogRelation;
use crate::error::Result;

/// Truth of the sentence after an edit whose projected relation is
/// `relation`, given the truth before it.
#[inline]
pub fn transition(start_truth: bool, relation: NatlogRelation) -> bool {
    if relation.negates() {
        !start_truth
    } else {
        start_truth
    }
}

/// Truth the sentence must have had before an edit with projected relation
/// `relation` for it to have `end_truth` afterwards.
///
/// `transition(reverse_transition(t, r), r) == t` for every `t` and `r`.
#[inline]
pub fn reverse_transition(end_truth: bool, relation: NatlogRelation) -> bool {
    if relation.negates() {
        !end_truth
    } else {
        end_truth
    }
}

/// [`transition`] over a raw relation code.
pub fn transition_code(start_truth: bool, relation: u8) -> Result<bool> {
    Ok(transition(start_truth, NatlogRelation::try_from(relation)?))
}

/// [`reverse_transition`] over a raw relation code.
pub fn reverse_transition_code(end_truth: bool, relation: u8) -> Result<bool> {
    Ok(reverse_transition(end_truth, NatlogRelation::try_from(relation)?))
}
