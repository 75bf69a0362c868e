//! Projection of a relation through one quantifier scope.

use super::relation::{Monotonicity, NatlogRelation, QuantifierType};
use crate::error::Result;

/// Projects `relation` through a quantifier argument with the given
/// monotonicity and additivity class.
///
/// The table is total over the typed inputs:
/// - `Flat` keeps equivalence and collapses everything else to independence.
/// - `Up` keeps entailment direction; additivity decides what negation,
///   alternation and cover become.
/// - `Down` additionally swaps forward and reverse entailment.
pub fn project(
    monotonicity: Monotonicity,
    quantifier_type: QuantifierType,
    relation: NatlogRelation,
) -> NatlogRelation {
    use NatlogRelation::*;

    match monotonicity {
        Monotonicity::Flat => match relation {
            Equivalent => Equivalent,
            _ => Independence,
        },
        Monotonicity::Up => match relation {
            Equivalent | ForwardEntailment | ReverseEntailment | Independence => relation,
            Negation => match quantifier_type {
                QuantifierType::None => Independence,
                QuantifierType::Additive => Cover,
                QuantifierType::Multiplicative => Alternation,
                QuantifierType::Both => Negation,
            },
            Alternation => match quantifier_type {
                QuantifierType::None | QuantifierType::Additive => Independence,
                QuantifierType::Multiplicative | QuantifierType::Both => Alternation,
            },
            Cover => match quantifier_type {
                QuantifierType::None | QuantifierType::Multiplicative => Independence,
                QuantifierType::Additive | QuantifierType::Both => Cover,
            },
        },
        Monotonicity::Down => match relation {
            Equivalent | Independence => relation,
            ForwardEntailment => ReverseEntailment,
            ReverseEntailment => ForwardEntailment,
            Negation => match quantifier_type {
                QuantifierType::None => Independence,
                QuantifierType::Additive => Alternation,
                QuantifierType::Multiplicative => Cover,
                QuantifierType::Both => Negation,
            },
            Alternation => match quantifier_type {
                QuantifierType::None | QuantifierType::Additive => Independence,
                QuantifierType::Multiplicative | QuantifierType::Both => Cover,
            },
            Cover => match quantifier_type {
                QuantifierType::None | QuantifierType::Multiplicative => Independence,
                QuantifierType::Additive | QuantifierType::Both => Alternation,
            },
        },
    }
}

/// Projects raw codes, as they arrive from packed edge and quantifier
/// records.
///
/// # Errors
///
/// Returns [`NatlogError::InvalidProjectionInput`](crate::NatlogError) if any
/// code does not name a known monotonicity, class or relation.
pub fn project_code(monotonicity: u8, quantifier_type: u8, relation: u8) -> Result<u8> {
    let monotonicity = Monotonicity::try_from(monotonicity)?;
    let quantifier_type = QuantifierType::try_from(quantifier_type)?;
    let relation = NatlogRelation::try_from(relation)?;
    Ok(project(monotonicity, quantifier_type, relation).code())
}
