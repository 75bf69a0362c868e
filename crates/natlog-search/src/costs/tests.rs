//! Tests for the edit cost model.

use super::*;

use natlog_core::{InputKind, NatlogError};
use natlog_test::sentences::{ALL_CATS_HAVE_TAILS, BLACK_CAT_CHASED_MOUSE};
use natlog_test::words::{BLACK, NOT};

fn parse(conll: &str) -> Tree {
    Tree::from_conll(conll).expect("fixture parses")
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Tables
// ============================================================================

#[test]
fn test_strict_costs_price_fishy_types_and_asymmetry() {
    let costs = SearchCosts::strict(0.1, 1.0, 5.0);

    for mutation in MutationType::ALL {
        let expected = if mutation.is_fishy() { 5.0 } else { 0.1 };
        assert_eq!(costs.mutation_lexical_cost[mutation.index()], expected);
    }
    assert_eq!(
        costs.mutation_lexical_cost[MutationType::VerbEntail.index()],
        5.0
    );
    assert_eq!(
        costs.mutation_lexical_cost[MutationType::AngleNearestNeighbor.index()],
        5.0
    );

    let reverse = NatlogRelation::ReverseEntailment.index();
    assert_eq!(costs.transition_cost_from_true[reverse], 5.0);
    assert_eq!(costs.transition_cost_from_false[reverse], 1.0);

    let forward = NatlogRelation::ForwardEntailment.index();
    assert_eq!(costs.transition_cost_from_true[forward], 1.0);
    assert_eq!(costs.transition_cost_from_false[forward], 5.0);

    assert!(costs.insertion_lexical_cost.iter().all(|&c| c == 0.1));
    assert!(costs.deletion_lexical_cost.iter().all(|&c| c == 0.1));
}

#[test]
fn test_default_uses_default_levels() {
    let costs = SearchCosts::default();
    assert_eq!(costs, SearchCosts::from_config(&CostConfig::default()));
    assert!(costs.validate().is_ok());
}

#[test]
fn test_validate_rejects_negative_and_nan() {
    let mut costs = SearchCosts::default();
    costs.deletion_lexical_cost[3] = -1.0;
    let err = costs.validate().unwrap_err();
    assert!(err.to_string().contains("deletion_lexical_cost[3]"));

    let mut costs = SearchCosts::default();
    costs.transition_cost_from_false[0] = f32::NAN;
    assert!(costs.validate().is_err());
}

// ============================================================================
// Edit costs
// ============================================================================

#[test]
fn test_mutation_cost_in_downward_subject() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let costs = SearchCosts::strict(0.1, 1.0, 5.0);
    let cats = SearchNode::at(&tree, 1);

    // A hypernym under "all" projects to reverse entailment.
    let cost = costs
        .mutation_cost(&tree, &cats, MutationType::WordnetUp.code(), true)
        .unwrap();
    assert!(cost.start_truth);
    assert_close(cost.cost, 5.1);

    let cost = costs
        .mutation_cost(&tree, &cats, MutationType::WordnetDown.code(), true)
        .unwrap();
    assert_close(cost.cost, 1.1);
}

#[test]
fn test_mutation_cost_flips_truth_for_antonyms() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let costs = SearchCosts::strict(0.1, 1.0, 5.0);
    let tails = SearchNode::at(&tree, 3);

    let cost = costs
        .mutation_cost(&tree, &tails, MutationType::WordnetNounAntonym.code(), false)
        .unwrap();
    assert!(cost.start_truth);
    assert_close(cost.cost, 1.1);
}

#[test]
fn test_mutation_cost_rejects_unknown_edge_type() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let node = SearchNode::new(&tree);
    let err = SearchCosts::default()
        .mutation_cost(&tree, &node, 200, true)
        .unwrap_err();
    assert_eq!(
        err,
        NatlogError::InvalidProjectionInput {
            kind: InputKind::MutationType,
            code: 200
        }
    );
    assert!(err.is_contract_violation());
}

#[test]
#[should_panic(expected = "corrupt natural-logic input")]
fn test_panic_policy_aborts_on_unknown_edge_type() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let node = SearchNode::new(&tree);
    let costs = SearchCosts::default().with_invalid_input(InvalidInputPolicy::Panic);
    let _ = costs.mutation_cost(&tree, &node, 200, true);
}

#[test]
fn test_panic_policy_keeps_valid_edge_types() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let node = SearchNode::at(&tree, 1);
    let strict = SearchCosts::default().with_invalid_input(InvalidInputPolicy::Panic);
    let code = MutationType::WordnetNounAntonym.code();
    assert_eq!(
        strict.mutation_cost(&tree, &node, code, true).unwrap(),
        SearchCosts::default()
            .mutation_cost(&tree, &node, code, true)
            .unwrap()
    );
}

#[test]
fn test_insertion_and_deletion_are_converse() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);
    let costs = SearchCosts::strict(0.1, 1.0, 5.0);
    let cat = SearchNode::at(&tree, 2);

    // Inserting an adjective specializes; deleting one generalizes.
    let insert = costs.insertion_cost(&tree, &cat, DepLabel::AMOD, BLACK, true);
    assert!(insert.start_truth);
    assert_close(insert.cost, 5.1);

    let delete = costs.deletion_cost(&tree, &cat, DepLabel::AMOD, BLACK, true);
    assert!(delete.start_truth);
    assert_close(delete.cost, 1.1);
}

#[test]
fn test_inserting_negation_flips_truth() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);
    let costs = SearchCosts::strict(0.1, 1.0, 5.0);
    let root = SearchNode::new(&tree);

    let cost = costs.insertion_cost(&tree, &root, DepLabel::NEG, NOT, true);
    assert!(!cost.start_truth);
    assert_close(cost.cost, 1.1);
}

#[test]
fn test_every_edit_cost_is_finite_and_non_negative() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let costs = SearchCosts::default();

    for index in 0..tree.len() as u8 {
        let node = SearchNode::at(&tree, index);
        for end_truth in [true, false] {
            for mutation in MutationType::ALL {
                let cost = costs
                    .mutation_cost(&tree, &node, mutation.code(), end_truth)
                    .unwrap();
                assert!(cost.cost.is_finite() && cost.cost >= 0.0);
            }
            for code in 0..NUM_DEPENDENCY_LABELS as u8 {
                let label = DepLabel::from_code(code).unwrap();
                let insert = costs.insertion_cost(&tree, &node, label, 99, end_truth);
                let delete = costs.deletion_cost(&tree, &node, label, 99, end_truth);
                assert!(insert.cost.is_finite() && insert.cost >= 0.0);
                assert!(delete.cost.is_finite() && delete.cost >= 0.0);
            }
        }
    }
}
