//! Tests for search states.

use super::*;

use natlog_core::{Monotonicity, NatlogRelation, QuantifierType, TREE_ROOT_WORD};
use natlog_test::sentences::{ALL_CATS_HAVE_TAILS, BLACK_CAT_CHASED_MOUSE, HAVE_TAILS};
use natlog_test::words::{CATS, FELINES, HAVE, TAILS};

fn parse(conll: &str) -> Tree {
    Tree::from_conll(conll).expect("fixture parses")
}

const NO: QuantifierMonotonicity = QuantifierMonotonicity::new(
    Monotonicity::Down,
    QuantifierType::Additive,
    Monotonicity::Down,
    QuantifierType::Additive,
);

#[test]
fn test_initial_state_from_tree() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let node = SearchNode::new(&tree);

    assert_eq!(node.fact_hash(), tree.hash());
    assert_eq!(node.token_index(), 2);
    assert_eq!(node.word(), HAVE);
    assert_eq!(node.governor(), TREE_ROOT_WORD);
    assert!(node.truth());
    assert!(node.delete_mask().is_empty());
    assert_eq!(node.backpointer(), 0);
    assert!(!node.all_quantifiers_seen());
    assert_eq!(node.quantifiers(), tree.quantifier_table());
}

#[test]
fn test_initial_state_with_focus_and_truth() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let node = SearchNode::at_with_truth(&tree, 1, false);
    assert_eq!(node.token(), TaggedWord::new(CATS, 0));
    assert_eq!(node.governor(), HAVE);
    assert!(!node.truth());

    assert!(!SearchNode::with_truth(&tree, false).truth());
    assert!(SearchNode::at(&tree, 3).truth());
}

#[test]
fn test_mutation_keeps_focus_and_mask() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let start = SearchNode::at(&tree, 1).deletions(7, true, DeleteMask::single(0), 0);
    let mutated = start.mutation(42, TaggedWord::new(FELINES, 1), false, 3);

    assert_eq!(mutated.fact_hash(), 42);
    assert_eq!(mutated.word(), FELINES);
    assert_eq!(mutated.sense(), 1);
    assert!(!mutated.truth());
    assert_eq!(mutated.backpointer(), 3);
    assert_eq!(mutated.token_index(), start.token_index());
    assert_eq!(mutated.delete_mask(), start.delete_mask());
    assert_eq!(mutated.governor(), start.governor());
    assert_eq!(mutated.quantifiers(), start.quantifiers());
}

#[test]
fn test_deletions_accumulate() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);
    let node = SearchNode::new(&tree)
        .deletions(1, true, DeleteMask::single(0), 1)
        .deletions(2, true, DeleteMask::single(4), 2)
        .deletions(3, true, DeleteMask::single(0), 3);

    assert_eq!(node.delete_mask().iter().collect::<Vec<_>>(), vec![0, 4]);
    assert!(node.is_deleted(4));
    assert!(!node.is_deleted(5));
    assert_eq!(node.backpointer(), 3);
}

#[test]
fn test_move_rereads_token_from_tree() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let start = SearchNode::new(&tree).deletions(5, false, DeleteMask::single(0), 0);
    let moved = start.moved(&tree, 3, 9);

    assert_eq!(moved.token_index(), 3);
    assert_eq!(moved.word(), TAILS);
    assert_eq!(moved.governor(), HAVE);
    assert_eq!(moved.fact_hash(), 5);
    assert!(!moved.truth());
    assert_eq!(moved.delete_mask(), start.delete_mask());
    assert_eq!(moved.backpointer(), 9);
}

#[test]
fn test_all_quantifiers_seen_flag() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let node = SearchNode::new(&tree);
    let seen = node.with_all_quantifiers_seen();
    assert!(seen.all_quantifiers_seen());
    assert!(seen.mutation(1, node.token(), true, 1).all_quantifiers_seen());
}

#[test]
fn test_mutate_quantifier_toggle_restores_hash() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let mut node = SearchNode::new(&tree);
    let original = tree.quantifier_table().get(0).unwrap();

    node.mutate_quantifier(0, NO);
    assert_ne!(node.fact_hash(), tree.hash());
    assert_eq!(node.quantifiers().get(0), Some(NO));

    node.mutate_quantifier(0, original);
    assert_eq!(node.fact_hash(), tree.hash());
}

#[test]
fn test_mutate_quantifier_matches_reparsed_tree() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let mut node = SearchNode::new(&tree);
    node.mutate_quantifier(0, NO);

    let reworded = parse(&ALL_CATS_HAVE_TAILS.replace("multiplicative", "anti-additive"));
    assert_eq!(node.fact_hash(), reworded.hash());
}

#[test]
fn test_deletion_hash_matches_rebuilt_tree() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let node = SearchNode::new(&tree);

    let deleted = node.deletion(4, true, &tree, 1);

    assert_eq!(deleted.delete_mask().iter().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(deleted.backpointer(), 4);
    assert!(deleted.quantifiers().is_empty());
    assert_eq!(deleted.fact_hash(), parse(HAVE_TAILS).hash());
}

#[test]
fn test_deletion_of_plain_subtree() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);
    let node = SearchNode::new(&tree);

    let deleted = node.deletion(1, false, &tree, 6);
    let remaining = parse("40\t3\tdet\n20\t3\tamod\n41\t4\tnsubj\n42\t0\troot\n");
    assert_eq!(deleted.fact_hash(), remaining.hash());
    assert!(!deleted.truth());
    assert_eq!(deleted.token_index(), node.token_index());
}

#[test]
fn test_repeated_deletion_does_not_rehash() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);
    let node = SearchNode::new(&tree);

    let adjective_gone = node.moved(&tree, 6, 0).deletion(1, true, &tree, 5);
    let object_gone = adjective_gone.moved(&tree, 3, 1).deletion(2, true, &tree, 6);

    let direct = node.deletion(1, true, &tree, 6);
    assert_eq!(object_gone.fact_hash(), direct.fact_hash());
    assert_eq!(object_gone.delete_mask(), direct.delete_mask());
}

#[test]
fn test_deleted_quantifier_no_longer_projects() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let node = SearchNode::at(&tree, 1);
    assert_eq!(
        tree.project_at_focus(&node, NatlogRelation::ForwardEntailment),
        NatlogRelation::ReverseEntailment
    );

    let deleted = node.deletion(1, true, &tree, 0);
    assert!(deleted.quantifiers().get(0).is_none());
    assert_eq!(
        tree.project_at_focus(&deleted, NatlogRelation::ForwardEntailment),
        NatlogRelation::ForwardEntailment
    );
}
