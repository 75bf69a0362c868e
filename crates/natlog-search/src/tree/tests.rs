//! Tests for dependency trees.

use super::*;

use natlog_core::QuantifierType;
use natlog_test::sentences::{
    ALL_CATS_HAVE_TAILS, BLACK_CAT_CHASED_MOUSE, CATS_LIVE_IN_PARIS, ROOTLESS,
    SENSES_AND_BAD_LINE, SOME_CATS_HAVE_TAILS, TWO_ROOTS,
};
use natlog_test::words::{CATS, FELINES, HAVE, TAILS};
use rayon::prelude::*;

fn parse(conll: &str) -> Tree {
    Tree::from_conll(conll).expect("fixture parses")
}

fn down(ty: QuantifierType) -> QuantifierMonotonicity {
    QuantifierMonotonicity::new(Monotonicity::Down, ty, Monotonicity::Flat, QuantifierType::None)
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_two_token_tree() {
    let tree = TreeBuilder::new()
        .token(5, None, DepLabel::ROOT)
        .token(7, Some(0), DepLabel::DET)
        .build()
        .unwrap();

    assert_eq!(tree.root(), 0);
    assert_eq!(
        tree.dependents(0, 8).as_slice(),
        &[Dependent {
            index: 1,
            relation: DepLabel::DET
        }]
    );
    assert!(tree.dependents(1, 8).is_empty());
}

#[test]
fn test_parse_quantified_sentence() {
    let tree = parse(ALL_CATS_HAVE_TAILS);

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.root(), 2);
    assert_eq!(tree.word(1), CATS);
    assert_eq!(tree.governor(0), 1);
    assert_eq!(tree.governor(2), ABSENT);
    assert_eq!(tree.governor_word(1), HAVE);
    assert_eq!(tree.governor_word(2), TREE_ROOT_WORD);
    assert_eq!(tree.relation(3), DepLabel::DOBJ);

    assert_eq!(tree.quantifier_count(), 1);
    assert_eq!(
        tree.quantifier_span(0),
        Some(&QuantifierSpan {
            subj_begin: 1,
            subj_end: 2,
            obj_begin: 2,
            obj_end: 4,
            quantifier_index: 0,
        })
    );
    assert_eq!(
        tree.quantifier_table().get(0),
        Some(QuantifierMonotonicity::new(
            Monotonicity::Down,
            QuantifierType::Additive,
            Monotonicity::Up,
            QuantifierType::Multiplicative,
        ))
    );
    assert!(tree.is_quantifier(0));
    assert!(!tree.is_quantifier(1));
    assert_eq!(tree.quantifier_index(0), Some(0));
}

#[test]
fn test_dependents_ascending_and_capped() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);

    let children: Vec<u8> = tree.dependents(3, 8).iter().map(|d| d.index).collect();
    assert_eq!(children, vec![2, 6]);

    let capped = tree.dependents(3, 1);
    assert_eq!(capped.len(), 1);
    assert_eq!(capped[0].index, 2);
    assert_eq!(capped[0].relation, DepLabel::NSUBJ);
}

#[test]
fn test_equality_ignores_senses_and_quantifiers() {
    let plain = parse(ALL_CATS_HAVE_TAILS);
    let with_sense = parse(&ALL_CATS_HAVE_TAILS.replace("11\t3\tnsubj", "11\t3\tnsubj\t4"));
    assert_eq!(plain, with_sense);
    assert_ne!(plain, parse(SOME_CATS_HAVE_TAILS));
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_senses_despite_bad_field_count() {
    let tree = parse(SENSES_AND_BAD_LINE);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.sense(0), 1);
    assert_eq!(tree.sense(1), 0);
    assert_eq!(tree.sense(2), 3);
    assert_eq!(tree.token(2), TaggedWord::new(TAILS, 3));
    assert_eq!(tree.quantifier_count(), 0);
}

#[test]
fn test_parse_location_flag() {
    let tree = parse(CATS_LIVE_IN_PARIS);
    assert!(tree.is_location(3));
    assert!(!tree.is_location(0));
    assert_eq!(tree.relation(3), DepLabel::from_name("pobj").unwrap());
}

#[test]
fn test_invalid_flag_is_ignored() {
    let tree = parse("11\t0\troot\t0\t-\t-\t-\t-\tlx\n");
    assert!(tree.is_location(0));
}

#[test]
fn test_unknown_label_falls_back_to_dep() {
    let tree = parse("11\t0\troot\n12\t1\tnot_a_label\n");
    assert_eq!(tree.relation(1), DepLabel::DEP);
}

#[test]
fn test_unknown_marker_defaults_to_flat() {
    let tree = parse("10\t2\tdet\t0\tsometimes\t2-3\t-\t-\n11\t0\troot\n");
    let quantifier = tree.quantifier_table().get(0).unwrap();
    assert_eq!(quantifier.subj_mono, Monotonicity::Flat);
    assert_eq!(quantifier.subj_type, QuantifierType::None);
    assert_eq!(quantifier.obj_mono, Monotonicity::Flat);
    let span = tree.quantifier_span(0).unwrap();
    assert_eq!((span.obj_begin, span.obj_end), (0, 0));
}

#[test]
fn test_quantifier_overflow_drops_extras() {
    let mut conll = String::new();
    for _ in 0..MAX_QUANTIFIER_COUNT + 1 {
        conll.push_str("10\t8\tdet\t0\tmonotone\t8-9\t-\t-\n");
    }
    conll.push_str("11\t0\troot\n");

    let tree = parse(&conll);
    assert_eq!(tree.len(), MAX_QUANTIFIER_COUNT + 2);
    assert_eq!(tree.quantifier_count(), MAX_QUANTIFIER_COUNT);
    assert!(!tree.is_quantifier(MAX_QUANTIFIER_COUNT as u8));
}

#[test]
fn test_structural_errors() {
    assert_eq!(Tree::from_conll(ROOTLESS), Err(NatlogError::NoRoot));
    assert_eq!(Tree::from_conll(""), Err(NatlogError::NoRoot));
    assert_eq!(
        Tree::from_conll(TWO_ROOTS),
        Err(NatlogError::MultipleRoots { index: 1 })
    );
    assert_eq!(
        Tree::from_conll("11\t5\tnsubj\n12\t0\troot\n"),
        Err(NatlogError::GovernorOutOfRange {
            index: 0,
            governor: 4
        })
    );

    let too_long = "1\t0\troot\n".repeat(MAX_TOKEN_COUNT + 1);
    assert_eq!(
        Tree::from_conll(&too_long),
        Err(NatlogError::TreeTooLong {
            length: MAX_TOKEN_COUNT + 1,
            max: MAX_TOKEN_COUNT
        })
    );
    assert!(Tree::from_conll(ROOTLESS)
        .unwrap_err()
        .is_contract_violation());
}

// ============================================================================
// Delete masks
// ============================================================================

#[test]
fn test_delete_mask_is_exact_subtree() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);

    let subject = tree.create_delete_mask(2);
    assert_eq!(subject.iter().collect::<Vec<_>>(), vec![0, 1, 2]);

    let object = tree.create_delete_mask(6);
    assert_eq!(object.iter().collect::<Vec<_>>(), vec![4, 5, 6]);

    assert_eq!(tree.create_delete_mask(3).len(), tree.len());
    assert_eq!(tree.create_delete_mask(0).len(), 1);
}

#[test]
fn test_delete_mask_closed_and_idempotent() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);
    for root in 0..tree.len() as u8 {
        let mask = tree.create_delete_mask(root);
        assert_eq!(tree.close_delete_mask(mask), mask);
        for (i, node) in tree.nodes().enumerate() {
            if !node.is_root() && mask.contains(node.governor) {
                assert!(mask.contains(i as u8));
            }
        }
    }
}

// ============================================================================
// Hashing
// ============================================================================

#[test]
fn test_hash_ignores_existential_quantifier() {
    let existential = parse(SOME_CATS_HAVE_TAILS);
    let without = TreeBuilder::new()
        .token(existential.word(0), Some(1), DepLabel::DET)
        .token(CATS, Some(2), DepLabel::NSUBJ)
        .token(HAVE, None, DepLabel::ROOT)
        .token(TAILS, Some(2), DepLabel::DOBJ)
        .build()
        .unwrap();
    assert_eq!(existential.hash(), without.hash());

    let universal = parse(ALL_CATS_HAVE_TAILS);
    assert_ne!(universal.hash(), universal.hash() ^ universal.quantifier_table().hash());
}

#[test]
fn test_hash_from_mutation_matches_rebuilt_tree() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let incremental = tree.update_hash_from_mutation(tree.hash(), 1, CATS, HAVE, FELINES);

    let mutated = parse(&ALL_CATS_HAVE_TAILS.replace("11\t3\tnsubj", "18\t3\tnsubj"));
    assert_eq!(incremental, mutated.hash());
}

#[test]
fn test_hash_from_root_mutation_updates_children() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);
    let incremental =
        tree.update_hash_from_mutation(tree.hash(), 3, tree.word(3), TREE_ROOT_WORD, 99);

    let mutated = parse(&BLACK_CAT_CHASED_MOUSE.replace("42\t0\troot", "99\t0\troot"));
    assert_eq!(incremental, mutated.hash());
}

#[test]
fn test_hash_from_deletions_matches_rebuilt_tree() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);
    let mask = tree.create_delete_mask(6);
    let incremental =
        tree.update_hash_from_deletions(tree.hash(), 6, tree.word(6), tree.word(3), mask);

    let remaining = "40\t3\tdet\n20\t3\tamod\n41\t4\tnsubj\n42\t0\troot\n";
    assert_eq!(incremental, parse(remaining).hash());
}

#[test]
fn test_mutation_round_trip_restores_hash() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);
    let there = tree.update_hash_from_mutation(tree.hash(), 2, tree.word(2), tree.word(3), 77);
    let back = tree.update_hash_from_mutation(there, 2, 77, tree.word(3), tree.word(2));
    assert_eq!(back, tree.hash());
}

// ============================================================================
// Quantifier scope and projection
// ============================================================================

/// Tokens 0, 1 and 3 head downward quantifiers; token 2 is the root.
fn nested_scopes() -> Tree {
    TreeBuilder::new()
        .token(1, Some(2), DepLabel::DET)
        .with_quantifier(1..6, None, down(QuantifierType::None))
        .token(2, Some(2), DepLabel::DET)
        .with_quantifier(2..3, None, down(QuantifierType::None))
        .token(3, None, DepLabel::ROOT)
        .token(4, Some(2), DepLabel::DET)
        .with_quantifier(1..6, None, down(QuantifierType::None))
        .token(5, Some(2), DepLabel::DOBJ)
        .token(6, Some(2), DepLabel::DOBJ)
        .build()
        .unwrap()
}

#[test]
fn test_scope_ordered_by_distance_then_registration() {
    let tree = nested_scopes();
    assert_eq!(tree.quantifiers_in_scope(2), &[1, 0, 2]);
    assert_eq!(tree.quantifiers_in_scope(4), &[0, 2]);
    assert!(tree.quantifiers_in_scope(0).is_empty());
    assert_eq!(tree.quantifiers_at(4).count(), 2);
}

#[test]
fn test_projection_composes_innermost_first() {
    let tree = nested_scopes();
    let node = SearchNode::new(&tree);

    // Three downward scopes flip the entailment three times.
    assert_eq!(
        tree.project_lexical_relation(&node, NatlogRelation::ForwardEntailment, 2),
        NatlogRelation::ReverseEntailment
    );
    assert_eq!(
        tree.project_lexical_relation(&node, NatlogRelation::ForwardEntailment, 4),
        NatlogRelation::ForwardEntailment
    );
    assert_eq!(
        tree.project_lexical_relation(&node, NatlogRelation::Negation, 0),
        NatlogRelation::Negation
    );
}

#[test]
fn test_projection_reads_subject_and_object_arguments() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let node = SearchNode::at(&tree, 1);

    assert_eq!(
        tree.quantifiers_at(1).collect::<Vec<_>>(),
        vec![(Monotonicity::Down, QuantifierType::Additive)]
    );
    assert_eq!(
        tree.project_at_focus(&node, NatlogRelation::ForwardEntailment),
        NatlogRelation::ReverseEntailment
    );
    assert_eq!(
        tree.project_lexical_relation(&node, NatlogRelation::ForwardEntailment, 3),
        NatlogRelation::ForwardEntailment
    );
    assert_eq!(
        tree.project_lexical_relation(&node, NatlogRelation::Negation, 3),
        NatlogRelation::Alternation
    );
}

// ============================================================================
// Topological sort
// ============================================================================

#[test]
fn test_topological_sort_preorder() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);
    assert_eq!(tree.topological_sort(false), vec![3, 6, 5, 4, 2, 1, 0]);
}

#[test]
fn test_topological_sort_skips_quantifier_heads() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    assert_eq!(tree.topological_sort(false), vec![2, 3, 1, 0]);
    assert_eq!(tree.topological_sort(true), vec![2, 3, 1]);
}

#[test]
fn test_topological_sort_into_small_buffer_is_terminated() {
    let tree = parse(BLACK_CAT_CHASED_MOUSE);
    let mut buffer = [0u8; 3];
    let written = tree.topological_sort_into(&mut buffer, false);
    assert_eq!(written, 2);
    assert_eq!(buffer, [3, 6, ABSENT]);

    let mut empty: [u8; 0] = [];
    assert_eq!(tree.topological_sort_into(&mut empty, false), 0);
}

// ============================================================================
// Concurrent reads
// ============================================================================

#[test]
fn test_frozen_tree_shared_across_threads() {
    let tree = parse(ALL_CATS_HAVE_TAILS);
    let expected_hash = tree.hash();
    let node = SearchNode::at(&tree, 1);

    let results: Vec<(u64, NatlogRelation, usize)> = (0..64)
        .into_par_iter()
        .map(|_| {
            (
                tree.hash(),
                tree.project_at_focus(&node, NatlogRelation::ForwardEntailment),
                tree.dependents(2, 8).len(),
            )
        })
        .collect();

    assert!(results.iter().all(|&(hash, relation, children)| {
        hash == expected_hash && relation == NatlogRelation::ReverseEntailment && children == 2
    }));
}
