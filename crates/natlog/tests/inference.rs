//! End-to-end checks across tree, search state, cost model and fact index.

use std::io::Cursor;

use natlog::prelude::*;
use natlog::TsvFactSource;
use natlog_test::facts::fact_tsv;
use natlog_test::sentences::ALL_CATS_HAVE_TAILS;
use natlog_test::words::{ALL, CATS, HAVE, TAILS};

const CATS_HAVE_TAILS: &str = "11\t2\tnsubj\n12\t0\troot\n13\t2\tdobj\n";

fn facts() -> TrieRoot {
    let config = IndexConfig::default();
    let mut index = TrieRoot::from_config(&config);
    let stats = load_facts(
        &mut index,
        TsvFactSource::new(Cursor::new(fact_tsv())),
        &WordSenseTable::new(),
        None,
        &config,
    )
    .expect("fixture facts load");
    assert_eq!(stats.indexed, 6);
    index
}

fn surviving_words(tree: &Tree, node: &SearchNode) -> Vec<TaggedWord> {
    (0..tree.len() as u8)
        .filter(|&i| !node.is_deleted(i))
        .map(|i| tree.token(i))
        .collect()
}

#[test]
fn test_deleting_quantifier_reaches_known_fact() {
    let index = facts();
    let tree = Tree::from_conll(ALL_CATS_HAVE_TAILS).unwrap();
    let start = SearchNode::at(&tree, 1);
    assert_eq!(start.word(), CATS);
    assert!(!index.contains_fact(&surviving_words(&tree, &start)));

    let costs = SearchCosts::default();
    let price = costs.deletion_cost(&tree, &start, tree.relation(0), ALL, true);
    assert!(price.cost.is_finite() && price.cost >= 0.0);

    let deleted = start.deletion(1, price.start_truth, &tree, 0);
    assert_eq!(
        surviving_words(&tree, &deleted),
        vec![
            TaggedWord::new(CATS, 0),
            TaggedWord::new(HAVE, 0),
            TaggedWord::new(TAILS, 0)
        ]
    );
    assert!(index.contains_fact(&surviving_words(&tree, &deleted)));

    let target = Tree::from_conll(CATS_HAVE_TAILS).unwrap();
    assert_eq!(deleted.fact_hash(), target.hash());
}

#[test]
fn test_completions_propose_subjects_for_have() {
    let index = facts();
    let mut out = CompletionBuffer::new();
    let query = [TaggedWord::new(HAVE, 0), TaggedWord::new(TAILS, 0)];

    assert!(!index.contains(&query, -1, &mut out));
    let proposed: Vec<Word> = out.iter().map(|edge| edge.source).collect();
    assert!(proposed.contains(&CATS));
    assert!(!proposed.contains(&HAVE));
}
