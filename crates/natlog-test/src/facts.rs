//! Fact rows for index loading tests.
//!
//! A gloss is a comma-separated list of word ids with one leading
//! throwaway character, as produced by the fact extraction pipeline.
//! Rows are listed by descending weight.

use natlog_core::{Edge, Word};

use crate::words::{ANIMALS, CATS, CHASE, DOGS, FELINES, FUR, HAVE, MOUSE, TAILS, WHISKERS};

/// One `(gloss, weight)` row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactRow {
    pub gloss: String,
    pub weight: u32,
}

impl FactRow {
    /// Creates a row from word ids.
    pub fn new(words: &[Word], weight: u32) -> Self {
        let ids: Vec<String> = words.iter().map(Word::to_string).collect();
        Self {
            gloss: format!("{{{}", ids.join(",")),
            weight,
        }
    }
}

/// The standard fact rows, by descending weight.
///
/// The last row has weight 0 and falls below the default minimum.
pub fn fact_rows() -> Vec<FactRow> {
    vec![
        FactRow::new(&[CATS, HAVE, TAILS], 100),
        FactRow::new(&[DOGS, HAVE, TAILS], 80),
        FactRow::new(&[CATS, CHASE, MOUSE], 50),
        FactRow::new(&[ANIMALS, HAVE, TAILS], 40),
        FactRow::new(&[CATS, HAVE, FUR], 30),
        FactRow::new(&[FELINES, HAVE, WHISKERS], 20),
        FactRow::new(&[CATS, HAVE, WHISKERS], 0),
    ]
}

/// [`fact_rows`] as tab-separated `gloss<TAB>weight` lines.
pub fn fact_tsv() -> String {
    fact_rows()
        .iter()
        .map(|row| format!("{}\t{}\n", row.gloss, row.weight))
        .collect()
}

/// Plain fact edges for a word chain.
pub fn fact_edges(words: &[Word]) -> Vec<Edge> {
    words.iter().map(|&word| Edge::fact(word)).collect()
}

/// Alternate senses of `CATS`: sense 2 and sense 3.
pub fn cat_senses() -> Vec<Edge> {
    [2u8, 3]
        .iter()
        .map(|&sense| Edge {
            source: CATS,
            source_sense: sense,
            ..Edge::fact(CATS)
        })
        .collect()
}
