//! Bulk fact loading.
//!
//! [`load_facts`] streams records from a [`FactSource`] into any
//! [`FactIndex`]. Each record's gloss becomes a chain of fact edges, using
//! the canonical sense of every word known to the [`WordSenseTable`]; the
//! chain is then indexed again once per alternate sense.

mod senses;
mod source;


use natlog_config::IndexConfig;
use natlog_core::{Edge, Word, MAX_FACT_LENGTH};
use tracing::{info, warn};

use crate::error::FactLoadError;
use crate::graph::MutationGraph;
use crate::trie::{FactIndex, MemoryUsage};

pub use senses::WordSenseTable;
pub use source::{FactRecord, FactSource, TsvFactSource, VecFactSource};

/// Counters from one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadStats {
    /// Records pulled from the source.
    pub read: u64,
    /// Records indexed in their canonical form.
    pub indexed: u64,
    /// Extra insertions for alternate word senses.
    pub sense_variants: u64,
    /// Records below the minimum weight.
    pub skipped_low_weight: u64,
    /// Records whose gloss could not be parsed.
    pub skipped_malformed: u64,
    /// Index footprint once the load finished.
    pub memory: MemoryUsage,
}

/// Loads every record of `source` into `index`.
///
/// Stops after `config.max_facts` records if set. Facts lighter than
/// `config.min_fact_weight` are skipped, and chains are truncated to
/// [`MAX_FACT_LENGTH`] words.
///
/// # Errors
///
/// Returns the first error reported by the source; the index keeps what
/// was loaded up to that point.
pub fn load_facts<I, S>(
    index: &mut I,
    source: S,
    senses: &WordSenseTable,
    graph: Option<&dyn MutationGraph>,
    config: &IndexConfig,
) -> Result<LoadStats, FactLoadError>
where
    I: FactIndex + ?Sized,
    S: FactSource,
{
    info!(
        event = "fact_load_start",
        sense_words = senses.len(),
        min_fact_weight = config.min_fact_weight,
        max_facts = ?config.max_facts,
    );

    let mut stats = LoadStats::default();
    let mut chain: Vec<Edge> = Vec::with_capacity(MAX_FACT_LENGTH);
    for record in source {
        if config.max_facts.is_some_and(|max| stats.read >= max) {
            break;
        }
        let record = record?;
        stats.read += 1;

        if record.weight < config.min_fact_weight {
            stats.skipped_low_weight += 1;
            continue;
        }
        if !parse_gloss(&record.gloss, senses, &mut chain) {
            warn!(
                event = "malformed_fact",
                gloss = %record.gloss,
                "skipping fact"
            );
            stats.skipped_malformed += 1;
            continue;
        }

        index.add(&chain, graph);
        stats.indexed += 1;
        stats.sense_variants += add_sense_variants(index, &mut chain, senses, graph);

        if config.progress_interval > 0 && stats.indexed % config.progress_interval == 0 {
            info!(
                event = "fact_load_progress",
                facts = stats.indexed,
                memory_mb = index.memory_usage().total() / 1_000_000,
            );
        }
    }

    stats.memory = index.memory_usage();
    info!(
        event = "fact_load_end",
        read = stats.read,
        indexed = stats.indexed,
        sense_variants = stats.sense_variants,
        skipped_low_weight = stats.skipped_low_weight,
        skipped_malformed = stats.skipped_malformed,
        memory_mb = stats.memory.total() / 1_000_000,
    );
    Ok(stats)
}

/// Fills `chain` from a gloss. Returns false for an empty or unparsable
/// gloss.
fn parse_gloss(gloss: &str, senses: &WordSenseTable, chain: &mut Vec<Edge>) -> bool {
    chain.clear();
    // The first character is a delimiter left by the extraction pipeline.
    let body = gloss
        .char_indices()
        .nth(1)
        .map_or("", |(start, _)| &gloss[start..]);

    for field in body.split(',').take(MAX_FACT_LENGTH) {
        match field.trim().parse::<Word>() {
            Ok(word) if word != 0 => chain.push(canonical_edge(word, senses)),
            _ => return false,
        }
    }
    !chain.is_empty()
}

fn canonical_edge(word: Word, senses: &WordSenseTable) -> Edge {
    match senses.senses(word).first() {
        Some(sense) => as_fact_edge(*sense),
        None => Edge::fact(word),
    }
}

#[inline]
fn as_fact_edge(sense: Edge) -> Edge {
    Edge {
        sink: 0,
        sink_sense: 0,
        ..sense
    }
}

/// Indexes one copy of `chain` per alternate sense of each word, changing
/// one position at a time. Returns the number of insertions.
fn add_sense_variants<I>(
    index: &mut I,
    chain: &mut [Edge],
    senses: &WordSenseTable,
    graph: Option<&dyn MutationGraph>,
) -> u64
where
    I: FactIndex + ?Sized,
{
    let mut added = 0;
    for k in 0..chain.len() {
        let canonical = chain[k];
        let alternates = senses.senses(canonical.source);
        for alternate in alternates.iter().skip(1) {
            chain[k] = as_fact_edge(*alternate);
            index.add(chain, graph);
            added += 1;
        }
        chain[k] = canonical;
    }
    added
}
