//! Shared test fixtures for natlog crates.
//!
//! This crate provides raw fixture data: serialized sentences, fact rows
//! and word identifiers. It depends only on `natlog-core` so that the
//! search and fact-index crates can use it as a dev-dependency without
//! a dependency cycle.
//!
//! - [`words`] - Word identifiers shared by every fixture
//! - [`sentences`] - CoNLL-style serialized trees
//! - [`facts`] - Fact rows and word-sense data
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! natlog-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use natlog_test::sentences::ALL_CATS_HAVE_TAILS;
//! use natlog_test::words::{CATS, TAILS};
//! ```

pub mod facts;
pub mod sentences;
pub mod words;

pub use facts::{fact_rows, fact_tsv, FactRow};
pub use sentences::{ALL_CATS_HAVE_TAILS, BLACK_CAT_CHASED_MOUSE, SOME_CATS_HAVE_TAILS};
