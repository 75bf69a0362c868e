//! Word identifiers used across fixtures.
//!
//! Identifiers are small and stable so that test assertions can name
//! them directly. Word 0 is reserved.

use natlog_core::Word;

pub const ALL: Word = 10;
pub const CATS: Word = 11;
pub const HAVE: Word = 12;
pub const TAILS: Word = 13;
pub const SOME: Word = 14;
pub const DOGS: Word = 15;
pub const CHASE: Word = 16;
pub const NO: Word = 17;
pub const FELINES: Word = 18;
pub const ANIMALS: Word = 19;
pub const BLACK: Word = 20;
pub const NOT: Word = 21;
pub const LIVE: Word = 22;
pub const IN: Word = 23;
pub const PARIS: Word = 24;
pub const THE: Word = 40;
pub const CAT: Word = 41;
pub const CHASED: Word = 42;
pub const SMALL: Word = 43;
pub const MOUSE: Word = 44;
pub const WHISKERS: Word = 45;
pub const FUR: Word = 46;
