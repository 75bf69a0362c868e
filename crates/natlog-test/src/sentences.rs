//! Serialized dependency trees.
//!
//! Every constant is a complete record batch in the tab-separated
//! format read by `Tree::from_conll`: word, 1-based governor, label,
//! then optionally sense, quantifier fields and flags.
//!
//! # Example
//!
//! ```
//! use natlog_test::sentences::ALL_CATS_HAVE_TAILS;
//!
//! assert_eq!(ALL_CATS_HAVE_TAILS.lines().count(), 4);
//! ```

/// "all cats have tails"
///
/// `all` (index 0) is anti-additive over `cats` (1..2) and multiplicative
/// over `have tails` (2..4).
pub const ALL_CATS_HAVE_TAILS: &str = "\
10\t2\tdet\t0\tanti-additive\t2-3\tmultiplicative\t3-5
11\t3\tnsubj
12\t0\troot
13\t3\tdobj
";

/// "some cats have tails"; `some` is a trivial existential.
pub const SOME_CATS_HAVE_TAILS: &str = "\
14\t2\tdet\t0\tadditive\t2-3\tadditive\t3-5
11\t3\tnsubj
12\t0\troot
13\t3\tdobj
";

/// "no cats have tails"; `no` is anti-additive on both arguments.
pub const NO_CATS_HAVE_TAILS: &str = "\
17\t2\tdet\t0\tanti-additive\t2-3\tanti-additive\t3-5
11\t3\tnsubj
12\t0\troot
13\t3\tdobj
";

/// "have tails" with the root at index 0. What remains of
/// [`ALL_CATS_HAVE_TAILS`] once the subject is deleted.
pub const HAVE_TAILS: &str = "\
12\t0\troot
13\t1\tdobj
";

/// "the black cat chased the small mouse", no quantifiers.
///
/// Indices: the(0) black(1) cat(2) chased(3, root) the(4) small(5)
/// mouse(6).
pub const BLACK_CAT_CHASED_MOUSE: &str = "\
40\t3\tdet
20\t3\tamod
41\t4\tnsubj
42\t0\troot
40\t7\tdet
43\t7\tamod
44\t4\tdobj
";

/// "cats live in paris"; `paris` carries the location flag.
pub const CATS_LIVE_IN_PARIS: &str = "\
11\t2\tnsubj
22\t0\troot
23\t2\tprep
24\t3\tpobj\t0\t-\t-\t-\t-\tl
";

/// "cats have tails" with an explicit sense on `tails` and a line with a
/// bad field count.
pub const SENSES_AND_BAD_LINE: &str = "\
11\t2\tnsubj\t1\t-
12\t0\troot
13\t2\tdobj\t3\t-\t-\t-\t-
";

/// A record batch with no root token.
pub const ROOTLESS: &str = "\
11\t2\tnsubj
12\t1\tdobj
";

/// A record batch with two root tokens.
pub const TWO_ROOTS: &str = "\
11\t0\troot
12\t0\troot
";
