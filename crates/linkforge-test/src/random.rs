//! Seeded random linkages for property-style tests.
//!
//! # Example
//!
//! ```
//! use linkforge_core::LabelInterner;
//! use linkforge_test::random_linkage;
//!
//! let interner = LabelInterner::new();
//! let a = random_linkage(7, 8, 10, &interner);
//! let b = random_linkage(7, 8, 10, &interner);
//! assert_eq!(a, b);
//! assert!(a.len() <= 10);
//! ```

use std::collections::HashSet;

use linkforge_core::{LabelInterner, Linkage};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::LinkageBuilder;

/// Labels drawn for random links.
pub const LABELS: &[&str] = &["Ss", "Sp", "Os", "Ca", "Cb", "Wd", "MVp", "Xp", "Ds"];

/// Returns a labeled linkage with up to `max_links` links over `word_count`
/// words.
///
/// At most one link joins any pair of words. The same seed always yields the
/// same linkage.
pub fn random_linkage(
    seed: u64,
    word_count: usize,
    max_links: usize,
    interner: &LabelInterner,
) -> Linkage {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = LinkageBuilder::new(word_count);
    let mut used = HashSet::new();

    if word_count >= 2 {
        for _ in 0..max_links {
            let left = rng.random_range(0..word_count - 1);
            let right = rng.random_range(left + 1..word_count);
            if !used.insert((left, right)) {
                continue;
            }
            let label = LABELS[rng.random_range(0..LABELS.len())];
            builder = builder.link(left, right, label);
        }
    }

    let cost = f64::from(rng.random_range(0..40u32)) / 4.0;
    builder.disjunct_cost(cost).labeled(interner)
}
