//! Hand-built linkages.
//!
//! Each function returns a labeled linkage together with what tests usually
//! assert about it. Pair them with the documents in [`crate::rules`].

use linkforge_core::{LabelInterner, Linkage};

use crate::LinkageBuilder;

/// Four words, subject and object links, word 2 null, disjunct cost 2.0.
///
/// ```text
///   +-Ss-+---Os----+
///   |    |         |
///   0    1    2    3
/// ```
///
/// Well-formed under [`crate::rules::SAMPLE_RULES`].
pub fn subject_object(interner: &LabelInterner) -> Linkage {
    LinkageBuilder::new(4)
        .link(0, 1, "Ss")
        .link(1, 3, "Os")
        .disjunct_cost(2.0)
        .labeled(interner)
}

/// Two clause domains whose spans interleave: `[0, 3]` and `[1, 5]`.
///
/// Link 0 `(0, 3, Ca)` opens the first clause and link 1 `(1, 5, Cb)` the
/// second. Link 1 opens the later domain and is the one a containment rule
/// blames.
pub fn crossing_clauses(interner: &LabelInterner) -> Linkage {
    LinkageBuilder::new(6)
        .link(0, 3, "Ca")
        .link(1, 5, "Cb")
        .link(0, 1, "Wd")
        .labeled(interner)
}

/// Same shape as [`crossing_clauses`] but the second clause nests: `[1, 3]`.
pub fn nested_clauses(interner: &LabelInterner) -> Linkage {
    LinkageBuilder::new(6)
        .link(0, 3, "Ca")
        .link(1, 3, "Cb")
        .link(0, 1, "Wd")
        .labeled(interner)
}

/// Three links closing a triangle over words 0, 1 and 2, plus a dangling
/// `MVp` link to word 3.
pub fn triangle(interner: &LabelInterner) -> Linkage {
    LinkageBuilder::new(4)
        .link(0, 1, "Wd")
        .link(1, 2, "Ss")
        .link(0, 2, "Xp")
        .link(2, 3, "MVp")
        .labeled(interner)
}

/// Two components: `(0, 1)` and `(2, 3)`.
pub fn disconnected(interner: &LabelInterner) -> Linkage {
    LinkageBuilder::new(4)
        .link(0, 1, "Ds")
        .link(2, 3, "Os")
        .labeled(interner)
}
