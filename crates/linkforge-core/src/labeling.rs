//! Label derivation for matched connector pairs.
//!
//! How a label is spelled is a property of the grammar, so the derivation is
//! a [`LabelRule`] supplied by the caller. [`SubscriptIntersection`] is the
//! conventional link-grammar rule and is used by [`compute_link_labels`].

use crate::connector::{Connector, WILDCARD};
use crate::label::LabelInterner;
use crate::linkage::Linkage;

/// Grammar-defined connector compatibility and label spelling.
///
/// Implementations must be pure functions of the connectors' type tags and
/// subtype sequences: the same pair always yields the same text.
pub trait LabelRule: Send + Sync {
    /// Returns true if `left` (on the left word) may link to `right`.
    fn matches(&self, left: &Connector, right: &Connector) -> bool;

    /// Appends the canonical label for a matched pair to `out`.
    fn write_label(&self, left: &Connector, right: &Connector, out: &mut String);

    /// Returns the canonical label for a matched pair.
    fn label_text(&self, left: &Connector, right: &Connector) -> String {
        let mut out = String::new();
        self.write_label(left, right, &mut out);
        out
    }
}

/// Type tags must agree; subtypes merge position by position.
///
/// At each shared position the subtypes must be equal or one of them must be
/// `*`; the merged label takes the concrete character. The tail of the longer
/// subtype sequence is appended unchanged.
///
/// # Examples
///
/// ```
/// use linkforge_core::{Connector, LabelRule, SubscriptIntersection};
///
/// let left: Connector = "S*b+".parse().unwrap();
/// let right: Connector = "Ss-".parse().unwrap();
/// assert!(SubscriptIntersection.matches(&left, &right));
/// assert_eq!(SubscriptIntersection.label_text(&left, &right), "Ssb");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubscriptIntersection;

impl LabelRule for SubscriptIntersection {
    fn matches(&self, left: &Connector, right: &Connector) -> bool {
        left.tag() == right.tag()
            && left
                .subtypes()
                .iter()
                .zip(right.subtypes())
                .all(|(&a, &b)| a == b || a == WILDCARD || b == WILDCARD)
    }

    fn write_label(&self, left: &Connector, right: &Connector, out: &mut String) {
        out.push_str(left.tag());
        let (a, b) = (left.subtypes(), right.subtypes());
        for i in 0..a.len().max(b.len()) {
            let c = match (a.get(i), b.get(i)) {
                (Some(&WILDCARD), Some(&other)) => other,
                (Some(&own), _) => own,
                (None, Some(&other)) => other,
                (None, None) => unreachable!(),
            };
            out.push(c);
        }
    }
}

/// Derives and stores the label of every link using [`SubscriptIntersection`].
///
/// # Panics
///
/// Panics if a link's connectors do not match.
pub fn compute_link_labels(interner: &LabelInterner, linkage: &mut Linkage) {
    compute_link_labels_with(&SubscriptIntersection, interner, linkage);
}

/// Derives and stores the label of every link using `rule`.
///
/// Each label text is interned, so previously unseen labels add exactly one
/// entry to `interner`.
///
/// # Panics
///
/// Panics if `rule` reports that a link's connectors do not match; that is a
/// broken linkage, not a grammatical outcome.
pub fn compute_link_labels_with<R>(rule: &R, interner: &LabelInterner, linkage: &mut Linkage)
where
    R: LabelRule + ?Sized,
{
    let mut buf = String::new();
    for link in linkage.links_mut() {
        assert!(
            rule.matches(link.left_connector(), link.right_connector()),
            "connectors {} and {} on link ({}, {}) do not match",
            link.left_connector(),
            link.right_connector(),
            link.left(),
            link.right()
        );
        buf.clear();
        rule.write_label(link.left_connector(), link.right_connector(), &mut buf);
        let label = interner.intern(&buf);
        link.set_label(label);
    }
}
