//! Links and linkages.
//!
//! A [`Linkage`] is one candidate parse of a sentence: a set of links between
//! word positions, the cumulative cost of the disjuncts chosen for each word,
//! and the words left without any link.
//!
//! Construction checks the structural contract and panics on violation: a
//! malformed linkage means the upstream search engine is broken, not that the
//! sentence is ungrammatical.

use std::collections::HashMap;

use crate::connector::{Connector, Direction};
use crate::label::Label;

/// Index of a word in its sentence, 0-based from the left.
pub type WordPos = usize;

/// A typed connection between two words, justified by a matched connector pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    left: WordPos,
    right: WordPos,
    left_connector: Connector,
    right_connector: Connector,
    label: Option<Label>,
}

impl Link {
    /// Creates an unlabeled link.
    ///
    /// # Panics
    ///
    /// Panics if `left >= right`, if the left word's connector does not point
    /// right, or if the right word's connector does not point left.
    pub fn new(
        left: WordPos,
        right: WordPos,
        left_connector: Connector,
        right_connector: Connector,
    ) -> Self {
        assert!(
            left < right,
            "link endpoints must satisfy left < right, got ({left}, {right})"
        );
        assert_eq!(
            left_connector.direction(),
            Direction::Right,
            "connector {left_connector} on left word {left} must point right"
        );
        assert_eq!(
            right_connector.direction(),
            Direction::Left,
            "connector {right_connector} on right word {right} must point left"
        );
        Self {
            left,
            right,
            left_connector,
            right_connector,
            label: None,
        }
    }

    /// Left endpoint.
    pub fn left(&self) -> WordPos {
        self.left
    }

    /// Right endpoint.
    pub fn right(&self) -> WordPos {
        self.right
    }

    /// Connector contributed by the left word.
    pub fn left_connector(&self) -> &Connector {
        &self.left_connector
    }

    /// Connector contributed by the right word.
    pub fn right_connector(&self) -> &Connector {
        &self.right_connector
    }

    /// Derived label, if label derivation has run.
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Distance between the endpoints.
    pub fn span(&self) -> usize {
        self.right - self.left
    }

    /// Returns true if `word` is one of the endpoints.
    pub fn touches(&self, word: WordPos) -> bool {
        self.left == word || self.right == word
    }

    /// Returns the endpoint opposite to `word`.
    pub fn other_end(&self, word: WordPos) -> WordPos {
        if self.left == word {
            self.right
        } else {
            self.left
        }
    }

    pub(crate) fn set_label(&mut self, label: Label) {
        self.label = Some(label);
    }
}

/// One candidate parse of a sentence.
///
/// # Examples
///
/// ```
/// use linkforge_core::{Link, Linkage};
///
/// let link = Link::new(0, 1, "Ss+".parse().unwrap(), "Ss-".parse().unwrap());
/// let linkage = Linkage::new(3, vec![link], 0.5);
///
/// assert_eq!(linkage.null_word_count(), 1);
/// assert_eq!(linkage.null_words().collect::<Vec<_>>(), vec![2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Linkage {
    word_count: usize,
    links: Vec<Link>,
    disjunct_cost: f64,
    null_word_count: usize,
}

impl Linkage {
    /// Creates a linkage over `word_count` words.
    ///
    /// The null-word count is derived from the links: every word touched by
    /// no link is a null word.
    ///
    /// # Panics
    ///
    /// Panics if a link endpoint is outside `[0, word_count)`, if two links
    /// join the same pair of words with different connectors, or if
    /// `disjunct_cost` is not finite.
    pub fn new(word_count: usize, links: Vec<Link>, disjunct_cost: f64) -> Self {
        assert!(
            disjunct_cost.is_finite(),
            "disjunct cost must be finite, got {disjunct_cost}"
        );

        let mut linked = vec![false; word_count];
        let mut first_by_words: HashMap<(WordPos, WordPos), usize> =
            HashMap::with_capacity(links.len());
        for (i, link) in links.iter().enumerate() {
            assert!(
                link.right < word_count,
                "link {i} ({}, {}) is outside a {word_count}-word sentence",
                link.left,
                link.right
            );
            linked[link.left] = true;
            linked[link.right] = true;

            let j = *first_by_words.entry((link.left, link.right)).or_insert(i);
            let earlier = &links[j];
            assert!(
                earlier.left_connector == link.left_connector
                    && earlier.right_connector == link.right_connector,
                "links {j} and {i} join words ({}, {}) with different connectors",
                link.left,
                link.right
            );
        }

        let null_word_count = linked.iter().filter(|&&l| !l).count();
        Self {
            word_count,
            links,
            disjunct_cost,
            null_word_count,
        }
    }

    /// Creates a linkage with no links; every word is a null word.
    pub fn empty(word_count: usize) -> Self {
        Self::new(word_count, Vec::new(), 0.0)
    }

    /// Number of words in the sentence.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The links, in enumeration order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns the link at `index`.
    pub fn link(&self, index: usize) -> &Link {
        &self.links[index]
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns true if the linkage has no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Cumulative cost of the disjuncts chosen for each word.
    pub fn disjunct_cost(&self) -> f64 {
        self.disjunct_cost
    }

    /// Number of words with no link.
    pub fn null_word_count(&self) -> usize {
        self.null_word_count
    }

    /// Positions of the words with no link, ascending.
    pub fn null_words(&self) -> impl Iterator<Item = WordPos> + '_ {
        (0..self.word_count).filter(move |&w| !self.links.iter().any(|l| l.touches(w)))
    }

    /// Returns true once every link carries a label.
    pub fn is_labeled(&self) -> bool {
        self.links.iter().all(|l| l.label.is_some())
    }

    /// Link indices sorted by left word, then by link index.
    ///
    /// Every traversal that must be reproducible walks links in this order.
    pub fn canonical_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.links.len()).collect();
        order.sort_by_key(|&i| (self.links[i].left, i));
        order
    }

    /// Sum of link spans.
    pub fn total_span(&self) -> usize {
        self.links.iter().map(Link::span).sum()
    }

    /// Longest link span, or 0 without links.
    pub fn max_span(&self) -> usize {
        self.links.iter().map(Link::span).max().unwrap_or(0)
    }

    pub(crate) fn links_mut(&mut self) -> &mut [Link] {
        &mut self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(l: WordPos, r: WordPos, lc: &str, rc: &str) -> Link {
        Link::new(l, r, lc.parse().unwrap(), rc.parse().unwrap())
    }

    #[test]
    fn test_null_words_are_derived() {
        let linkage = Linkage::new(
            4,
            vec![link(0, 1, "Ss+", "Ss-"), link(1, 3, "Os+", "Os-")],
            2.0,
        );
        assert_eq!(linkage.null_word_count(), 1);
        assert_eq!(linkage.null_words().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_empty_linkage() {
        let linkage = Linkage::empty(3);
        assert!(linkage.is_empty());
        assert_eq!(linkage.null_word_count(), 3);
        assert!(linkage.is_labeled());
        assert_eq!(linkage.max_span(), 0);
    }

    #[test]
    fn test_canonical_order() {
        let linkage = Linkage::new(
            5,
            vec![
                link(2, 4, "Os+", "Os-"),
                link(0, 2, "Ss+", "Ss-"),
                link(0, 1, "D+", "D-"),
                link(2, 3, "MV+", "MV-"),
            ],
            0.0,
        );
        assert_eq!(linkage.canonical_order(), vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_spans() {
        let linkage = Linkage::new(
            4,
            vec![link(0, 1, "Ss+", "Ss-"), link(1, 3, "Os+", "Os-")],
            0.0,
        );
        assert_eq!(linkage.total_span(), 3);
        assert_eq!(linkage.max_span(), 2);
    }

    #[test]
    fn test_other_end() {
        let l = link(1, 3, "Os+", "Os-");
        assert_eq!(l.other_end(1), 3);
        assert_eq!(l.other_end(3), 1);
        assert!(l.touches(3));
        assert!(!l.touches(2));
    }

    #[test]
    #[should_panic(expected = "left < right")]
    fn test_reversed_endpoints_panic() {
        link(2, 1, "Ss+", "Ss-");
    }

    #[test]
    #[should_panic(expected = "must point right")]
    fn test_wrong_direction_panics() {
        link(0, 1, "Ss-", "Ss-");
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_range_panics() {
        Linkage::new(2, vec![link(0, 2, "Ss+", "Ss-")], 0.0);
    }

    #[test]
    #[should_panic(expected = "different connectors")]
    fn test_conflicting_duplicate_panics() {
        Linkage::new(
            2,
            vec![link(0, 1, "Ss+", "Ss-"), link(0, 1, "Os+", "Os-")],
            0.0,
        );
    }

    #[test]
    fn test_repeated_identical_link_is_accepted() {
        let linkage = Linkage::new(
            3,
            vec![
                link(0, 1, "Ss+", "Ss-"),
                link(1, 2, "Os+", "Os-"),
                link(0, 1, "Ss+", "Ss-"),
            ],
            0.0,
        );
        assert_eq!(linkage.len(), 3);
        assert_eq!(linkage.null_word_count(), 0);
    }

    #[test]
    #[should_panic(expected = "links 0 and 2 join words (0, 1) with different connectors")]
    fn test_conflict_reports_first_link_on_the_same_words() {
        Linkage::new(
            3,
            vec![
                link(0, 1, "Ss+", "Ss-"),
                link(1, 2, "Os+", "Os-"),
                link(0, 1, "Os+", "Os-"),
            ],
            0.0,
        );
    }

    #[test]
    #[should_panic(expected = "finite")]
    fn test_nan_cost_panics() {
        Linkage::new(1, Vec::new(), f64::NAN);
    }
}
