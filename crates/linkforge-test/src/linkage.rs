//! Linkage builder for tests.
//!
//! Links are written by the label they should end up with. The builder turns
//! a label such as `Ss` into the connector pair `Ss+` / `Ss-`, which the
//! default label rule maps back to `Ss`.
//!
//! # Example
//!
//! ```
//! use linkforge_core::LabelInterner;
//! use linkforge_test::LinkageBuilder;
//!
//! let interner = LabelInterner::new();
//! let linkage = LinkageBuilder::new(4)
//!     .link(0, 1, "Ss")
//!     .link(1, 3, "Os")
//!     .disjunct_cost(2.0)
//!     .labeled(&interner);
//!
//! assert_eq!(linkage.null_word_count(), 1);
//! assert_eq!(linkage.link(1).label().unwrap(), "Os");
//! ```

use linkforge_core::{compute_link_labels, Connector, Direction, LabelInterner, Link, Linkage, WordPos};

/// Builds linkages from `(left, right, label)` triples.
#[derive(Debug, Clone)]
pub struct LinkageBuilder {
    word_count: usize,
    links: Vec<Link>,
    disjunct_cost: f64,
}

impl LinkageBuilder {
    /// Starts a linkage over `word_count` words.
    pub fn new(word_count: usize) -> Self {
        Self {
            word_count,
            links: Vec::new(),
            disjunct_cost: 0.0,
        }
    }

    /// Adds a link whose derived label will be `label`.
    ///
    /// # Panics
    ///
    /// Panics if `label` is not a valid connector body or `left >= right`.
    pub fn link(mut self, left: WordPos, right: WordPos, label: &str) -> Self {
        self.links.push(Link::new(
            left,
            right,
            connector(label, Direction::Right),
            connector(label, Direction::Left),
        ));
        self
    }

    /// Adds a link with explicit connectors, e.g. `("Ss*+", "S*b-")`.
    pub fn link_with(mut self, left: WordPos, right: WordPos, connectors: (&str, &str)) -> Self {
        self.links.push(Link::new(
            left,
            right,
            connectors.0.parse().expect("left connector"),
            connectors.1.parse().expect("right connector"),
        ));
        self
    }

    /// Sets the cumulative disjunct cost.
    pub fn disjunct_cost(mut self, cost: f64) -> Self {
        self.disjunct_cost = cost;
        self
    }

    /// Builds the linkage without labels.
    pub fn build(self) -> Linkage {
        Linkage::new(self.word_count, self.links, self.disjunct_cost)
    }

    /// Builds the linkage and derives labels with the default rule.
    pub fn labeled(self, interner: &LabelInterner) -> Linkage {
        let mut linkage = self.build();
        compute_link_labels(interner, &mut linkage);
        linkage
    }
}

fn connector(label: &str, direction: Direction) -> Connector {
    let split = label
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(label.len());
    let (tag, subtypes) = label.split_at(split);
    Connector::new(tag, subtypes, direction)
        .unwrap_or_else(|e| panic!("invalid fixture label '{label}': {e}"))
}
