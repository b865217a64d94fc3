//! Best-first ordering of scored linkages.
//!
//! Candidates are ordered by:
//!
//! 1. over-budget candidates last, under [`OverBudgetPolicy::Deprioritize`]
//! 2. lower cost
//! 3. fewer null words, if `prefer_fewer_nulls`
//! 4. lower unweighted disjunct cost
//! 5. shorter link span, if `short_length_preference`
//! 6. lower enumeration index
//!
//! Under [`OverBudgetPolicy::Discard`] over-budget candidates are dropped
//! before ordering. The result depends only on the set of candidates, never on
//! the order they were submitted in.

use std::cmp::Ordering;
use std::sync::{Mutex, PoisonError};

use linkforge_config::{OverBudgetPolicy, ParseOptions};
use tracing::debug;

use crate::score::LinkageScore;

/// A scored linkage awaiting ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Position in which the search engine produced the linkage.
    pub enumeration_index: usize,
    pub score: LinkageScore,
}

impl Candidate {
    pub fn new(enumeration_index: usize, score: LinkageScore) -> Self {
        Self {
            enumeration_index,
            score,
        }
    }
}

/// Orders two candidates best-first under `options`.
pub fn compare(a: &Candidate, b: &Candidate, options: &ParseOptions) -> Ordering {
    let (x, y) = (&a.score, &b.score);

    let budget = if options.over_budget == OverBudgetPolicy::Deprioritize {
        x.over_budget.cmp(&y.over_budget)
    } else {
        Ordering::Equal
    };
    let nulls = if options.prefer_fewer_nulls {
        x.null_word_count.cmp(&y.null_word_count)
    } else {
        Ordering::Equal
    };
    let span = if options.short_length_preference {
        x.link_span.cmp(&y.link_span)
    } else {
        Ordering::Equal
    };

    budget
        .then(x.cost.cmp(&y.cost))
        .then(nulls)
        .then(x.disjunct_cost.cmp(&y.disjunct_cost))
        .then(span)
        .then(a.enumeration_index.cmp(&b.enumeration_index))
        // Duplicate indices still get a fixed order.
        .then(x.null_word_count.cmp(&y.null_word_count))
        .then(x.link_span.cmp(&y.link_span))
        .then(x.over_budget.cmp(&y.over_budget))
}

/// Sorts `candidates` best-first, applying the over-budget policy.
///
/// # Examples
///
/// ```
/// use linkforge_config::ParseOptions;
/// use linkforge_core::Cost;
/// use linkforge_scoring::{rank, Candidate, LinkageScore};
///
/// let score = |cost: f64| LinkageScore {
///     cost: Cost::of(cost),
///     over_budget: false,
///     null_word_count: 0,
///     disjunct_cost: Cost::of(cost),
///     link_span: 0,
/// };
/// let ranked = rank(
///     vec![Candidate::new(0, score(3.0)), Candidate::new(1, score(1.0))],
///     &ParseOptions::default(),
/// );
/// let order: Vec<usize> = ranked.iter().map(|c| c.enumeration_index).collect();
/// assert_eq!(order, vec![1, 0]);
/// ```
pub fn rank(mut candidates: Vec<Candidate>, options: &ParseOptions) -> Vec<Candidate> {
    if options.over_budget == OverBudgetPolicy::Discard {
        candidates.retain(|c| !c.score.over_budget);
    }
    candidates.sort_unstable_by(|a, b| compare(a, b, options));
    candidates
}

/// Thread-safe collector of scored candidates.
///
/// Submit from any thread, then call [`ranked`](Self::ranked) once the
/// search is done.
#[derive(Debug, Default)]
pub struct Ranker {
    candidates: Mutex<Vec<Candidate>>,
}

impl Ranker {
    /// Creates an empty ranker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate.
    pub fn submit(&self, candidate: Candidate) {
        self.candidates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(candidate);
    }

    /// Number of candidates submitted so far.
    pub fn len(&self) -> usize {
        self.candidates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing has been submitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the submitted candidates ranked best-first.
    pub fn ranked(&self, options: &ParseOptions) -> Vec<Candidate> {
        let snapshot = self
            .candidates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Self::finish(snapshot, options)
    }

    /// Consumes the ranker and returns its candidates ranked best-first.
    pub fn into_ranked(self, options: &ParseOptions) -> Vec<Candidate> {
        let candidates = self
            .candidates
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        Self::finish(candidates, options)
    }

    /// Returns the best candidate, if any survives the over-budget policy.
    pub fn best(&self, options: &ParseOptions) -> Option<Candidate> {
        self.ranked(options).into_iter().next()
    }

    fn finish(candidates: Vec<Candidate>, options: &ParseOptions) -> Vec<Candidate> {
        let submitted = candidates.len();
        let ranked = rank(candidates, options);
        debug!(
            event = "candidates_ranked",
            submitted,
            kept = ranked.len(),
            best_cost = ?ranked.first().map(|c| c.score.cost),
        );
        ranked
    }
}
