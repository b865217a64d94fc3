//! The linkage cost model.
//!
//! ```text
//! cost = disjunct_cost_weight * disjunct_cost
//!      + null_word_penalty    * null_word_count
//!      + link_span_weight     * span            (only with short_length_preference)
//! ```
//!
//! `span` is the sum or the maximum of `right - left` over all links,
//! depending on `span_measure`.

use std::fmt;

use linkforge_config::{ParseOptions, SpanMeasure};
use linkforge_core::{Cost, Linkage};
use tracing::trace;

/// The score of one linkage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkageScore {
    /// Total weighted cost. Lower is better.
    pub cost: Cost,
    /// True when `cost` exceeds the configured `max_cost`.
    pub over_budget: bool,
    /// Words with no link.
    pub null_word_count: usize,
    /// Unweighted cumulative disjunct cost.
    pub disjunct_cost: Cost,
    /// Aggregated link span under the configured measure.
    pub link_span: usize,
}

impl fmt::Display for LinkageScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cost={} nulls={} disjunct={} span={}",
            self.cost, self.null_word_count, self.disjunct_cost, self.link_span
        )?;
        if self.over_budget {
            f.write_str(" (over budget)")?;
        }
        Ok(())
    }
}

/// Scores `linkage` under `options`.
///
/// # Examples
///
/// ```
/// use linkforge_config::ParseOptions;
/// use linkforge_core::{Cost, Link, Linkage};
/// use linkforge_scoring::score_linkage;
///
/// let linkage = Linkage::new(
///     4,
///     vec![
///         Link::new(0, 1, "Ss+".parse().unwrap(), "Ss-".parse().unwrap()),
///         Link::new(1, 3, "Os+".parse().unwrap(), "Os-".parse().unwrap()),
///     ],
///     2.0,
/// );
/// let options = ParseOptions::new().with_null_word_penalty(5.0);
///
/// let score = score_linkage(&linkage, &options);
/// assert_eq!(score.cost, Cost::of(7.0));
/// assert_eq!(score.null_word_count, 1);
/// assert!(!score.over_budget);
/// ```
///
/// # Panics
///
/// Panics if `options` fails [`ParseOptions::validate`].
pub fn score_linkage(linkage: &Linkage, options: &ParseOptions) -> LinkageScore {
    if let Err(err) = options.validate() {
        panic!("cannot score with invalid parse options: {err}");
    }
    let link_span = match options.span_measure {
        SpanMeasure::Sum => linkage.total_span(),
        SpanMeasure::Max => linkage.max_span(),
    };
    let structural = if options.short_length_preference {
        options.link_span_weight * link_span as f64
    } else {
        0.0
    };

    let cost = Cost::saturating(
        options.disjunct_cost_weight * linkage.disjunct_cost()
            + options.null_word_penalty * linkage.null_word_count() as f64
            + structural,
    );
    let over_budget = options.max_cost().is_some_and(|max| cost > max);

    let score = LinkageScore {
        cost,
        over_budget,
        null_word_count: linkage.null_word_count(),
        disjunct_cost: Cost::of(linkage.disjunct_cost()),
        link_span,
    };
    trace!(event = "linkage_scored", score = %score);
    score
}

#[cfg(test)]
mod tests;
