//! Tests for the linkage cost model.

use super::*;
use linkforge_config::OverBudgetPolicy;
use linkforge_core::LabelInterner;
use linkforge_test::{random_linkage, sentences, LinkageBuilder};

fn scenario() -> Linkage {
    sentences::subject_object(&LabelInterner::new())
}

#[test]
fn test_subject_object_costs_seven() {
    let options = ParseOptions::new()
        .with_disjunct_cost_weight(1.0)
        .with_null_word_penalty(5.0);

    let score = score_linkage(&scenario(), &options);
    assert_eq!(score.cost, Cost::of(7.0));
    assert_eq!(score.null_word_count, 1);
    assert_eq!(score.disjunct_cost, Cost::of(2.0));
    assert_eq!(score.link_span, 3);
    assert!(!score.over_budget);
}

#[test]
fn test_span_penalty_only_when_preferred() {
    let options = ParseOptions::new().with_null_word_penalty(5.0);
    assert_eq!(score_linkage(&scenario(), &options).cost, Cost::of(7.0));

    let options = options
        .with_short_length_preference(true)
        .with_link_span_weight(0.5);
    // Spans 1 and 2 sum to 3.
    assert_eq!(score_linkage(&scenario(), &options).cost, Cost::of(8.5));

    let options = options.with_span_measure(SpanMeasure::Max);
    let score = score_linkage(&scenario(), &options);
    assert_eq!(score.link_span, 2);
    assert_eq!(score.cost, Cost::of(8.0));
}

#[test]
fn test_disjunct_weight() {
    let options = ParseOptions::new()
        .with_disjunct_cost_weight(2.5)
        .with_null_word_penalty(0.0);

    assert_eq!(score_linkage(&scenario(), &options).cost, Cost::of(5.0));
}

#[test]
fn test_over_budget_flag() {
    let linkage = scenario();

    let at_budget = ParseOptions::new().with_null_word_penalty(5.0).with_max_cost(7.0);
    assert!(!score_linkage(&linkage, &at_budget).over_budget);

    let under = at_budget.clone().with_max_cost(6.99999);
    assert!(score_linkage(&linkage, &under).over_budget);

    let unbounded = ParseOptions::new().with_max_cost(f64::INFINITY);
    assert!(!score_linkage(&linkage, &unbounded).over_budget);
}

#[test]
fn test_scoring_never_discards() {
    let options = ParseOptions::new()
        .with_max_cost(0.0)
        .with_over_budget(OverBudgetPolicy::Discard);

    let score = score_linkage(&scenario(), &options);
    assert!(score.over_budget);
    assert!(score.cost > Cost::ZERO);
}

#[test]
fn test_empty_linkage_counts_every_word_null() {
    let linkage = LinkageBuilder::new(3).disjunct_cost(0.5).build();
    let score = score_linkage(&linkage, &ParseOptions::default());

    assert_eq!(score.null_word_count, 3);
    assert_eq!(score.link_span, 0);
    assert_eq!(score.cost, Cost::of(3.5));
}

#[test]
fn test_cost_monotone_in_null_penalty() {
    let interner = LabelInterner::new();
    let penalties = [0.0, 0.5, 1.0, 2.0, 5.0, 10.0];

    for seed in 0..50 {
        let linkage = random_linkage(seed, 6, 4, &interner);
        let costs: Vec<Cost> = penalties
            .iter()
            .map(|&p| score_linkage(&linkage, &ParseOptions::new().with_null_word_penalty(p)).cost)
            .collect();

        for pair in costs.windows(2) {
            assert!(pair[0] <= pair[1], "seed {seed}: {costs:?}");
            if linkage.null_word_count() > 0 {
                assert!(pair[0] < pair[1], "seed {seed}: {costs:?}");
            }
        }
    }
}

#[test]
fn test_tiny_penalty_increase_raises_cost() {
    let linkage = scenario();
    let lo = score_linkage(&linkage, &ParseOptions::new().with_null_word_penalty(5.0)).cost;
    let hi = score_linkage(&linkage, &ParseOptions::new().with_null_word_penalty(5.000001)).cost;

    assert!(lo < hi, "{lo:?} vs {hi:?}");
}

#[test]
fn test_large_penalties_stay_strictly_ordered() {
    let linkage = scenario();
    let big = score_linkage(&linkage, &ParseOptions::new().with_null_word_penalty(1e15)).cost;
    let bigger = score_linkage(&linkage, &ParseOptions::new().with_null_word_penalty(2e15)).cost;

    assert!(big < bigger, "{big:?} vs {bigger:?}");
}

#[test]
fn test_overflowing_cost_saturates() {
    let options = ParseOptions::new().with_null_word_penalty(f64::MAX);
    let linkage = LinkageBuilder::new(3).build();

    assert_eq!(score_linkage(&linkage, &options).cost, Cost::MAX);
}

#[test]
#[should_panic(expected = "invalid parse options")]
fn test_nan_penalty_panics() {
    let options = ParseOptions::new().with_null_word_penalty(f64::NAN);
    score_linkage(&scenario(), &options);
}

#[test]
#[should_panic(expected = "invalid parse options")]
fn test_negative_weight_panics() {
    let options = ParseOptions::new().with_disjunct_cost_weight(-1.0);
    score_linkage(&scenario(), &options);
}

#[test]
fn test_display() {
    let options = ParseOptions::new().with_null_word_penalty(5.0).with_max_cost(1.0);
    let score = score_linkage(&scenario(), &options);

    assert_eq!(
        score.to_string(),
        "cost=7 nulls=1 disjunct=2 span=3 (over budget)"
    );
}
