//! Tests for parse option configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        max_cost = 20.0
        disjunct_cost_weight = 0.5
        null_word_penalty = 5.0
        prefer_fewer_nulls = true
        short_length_preference = true
        span_measure = "max"
        link_span_weight = 0.25
        over_budget = "discard"
    "#;

    let options = ParseOptions::from_toml_str(toml).unwrap();
    assert_eq!(options.max_cost, Some(20.0));
    assert_eq!(options.disjunct_cost_weight, 0.5);
    assert_eq!(options.null_word_penalty, 5.0);
    assert!(options.prefer_fewer_nulls);
    assert!(options.short_length_preference);
    assert_eq!(options.span_measure, SpanMeasure::Max);
    assert_eq!(options.link_span_weight, 0.25);
    assert_eq!(options.over_budget, OverBudgetPolicy::Discard);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        null_word_penalty: 3.0
        prefer_fewer_nulls: true
        over_budget: keep
    "#;

    let options = ParseOptions::from_yaml_str(yaml).unwrap();
    assert_eq!(options.null_word_penalty, 3.0);
    assert!(options.prefer_fewer_nulls);
    assert_eq!(options.over_budget, OverBudgetPolicy::Keep);
    assert_eq!(options.disjunct_cost_weight, 1.0);
}

#[test]
fn test_empty_document_gives_defaults() {
    let options = ParseOptions::from_toml_str("").unwrap();
    assert_eq!(options, ParseOptions::default());
    assert_eq!(options.span_measure, SpanMeasure::Sum);
    assert_eq!(options.over_budget, OverBudgetPolicy::Deprioritize);
}

#[test]
fn test_negative_weight_rejected() {
    let err = ParseOptions::from_toml_str("null_word_penalty = -1.0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_span_measure_rejected() {
    let err = ParseOptions::from_toml_str(r#"span_measure = "mean""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = ParseOptions::load("/nonexistent/linkforge/parse.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let options = ParseOptions::new()
        .with_max_cost(7.0)
        .with_disjunct_cost_weight(2.0)
        .with_null_word_penalty(4.0)
        .with_prefer_fewer_nulls(true)
        .with_short_length_preference(true)
        .with_span_measure(SpanMeasure::Max)
        .with_link_span_weight(0.5)
        .with_over_budget(OverBudgetPolicy::Keep);

    assert_eq!(options.max_cost(), Some(Cost::of(7.0)));
    assert_eq!(options.disjunct_cost_weight, 2.0);
    assert!(options.validate().is_ok());
}
