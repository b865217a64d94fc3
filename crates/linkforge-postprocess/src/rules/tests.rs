//! Tests for rule set construction and loading.

use super::*;
use linkforge_test::rules::{CLAUSE_RULES, PERMISSIVE_CLAUSE_RULES, SAMPLE_RULES};

fn pattern(s: &str) -> LabelPattern {
    s.parse().unwrap()
}

fn clause_starter() -> DomainStarter {
    DomainStarter::new(pattern("C"), DomainKind::new("clause"))
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_sample_rules_parse() {
    let rules = RuleSet::from_toml_str(SAMPLE_RULES).unwrap();

    assert_eq!(rules.starters().len(), 2);
    assert_eq!(rules.rules().len(), 6);
    assert_eq!(
        rules.rules()[0].check,
        RuleKind::MinimumLinks { count: 1 }
    );
    assert_eq!(rules.rules()[0].message.as_deref(), Some("Linkage is empty"));
    assert_eq!(rules.rules()[2].message, None);
}

#[test]
fn test_companion_defaults() {
    let rules = RuleSet::from_toml_str(SAMPLE_RULES).unwrap();
    let id: RuleRef = "companion/object-needs-subject".parse().unwrap();

    match &rules.rule(&id).unwrap().check {
        RuleKind::Companion {
            selector,
            companions,
            scope,
            requirement,
        } => {
            assert_eq!(selector.as_str(), "O");
            assert_eq!(companions, &vec![pattern("S")]);
            assert_eq!(*scope, Scope::Domain);
            assert_eq!(*requirement, Requirement::Require);
        }
        other => panic!("unexpected check {other:?}"),
    }
}

#[test]
fn test_rule_ids_keep_group() {
    let rules = RuleSet::from_toml_str(CLAUSE_RULES).unwrap();
    let id = &rules.rules()[0].id;

    assert_eq!(id.group, "clause");
    assert_eq!(id.name, "no-crossing");
}

#[test]
fn test_allow_list() {
    let rules = RuleSet::from_toml_str(PERMISSIVE_CLAUSE_RULES).unwrap();

    assert_eq!(
        rules.rules()[0].check,
        RuleKind::Containment {
            domain: DomainKind::new("clause"),
            allow: vec![pattern("Cb")],
        }
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
starters:
  - pattern: "Ce"
    domain: clause
    reach: right_word_only
rules:
  - id: clause/ordered
    check:
      type: ordering
      selector: "Wd"
      anchor: "Ce"
      order: before
  - id: graph/cycle
    check:
      type: cycle
      selector: "X"
"#;

    let rules = RuleSet::from_yaml_str(yaml).unwrap();
    assert_eq!(rules.starters()[0].reach, DomainReach::RightWordOnly);
    assert_eq!(
        rules.rules()[0].check,
        RuleKind::Ordering {
            selector: pattern("Wd"),
            anchor: pattern("Ce"),
            order: Order::Before,
        }
    );
    assert_eq!(
        rules.rules()[1].check,
        RuleKind::Cycle {
            selector: pattern("X")
        }
    );
}

#[test]
fn test_empty_document() {
    let rules = RuleSet::from_toml_str("").unwrap();
    assert!(rules.is_empty());
}

#[test]
fn test_invalid_pattern_rejected() {
    let toml = r#"
        [[starters]]
        pattern = "clause"
        domain = "clause"
    "#;

    assert!(matches!(
        RuleSet::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_unknown_rule_type_rejected() {
    let toml = r#"
        [[rules]]
        id = "x"
        [rules.check]
        type = "telepathy"
    "#;

    assert!(matches!(
        RuleSet::from_toml_str(toml),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        RuleSet::load("/nonexistent/rules.toml"),
        Err(ConfigError::Io(_))
    ));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_duplicate_ids_rejected() {
    let result = RuleSet::builder()
        .rule(Rule::new(RuleRef::new("graph", "connected"), RuleKind::Connected))
        .rule(Rule::new(
            RuleRef::new("graph", "connected"),
            RuleKind::MinimumLinks { count: 2 },
        ))
        .build();

    match result {
        Err(ConfigError::Invalid(msg)) => assert!(msg.contains("duplicate")),
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn test_unknown_domain_rejected() {
    let result = RuleSet::builder()
        .starter(clause_starter())
        .rule(Rule::new(
            RuleRef::new("subject", "bounded"),
            RuleKind::Bounded {
                domain: DomainKind::new("subject"),
            },
        ))
        .build();

    match result {
        Err(ConfigError::Invalid(msg)) => assert!(msg.contains("subject")),
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn test_empty_companions_rejected() {
    let toml = r#"
        [[rules]]
        id = "companion/none"
        [rules.check]
        type = "companion"
        selector = "O"
        companions = []
    "#;

    assert!(matches!(
        RuleSet::from_toml_str(toml),
        Err(ConfigError::Invalid(_))
    ));
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_first_starter_wins() {
    let rules = RuleSet::builder()
        .starter(DomainStarter::new(pattern("Cs"), DomainKind::new("relative")))
        .starter(clause_starter())
        .build()
        .unwrap();

    assert_eq!(rules.starter_for("Cs").unwrap().domain.as_str(), "relative");
    assert_eq!(rules.starter_for("Cx").unwrap().domain.as_str(), "clause");
    assert!(rules.starter_for("Ss").is_none());
}

#[test]
fn test_builder_preserves_order() {
    let rules = RuleSet::builder()
        .rule(Rule::new(RuleRef::new("", "b"), RuleKind::Connected))
        .rule(
            Rule::new(RuleRef::new("", "a"), RuleKind::MinimumLinks { count: 1 })
                .with_message("need links"),
        )
        .build()
        .unwrap();

    let names: Vec<&str> = rules.rules().iter().map(|r| r.id.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(
        rules.rule(&RuleRef::new("", "a")).unwrap().message.as_deref(),
        Some("need links")
    );
}

