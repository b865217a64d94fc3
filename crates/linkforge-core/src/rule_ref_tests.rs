//! Tests for rule references

use super::rule_ref::*;

#[test]
fn test_rule_ref_full_name() {
    let rr = RuleRef::new("domains", "Bounded");
    assert_eq!(rr.full_name(), "domains/Bounded");
    assert_eq!(rr.to_string(), "domains/Bounded");
}

#[test]
fn test_rule_ref_empty_group() {
    let rr = RuleRef::new("", "Connected");
    assert_eq!(rr.full_name(), "Connected");
}

#[test]
fn test_rule_ref_parse() {
    let rr: RuleRef = "companions/Wd-needs-S".parse().unwrap();
    assert_eq!(rr.group, "companions");
    assert_eq!(rr.name, "Wd-needs-S");
}

#[test]
fn test_rule_ref_parse_rejects_empty_name() {
    assert!("".parse::<RuleRef>().is_err());
    assert!("group/".parse::<RuleRef>().is_err());
}
