//! Rule-driven thin analysis of linkages for LinkForge.
//!
//! This crate checks labeled linkages against a read-only constraint table:
//! - Label patterns used to select links (`LabelPattern`)
//! - The rule set of domain starters and tagged rules (`RuleSet`)
//! - Domain construction from the link graph (`DomainStructure`)
//! - The validator itself (`analyze_linkage`)
//!
//! Analysis only looks at link structure and labels, never at words.

pub mod domain;
pub mod pattern;
pub mod rules;
pub mod validator;

// ============================================================================
// Rule Set
// ============================================================================

pub use pattern::{matches_any, LabelPattern};
pub use rules::{
    DomainKind, DomainReach, DomainStarter, Order, Requirement, Rule, RuleKind, RuleSet,
    RuleSetBuilder, Scope,
};

// ============================================================================
// Analysis
// ============================================================================

pub use domain::{Domain, DomainStructure};
pub use validator::{analyze_linkage, ValidationResult, Violation};
