//! LinkForge - linkage post-processing for link-grammar parsers
//!
//! Takes the candidate linkages a parser enumerates for one sentence, derives
//! link labels, drops the ones that break the grammar's structural rules, and
//! ranks the rest by cost.
//!
//! # Example
//!
//! ```rust
//! use linkforge::prelude::*;
//!
//! let rules = RuleSet::from_toml_str(r#"
//!     [[rules]]
//!     id = "graph/connected"
//!     [rules.check]
//!     type = "connected"
//! "#).unwrap();
//! let processor = PostProcessor::new(rules, ParseOptions::new().with_null_word_penalty(5.0));
//!
//! let linkage = Linkage::new(
//!     4,
//!     vec![
//!         Link::new(0, 1, "Ss+".parse().unwrap(), "Ss-".parse().unwrap()),
//!         Link::new(1, 3, "Os+".parse().unwrap(), "Os-".parse().unwrap()),
//!     ],
//!     2.0,
//! );
//!
//! let report = processor.process_batch(vec![linkage]);
//! let best = report.best().unwrap();
//! assert!(best.validation.is_well_formed());
//! assert_eq!(best.score.unwrap().cost, Cost::of(7.0));
//! ```

// Core types
pub use linkforge_core::{
    compute_link_labels, compute_link_labels_with, Connector, Cost, Direction, Label,
    LabelInterner, LabelRule, Link, LinkForgeError, Linkage, RuleRef, SubscriptIntersection,
    WordPos,
};

// Configuration
pub use linkforge_config::{ConfigError, OverBudgetPolicy, ParseOptions, SpanMeasure};

// Thin analysis
pub use linkforge_postprocess::{
    analyze_linkage, DomainKind, DomainReach, DomainStarter, LabelPattern, Order, Requirement,
    Rule, RuleKind, RuleSet, Scope, ValidationResult, Violation,
};

// Scoring and ranking
pub use linkforge_scoring::{score_linkage, Candidate, LinkageScore, Ranker};

#[cfg(feature = "console")]
pub mod console;
pub mod pipeline;

pub use pipeline::{BatchReport, PostProcessor, ProcessedLinkage};

pub mod prelude {
    pub use super::{
        analyze_linkage, compute_link_labels, score_linkage, BatchReport, Cost, LabelInterner,
        Link, Linkage, ParseOptions, PostProcessor, Ranker, RuleSet, ValidationResult,
    };
}
