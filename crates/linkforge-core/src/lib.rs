//! LinkForge Core - Core types for linkage post-processing
//!
//! This crate provides the fundamental abstractions for LinkForge:
//! - Connectors and the links/linkages built from them
//! - Label interning and pluggable label derivation
//! - Fixed-point cost values for ranking linkages
//! - Rule references used to identify constraint rules

pub mod connector;
pub mod cost;
pub mod error;
pub mod label;
pub mod labeling;
pub mod linkage;
pub mod rule_ref;

#[cfg(test)]
mod rule_ref_tests;

pub use connector::{Connector, Direction};
pub use cost::Cost;
pub use error::{LinkForgeError, Result};
pub use label::{Label, LabelInterner};
pub use labeling::{compute_link_labels, compute_link_labels_with, LabelRule, SubscriptIntersection};
pub use linkage::{Link, Linkage, WordPos};
pub use rule_ref::RuleRef;
