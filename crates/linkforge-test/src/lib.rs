//! Shared test fixtures for LinkForge crates.
//!
//! This crate depends only on `linkforge-core`. Rule sets are provided as TOML
//! text so crates that own the rule types can parse them without a dependency
//! cycle.
//!
//! - [`linkage`] - Linkage builder with connectors derived from label text
//! - [`sentences`] - Hand-built linkages for common scenarios
//! - [`rules`] - Rule set documents
//! - [`random`] - Seeded random linkages
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! linkforge-test = { workspace = true }
//! ```

pub mod linkage;
pub mod random;
pub mod rules;
pub mod sentences;

pub use linkage::LinkageBuilder;
pub use random::random_linkage;
