//! Linkage cost model and deterministic ranking for LinkForge.
//!
//! - [`score_linkage`] turns a validated linkage into a [`LinkageScore`]
//! - [`Ranker`] collects scored candidates from any number of threads and
//!   orders them best-first
//!
//! Scoring never discards a linkage. Over-budget linkages are flagged and the
//! ranking policy in `ParseOptions` decides what happens to them.

pub mod ranking;
pub mod score;

pub use ranking::{compare, rank, Candidate, Ranker};
pub use score::{score_linkage, LinkageScore};
