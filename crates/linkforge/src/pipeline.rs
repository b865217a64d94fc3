//! Batch post-processing for one sentence.
//!
//! [`PostProcessor`] runs label derivation, thin analysis and scoring over
//! every candidate linkage in parallel, submits the well-formed ones to a
//! [`Ranker`], and returns them best-first.

use std::path::Path;
use std::sync::Arc;

use linkforge_config::{ConfigError, ParseOptions};
use linkforge_core::{compute_link_labels_with, LabelInterner, LabelRule, Linkage, SubscriptIntersection};
use linkforge_postprocess::{analyze_linkage, RuleSet, ValidationResult};
use linkforge_scoring::{score_linkage, Candidate, LinkageScore, Ranker};
use rayon::prelude::*;
use tracing::info;

/// One candidate after post-processing.
#[derive(Debug, Clone)]
pub struct ProcessedLinkage {
    /// Position in the input batch.
    pub enumeration_index: usize,
    /// The linkage, with labels filled in.
    pub linkage: Linkage,
    pub validation: ValidationResult,
    /// Present only for well-formed linkages.
    pub score: Option<LinkageScore>,
}

/// Result of [`PostProcessor::process_batch`].
#[derive(Debug, Clone)]
pub struct BatchReport {
    processed: Vec<ProcessedLinkage>,
    ranked: Vec<Candidate>,
}

impl BatchReport {
    /// Every candidate, in input order.
    pub fn processed(&self) -> &[ProcessedLinkage] {
        &self.processed
    }

    /// Well-formed candidates, best-first.
    pub fn ranked(&self) -> &[Candidate] {
        &self.ranked
    }

    /// Well-formed linkages, best-first.
    pub fn ranked_linkages(&self) -> impl Iterator<Item = &ProcessedLinkage> + '_ {
        self.ranked
            .iter()
            .map(move |c| &self.processed[c.enumeration_index])
    }

    /// The best linkage, if any was well-formed and kept.
    pub fn best(&self) -> Option<&ProcessedLinkage> {
        self.ranked_linkages().next()
    }

    /// Number of well-formed candidates.
    pub fn well_formed_count(&self) -> usize {
        self.processed
            .iter()
            .filter(|p| p.validation.is_well_formed())
            .count()
    }

    /// Candidates that broke a rule, in input order.
    pub fn rejected(&self) -> impl Iterator<Item = &ProcessedLinkage> + '_ {
        self.processed
            .iter()
            .filter(|p| !p.validation.is_well_formed())
    }
}

/// Shared state for post-processing a parser's output.
///
/// Cloning is cheap; clones share the rule set and the label interner.
#[derive(Clone)]
pub struct PostProcessor {
    rules: Arc<RuleSet>,
    options: ParseOptions,
    interner: Arc<LabelInterner>,
    label_rule: Arc<dyn LabelRule>,
}

impl PostProcessor {
    /// Creates a processor with a fresh interner and the default label rule.
    ///
    /// # Panics
    ///
    /// Panics if `options` fails [`ParseOptions::validate`].
    pub fn new(rules: impl Into<Arc<RuleSet>>, options: ParseOptions) -> Self {
        if let Err(err) = options.validate() {
            panic!("cannot post-process with invalid parse options: {err}");
        }
        Self {
            rules: rules.into(),
            options,
            interner: Arc::new(LabelInterner::new()),
            label_rule: Arc::new(SubscriptIntersection),
        }
    }

    /// Loads the rule set and the parse options from TOML files.
    pub fn load(
        rules_path: impl AsRef<Path>,
        options_path: impl AsRef<Path>,
    ) -> Result<Self, ConfigError> {
        let rules = RuleSet::load(rules_path)?;
        let options = ParseOptions::load(options_path)?;
        Ok(Self::new(rules, options))
    }

    /// Shares an existing interner, e.g. across sentences.
    pub fn with_interner(mut self, interner: Arc<LabelInterner>) -> Self {
        self.interner = interner;
        self
    }

    /// Replaces the label derivation rule.
    pub fn with_label_rule(mut self, rule: impl LabelRule + 'static) -> Self {
        self.label_rule = Arc::new(rule);
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn interner(&self) -> &LabelInterner {
        &self.interner
    }

    /// Derives labels, validates and, if well-formed, scores one linkage.
    pub fn process(&self, enumeration_index: usize, mut linkage: Linkage) -> ProcessedLinkage {
        compute_link_labels_with(self.label_rule.as_ref(), &self.interner, &mut linkage);
        let validation = analyze_linkage(&self.rules, &linkage, &self.options);
        let score = validation
            .is_well_formed()
            .then(|| score_linkage(&linkage, &self.options));

        ProcessedLinkage {
            enumeration_index,
            linkage,
            validation,
            score,
        }
    }

    /// Processes every linkage of one sentence in parallel and ranks the
    /// well-formed ones.
    ///
    /// Enumeration indices are positions in `linkages`.
    pub fn process_batch(&self, linkages: Vec<Linkage>) -> BatchReport {
        let ranker = Ranker::new();
        let processed: Vec<ProcessedLinkage> = linkages
            .into_par_iter()
            .enumerate()
            .map(|(i, linkage)| {
                let p = self.process(i, linkage);
                if let Some(score) = p.score {
                    ranker.submit(Candidate::new(i, score));
                }
                p
            })
            .collect();
        let ranked = ranker.into_ranked(&self.options);

        info!(
            event = "batch_processed",
            linkages = processed.len(),
            well_formed = ranked.len(),
            best_cost = ?ranked.first().map(|c| c.score.cost.to_f64()),
        );

        BatchReport { processed, ranked }
    }
}

impl std::fmt::Debug for PostProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostProcessor")
            .field("rules", &self.rules)
            .field("options", &self.options)
            .field("interned_labels", &self.interner.len())
            .finish_non_exhaustive()
    }
}
