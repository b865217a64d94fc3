//! Thin analysis: checks a labeled linkage against a rule set.
//!
//! The check is a pure predicate. Link-free rules run first; then links are
//! visited in canonical order (left word, then link index) and every rule is
//! evaluated at each link in registration order. The first failure is
//! reported, which makes the verdict reproducible for a given linkage and
//! rule set.

use std::fmt;

use linkforge_config::ParseOptions;
use linkforge_core::{Link, Linkage, RuleRef};
use tracing::{debug, trace};

use crate::domain::DomainStructure;
use crate::pattern::matches_any;
use crate::rules::{Order, Requirement, Rule, RuleKind, RuleSet, Scope};

/// Outcome of [`analyze_linkage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every rule passed.
    WellFormed,
    /// A rule failed.
    Violated(Violation),
}

impl ValidationResult {
    /// Returns true for [`ValidationResult::WellFormed`].
    pub fn is_well_formed(&self) -> bool {
        matches!(self, ValidationResult::WellFormed)
    }

    /// Returns the violation, if any.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ValidationResult::WellFormed => None,
            ValidationResult::Violated(v) => Some(v),
        }
    }
}

/// The first rule failure found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Link blamed for the failure; `None` for link-free rules.
    pub first_offending_link: Option<usize>,
    /// Rule that failed.
    pub rule_id: RuleRef,
    /// The rule's message, if any, followed by what was found.
    pub reason: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first_offending_link {
            Some(link) => write!(f, "{} at link {}: {}", self.rule_id, link, self.reason),
            None => write!(f, "{}: {}", self.rule_id, self.reason),
        }
    }
}

/// Checks `linkage` against `rule_set`.
///
/// Scoring knobs in `options` do not affect the verdict; the parameter keeps
/// every pipeline stage callable with the same bundle.
///
/// # Panics
///
/// Panics if any link is unlabeled.
///
/// # Examples
///
/// ```
/// use linkforge_config::ParseOptions;
/// use linkforge_core::{compute_link_labels, LabelInterner, Link, Linkage, RuleRef};
/// use linkforge_postprocess::{analyze_linkage, Rule, RuleKind, RuleSet};
///
/// let rules = RuleSet::builder()
///     .rule(Rule::new(RuleRef::new("", "Connected"), RuleKind::Connected))
///     .build()
///     .unwrap();
///
/// let interner = LabelInterner::new();
/// let mut linkage = Linkage::new(
///     4,
///     vec![
///         Link::new(0, 1, "D+".parse().unwrap(), "D-".parse().unwrap()),
///         Link::new(2, 3, "O+".parse().unwrap(), "O-".parse().unwrap()),
///     ],
///     0.0,
/// );
/// compute_link_labels(&interner, &mut linkage);
///
/// let result = analyze_linkage(&rules, &linkage, &ParseOptions::default());
/// assert_eq!(result.violation().unwrap().first_offending_link, Some(1));
/// ```
pub fn analyze_linkage(
    rule_set: &RuleSet,
    linkage: &Linkage,
    _options: &ParseOptions,
) -> ValidationResult {
    assert!(
        linkage.is_labeled(),
        "linkage has unlabeled links; derive labels before analysis"
    );

    for rule in rule_set.rules() {
        if let RuleKind::MinimumLinks { count } = rule.check {
            if linkage.len() < count {
                let detail = format!("{} links, at least {} required", linkage.len(), count);
                return violated(rule, None, detail);
            }
        }
    }

    let structure = DomainStructure::build(rule_set, linkage);
    let order = linkage.canonical_order();
    let checker = Checker {
        linkage,
        structure: &structure,
        first_component: order
            .first()
            .and_then(|&i| structure.component_of(linkage.link(i).left())),
    };

    for &link in &order {
        for rule in rule_set.rules() {
            if let Some(detail) = checker.check(&rule.check, link) {
                return violated(rule, Some(link), detail);
            }
        }
    }

    trace!(
        event = "linkage_well_formed",
        links = linkage.len(),
        domains = structure.domains().len(),
    );
    ValidationResult::WellFormed
}

fn violated(rule: &Rule, link: Option<usize>, detail: String) -> ValidationResult {
    let reason = match &rule.message {
        Some(message) => format!("{message}: {detail}"),
        None => detail,
    };
    debug!(
        event = "linkage_violated",
        rule = %rule.id,
        link = ?link,
        reason = %reason,
    );
    ValidationResult::Violated(Violation {
        first_offending_link: link,
        rule_id: rule.id.clone(),
        reason,
    })
}

struct Checker<'a> {
    linkage: &'a Linkage,
    structure: &'a DomainStructure,
    first_component: Option<usize>,
}

impl Checker<'_> {
    fn label(&self, link: usize) -> &str {
        self.linkage
            .link(link)
            .label()
            .map(|l| l.as_str())
            .unwrap_or_default()
    }

    fn describe(&self, link: usize) -> String {
        let l: &Link = self.linkage.link(link);
        format!("{} ({}, {})", self.label(link), l.left(), l.right())
    }

    /// Evaluates `check` at `link`, returning what went wrong.
    fn check(&self, check: &RuleKind, link: usize) -> Option<String> {
        match check {
            RuleKind::Containment { domain, allow } => {
                let b = self.structure.domain_started_by(link)?;
                let domains = self.structure.domains();
                let inner = &domains[b];
                domains[..b].iter().find_map(|outer| {
                    if !outer.crosses(inner) {
                        return None;
                    }
                    let forbidden = (&outer.kind == domain
                        && !matches_any(allow, self.label(inner.starter)))
                        || (&inner.kind == domain
                            && !matches_any(allow, self.label(outer.starter)));
                    forbidden.then(|| {
                        format!(
                            "{} domain opened by {} crosses {} domain opened by {}",
                            inner.kind,
                            self.describe(inner.starter),
                            outer.kind,
                            self.describe(outer.starter)
                        )
                    })
                })
            }

            RuleKind::Bounded { domain } => {
                let l = self.linkage.link(link);
                self.structure
                    .domains_of(link)
                    .iter()
                    .map(|&d| &self.structure.domains()[d])
                    .find(|d| &d.kind == domain && l.left() < d.start)
                    .map(|d| {
                        format!(
                            "{} leaves the {} domain starting at word {}",
                            self.describe(link),
                            d.kind,
                            d.start
                        )
                    })
            }

            RuleKind::Ordering {
                selector,
                anchor,
                order,
            } => {
                if !selector.matches(self.label(link)) {
                    return None;
                }
                let key = |i: usize| {
                    let l = self.linkage.link(i);
                    (l.left(), l.right())
                };
                self.structure.domains_of(link).iter().find_map(|&d| {
                    self.structure.domains()[d]
                        .members
                        .iter()
                        .copied()
                        .filter(|&m| m != link && anchor.matches(self.label(m)))
                        .find(|&m| match order {
                            Order::Before => key(link) >= key(m),
                            Order::After => key(link) <= key(m),
                        })
                        .map(|m| {
                            let word = match order {
                                Order::Before => "before",
                                Order::After => "after",
                            };
                            format!(
                                "{} must come {} {}",
                                self.describe(link),
                                word,
                                self.describe(m)
                            )
                        })
                })
            }

            RuleKind::Companion {
                selector,
                companions,
                scope,
                requirement,
            } => {
                if !selector.matches(self.label(link)) {
                    return None;
                }
                let is_companion = |m: &usize| *m != link && matches_any(companions, self.label(*m));
                let fails = |found: bool| match requirement {
                    Requirement::Require => !found,
                    Requirement::Forbid => found,
                };
                let what = match requirement {
                    Requirement::Require => "lacks a required companion",
                    Requirement::Forbid => "has a forbidden companion",
                };
                match scope {
                    Scope::Linkage => {
                        let found = (0..self.linkage.len()).any(|m| is_companion(&m));
                        fails(found)
                            .then(|| format!("{} {} in the linkage", self.describe(link), what))
                    }
                    Scope::Domain => self.structure.domains_of(link).iter().find_map(|&d| {
                        let domain = &self.structure.domains()[d];
                        let found = domain.members.iter().any(is_companion);
                        fails(found).then(|| {
                            format!(
                                "{} {} in the {} domain opened by {}",
                                self.describe(link),
                                what,
                                domain.kind,
                                self.describe(domain.starter)
                            )
                        })
                    }),
                }
            }

            RuleKind::Cycle { selector } => {
                if !selector.matches(self.label(link)) || self.structure.on_cycle(self.linkage, link)
                {
                    return None;
                }
                Some(format!("{} is not part of a cycle", self.describe(link)))
            }

            RuleKind::Connected => {
                let component = self.structure.component_of(self.linkage.link(link).left());
                (component != self.first_component)
                    .then(|| format!("{} is disconnected from the first link", self.describe(link)))
            }

            RuleKind::MinimumLinks { .. } => None,
        }
    }
}
