//! The constraint rule set.
//!
//! A [`RuleSet`] is built once per grammar and shared read-only by every
//! analysis. It holds two tables:
//!
//! - domain starters: label patterns that open a domain of a named kind,
//! - rules: tagged [`RuleKind`] variants carrying plain data, evaluated in
//!   registration order by the validator's dispatch loop.
//!
//! Rule sets can be assembled with [`RuleSet::builder`] or loaded from TOML or
//! YAML:
//!
//! ```
//! use linkforge_postprocess::{RuleKind, RuleSet};
//!
//! let rules = RuleSet::from_toml_str(r#"
//!     [[starters]]
//!     pattern = "Ce"
//!     domain = "clause"
//!
//!     [[rules]]
//!     id = "clause/no-crossing"
//!     message = "Clauses may not cross"
//!     [rules.check]
//!     type = "containment"
//!     domain = "clause"
//! "#).unwrap();
//!
//! assert_eq!(rules.starters().len(), 1);
//! assert!(matches!(rules.rules()[0].check, RuleKind::Containment { .. }));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use linkforge_config::ConfigError;
use linkforge_core::RuleRef;
use serde::{Deserialize, Serialize};

use crate::pattern::LabelPattern;

/// Name of a kind of domain, such as `"clause"` or `"subject"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainKind(String);

impl DomainKind {
    /// Creates a domain kind.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the kind name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How far a domain extends from its starting link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainReach {
    /// Every word reachable from the starter's right word without passing
    /// through or left of its left word.
    #[default]
    Full,

    /// Only the starter's right word.
    RightWordOnly,
}

/// Opens a domain at every link whose label matches `pattern`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DomainStarter {
    pub pattern: LabelPattern,
    pub domain: DomainKind,
    #[serde(default)]
    pub reach: DomainReach,
}

impl DomainStarter {
    /// Creates a starter with [`DomainReach::Full`].
    pub fn new(pattern: LabelPattern, domain: DomainKind) -> Self {
        Self {
            pattern,
            domain,
            reach: DomainReach::Full,
        }
    }

    /// Sets the reach.
    pub fn with_reach(mut self, reach: DomainReach) -> Self {
        self.reach = reach;
        self
    }
}

/// Required relative position of two links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    Before,
    After,
}

/// Where a companion link is looked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Each domain containing the selector link.
    #[default]
    Domain,

    /// The whole linkage.
    Linkage,
}

/// Whether a companion must or must not be present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    #[default]
    Require,
    Forbid,
}

/// The check a rule performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleKind {
    /// Domains of `domain` must not cross another domain unless that
    /// domain's starter label matches `allow`.
    Containment {
        domain: DomainKind,
        #[serde(default)]
        allow: Vec<LabelPattern>,
    },

    /// No member link of a `domain` domain may reach left of its start.
    Bounded { domain: DomainKind },

    /// Inside every domain holding a `selector` link, that link must come
    /// `order` every `anchor` link.
    Ordering {
        selector: LabelPattern,
        anchor: LabelPattern,
        order: Order,
    },

    /// A `selector` link requires (or forbids) another link matching
    /// `companions` within `scope`.
    Companion {
        selector: LabelPattern,
        companions: Vec<LabelPattern>,
        #[serde(default)]
        scope: Scope,
        #[serde(default)]
        requirement: Requirement,
    },

    /// Every `selector` link must lie on a cycle.
    Cycle { selector: LabelPattern },

    /// Linked words must form one connected component.
    Connected,

    /// The linkage must contain at least `count` links.
    MinimumLinks { count: usize },
}

impl RuleKind {
    /// Returns the domain kind this rule is scoped to, if any.
    pub fn domain(&self) -> Option<&DomainKind> {
        match self {
            RuleKind::Containment { domain, .. } | RuleKind::Bounded { domain } => Some(domain),
            _ => None,
        }
    }
}

/// A registered rule: identifier, check, and an optional message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Rule {
    #[serde(with = "rule_ref_string")]
    pub id: RuleRef,
    #[serde(default)]
    pub message: Option<String>,
    pub check: RuleKind,
}

impl Rule {
    /// Creates a rule without a message.
    pub fn new(id: RuleRef, check: RuleKind) -> Self {
        Self {
            id,
            message: None,
            check,
        }
    }

    /// Sets the message reported with violations.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

mod rule_ref_string {
    use linkforge_core::RuleRef;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(id: &RuleRef, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<RuleRef, D::Error> {
        let text = String::deserialize(d)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Read-only table of domain starters and rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RuleSet {
    #[serde(default)]
    starters: Vec<DomainStarter>,
    #[serde(default)]
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Starts building a rule set.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Loads a rule set from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads a rule set from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a rule set from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let rules: Self = toml::from_str(s)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Loads a rule set from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a rule set from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let rules: Self = serde_yaml::from_str(s)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Domain starters in registration order.
    pub fn starters(&self) -> &[DomainStarter] {
        &self.starters
    }

    /// Rules in registration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the first starter whose pattern matches `label`.
    pub fn starter_for(&self, label: &str) -> Option<&DomainStarter> {
        self.starters.iter().find(|s| s.pattern.matches(label))
    }

    /// Returns the rule registered under `id`.
    pub fn rule(&self, id: &RuleRef) -> Option<&Rule> {
        self.rules.iter().find(|r| &r.id == id)
    }

    /// Returns true if there are neither starters nor rules.
    pub fn is_empty(&self) -> bool {
        self.starters.is_empty() && self.rules.is_empty()
    }

    /// Creates an Arc-wrapped version for sharing across threads.
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Checks cross-references between starters and rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if two rules share an id, a rule names
    /// a domain kind that no starter opens, or a companion rule lists no
    /// companions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let kinds: HashSet<&DomainKind> = self.starters.iter().map(|s| &s.domain).collect();
        let mut ids = HashSet::new();

        for rule in &self.rules {
            if !ids.insert(&rule.id) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate rule id '{}'",
                    rule.id
                )));
            }
            if let Some(domain) = rule.check.domain() {
                if !kinds.contains(domain) {
                    return Err(ConfigError::Invalid(format!(
                        "rule '{}' refers to domain '{}' which no starter opens",
                        rule.id, domain
                    )));
                }
            }
            if let RuleKind::Companion { companions, .. } = &rule.check {
                if companions.is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "companion rule '{}' lists no companions",
                        rule.id
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Builder for [`RuleSet`].
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    starters: Vec<DomainStarter>,
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    /// Registers a domain starter.
    pub fn starter(mut self, starter: DomainStarter) -> Self {
        self.starters.push(starter);
        self
    }

    /// Registers a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Validates and returns the rule set.
    pub fn build(self) -> Result<RuleSet, ConfigError> {
        let rules = RuleSet {
            starters: self.starters,
            rules: self.rules,
        };
        rules.validate()?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests;
