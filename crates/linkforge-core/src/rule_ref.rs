//! Rule identification.
//!
//! Every constraint rule carries a [`RuleRef`] so a violation can name the
//! rule that rejected a linkage.

use std::fmt;
use std::str::FromStr;

use crate::error::LinkForgeError;

/// Reference to a constraint rule for identification.
///
/// # Example
///
/// ```
/// use linkforge_core::RuleRef;
///
/// let rr = RuleRef::new("clause", "NoCrossing");
/// assert_eq!(rr.full_name(), "clause/NoCrossing");
///
/// let simple: RuleRef = "Connected".parse().unwrap();
/// assert_eq!(simple.full_name(), "Connected");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleRef {
    /// Group the rule belongs to; may be empty.
    pub group: String,
    /// Name of the rule.
    pub name: String,
}

impl RuleRef {
    /// Creates a new rule reference.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Returns the fully qualified name.
    pub fn full_name(&self) -> String {
        if self.group.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.group, self.name)
        }
    }
}

impl fmt::Display for RuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}/{}", self.group, self.name)
        }
    }
}

impl FromStr for RuleRef {
    type Err = LinkForgeError;

    /// Parses `"group/name"` or a bare `"name"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (group, name) = s.rsplit_once('/').unwrap_or(("", s));
        if name.is_empty() {
            return Err(LinkForgeError::InvalidRuleRef(s.to_string()));
        }
        Ok(RuleRef::new(group, name))
    }
}
