//! Label patterns used by domain starters and rules.
//!
//! A pattern's uppercase prefix must equal the label's uppercase prefix. After
//! that, each pattern character is either `*` (matches anything, including a
//! missing character) or must equal the label character at the same position,
//! where a missing label character counts as `*`. Label characters beyond the
//! end of the pattern are ignored, so `S` matches `Ss`, `Sp` and `Spx`.

use std::fmt;
use std::str::FromStr;

use linkforge_core::LinkForgeError;
use serde::{Deserialize, Serialize};

const WILDCARD: u8 = b'*';

/// A compiled label pattern.
///
/// # Examples
///
/// ```
/// use linkforge_postprocess::LabelPattern;
///
/// let p: LabelPattern = "S*b".parse().unwrap();
/// assert!(p.matches("Ssb"));
/// assert!(p.matches("Spbx"));
/// assert!(!p.matches("Ss"));
/// assert!(!p.matches("SF"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LabelPattern {
    text: String,
}

impl LabelPattern {
    /// Parses and validates a pattern.
    pub fn new(text: &str) -> Result<Self, LinkForgeError> {
        let invalid = |reason: &str| LinkForgeError::InvalidPattern {
            text: text.to_string(),
            reason: reason.to_string(),
        };

        let bytes = text.as_bytes();
        if !bytes.first().is_some_and(|c| c.is_ascii_uppercase()) {
            return Err(invalid("must start with an uppercase type tag"));
        }
        let tag_len = bytes
            .iter()
            .position(|c| !c.is_ascii_uppercase())
            .unwrap_or(bytes.len());
        if let Some(c) = text[tag_len..]
            .chars()
            .find(|&c| !(c.is_ascii_lowercase() || c == '*'))
        {
            return Err(invalid(&format!(
                "subtype character '{c}' is not lowercase or '*'"
            )));
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    /// Returns the pattern text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true if `label` matches this pattern.
    pub fn matches(&self, label: &str) -> bool {
        let (p, t) = (self.text.as_bytes(), label.as_bytes());

        let mut i = 0;
        loop {
            let p_upper = p.get(i).is_some_and(|c| c.is_ascii_uppercase());
            let t_upper = t.get(i).is_some_and(|c| c.is_ascii_uppercase());
            if !(p_upper || t_upper) {
                break;
            }
            if p.get(i) != t.get(i) {
                return false;
            }
            i += 1;
        }

        p[i..].iter().enumerate().all(|(offset, &pc)| {
            pc == WILDCARD || pc == t.get(i + offset).copied().unwrap_or(WILDCARD)
        })
    }
}

impl FromStr for LabelPattern {
    type Err = LinkForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelPattern::new(s.trim())
    }
}

impl TryFrom<String> for LabelPattern {
    type Error = LinkForgeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LabelPattern> for String {
    fn from(p: LabelPattern) -> String {
        p.text
    }
}

impl fmt::Display for LabelPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Returns true if any pattern in `patterns` matches `label`.
pub fn matches_any(patterns: &[LabelPattern], label: &str) -> bool {
    patterns.iter().any(|p| p.matches(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> LabelPattern {
        s.parse().unwrap()
    }

    #[test]
    fn test_tag_only_matches_all_subtypes() {
        let p = pattern("S");
        assert!(p.matches("S"));
        assert!(p.matches("Ss"));
        assert!(p.matches("Spx"));
    }

    #[test]
    fn test_tag_must_match_exactly() {
        let p = pattern("S");
        assert!(!p.matches("SF"));
        assert!(!p.matches("O"));
        assert!(!pattern("MV").matches("M"));
        assert!(!pattern("M").matches("MVp"));
    }

    #[test]
    fn test_subtype_positions() {
        let p = pattern("Ss");
        assert!(p.matches("Ss"));
        assert!(p.matches("Ssb"));
        assert!(!p.matches("Sp"));
        assert!(!p.matches("S"));
    }

    #[test]
    fn test_wildcards() {
        let p = pattern("S*b");
        assert!(p.matches("Ssb"));
        assert!(p.matches("S*b"));
        assert!(!p.matches("Ss"));
        assert!(pattern("S**").matches("S"));
    }

    #[test]
    fn test_invalid_patterns() {
        assert!("".parse::<LabelPattern>().is_err());
        assert!("s".parse::<LabelPattern>().is_err());
        assert!("S1".parse::<LabelPattern>().is_err());
        assert!("SsB".parse::<LabelPattern>().is_err());
    }

    #[test]
    fn test_matches_any() {
        let set = vec![pattern("Wd"), pattern("Ss")];
        assert!(matches_any(&set, "Wdc"));
        assert!(matches_any(&set, "Ss"));
        assert!(!matches_any(&set, "Sp"));
        assert!(!matches_any(&[], "Ss"));
    }
}
