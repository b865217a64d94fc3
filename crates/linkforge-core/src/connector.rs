//! Connectors: typed, directional link endpoints.
//!
//! A connector is written the way grammars write it: an uppercase type tag,
//! an optional subtype sequence of lowercase letters or `*` wildcards, and a
//! direction suffix (`+` links to a word on the right, `-` to a word on the
//! left). For example `Ss*b+` has tag `S`, subtypes `s*b` and points right.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{LinkForgeError, Result};

/// Wildcard subtype character; matches any subtype at the same position.
pub const WILDCARD: char = '*';

/// Side of its word a connector attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Links to a word on the left (`-`).
    Left,
    /// Links to a word on the right (`+`).
    Right,
}

impl Direction {
    /// Returns the grammar suffix character for this direction.
    pub const fn suffix(self) -> char {
        match self {
            Direction::Left => '-',
            Direction::Right => '+',
        }
    }

    /// Returns the opposite direction.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A typed endpoint descriptor.
///
/// # Examples
///
/// ```
/// use linkforge_core::{Connector, Direction};
///
/// let c: Connector = "Ss*b+".parse().unwrap();
/// assert_eq!(c.tag(), "S");
/// assert_eq!(c.subtypes(), &['s', '*', 'b']);
/// assert_eq!(c.direction(), Direction::Right);
/// assert_eq!(c.to_string(), "Ss*b+");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connector {
    tag: String,
    subtypes: SmallVec<[char; 6]>,
    direction: Direction,
}

impl Connector {
    /// Creates a connector, validating the tag and subtypes.
    ///
    /// The tag must be non-empty ASCII uppercase. Subtypes must be ASCII
    /// lowercase letters or `*`.
    pub fn new(tag: &str, subtypes: &str, direction: Direction) -> Result<Self> {
        let text = format!("{}{}{}", tag, subtypes, direction.suffix());
        if tag.is_empty() {
            return Err(invalid(&text, "type tag is empty"));
        }
        if let Some(c) = tag.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(invalid(&text, &format!("type tag character '{c}' is not uppercase")));
        }
        if let Some(c) = subtypes
            .chars()
            .find(|&c| !(c.is_ascii_lowercase() || c == WILDCARD))
        {
            return Err(invalid(&text, &format!("subtype character '{c}' is not lowercase or '*'")));
        }
        Ok(Self {
            tag: tag.to_string(),
            subtypes: subtypes.chars().collect(),
            direction,
        })
    }

    /// Returns the uppercase type tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the ordered subtype sequence.
    pub fn subtypes(&self) -> &[char] {
        &self.subtypes
    }

    /// Returns the attachment direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

fn invalid(text: &str, reason: &str) -> LinkForgeError {
    LinkForgeError::InvalidConnector {
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for Connector {
    type Err = LinkForgeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let direction = match s.chars().last() {
            Some('+') => Direction::Right,
            Some('-') => Direction::Left,
            _ => return Err(invalid(s, "missing direction suffix '+' or '-'")),
        };
        let body = &s[..s.len() - 1];
        let split = body
            .find(|c: char| !c.is_ascii_uppercase())
            .unwrap_or(body.len());
        let (tag, subtypes) = body.split_at(split);
        Connector::new(tag, subtypes, direction)
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)?;
        for c in &self.subtypes {
            write!(f, "{c}")?;
        }
        write!(f, "{}", self.direction.suffix())
    }
}
