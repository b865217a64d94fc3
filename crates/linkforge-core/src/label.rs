//! Interned link labels.
//!
//! A [`Label`] is a shared handle to label text owned by a [`LabelInterner`].
//! Interning the same text twice yields the same allocation, so equality
//! is usually decided by a pointer comparison.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock};

/// Canonical name of a link, as produced by label derivation.
#[derive(Clone)]
pub struct Label(Arc<str>);

impl Label {
    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if both handles point at the same interned entry.
    pub fn ptr_eq(a: &Label, b: &Label) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        Label::ptr_eq(self, other) || self.0 == other.0
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl Deref for Label {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({:?})", &*self.0)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Thread-safe label table with atomic intern-or-fetch.
///
/// Lookups take a read lock; a miss upgrades to a write lock and re-checks
/// before inserting, so concurrent callers interning the same text always
/// receive the same entry.
///
/// Pass it explicitly (usually as `Arc<LabelInterner>`); each grammar or
/// parse session may own its own table.
///
/// # Examples
///
/// ```
/// use linkforge_core::{Label, LabelInterner};
///
/// let interner = LabelInterner::new();
/// let a = interner.intern("Ss");
/// let b = interner.intern("Ss");
/// assert!(Label::ptr_eq(&a, &b));
/// assert_eq!(interner.len(), 1);
/// ```
#[derive(Default)]
pub struct LabelInterner {
    entries: RwLock<HashSet<Arc<str>>>,
}

impl LabelInterner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label for `text`, inserting it if absent.
    pub fn intern(&self, text: &str) -> Label {
        if let Some(existing) = self.get(text) {
            return existing;
        }

        // A poisoned lock still holds a consistent set: inserts are single calls.
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = entries.get(text) {
            return Label(Arc::clone(existing));
        }
        let entry: Arc<str> = Arc::from(text);
        entries.insert(Arc::clone(&entry));
        Label(entry)
    }

    /// Returns the label for `text` if it has been interned.
    pub fn get(&self, text: &str) -> Option<Label> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(text).map(|e| Label(Arc::clone(e)))
    }

    /// Returns true if `text` has been interned.
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// Returns the number of distinct labels.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no label has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates an Arc-wrapped version for sharing across threads.
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl fmt::Debug for LabelInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelInterner")
            .field("count", &self.len())
            .finish()
    }
}
