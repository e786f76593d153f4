//! ASCII case utilities and canonical (interned) names
//!
//! Markup languages fold tag and attribute names with fixed ASCII rules:
//! `'A'..='Z'` map to `'a'..='z'` by adding 0x20 and every other
//! character is left alone, regardless of locale or Unicode case
//! mappings. This module provides that folding as comparison and
//! lowercasing helpers, plus [`LocalName`], a canonical deduplicated
//! name handle: all content-equal names drawn from the same
//! [`NameInterner`] share one allocation, so downstream dispatch can
//! compare names by pointer identity instead of character by character.
//!
//! Absent strings are modeled as `Option<&str>`; `None` compares equal
//! only to `None`.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexSet;
use smallvec::SmallVec;

use crate::error::RangeError;

/// Fresh character sequence projected out of a [`LocalName`].
///
/// Markup names are almost always short; up to eight characters live
/// inline without touching the heap.
pub type NameBuf = SmallVec<[char; 8]>;

/// Returns true iff `one` and `other` are equal after folding ASCII
/// uppercase letters to lowercase on both sides.
///
/// `None` is equal to `None` and unequal to every concrete string.
/// Non-ASCII characters are compared by raw scalar value; no locale or
/// Unicode case mapping is consulted. Performs no allocation.
pub fn equals_ignore_ascii_case(one: Option<&str>, other: Option<&str>) -> bool {
    match (one, other) {
        (None, None) => true,
        (Some(one), Some(other)) => {
            // Folding never changes byte length, so unequal byte lengths
            // cannot fold equal.
            one.len() == other.len()
                && one
                    .chars()
                    .map(|c| c.to_ascii_lowercase())
                    .eq(other.chars().map(|c| c.to_ascii_lowercase()))
        }
        _ => false,
    }
}

/// Returns a freshly allocated copy of `s` with ASCII uppercase letters
/// folded to lowercase, or `None` for an absent input.
///
/// The result is a new allocation even when no character changed;
/// callers may rely on receiving a distinct instance.
pub fn to_ascii_lower_case(s: Option<&str>) -> Option<String> {
    s.map(str::to_ascii_lowercase)
}

/// Builds a plain (non-interned) string from `buf[0..length)`.
pub fn string_from_buffer(buf: &[char], length: usize) -> String {
    buf[..length].iter().collect()
}

/// Returns true iff `literal` equals `s` after folding ASCII uppercase
/// letters in `s` only.
///
/// `literal` must already be lowercase; it is compared verbatim.
/// Absent `s` never matches.
pub fn lower_case_literal_equals_ignore_ascii_case(literal: &str, s: Option<&str>) -> bool {
    match s {
        None => false,
        Some(s) => {
            literal.len() == s.len()
                && literal.chars().eq(s.chars().map(|c| c.to_ascii_lowercase()))
        }
    }
}

/// Returns true iff `literal` is a prefix of `s` after folding ASCII
/// uppercase letters in `s` only.
///
/// `literal` must already be lowercase. Absent `s` never matches.
pub fn lower_case_literal_is_prefix_of_ignore_ascii_case(literal: &str, s: Option<&str>) -> bool {
    let Some(s) = s else {
        return false;
    };
    if literal.len() > s.len() {
        return false;
    }
    let mut rest = s.chars();
    for expected in literal.chars() {
        match rest.next() {
            Some(c) if c.to_ascii_lowercase() == expected => {}
            _ => return false,
        }
    }
    true
}

/// A canonical, immutable markup name.
///
/// The content is the ASCII-lowercased form of the source range it was
/// interned from. Within one [`InternTable`], content-equal names share
/// a single allocation, so [`LocalName::identical`] is a sound O(1)
/// stand-in for content equality.
///
/// Cloning a `LocalName` is a reference-count bump and preserves
/// identity.
#[derive(Clone)]
pub struct LocalName(Arc<str>);

impl LocalName {
    /// Returns the canonical content.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of characters in the name.
    ///
    /// Counted in Unicode scalars to match the character-buffer indexing
    /// used throughout this crate, not in bytes.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if the name is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the characters of the canonical content.
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }

    /// Returns true iff `a` and `b` are the same interned instance.
    ///
    /// For two names obtained from the same table this is equivalent to
    /// content equality; for names from different tables (or built by
    /// deserialization) it may return false for equal content, and
    /// callers should fall back to [`PartialEq`].
    #[inline(always)]
    pub fn identical(a: &LocalName, b: &LocalName) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for LocalName {
    fn eq(&self, other: &Self) -> bool {
        // Identity first: interned names from one table hit this arm.
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for LocalName {}

impl Hash for LocalName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for LocalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalName").field(&&*self.0).finish()
    }
}

impl fmt::Display for LocalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocalName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LocalName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Deserialized names carry the string content only; they are **not**
/// interned and compare by content, not identity, until re-interned via
/// [`InternTable::lookup_or_insert`].
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LocalName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let content: String = serde::Deserialize::deserialize(deserializer)?;
        Ok(LocalName(Arc::from(content.as_str())))
    }
}

/// The lookup-or-insert capability behind [`name_from_buffer`].
///
/// Injected rather than global so the canonicalization core stays
/// testable and so callers control the table's lifetime: per parse run,
/// per session, or process-wide behind external synchronization.
/// Implementations must be idempotent on content: equal `canonical`
/// input must always yield the identical [`LocalName`] instance.
pub trait InternTable {
    /// Returns the canonical instance for `canonical`, inserting it on
    /// first sight. `canonical` is expected to already be in canonical
    /// (ASCII-lowercased) form.
    fn lookup_or_insert(&mut self, canonical: &str) -> LocalName;
}

/// Deduplicating name table with deterministic (insertion) order.
///
/// Requires `&mut` access; a table shared across concurrently running
/// tokenizers needs external synchronization.
#[derive(Debug, Default)]
pub struct NameInterner {
    table: IndexSet<Arc<str>>,
}

impl NameInterner {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            table: IndexSet::new(),
        }
    }

    /// Returns the number of distinct names interned so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no name has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterates the interned names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = LocalName> + '_ {
        self.table.iter().map(|name| LocalName(Arc::clone(name)))
    }
}

impl InternTable for NameInterner {
    fn lookup_or_insert(&mut self, canonical: &str) -> LocalName {
        if let Some(existing) = self.table.get(canonical) {
            return LocalName(Arc::clone(existing));
        }
        let name: Arc<str> = Arc::from(canonical);
        self.table.insert(Arc::clone(&name));
        LocalName(name)
    }
}

/// Canonicalizes `buf[offset..offset + length)` into an interned
/// [`LocalName`].
///
/// ASCII uppercase letters are folded to lowercase on the way in, so
/// ranges spelling `DIV`, `Div`, and `div` all yield the identical
/// instance from a given table, whatever buffer or offset they came
/// from.
///
/// Out-of-range `offset`/`length` is a documented caller precondition,
/// not a reported error; see [`try_name_from_buffer`] for the eagerly
/// validated variant.
pub fn name_from_buffer(
    table: &mut dyn InternTable,
    buf: &[char],
    offset: usize,
    length: usize,
) -> LocalName {
    let canonical: String = buf[offset..offset + length]
        .iter()
        .map(|c| c.to_ascii_lowercase())
        .collect();
    table.lookup_or_insert(&canonical)
}

/// Checked variant of [`name_from_buffer`]: validates the range against
/// `buf` before reading it.
pub fn try_name_from_buffer(
    table: &mut dyn InternTable,
    buf: &[char],
    offset: usize,
    length: usize,
) -> Result<LocalName, RangeError> {
    RangeError::check(offset, length, buf.len())?;
    Ok(name_from_buffer(table, buf, offset, length))
}

/// Projects a canonical name back into a fresh raw character sequence.
///
/// Interning the result reproduces the identical instance:
/// `name_from_buffer(table, &name_to_char_array(&n), 0, n.len())` is
/// identity-equal to `n` for any `n` drawn from `table`.
pub fn name_to_char_array(name: &LocalName) -> NameBuf {
    name.chars().collect()
}

/// Returns true iff `name`'s content equals `buf[offset..offset +
/// length)` exactly, with no case folding.
///
/// The length gate runs first: a count mismatch returns false before
/// any character is compared. No interning-table access takes place, so
/// this is the cheap way to re-validate a held canonical name against
/// raw input on the hot path.
pub fn raw_equals(name: &LocalName, buf: &[char], offset: usize, length: usize) -> bool {
    name.len() == length && name.chars().eq(buf[offset..offset + length].iter().copied())
}
