//! # Markup Lexer Core
//!
//! Buffer-window and interned-name primitives for streaming markup
//! tokenizers.
//!
//! ## Overview
//!
//! A streaming tokenizer receives decoded input as caller-owned
//! character chunks and consumes them incrementally, character by
//! character, without copying. When it recognizes a complete tag or
//! attribute name it canonicalizes the raw character range into a
//! deduplicated handle so that every later comparison is a pointer
//! check rather than a character loop. This crate provides exactly
//! those two pieces:
//!
//! - [`BufferWindow`]: a non-owning `(offset, length)` cursor over a
//!   borrowed character slice, mutated in place as input is consumed.
//! - [`names`]: ASCII-only case-insensitive comparison and
//!   lowercasing, plus [`LocalName`] canonical names interned through
//!   a caller-owned [`NameInterner`].
//!
//! The tokenizer state machine itself, the input decoder, and the
//! downstream tree construction live elsewhere; this crate only
//! defines the per-call contracts they share.
//!
//! ## Consuming a chunk
//!
//! ```rust
//! use markup_lexer_core::BufferWindow;
//!
//! let chunk: Vec<char> = "<p>hi</p>".chars().collect();
//! let mut window = BufferWindow::new(&chunk, 0, chunk.len());
//!
//! // Consume the first three characters.
//! let consumed: String = window.buffer()[window.offset()..window.offset() + 3]
//!     .iter()
//!     .collect();
//! window.set_offset(window.offset() + 3);
//! window.set_length(window.length() - 3);
//!
//! assert_eq!(consumed, "<p>");
//! assert_eq!(window.length(), chunk.len() - 3);
//! ```
//!
//! ## Canonicalizing names
//!
//! ```rust
//! use markup_lexer_core::{LocalName, NameInterner, names};
//!
//! let mut interner = NameInterner::new();
//!
//! let upper: Vec<char> = "DIV".chars().collect();
//! let lower: Vec<char> = "div".chars().collect();
//!
//! let a = names::name_from_buffer(&mut interner, &upper, 0, 3);
//! let b = names::name_from_buffer(&mut interner, &lower, 0, 3);
//!
//! // One instance for every ASCII-case spelling: comparison is O(1).
//! assert!(LocalName::identical(&a, &b));
//! assert_eq!(a.as_str(), "div");
//! ```
//!
//! ## Case folding is ASCII-only
//!
//! Markup case-insensitivity is defined by a fixed table: `'A'..='Z'`
//! fold to `'a'..='z'` and nothing else changes. Locale-sensitive or
//! full-Unicode folding would be incorrect here, so none is used:
//!
//! ```rust
//! use markup_lexer_core::names::equals_ignore_ascii_case;
//!
//! assert!(equals_ignore_ascii_case(Some("DIV"), Some("diV")));
//! assert!(!equals_ignore_ascii_case(Some("naïve"), Some("NAÏVE")));
//! ```
//!
//! ## Bounds contract
//!
//! The hot-path API is unchecked: `offset`/`length` arguments are
//! documented preconditions, asserted in debug builds and left to
//! ordinary slice bounds panics in release builds. `try_`-prefixed
//! variants ([`BufferWindow::try_new`],
//! [`names::try_name_from_buffer`]) validate eagerly and report
//! [`RangeError`] for callers that want hard validation at the chunk
//! boundary.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`LocalName`] as its
//!   string content (deserialized names are not interned).

pub mod buffer;
pub mod error;
pub mod names;

// Re-export main types and functions
pub use buffer::BufferWindow;
pub use error::RangeError;
pub use names::{
    InternTable, LocalName, NameBuf, NameInterner, equals_ignore_ascii_case, name_from_buffer,
    name_to_char_array, raw_equals, to_ascii_lower_case,
};
