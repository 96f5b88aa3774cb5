//! Section entity and title-prefix grammar.
//!
//! A numbered section's display title reads `"<numeral>. <title>"`. The
//! ordinal is stored on the section itself; the numeral in the title is
//! regenerated from it and only parsed when importing documents that predate
//! the stored ordinal.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::SectionKey;

use super::content_variant::ContentVariant;
use super::errors::ThesisError;
use super::roman::{self, SENTINEL_ORDINAL};

// Matches "IV. Market", capturing the numeral and the remaining title.
static TITLE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([IVXLC]+)\.\s*(.*)$").expect("valid regex"));

/// Splits `"IV. Market"` into `("IV", "Market")`.
///
/// Returns `None` when the title carries no numeral prefix.
pub fn split_title(title: &str) -> Option<(&str, &str)> {
    let captures = TITLE_PREFIX.captures(title)?;
    let numeral = captures.get(1)?.as_str();
    let rest = captures.get(2).map(|m| m.as_str()).unwrap_or("");
    Some((numeral, rest))
}

/// Parses the ordinal out of a display title.
///
/// - `Ok(None)` - the title has no numeral prefix (un-numbered section)
/// - `Ok(Some(n))` - the numeral is in the decode table
/// - `Err(MalformedTitle)` - prefixed, but the numeral is not recognized
pub fn parse_title_ordinal(title: &str) -> Result<Option<u32>, ThesisError> {
    match split_title(title) {
        None => Ok(None),
        Some((numeral, _)) => match roman::decode(numeral) {
            SENTINEL_ORDINAL => Err(ThesisError::MalformedTitle {
                title: title.to_string(),
            }),
            ordinal => Ok(Some(ordinal)),
        },
    }
}

/// Like [`parse_title_ordinal`], but malformed numerals resolve to the
/// sentinel ordinal so they sort last.
pub fn title_ordinal_or_sentinel(title: &str) -> Option<u32> {
    match parse_title_ordinal(title) {
        Ok(ordinal) => ordinal,
        Err(err) => {
            tracing::warn!(error = %err, "Unrecognized numeral in section title, sorting last");
            Some(SENTINEL_ORDINAL)
        }
    }
}

/// Builds `"<numeral>. <title>"`.
pub fn compose_title(ordinal: u32, title: &str) -> String {
    format!("{}. {}", roman::encode(ordinal), title)
}

/// One section of a thesis document.
///
/// # Invariants
///
/// - a numbered section's `display_title` starts with `encode(ordinal) + ". "`
///   whenever the ordinal was assigned through this type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    key: SectionKey,
    display_title: String,
    ordinal: Option<u32>,
    body: ContentVariant,
}

impl Section {
    /// Creates an un-numbered section.
    pub fn unnumbered(key: SectionKey, title: impl Into<String>, body: ContentVariant) -> Self {
        Self {
            key,
            display_title: title.into(),
            ordinal: None,
            body,
        }
    }

    /// Creates a numbered section; the display title gets the numeral prefix.
    pub fn numbered(key: SectionKey, ordinal: u32, title: &str, body: ContentVariant) -> Self {
        Self {
            key,
            display_title: compose_title(ordinal, title),
            ordinal: Some(ordinal),
            body,
        }
    }

    /// Rebuilds a section from a stored record that carries its ordinal.
    ///
    /// `None` means un-numbered; the title is taken as-is even if it looks
    /// like `"II. Appendix"`.
    pub fn restore(
        key: SectionKey,
        display_title: String,
        ordinal: Option<u32>,
        body: ContentVariant,
    ) -> Self {
        Self {
            key,
            display_title,
            ordinal,
            body,
        }
    }

    /// Rebuilds a section from a record written before ordinals were stored.
    ///
    /// The ordinal is parsed from the title prefix.
    pub fn from_legacy(key: SectionKey, display_title: String, body: ContentVariant) -> Self {
        let ordinal = title_ordinal_or_sentinel(&display_title);
        Self {
            key,
            display_title,
            ordinal,
            body,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn key(&self) -> &SectionKey {
        &self.key
    }

    /// Title as shown to readers, including any numeral prefix.
    pub fn display_title(&self) -> &str {
        &self.display_title
    }

    /// Title without the numeral prefix.
    pub fn bare_title(&self) -> &str {
        if self.ordinal.is_some() {
            if let Some((_, rest)) = split_title(&self.display_title) {
                return rest;
            }
        }
        &self.display_title
    }

    pub fn ordinal(&self) -> Option<u32> {
        self.ordinal
    }

    pub fn is_numbered(&self) -> bool {
        self.ordinal.is_some()
    }

    pub fn body(&self) -> &ContentVariant {
        &self.body
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Assigns a new ordinal and regenerates the numeral prefix.
    pub(crate) fn set_ordinal(&mut self, ordinal: u32) {
        let bare = self.bare_title().to_string();
        self.display_title = compose_title(ordinal, &bare);
        self.ordinal = Some(ordinal);
    }

    /// Replaces the title text, keeping the numeral prefix of numbered sections.
    pub(crate) fn rename(&mut self, title: &str) {
        self.display_title = match self.ordinal {
            Some(ordinal) => compose_title(ordinal, title),
            None => title.to_string(),
        };
    }

    /// Replaces the body, returning the previous one.
    pub(crate) fn replace_body(&mut self, body: ContentVariant) -> ContentVariant {
        std::mem::replace(&mut self.body, body)
    }
}
