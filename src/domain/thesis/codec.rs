//! Section body codecs - structured body ↔ editable text.
//!
//! Every body shape can be flattened to text. Only `Simple` and
//! `Observations` can be read back; saving edited text for any other shape
//! replaces the body with `Simple { content: text }` and the structured
//! sub-fields are gone. Callers get a [`EditOutcome::lossy`] flag so they can
//! warn about it, but the replacement itself is the persistence contract.
//!
//! Each shape sits behind its own [`SectionCodec`] so a reverse parser for a
//! structured shape can be added here without touching the registry.

use super::content_variant::{
    ContentVariant, Observation, ObservationsBody, SalesRealitiesBody, SegmentsBody, SimpleBody,
    TableIntroBody, VariantKind, WinsFailuresBody,
};

const BULLET: &str = "• ";
const CELL_SEPARATOR: &str = " | ";

/// Per-shape translation between a structured body and editable text.
pub trait SectionCodec: Send + Sync {
    /// The shape this codec handles.
    fn kind(&self) -> VariantKind;

    /// Flattens a body to human-editable text.
    fn encode(&self, body: &ContentVariant) -> String;

    /// Parses edited text back into this shape.
    ///
    /// Returns `None` when the shape has no reverse parser.
    fn decode(&self, _text: &str) -> Option<ContentVariant> {
        None
    }

    /// Returns true if `decode` is implemented for this shape.
    fn can_decode(&self) -> bool {
        false
    }
}

/// Result of applying edited text to a section body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The body to persist.
    pub body: ContentVariant,
    /// The structured shape that was replaced by plain text, if any.
    pub discarded: Option<VariantKind>,
}

impl EditOutcome {
    /// True when structured sub-fields were dropped.
    pub fn lossy(&self) -> bool {
        self.discarded.is_some()
    }
}

/// Returns the codec for a shape.
pub fn codec_for(kind: VariantKind) -> &'static dyn SectionCodec {
    match kind {
        VariantKind::Simple => &SimpleCodec,
        VariantKind::Observations => &ObservationsCodec,
        VariantKind::WinsFailures => &WinsFailuresCodec,
        VariantKind::TableIntro => &TableIntroCodec,
        VariantKind::Segments => &SegmentsCodec,
        VariantKind::SalesRealities => &SalesRealitiesCodec,
    }
}

/// Flattens any body to editable text.
pub fn structured_to_text(body: &ContentVariant) -> String {
    codec_for(body.kind()).encode(body)
}

/// Parses text into the given shape, if that shape has a reverse parser.
pub fn text_to_structured(kind: VariantKind, text: &str) -> Option<ContentVariant> {
    codec_for(kind).decode(text)
}

/// Applies edited text to a section whose current body is `current`.
///
/// Shapes without a reverse parser fall back to `Simple` holding the raw text.
pub fn apply_edit(current: &ContentVariant, text: &str) -> EditOutcome {
    let kind = current.kind();
    match text_to_structured(kind, text) {
        Some(body) => EditOutcome {
            body,
            discarded: None,
        },
        None => EditOutcome {
            body: ContentVariant::simple(text),
            discarded: Some(kind),
        },
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Text helpers
// ════════════════════════════════════════════════════════════════════════════════

/// Joins non-blank blocks with a blank line.
fn join_blocks<I>(blocks: I) -> String
where
    I: IntoIterator<Item = String>,
{
    blocks
        .into_iter()
        .filter(|b| !b.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders `"Label:\n• a\n• b"`, or nothing for an empty list.
fn bullet_block(label: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = format!("{}:", label);
    for item in items {
        out.push('\n');
        out.push_str(BULLET);
        out.push_str(item);
    }
    out
}

/// Renders `"Label:\nline\nline"`, or nothing when there are no lines.
fn labeled_lines(label: &str, lines: Vec<String>) -> String {
    if lines.is_empty() {
        return String::new();
    }
    format!("{}:\n{}", label, lines.join("\n"))
}

/// Splits text into paragraphs separated by one or more blank lines.
fn paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n").trim().to_string());
    }
    out
}

// ════════════════════════════════════════════════════════════════════════════════
// Codecs
// ════════════════════════════════════════════════════════════════════════════════

/// Verbatim text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCodec;

impl SectionCodec for SimpleCodec {
    fn kind(&self) -> VariantKind {
        VariantKind::Simple
    }

    fn encode(&self, body: &ContentVariant) -> String {
        match body {
            ContentVariant::Simple(SimpleBody { content }) => content.clone(),
            other => structured_to_text(other),
        }
    }

    fn decode(&self, text: &str) -> Option<ContentVariant> {
        Some(ContentVariant::simple(text))
    }

    fn can_decode(&self) -> bool {
        true
    }
}

/// Title paragraphs followed by their content paragraphs.
///
/// On decode a paragraph containing a period is a title and opens a new
/// entry; other paragraphs are appended to the open entry's content.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObservationsCodec;

impl SectionCodec for ObservationsCodec {
    fn kind(&self) -> VariantKind {
        VariantKind::Observations
    }

    fn encode(&self, body: &ContentVariant) -> String {
        match body {
            ContentVariant::Observations(ObservationsBody { items }) => {
                join_blocks(items.iter().flat_map(|item| {
                    [item.title.clone(), item.content.clone()]
                }))
            }
            other => structured_to_text(other),
        }
    }

    fn decode(&self, text: &str) -> Option<ContentVariant> {
        let mut items: Vec<Observation> = Vec::new();

        for paragraph in paragraphs(text) {
            if paragraph.contains('.') {
                items.push(Observation::new(paragraph, ""));
                continue;
            }
            match items.last_mut() {
                Some(open) if open.content.is_empty() => open.content = paragraph,
                Some(open) => {
                    open.content.push_str("\n\n");
                    open.content.push_str(&paragraph);
                }
                // Text before the first title is kept under an untitled entry.
                None => items.push(Observation::new("", paragraph)),
            }
        }

        Some(ContentVariant::Observations(ObservationsBody { items }))
    }

    fn can_decode(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WinsFailuresCodec;

impl SectionCodec for WinsFailuresCodec {
    fn kind(&self) -> VariantKind {
        VariantKind::WinsFailures
    }

    fn encode(&self, body: &ContentVariant) -> String {
        match body {
            ContentVariant::WinsFailures(WinsFailuresBody {
                intro,
                wins,
                failures,
                conclusion,
            }) => join_blocks([
                intro.clone(),
                bullet_block("Wins", wins),
                bullet_block("Failures", failures),
                conclusion.clone(),
            ]),
            other => structured_to_text(other),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableIntroCodec;

impl SectionCodec for TableIntroCodec {
    fn kind(&self) -> VariantKind {
        VariantKind::TableIntro
    }

    fn encode(&self, body: &ContentVariant) -> String {
        match body {
            ContentVariant::TableIntro(TableIntroBody {
                intro,
                table,
                conclusion,
            }) => {
                let rows = table
                    .iter()
                    .map(|row| row.cells().join(CELL_SEPARATOR))
                    .collect();
                join_blocks([
                    intro.clone(),
                    labeled_lines("Table", rows),
                    conclusion.clone(),
                ])
            }
            other => structured_to_text(other),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentsCodec;

impl SectionCodec for SegmentsCodec {
    fn kind(&self) -> VariantKind {
        VariantKind::Segments
    }

    fn encode(&self, body: &ContentVariant) -> String {
        match body {
            ContentVariant::Segments(SegmentsBody { intro, segments }) => {
                let lines = segments
                    .iter()
                    .map(|s| format!("{}: {}", s.name, s.description))
                    .collect();
                join_blocks([intro.clone(), labeled_lines("Segments", lines)])
            }
            other => structured_to_text(other),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SalesRealitiesCodec;

impl SectionCodec for SalesRealitiesCodec {
    fn kind(&self) -> VariantKind {
        VariantKind::SalesRealities
    }

    fn encode(&self, body: &ContentVariant) -> String {
        match body {
            ContentVariant::SalesRealities(SalesRealitiesBody {
                intro,
                key_points,
                timelines,
                buyer_personas,
                conclusion,
            }) => join_blocks([
                intro.clone(),
                bullet_block("Key Points", key_points),
                bullet_block("Timelines", timelines),
                bullet_block("Buyer Personas", buyer_personas),
                conclusion.clone(),
            ]),
            other => structured_to_text(other),
        }
    }
}
