//! Industry thesis documents and their numbered sections.
//!
//! - `roman` - ordinal display numerals
//! - `content_variant` - the six section body shapes
//! - `codec` - body to editable text and back
//! - `section` / `section_registry` - ordered, auto-numbered sections
//! - `document` - the document aggregate and its partial updates

mod codec;
mod content_variant;
mod document;
mod errors;
mod key_generator;
pub mod roman;
mod section;
mod section_registry;

pub use codec::{
    apply_edit, codec_for, structured_to_text, text_to_structured, EditOutcome, SectionCodec,
};
pub use content_variant::{
    ContentVariant, Observation, ObservationsBody, SalesRealitiesBody, Segment, SegmentsBody,
    SimpleBody, TableIntroBody, TableRow, VariantKind, WinsFailuresBody,
};
pub use document::{
    Contact, DocumentField, DocumentSeed, DocumentUpdate, DualCopy, DualCopyReport, ThesisDocument,
    CONCLUSION_KEY, CONTACT_KEY, EXECUTIVE_SUMMARY_KEY, SOURCES_KEY,
};
pub use errors::ThesisError;
pub use key_generator::{RandomKeyGenerator, SectionKeyGenerator, DEFAULT_KEY_ATTEMPTS};
pub use section::{compose_title, parse_title_ordinal, split_title, Section};
pub use section_registry::SectionRegistry;
