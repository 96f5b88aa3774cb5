//! ThesisDocument aggregate - an industry thesis with its numbered sections.
//!
//! Scalar fields are replaced one at a time through [`DocumentUpdate`]; the
//! section map is always replaced as a whole.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DocumentId, SectionKey, Timestamp};

use super::codec::structured_to_text;
use super::content_variant::ContentVariant;
use super::errors::ThesisError;
use super::section::Section;
use super::section_registry::SectionRegistry;

/// Scaffold section keys.
pub const EXECUTIVE_SUMMARY_KEY: &str = "executiveSummary";
pub const CONCLUSION_KEY: &str = "conclusion";
pub const CONTACT_KEY: &str = "contact";
pub const SOURCES_KEY: &str = "sources";

/// Contact details of the thesis author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Contact {
    /// Renders the filled-in fields as `Label: value` lines.
    pub fn to_text(&self) -> String {
        [
            ("Name", &self.name),
            ("Title", &self.title),
            ("Company", &self.company),
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("Website", &self.website),
        ]
        .iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}: {}", label, v))
        })
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Everything needed to create a document.
#[derive(Debug, Clone)]
pub struct DocumentSeed {
    pub id: DocumentId,
    pub title: String,
    pub industry: String,
    pub subtitle: Option<String>,
    pub publish_date: Option<String>,
    pub read_time: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub contact: Option<Contact>,
    pub sources: Option<Vec<String>>,
}

impl DocumentSeed {
    pub fn new(id: DocumentId, title: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            industry: industry.into(),
            subtitle: None,
            publish_date: None,
            read_time: None,
            tags: None,
            category: None,
            featured: None,
            contact: None,
            sources: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_publish_date(mut self, publish_date: impl Into<String>) -> Self {
        self.publish_date = Some(publish_date.into());
        self
    }

    pub fn with_read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = Some(read_time.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = Some(sources);
        self
    }
}

/// A single top-level field replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentField {
    Title(String),
    Subtitle(Option<String>),
    Industry(String),
    PublishDate(Option<String>),
    ReadTime(Option<String>),
    Tags(Option<Vec<String>>),
    Category(Option<String>),
    Contact(Option<Contact>),
    Sources(Option<Vec<String>>),
}

impl DocumentField {
    /// JSON name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            DocumentField::Title(_) => "title",
            DocumentField::Subtitle(_) => "subtitle",
            DocumentField::Industry(_) => "industry",
            DocumentField::PublishDate(_) => "publishDate",
            DocumentField::ReadTime(_) => "readTime",
            DocumentField::Tags(_) => "tags",
            DocumentField::Category(_) => "category",
            DocumentField::Contact(_) => "contact",
            DocumentField::Sources(_) => "sources",
        }
    }
}

/// Partial update accepted by the document store: exactly one of a scalar
/// field, the entire section map, or the featured flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentUpdate {
    Field(DocumentField),
    Sections(SectionRegistry),
    Featured(bool),
}

impl DocumentUpdate {
    pub fn describe(&self) -> &'static str {
        match self {
            DocumentUpdate::Field(field) => field.name(),
            DocumentUpdate::Sections(_) => "sections",
            DocumentUpdate::Featured(_) => "featured",
        }
    }
}

/// One side-by-side comparison of a value stored twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualCopy {
    /// Text of the top-level field, if set.
    pub field_text: Option<String>,
    /// Text of the matching section body, if the section exists.
    pub section_text: Option<String>,
    pub diverged: bool,
}

impl DualCopy {
    fn compare(field_text: Option<String>, section_text: Option<String>) -> Self {
        let normalized = |t: &Option<String>| {
            t.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let diverged = normalized(&field_text) != normalized(&section_text);
        Self {
            field_text,
            section_text,
            diverged,
        }
    }
}

/// Contact and sources live both as top-level fields and as sections.
/// Neither copy is authoritative; this report lets the caller reconcile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualCopyReport {
    pub contact: DualCopy,
    pub sources: DualCopy,
}

impl DualCopyReport {
    pub fn any_diverged(&self) -> bool {
        self.contact.diverged || self.sources.diverged
    }
}

/// An industry thesis document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThesisDocument {
    id: DocumentId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(default)]
    industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    publish_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    read_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    featured: Option<bool>,
    #[serde(default)]
    sections: SectionRegistry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<Timestamp>,
}

impl ThesisDocument {
    /// Creates a document with the default scaffold:
    /// `I. Executive Summary`, `II. Conclusion`, `III. Contact`, `IV. Sources`.
    ///
    /// Contact and sources from the seed are written both to the top-level
    /// fields and into their sections.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is blank
    pub fn create(seed: DocumentSeed) -> Result<Self, ThesisError> {
        let title = non_blank("title", seed.title)?;

        let contact_text = seed.contact.as_ref().map(Contact::to_text).unwrap_or_default();
        let sources_text = seed
            .sources
            .as_ref()
            .map(|s| s.join("\n"))
            .unwrap_or_default();

        let scaffold = [
            (EXECUTIVE_SUMMARY_KEY, "Executive Summary", String::new()),
            (CONCLUSION_KEY, "Conclusion", String::new()),
            (CONTACT_KEY, "Contact", contact_text),
            (SOURCES_KEY, "Sources", sources_text),
        ];

        let mut sections = Vec::with_capacity(scaffold.len());
        for (ordinal, (key, section_title, content)) in scaffold.into_iter().enumerate() {
            sections.push(Section::numbered(
                SectionKey::new(key)?,
                ordinal as u32 + 1,
                section_title,
                ContentVariant::simple(content),
            ));
        }

        Ok(Self {
            id: seed.id,
            title,
            subtitle: seed.subtitle,
            industry: seed.industry,
            publish_date: seed.publish_date,
            read_time: seed.read_time,
            tags: seed.tags,
            category: seed.category,
            featured: seed.featured,
            sections: SectionRegistry::from_sections(sections)?,
            contact: seed.contact,
            sources: seed.sources,
            updated_at: None,
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn publish_date(&self) -> Option<&str> {
        self.publish_date.as_deref()
    }

    pub fn read_time(&self) -> Option<&str> {
        self.read_time.as_deref()
    }

    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Featured flag; absent means not featured.
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    pub fn section(&self, key: &SectionKey) -> Option<&Section> {
        self.sections.get(key)
    }

    pub fn contact(&self) -> Option<&Contact> {
        self.contact.as_ref()
    }

    pub fn sources(&self) -> Option<&[String]> {
        self.sources.as_deref()
    }

    pub fn updated_at(&self) -> Option<&Timestamp> {
        self.updated_at.as_ref()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Updates
    // ═══════════════════════════════════════════════════════════════════════

    /// Applies one partial update.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title or industry would become blank
    pub fn apply_update(&mut self, update: DocumentUpdate) -> Result<(), ThesisError> {
        match update {
            DocumentUpdate::Sections(sections) => self.sections = sections,
            DocumentUpdate::Featured(featured) => self.featured = Some(featured),
            DocumentUpdate::Field(field) => self.apply_field(field)?,
        }
        Ok(())
    }

    fn apply_field(&mut self, field: DocumentField) -> Result<(), ThesisError> {
        match field {
            DocumentField::Title(title) => self.title = non_blank("title", title)?,
            DocumentField::Industry(industry) => self.industry = non_blank("industry", industry)?,
            DocumentField::Subtitle(v) => self.subtitle = v,
            DocumentField::PublishDate(v) => self.publish_date = v,
            DocumentField::ReadTime(v) => self.read_time = v,
            DocumentField::Tags(v) => self.tags = v,
            DocumentField::Category(v) => self.category = v,
            DocumentField::Contact(v) => self.contact = v,
            DocumentField::Sources(v) => self.sources = v,
        }
        Ok(())
    }

    /// Stamps the last write time. Set by stores.
    pub(crate) fn touch(&mut self, at: Timestamp) {
        self.updated_at = Some(at);
    }

    /// Compares the top-level contact/sources against their sections.
    pub fn dual_copy_report(&self) -> DualCopyReport {
        DualCopyReport {
            contact: DualCopy::compare(
                self.contact.as_ref().map(Contact::to_text),
                self.copy_section_text(CONTACT_KEY, "Contact"),
            ),
            sources: DualCopy::compare(
                self.sources.as_ref().map(|s| s.join("\n")),
                self.copy_section_text(SOURCES_KEY, "Sources"),
            ),
        }
    }

    fn copy_section_text(&self, key: &str, title: &str) -> Option<String> {
        let by_key = SectionKey::new(key).ok().and_then(|k| self.sections.get(&k));
        by_key
            .or_else(|| self.sections.find_by_bare_title(title))
            .map(|s| structured_to_text(s.body()))
    }
}

fn non_blank(field: &str, value: String) -> Result<String, ThesisError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ThesisError::validation(
            field,
            format!("Document {} cannot be empty", field),
        ));
    }
    Ok(trimmed.to_string())
}
