//! ContentVariant - sum type for the six section body shapes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of a [`ContentVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    Simple,
    Observations,
    WinsFailures,
    TableIntro,
    Segments,
    SalesRealities,
}

impl VariantKind {
    /// All kinds, in declaration order.
    pub fn all() -> &'static [VariantKind] {
        &[
            VariantKind::Simple,
            VariantKind::Observations,
            VariantKind::WinsFailures,
            VariantKind::TableIntro,
            VariantKind::Segments,
            VariantKind::SalesRealities,
        ]
    }

    /// Returns the JSON tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::Simple => "simple",
            VariantKind::Observations => "observations",
            VariantKind::WinsFailures => "wins_failures",
            VariantKind::TableIntro => "table_intro",
            VariantKind::Segments => "segments",
            VariantKind::SalesRealities => "sales_realities",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Free-form prose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleBody {
    #[serde(default)]
    pub content: String,
}

/// One titled observation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Observation {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A list of titled observations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationsBody {
    #[serde(default)]
    pub items: Vec<Observation>,
}

/// Intro, what worked, what did not, and a conclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinsFailuresBody {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub wins: Vec<String>,
    #[serde(default)]
    pub failures: Vec<String>,
    #[serde(default)]
    pub conclusion: String,
}

/// A table row. Column layout depends on the section it appears in, so a row
/// is just its cells in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableRow(pub Vec<String>);

impl TableRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(cells.into_iter().map(Into::into).collect())
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

/// Intro, a table, and a conclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableIntroBody {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub table: Vec<TableRow>,
    #[serde(default)]
    pub conclusion: String,
}

/// A named market segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Segment {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Intro followed by market segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentsBody {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// Go-to-market realities: key points, sales timelines and buyer personas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRealitiesBody {
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub timelines: Vec<String>,
    #[serde(default)]
    pub buyer_personas: Vec<String>,
    #[serde(default)]
    pub conclusion: String,
}

/// Sum type for all section body shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentVariant {
    Simple(SimpleBody),
    Observations(ObservationsBody),
    WinsFailures(WinsFailuresBody),
    TableIntro(TableIntroBody),
    Segments(SegmentsBody),
    SalesRealities(SalesRealitiesBody),
}

impl ContentVariant {
    /// Creates an empty body of the given kind.
    pub fn empty(kind: VariantKind) -> Self {
        match kind {
            VariantKind::Simple => ContentVariant::Simple(SimpleBody::default()),
            VariantKind::Observations => ContentVariant::Observations(ObservationsBody::default()),
            VariantKind::WinsFailures => ContentVariant::WinsFailures(WinsFailuresBody::default()),
            VariantKind::TableIntro => ContentVariant::TableIntro(TableIntroBody::default()),
            VariantKind::Segments => ContentVariant::Segments(SegmentsBody::default()),
            VariantKind::SalesRealities => {
                ContentVariant::SalesRealities(SalesRealitiesBody::default())
            }
        }
    }

    /// Creates a simple body holding `content` verbatim.
    pub fn simple(content: impl Into<String>) -> Self {
        ContentVariant::Simple(SimpleBody {
            content: content.into(),
        })
    }

    /// Returns the variant kind.
    pub fn kind(&self) -> VariantKind {
        match self {
            ContentVariant::Simple(_) => VariantKind::Simple,
            ContentVariant::Observations(_) => VariantKind::Observations,
            ContentVariant::WinsFailures(_) => VariantKind::WinsFailures,
            ContentVariant::TableIntro(_) => VariantKind::TableIntro,
            ContentVariant::Segments(_) => VariantKind::Segments,
            ContentVariant::SalesRealities(_) => VariantKind::SalesRealities,
        }
    }

    /// Returns true if the body holds no text at all.
    pub fn is_blank(&self) -> bool {
        let blank = |s: &String| s.trim().is_empty();
        match self {
            ContentVariant::Simple(b) => blank(&b.content),
            ContentVariant::Observations(b) => b
                .items
                .iter()
                .all(|o| blank(&o.title) && blank(&o.content)),
            ContentVariant::WinsFailures(b) => {
                blank(&b.intro) && b.wins.is_empty() && b.failures.is_empty() && blank(&b.conclusion)
            }
            ContentVariant::TableIntro(b) => {
                blank(&b.intro) && b.table.is_empty() && blank(&b.conclusion)
            }
            ContentVariant::Segments(b) => blank(&b.intro) && b.segments.is_empty(),
            ContentVariant::SalesRealities(b) => {
                blank(&b.intro)
                    && b.key_points.is_empty()
                    && b.timelines.is_empty()
                    && b.buyer_personas.is_empty()
                    && blank(&b.conclusion)
            }
        }
    }

    /// Returns the simple body, if this is one.
    pub fn as_simple(&self) -> Option<&SimpleBody> {
        match self {
            ContentVariant::Simple(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the observations body, if this is one.
    pub fn as_observations(&self) -> Option<&ObservationsBody> {
        match self {
            ContentVariant::Observations(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the table body, if this is one.
    pub fn as_table_intro(&self) -> Option<&TableIntroBody> {
        match self {
            ContentVariant::TableIntro(b) => Some(b),
            _ => None,
        }
    }
}

impl Default for ContentVariant {
    fn default() -> Self {
        ContentVariant::empty(VariantKind::Simple)
    }
}
