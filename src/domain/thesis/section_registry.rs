//! SectionRegistry - the ordered section map of one thesis document.
//!
//! Owns insertion at a position and deletion with renumbering. Among numbered
//! sections, ordinals are contiguous from 1 after every mutation made here.
//! Un-numbered sections keep their place in the map and are never renumbered.
//!
//! Serialized as a JSON object keyed by section key, in map order.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::SectionKey;

use super::content_variant::ContentVariant;
use super::errors::ThesisError;
use super::key_generator::SectionKeyGenerator;
use super::roman::SENTINEL_ORDINAL;
use super::section::Section;

/// Ordered collection of sections keyed by [`SectionKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    // ════════════════════════════════════════════════════════════════════════════════
    // Construction
    // ════════════════════════════════════════════════════════════════════════════════

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from sections in map order.
    ///
    /// # Errors
    ///
    /// - `KeyConflict` if two sections share a key
    pub fn from_sections(sections: Vec<Section>) -> Result<Self, ThesisError> {
        let mut registry = Self::new();
        for section in sections {
            registry.push(section)?;
        }
        Ok(registry)
    }

    /// Appends a section at the end of the map without renumbering.
    ///
    /// # Errors
    ///
    /// - `KeyConflict` if the key is already present
    pub fn push(&mut self, section: Section) -> Result<(), ThesisError> {
        if self.contains_key(section.key()) {
            return Err(ThesisError::KeyConflict(section.key().clone()));
        }
        self.sections.push(section);
        Ok(())
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Queries
    // ════════════════════════════════════════════════════════════════════════════════

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in map order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn get(&self, key: &SectionKey) -> Option<&Section> {
        self.sections.iter().find(|s| s.key() == key)
    }

    pub fn contains_key(&self, key: &SectionKey) -> bool {
        self.get(key).is_some()
    }

    /// Display titles in map order.
    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.display_title()).collect()
    }

    /// Numbered sections sorted by ordinal; ties keep map order.
    pub fn numbered(&self) -> Vec<&Section> {
        self.numbered_indices()
            .into_iter()
            .map(|idx| &self.sections[idx])
            .collect()
    }

    /// Ordinals of numbered sections, ascending.
    pub fn ordinals(&self) -> Vec<u32> {
        self.numbered()
            .iter()
            .filter_map(|s| s.ordinal())
            .collect()
    }

    /// True when numbered ordinals are exactly `1..=n`.
    pub fn is_contiguous(&self) -> bool {
        self.ordinals()
            .iter()
            .enumerate()
            .all(|(idx, ordinal)| *ordinal == idx as u32 + 1)
    }

    /// Finds the first section whose title (without numeral) matches, ignoring case.
    pub fn find_by_bare_title(&self, title: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.bare_title().trim().eq_ignore_ascii_case(title))
    }

    fn position_of(&self, key: &SectionKey) -> Option<usize> {
        self.sections.iter().position(|s| s.key() == key)
    }

    fn numbered_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_numbered())
            .map(|(idx, _)| idx)
            .collect();
        indices.sort_by_key(|&idx| (self.sections[idx].ordinal().unwrap_or(SENTINEL_ORDINAL), idx));
        indices
    }

    // ════════════════════════════════════════════════════════════════════════════════
    // Mutations
    // ════════════════════════════════════════════════════════════════════════════════

    /// Inserts a new, empty numbered section at `requested_position`.
    ///
    /// Positions past the end clamp to "append". Sections at or after the
    /// insertion point shift down by one and get their numeral regenerated.
    /// The new section is placed in the map just before the section it
    /// displaced, or at the end when appending.
    ///
    /// Positions are ranks among numbered sections, and the append position
    /// is their count plus one. Every numbered section is reassigned from its
    /// rank, so a legacy map with gaps or [`SENTINEL_ORDINAL`] entries comes
    /// out contiguous instead of having each stored ordinal bumped by one.
    ///
    /// # Errors
    ///
    /// - `InvalidPosition` if `requested_position < 1`
    /// - `ValidationFailed` if `title` is blank
    /// - `DuplicateKey` if no unused key was produced within the retry budget
    pub fn insert_at(
        &mut self,
        requested_position: i64,
        title: &str,
        keys: &dyn SectionKeyGenerator,
    ) -> Result<SectionKey, ThesisError> {
        if requested_position < 1 {
            return Err(ThesisError::InvalidPosition {
                requested: requested_position,
            });
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(ThesisError::validation("title", "Section title cannot be empty"));
        }

        let key = self.unused_key(keys)?;

        let order = self.numbered_indices();
        let current_max = order.len() as i64;
        let position = requested_position.min(current_max + 1) as u32;

        let insert_idx = order
            .get(position as usize - 1)
            .copied()
            .unwrap_or(self.sections.len());

        for (rank, &idx) in order.iter().enumerate() {
            let rank = rank as u32 + 1;
            let target = if rank >= position { rank + 1 } else { rank };
            self.sections[idx].set_ordinal(target);
        }

        self.sections.insert(
            insert_idx,
            Section::numbered(key.clone(), position, title, ContentVariant::default()),
        );

        Ok(key)
    }

    /// Removes a section and renumbers the remaining numbered sections from 1.
    ///
    /// # Errors
    ///
    /// - `SectionNotFound` if the key is absent
    pub fn remove_by_key(&mut self, key: &SectionKey) -> Result<Section, ThesisError> {
        let idx = self
            .position_of(key)
            .ok_or_else(|| ThesisError::SectionNotFound(key.clone()))?;

        let removed = self.sections.remove(idx);
        self.renumber();
        Ok(removed)
    }

    /// Reassigns ordinals `1..=n` to numbered sections in their current order.
    ///
    /// Returns how many display titles changed.
    pub fn renumber(&mut self) -> usize {
        let mut changed = 0;
        for (rank, idx) in self.numbered_indices().into_iter().enumerate() {
            let section = &mut self.sections[idx];
            let before = section.display_title().to_string();
            section.set_ordinal(rank as u32 + 1);
            if section.display_title() != before {
                changed += 1;
            }
        }
        changed
    }

    /// Replaces a section's title text, keeping its numeral prefix.
    ///
    /// Returns the previous display title.
    pub fn rename(&mut self, key: &SectionKey, title: &str) -> Result<String, ThesisError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ThesisError::validation("title", "Section title cannot be empty"));
        }
        let section = self.section_mut(key)?;
        let previous = section.display_title().to_string();
        section.rename(title);
        Ok(previous)
    }

    /// Replaces a section's body, returning the previous one.
    pub fn replace_body(
        &mut self,
        key: &SectionKey,
        body: ContentVariant,
    ) -> Result<ContentVariant, ThesisError> {
        Ok(self.section_mut(key)?.replace_body(body))
    }

    fn section_mut(&mut self, key: &SectionKey) -> Result<&mut Section, ThesisError> {
        self.sections
            .iter_mut()
            .find(|s| s.key() == key)
            .ok_or_else(|| ThesisError::SectionNotFound(key.clone()))
    }

    fn unused_key(&self, keys: &dyn SectionKeyGenerator) -> Result<SectionKey, ThesisError> {
        let attempts = keys.max_attempts().max(1);
        for _ in 0..attempts {
            let candidate = keys.generate();
            if !self.contains_key(&candidate) {
                return Ok(candidate);
            }
        }
        Err(ThesisError::DuplicateKey { attempts })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Serde - JSON object keyed by section key
// ════════════════════════════════════════════════════════════════════════════════

// Un-numbered sections write `"ordinal": null`; only records without the
// field at all are legacy and get their ordinal from the title.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SectionRecordRef<'a> {
    title: &'a str,
    ordinal: Option<u32>,
    body: &'a ContentVariant,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SectionRecord {
    title: String,
    #[serde(default, deserialize_with = "present_ordinal")]
    ordinal: Option<Option<u32>>,
    #[serde(default)]
    body: ContentVariant,
}

fn present_ordinal<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Option<u32>>, D::Error> {
    Option::<u32>::deserialize(deserializer).map(Some)
}

impl Serialize for SectionRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(
                section.key(),
                &SectionRecordRef {
                    title: section.display_title(),
                    ordinal: section.ordinal(),
                    body: section.body(),
                },
            )?;
        }
        map.end()
    }
}

struct SectionRegistryVisitor;

impl<'de> Visitor<'de> for SectionRegistryVisitor {
    type Value = SectionRegistry;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of section key to section")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut registry = SectionRegistry::new();
        while let Some((key, record)) = access.next_entry::<SectionKey, SectionRecord>()? {
            let section = match record.ordinal {
                Some(ordinal) => Section::restore(key, record.title, ordinal, record.body),
                None => Section::from_legacy(key, record.title, record.body),
            };
            registry.push(section).map_err(de::Error::custom)?;
        }
        Ok(registry)
    }
}

impl<'de> Deserialize<'de> for SectionRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SectionRegistryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::thesis::key_generator::RandomKeyGenerator;
    use proptest::prelude::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn key(k: &str) -> SectionKey {
        SectionKey::new(k).unwrap()
    }

    /// Always hands out the same key.
    struct ConstantKey(&'static str);

    impl SectionKeyGenerator for ConstantKey {
        fn generate(&self) -> SectionKey {
            key(self.0)
        }
    }

    /// Hands out `k0`, `k1`, ... and counts calls.
    struct CountingKeys(AtomicUsize);

    impl CountingKeys {
        fn new() -> Self {
            Self(AtomicUsize::new(0))
        }
    }

    impl SectionKeyGenerator for CountingKeys {
        fn generate(&self) -> SectionKey {
            let n = self.0.fetch_add(1, Ordering::SeqCst);
            key(&format!("k{}", n))
        }
    }

    fn registry_with(count: u32) -> SectionRegistry {
        let sections = (1..=count)
            .map(|n| {
                Section::numbered(
                    key(&format!("s{}", n)),
                    n,
                    &format!("Section {}", n),
                    ContentVariant::default(),
                )
            })
            .collect();
        SectionRegistry::from_sections(sections).unwrap()
    }

    fn five_sections() -> SectionRegistry {
        let titles = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"];
        let sections = titles
            .iter()
            .enumerate()
            .map(|(idx, title)| {
                Section::numbered(
                    key(&title.to_lowercase()),
                    idx as u32 + 1,
                    title,
                    ContentVariant::default(),
                )
            })
            .collect();
        SectionRegistry::from_sections(sections).unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Insertion
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn insert_in_middle_shifts_later_sections() {
        let mut registry = registry_with(3);

        let new_key = registry.insert_at(2, "Market", &CountingKeys::new()).unwrap();

        assert_eq!(
            registry.titles(),
            vec!["I. Section 1", "II. Market", "III. Section 2", "IV. Section 3"]
        );
        assert_eq!(registry.get(&new_key).unwrap().ordinal(), Some(2));
        assert_eq!(
            registry.get(&new_key).unwrap().body(),
            &ContentVariant::simple("")
        );
    }

    #[test]
    fn insert_past_end_clamps_to_append() {
        let mut registry = registry_with(3);

        let new_key = registry.insert_at(99, "Outlook", &CountingKeys::new()).unwrap();

        let section = registry.get(&new_key).unwrap();
        assert_eq!(section.display_title(), "IV. Outlook");
        assert_eq!(registry.ordinals(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn insert_at_position_one_into_empty_registry() {
        let mut registry = SectionRegistry::new();
        registry.insert_at(7, "Only", &CountingKeys::new()).unwrap();
        assert_eq!(registry.titles(), vec!["I. Only"]);
    }

    #[test]
    fn insert_rejects_positions_below_one() {
        let mut registry = registry_with(2);
        let before = registry.clone();

        for bad in [0, -1, i64::MIN] {
            let err = registry.insert_at(bad, "Nope", &CountingKeys::new()).unwrap_err();
            assert_eq!(err, ThesisError::InvalidPosition { requested: bad });
        }
        assert_eq!(registry, before);
    }

    #[test]
    fn insert_rejects_blank_title() {
        let mut registry = registry_with(1);
        let err = registry.insert_at(1, "  ", &CountingKeys::new()).unwrap_err();
        assert!(matches!(err, ThesisError::ValidationFailed { .. }));
    }

    #[test]
    fn insert_leaves_unnumbered_sections_alone() {
        let mut registry = registry_with(2);
        registry
            .push(Section::unnumbered(
                key("disclaimer"),
                "Disclaimer",
                ContentVariant::simple("Not advice"),
            ))
            .unwrap();

        registry.insert_at(1, "Preface", &CountingKeys::new()).unwrap();

        let disclaimer = registry.get(&key("disclaimer")).unwrap();
        assert_eq!(disclaimer.display_title(), "Disclaimer");
        assert_eq!(disclaimer.ordinal(), None);
        assert_eq!(registry.ordinals(), vec![1, 2, 3]);
    }

    #[test]
    fn insert_retries_on_key_collision() {
        let mut registry = registry_with(1);
        registry
            .push(Section::unnumbered(key("k0"), "Taken", ContentVariant::default()))
            .unwrap();

        let keys = CountingKeys::new();
        let new_key = registry.insert_at(2, "Fresh", &keys).unwrap();

        assert_eq!(new_key, key("k1"));
        assert_eq!(keys.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn insert_fails_with_duplicate_key_when_retries_exhausted() {
        let mut registry = registry_with(1);
        registry
            .push(Section::unnumbered(key("stuck"), "Taken", ContentVariant::default()))
            .unwrap();
        let before = registry.clone();

        let err = registry.insert_at(1, "Never", &ConstantKey("stuck")).unwrap_err();

        assert_eq!(err, ThesisError::DuplicateKey { attempts: 5 });
        assert_eq!(registry, before);
    }

    #[test]
    fn insert_with_random_keys_produces_unique_keys() {
        let mut registry = SectionRegistry::new();
        let keys = RandomKeyGenerator::new();
        for n in 0..20 {
            registry.insert_at(n + 1, "Part", &keys).unwrap();
        }
        assert_eq!(registry.len(), 20);
        assert!(registry.is_contiguous());
    }

    #[test]
    fn insert_into_legacy_gaps_assigns_ranks() {
        let sections = vec![
            Section::from_legacy(key("a"), "I. A".into(), ContentVariant::default()),
            Section::from_legacy(key("b"), "III. B".into(), ContentVariant::default()),
            Section::from_legacy(key("c"), "XX. C".into(), ContentVariant::default()),
        ];
        let mut registry = SectionRegistry::from_sections(sections).unwrap();
        assert_eq!(registry.ordinals(), vec![1, 3, SENTINEL_ORDINAL]);

        // Three numbered sections, so 99 clamps to 4, not past the sentinel.
        let appended = registry.insert_at(99, "Outlook", &ConstantKey("outlook")).unwrap();
        assert_eq!(registry.get(&appended).unwrap().ordinal(), Some(4));

        let inserted = registry.insert_at(2, "Market", &ConstantKey("market")).unwrap();
        assert_eq!(registry.get(&inserted).unwrap().ordinal(), Some(2));
        assert_eq!(
            registry.titles(),
            vec!["I. A", "II. Market", "III. B", "IV. C", "V. Outlook"]
        );
        assert!(registry.is_contiguous());
    }

    #[test]
    fn insert_renumbers_sections_above_fifteen() {
        let mut registry = registry_with(16);
        registry.insert_at(1, "Front", &CountingKeys::new()).unwrap();

        let last = registry.get(&key("s16")).unwrap();
        assert_eq!(last.ordinal(), Some(17));
        assert_eq!(last.display_title(), "XVII. Section 16");
        assert!(registry.is_contiguous());
    }

    // ───────────────────────────────────────────────────────────────
    // Removal
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn removing_second_of_five_promotes_followers() {
        let mut registry = five_sections();

        let removed = registry.remove_by_key(&key("beta")).unwrap();

        assert_eq!(removed.display_title(), "II. Beta");
        assert_eq!(
            registry.titles(),
            vec!["I. Alpha", "II. Gamma", "III. Delta", "IV. Epsilon"]
        );
    }

    #[test]
    fn removing_any_of_five_yields_contiguous_four() {
        for victim in ["alpha", "beta", "gamma", "delta", "epsilon"] {
            let mut registry = five_sections();
            let survivors: Vec<String> = registry
                .iter()
                .filter(|s| s.key().as_str() != victim)
                .map(|s| s.bare_title().to_string())
                .collect();

            registry.remove_by_key(&key(victim)).unwrap();

            assert_eq!(registry.ordinals(), vec![1, 2, 3, 4]);
            let remaining: Vec<String> = registry
                .numbered()
                .iter()
                .map(|s| s.bare_title().to_string())
                .collect();
            assert_eq!(remaining, survivors);
        }
    }

    #[test]
    fn remove_unknown_key_is_not_found() {
        let mut registry = five_sections();
        let err = registry.remove_by_key(&key("zeta")).unwrap_err();
        assert_eq!(err, ThesisError::SectionNotFound(key("zeta")));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn remove_repairs_gaps_and_sentinels() {
        let sections = vec![
            Section::from_legacy(key("a"), "I. A".into(), ContentVariant::default()),
            Section::from_legacy(key("b"), "III. B".into(), ContentVariant::default()),
            Section::from_legacy(key("c"), "XX. C".into(), ContentVariant::default()),
            Section::from_legacy(key("d"), "IV. D".into(), ContentVariant::default()),
        ];
        let mut registry = SectionRegistry::from_sections(sections).unwrap();
        assert_eq!(registry.ordinals(), vec![1, 3, 4, SENTINEL_ORDINAL]);

        registry.remove_by_key(&key("a")).unwrap();

        assert_eq!(registry.titles(), vec!["I. B", "III. C", "II. D"]);
        assert!(registry.is_contiguous());
    }

    // ───────────────────────────────────────────────────────────────
    // Rename / body
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn rename_keeps_ordinal() {
        let mut registry = five_sections();
        let previous = registry.rename(&key("gamma"), "Competitive Landscape").unwrap();

        assert_eq!(previous, "III. Gamma");
        assert_eq!(
            registry.get(&key("gamma")).unwrap().display_title(),
            "III. Competitive Landscape"
        );
    }

    #[test]
    fn rename_unknown_key_fails() {
        let mut registry = five_sections();
        assert!(matches!(
            registry.rename(&key("nope"), "X"),
            Err(ThesisError::SectionNotFound(_))
        ));
    }

    #[test]
    fn replace_body_swaps_content() {
        let mut registry = five_sections();
        let previous = registry
            .replace_body(&key("alpha"), ContentVariant::simple("Summary text"))
            .unwrap();
        assert_eq!(previous, ContentVariant::default());
        assert_eq!(
            registry.get(&key("alpha")).unwrap().body(),
            &ContentVariant::simple("Summary text")
        );
    }

    #[test]
    fn find_by_bare_title_ignores_numeral_and_case() {
        let registry = five_sections();
        assert_eq!(
            registry.find_by_bare_title("delta").map(|s| s.key().as_str()),
            Some("delta")
        );
        assert!(registry.find_by_bare_title("omega").is_none());
    }

    #[test]
    fn from_sections_rejects_duplicate_keys() {
        let sections = vec![
            Section::numbered(key("x"), 1, "One", ContentVariant::default()),
            Section::numbered(key("x"), 2, "Two", ContentVariant::default()),
        ];
        assert_eq!(
            SectionRegistry::from_sections(sections).unwrap_err(),
            ThesisError::KeyConflict(key("x"))
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Serde
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn serializes_as_ordered_object() {
        let mut registry = registry_with(2);
        registry.insert_at(1, "First", &ConstantKey("first")).unwrap();

        let json = serde_json::to_string(&registry).unwrap();
        let first = json.find("\"first\"").unwrap();
        let s1 = json.find("\"s1\"").unwrap();
        let s2 = json.find("\"s2\"").unwrap();
        assert!(first < s1 && s1 < s2);

        let value = serde_json::to_value(&registry).unwrap();
        assert_eq!(value["first"]["title"], "I. First");
        assert_eq!(value["first"]["ordinal"], 1);
        assert_eq!(value["first"]["body"]["kind"], "simple");
    }

    #[test]
    fn deserialize_preserves_map_order() {
        let json = r#"{
            "zeta": {"title": "I. Zeta", "ordinal": 1, "body": {"kind": "simple", "content": ""}},
            "alpha": {"title": "II. Alpha", "ordinal": 2, "body": {"kind": "simple", "content": ""}}
        }"#;

        let registry: SectionRegistry = serde_json::from_str(json).unwrap();
        assert_eq!(registry.titles(), vec!["I. Zeta", "II. Alpha"]);
    }

    #[test]
    fn deserialize_legacy_sections_without_ordinal() {
        let value = json!({
            "intro": {"title": "I. Introduction"},
            "note": {"title": "Editor's Note", "body": {"kind": "simple", "content": "hi"}}
        });

        let registry: SectionRegistry = serde_json::from_value(value).unwrap();

        assert_eq!(registry.get(&key("intro")).unwrap().ordinal(), Some(1));
        assert_eq!(registry.get(&key("note")).unwrap().ordinal(), None);
        assert_eq!(
            registry.get(&key("intro")).unwrap().body(),
            &ContentVariant::default()
        );
    }

    #[test]
    fn deserialize_rejects_duplicate_keys() {
        let json = r#"{"a": {"title": "I. A"}, "a": {"title": "II. A"}}"#;
        let result: Result<SectionRegistry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serde_round_trip_is_faithful() {
        let mut registry = five_sections();
        registry
            .push(Section::unnumbered(key("appendix"), "Appendix", ContentVariant::simple("A")))
            .unwrap();

        let json = serde_json::to_string(&registry).unwrap();
        let back: SectionRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, registry);
    }

    #[test]
    fn unnumbered_section_writes_null_ordinal() {
        let mut registry = registry_with(1);
        registry
            .push(Section::unnumbered(key("note"), "Note", ContentVariant::default()))
            .unwrap();

        let value = serde_json::to_value(&registry).unwrap();
        assert!(value["note"]["ordinal"].is_null());
        assert!(value["note"].as_object().unwrap().contains_key("ordinal"));
    }

    #[test]
    fn renamed_unnumbered_section_stays_unnumbered_after_reload() {
        let mut registry = registry_with(2);
        registry
            .push(Section::unnumbered(key("note"), "Note", ContentVariant::default()))
            .unwrap();
        registry.rename(&key("note"), "II. Appendix").unwrap();

        let json = serde_json::to_string(&registry).unwrap();
        let back: SectionRegistry = serde_json::from_str(&json).unwrap();

        assert_eq!(back, registry);
        assert_eq!(back.get(&key("note")).unwrap().ordinal(), None);
        assert_eq!(back.ordinals(), vec![1, 2]);
        assert!(back.is_contiguous());
    }

    #[test]
    fn explicit_null_ordinal_is_not_parsed_from_title() {
        let value = json!({
            "legacy": {"title": "III. Legacy"},
            "plain": {"title": "IV. Looks Numbered", "ordinal": null}
        });

        let registry: SectionRegistry = serde_json::from_value(value).unwrap();

        assert_eq!(registry.get(&key("legacy")).unwrap().ordinal(), Some(3));
        assert_eq!(registry.get(&key("plain")).unwrap().ordinal(), None);
    }

    // ───────────────────────────────────────────────────────────────
    // Properties
    // ───────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn insert_keeps_ordinals_contiguous(count in 0u32..20, offset in 0u32..21) {
            let position = (offset % (count + 1)) + 1;
            let mut registry = registry_with(count);

            let new_key = registry.insert_at(position as i64, "New", &ConstantKey("new")).unwrap();

            let expected: Vec<u32> = (1..=count + 1).collect();
            prop_assert_eq!(registry.ordinals(), expected);
            prop_assert_eq!(registry.get(&new_key).unwrap().ordinal(), Some(position));
        }

        #[test]
        fn oversize_positions_append(count in 0u32..20, position in 1i64..10_000) {
            let mut registry = registry_with(count);
            let new_key = registry.insert_at(position, "New", &ConstantKey("new")).unwrap();

            let expected = (position as u32).min(count + 1);
            prop_assert_eq!(registry.get(&new_key).unwrap().ordinal(), Some(expected));
            prop_assert!(registry.is_contiguous());
        }

        #[test]
        fn remove_keeps_ordinals_contiguous(count in 1u32..20, victim in 0u32..20) {
            let victim = (victim % count) + 1;
            let mut registry = registry_with(count);
            let victim_key = key(&format!("s{}", victim));
            let survivors: Vec<SectionKey> = registry
                .iter()
                .filter(|s| s.key() != &victim_key)
                .map(|s| s.key().clone())
                .collect();

            registry.remove_by_key(&victim_key).unwrap();

            let expected: Vec<u32> = (1..count).collect();
            prop_assert_eq!(registry.ordinals(), expected);
            let order: Vec<SectionKey> = registry.numbered().iter().map(|s| s.key().clone()).collect();
            prop_assert_eq!(order, survivors);
        }
    }
}
