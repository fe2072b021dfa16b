use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const BRAND_CONTENT: &str = include_str!("../content/brand.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("brand content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("brand content has no sections")]
    Empty,
    #[error("section #{index} has a blank id")]
    BlankId { index: usize },
    #[error("section id `{0}` is used more than once")]
    DuplicateId(String),
    #[error("swatch `{name}` in section `{section}` has malformed colour `{hex}`")]
    InvalidColor {
        section: String,
        name: String,
        hex: String,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        text: String,
    },
    Paragraph {
        #[serde(default)]
        lead: Option<String>,
        text: String,
    },
    Checklist {
        items: Vec<String>,
    },
    Swatch {
        name: String,
        hex: String,
    },
    Logo,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Section {
    /// Title prefixed with the 1-based display position, e.g. "2. Visual Identity System".
    pub fn numbered_title(&self, index: usize) -> String {
        format!("{}. {}", index + 1, self.title)
    }
}

/// Ordered, read-only set of sections shown on the page.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContentStore {
    title: String,
    sections: Vec<Section>,
}

impl ContentStore {
    /// Parses the content bundled into the binary.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(BRAND_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let store: ContentStore = serde_json::from_str(raw)?;
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.sections.is_empty() {
            return Err(ContentError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(ContentError::BlankId { index });
            }
            if !seen.insert(section.id.as_str()) {
                return Err(ContentError::DuplicateId(section.id.clone()));
            }
            for block in &section.blocks {
                if let Block::Swatch { name, hex } = block {
                    if !is_hex_color(hex) {
                        return Err(ContentError::InvalidColor {
                            section: section.id.clone(),
                            name: name.clone(),
                            hex: hex.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.sections.iter().map(|section| section.id.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Maps a location hash such as `#visual` to the section it names.
    pub fn resolve_anchor(&self, hash: &str) -> Option<&Section> {
        let id = hash.trim_start_matches('#');
        if id.is_empty() {
            return None;
        }
        self.get(id)
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_loads_in_display_order() {
        let store = ContentStore::load().expect("bundled content should be valid");
        let ids: Vec<&str> = store.ids().collect();
        assert_eq!(
            ids,
            vec![
                "foundation",
                "visual",
                "communication",
                "leadership",
                "standards",
                "tools",
                "application"
            ]
        );
        assert_eq!(store.title(), "Brand Guidelines");
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn bundled_visual_section_has_logo_and_palette() {
        let store = ContentStore::load().unwrap();
        let visual = store.get("visual").unwrap();
        assert!(visual.blocks.contains(&Block::Logo));
        let swatches: Vec<&str> = visual
            .blocks
            .iter()
            .filter_map(|block| match block {
                Block::Swatch { hex, .. } => Some(hex.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(swatches, vec!["#5C3C80", "#96397C", "#FFFFFF", "#1E1E1E"]);
    }

    #[test]
    fn paragraph_lead_is_optional() {
        let store = ContentStore::from_json(
            r#"{"title":"t","sections":[{"id":"a","title":"A","blocks":[
                {"kind":"paragraph","text":"plain"},
                {"kind":"paragraph","lead":"Mission","text":"bold lead"}
            ]}]}"#,
        )
        .unwrap();
        let blocks = &store.sections()[0].blocks;
        assert_eq!(
            blocks[0],
            Block::Paragraph {
                lead: None,
                text: "plain".to_string()
            }
        );
        assert!(matches!(&blocks[1], Block::Paragraph { lead: Some(lead), .. } if lead == "Mission"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ContentStore::from_json(
            r#"{"title":"t","sections":[{"id":"a","title":"A"},{"id":"a","title":"Again"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn blank_ids_and_empty_documents_are_rejected() {
        let err = ContentStore::from_json(
            r#"{"title":"t","sections":[{"id":"a","title":"A"},{"id":"  ","title":"B"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::BlankId { index: 1 }));

        let err = ContentStore::from_json(r#"{"title":"t","sections":[]}"#).unwrap_err();
        assert!(matches!(err, ContentError::Empty));
    }

    #[test]
    fn malformed_swatch_colour_is_rejected() {
        let err = ContentStore::from_json(
            r#"{"title":"t","sections":[{"id":"a","title":"A","blocks":[
                {"kind":"swatch","name":"Purple","hex":"5C3C80"}
            ]}]}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "swatch `Purple` in section `a` has malformed colour `5C3C80`"
        );
    }

    #[test]
    fn unknown_block_kind_is_a_parse_error() {
        let err = ContentStore::from_json(
            r#"{"title":"t","sections":[{"id":"a","title":"A","blocks":[{"kind":"video"}]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn anchors_resolve_with_or_without_hash() {
        let store = ContentStore::load().unwrap();
        assert_eq!(store.resolve_anchor("#tools").map(|s| s.id.as_str()), Some("tools"));
        assert_eq!(store.resolve_anchor("tools").map(|s| s.id.as_str()), Some("tools"));
        assert!(store.resolve_anchor("#").is_none());
        assert!(store.resolve_anchor("").is_none());
        assert!(store.resolve_anchor("#missing").is_none());
    }

    #[test]
    fn numbered_titles_are_one_based() {
        let store = ContentStore::load().unwrap();
        assert_eq!(
            store.sections()[1].numbered_title(1),
            "2. Visual Identity System"
        );
    }
}
