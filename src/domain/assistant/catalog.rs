//! Read-only catalog of the assistants users can chat with.
//!
//! The catalog is configuration, not state: it is loaded once at startup
//! and shared by reference. Chats only store the assistant id.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::AssistantId;

/// One assistant persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assistant {
    pub id: AssistantId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Short label for the voice, shown next to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
}

/// Ordered, immutable set of assistants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantCatalog {
    #[serde(default)]
    assistants: Vec<Assistant>,
}

impl AssistantCatalog {
    pub fn new(assistants: Vec<Assistant>) -> Self {
        Self { assistants }
    }

    /// Parses a `{ "assistants": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn all(&self) -> &[Assistant] {
        &self.assistants
    }

    pub fn find(&self, id: &AssistantId) -> Option<&Assistant> {
        self.assistants.iter().find(|a| &a.id == id)
    }

    pub fn contains(&self, id: &AssistantId) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.assistants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assistants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r##"{
        "assistants": [
            {
                "id": "luna",
                "name": "Luna",
                "description": "A calm night-time companion",
                "voiceTag": "Soft",
                "avatarColor": "#6b5bff",
                "accentColor": "#a59bff"
            },
            { "id": "atlas", "name": "Atlas" }
        ]
    }"##;

    #[test]
    fn parses_document_in_order() {
        let catalog = AssistantCatalog::from_json(DOCUMENT).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all()[0].name, "Luna");
        assert_eq!(catalog.all()[0].voice_tag.as_deref(), Some("Soft"));
        assert!(catalog.all()[1].description.is_none());
    }

    #[test]
    fn find_by_id() {
        let catalog = AssistantCatalog::from_json(DOCUMENT).unwrap();
        let atlas = AssistantId::new("atlas").unwrap();
        assert_eq!(catalog.find(&atlas).map(|a| a.name.as_str()), Some("Atlas"));
        assert!(!catalog.contains(&AssistantId::new("nobody").unwrap()));
    }

    #[test]
    fn missing_assistants_key_is_empty_catalog() {
        let catalog = AssistantCatalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn rejects_blank_assistant_id() {
        let result = AssistantCatalog::from_json(r#"{"assistants":[{"id":"","name":"x"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_camel_case_and_skips_missing() {
        let catalog = AssistantCatalog::from_json(DOCUMENT).unwrap();
        let json = serde_json::to_value(&catalog.all()[1]).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "atlas", "name": "Atlas" }));
    }
}
