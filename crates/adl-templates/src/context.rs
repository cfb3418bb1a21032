//! JSON contexts handed to templates.
//!
//! Whole-document templates see the serialized document (camelCase keys)
//! plus `language` and `generation`. Per-skill templates see the skill's own
//! fields at the top level, with the document `metadata` alongside.

use adl_spec::{Document, Language, Skill};
use serde_json::{json, Value};

use crate::error::Result;
use crate::header::GenerationMetadata;

pub fn document_context(
    doc: &Document,
    language: Language,
    generation: &GenerationMetadata,
) -> Result<Value> {
    let mut context = serde_json::to_value(doc)?;
    if let Value::Object(map) = &mut context {
        map.insert("language".to_string(), json!(language.as_str()));
        map.insert("generation".to_string(), serde_json::to_value(generation)?);
    }
    Ok(context)
}

pub fn skill_context(
    doc: &Document,
    skill: &Skill,
    language: Language,
    generation: &GenerationMetadata,
) -> Result<Value> {
    let mut context = serde_json::to_value(skill)?;
    if let Value::Object(map) = &mut context {
        map.insert("metadata".to_string(), serde_json::to_value(&doc.metadata)?);
        map.insert("language".to_string(), json!(language.as_str()));
        map.insert("generation".to_string(), serde_json::to_value(generation)?);
    }
    Ok(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation() -> GenerationMetadata {
        GenerationMetadata::new("minimal", "2026-01-01T00:00:00Z")
    }

    #[test]
    fn test_document_context_shape() {
        let mut doc = Document::default();
        doc.metadata.name = "demo".to_string();

        let context = document_context(&doc, Language::Go, &generation()).unwrap();
        assert_eq!(context["metadata"]["name"], "demo");
        assert_eq!(context["language"], "go");
        assert_eq!(context["generation"]["template"], "minimal");
        assert!(context["spec"].is_object());
        assert!(context.get("apiVersion").is_some());
    }

    #[test]
    fn test_skill_context_shape() {
        let mut doc = Document::default();
        doc.metadata.name = "demo".to_string();
        let skill = Skill {
            id: "get-weather".to_string(),
            name: "get_weather".to_string(),
            description: "Weather".to_string(),
            tags: vec!["weather".to_string()],
            schema: Some(json!({"type": "object"})),
        };

        let context = skill_context(&doc, &skill, Language::Rust, &generation()).unwrap();
        assert_eq!(context["name"], "get_weather");
        assert_eq!(context["schema"]["type"], "object");
        assert_eq!(context["metadata"]["name"], "demo");
        assert_eq!(context["language"], "rust");
    }
}
