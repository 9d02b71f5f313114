use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Appended to every persona so the service always answers with the schema.
const ANALYSIS_DIRECTIVE: &str = "Analyze the provided food (text or image) and return structured nutritional data.\n\
     Focus on positive reinforcement and mindful reflection.\n\
     Return JSON only.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantPersona {
    pub name: String,
    #[serde(flatten)]
    pub attributes: Value,
}

impl Default for AssistantPersona {
    fn default() -> Self {
        Self {
            name: "AuraNutri AI".to_string(),
            attributes: serde_json::json!({
                "description": "a supportive nutritional assistant",
                "style": "warm, encouraging and non-judgmental",
                "traits": ["empathetic", "mindful", "positive"]
            }),
        }
    }
}

impl AssistantPersona {
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(|v| v.as_str())
    }

    pub fn get_array(&self, key: &str) -> Option<&Vec<Value>> {
        self.attributes.get(key).and_then(|v| v.as_array())
    }

    pub fn generate_system_instruction(&self) -> String {
        let description = self
            .get_str("description")
            .unwrap_or("a supportive nutritional assistant");

        let style = self
            .get_str("style")
            .map(|s| format!(" Your communication style is {}.", s))
            .unwrap_or_default();

        let traits = self
            .get_array("traits")
            .map(|t| {
                let traits: Vec<&str> = t.iter().filter_map(|v| v.as_str()).collect();
                if traits.is_empty() {
                    String::new()
                } else {
                    format!("\nYour key traits are: {}", traits.join(", "))
                }
            })
            .unwrap_or_default();

        format!(
            "You are {}, {}.{}{}\n{}",
            self.name, description, style, traits, ANALYSIS_DIRECTIVE
        )
    }
}

impl std::fmt::Display for AssistantPersona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
