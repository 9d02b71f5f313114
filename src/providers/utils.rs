use crate::food::models::AnalysisResult;
use crate::providers::traits::AnalysisError;
use serde_json::{json, Value};

/// Output schema declared on every analysis request.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "Common name of the food" },
            "nutrition": {
                "type": "OBJECT",
                "properties": {
                    "calories": { "type": "NUMBER" },
                    "protein": { "type": "NUMBER", "description": "in grams" },
                    "carbs": { "type": "NUMBER", "description": "in grams" },
                    "fat": { "type": "NUMBER", "description": "in grams" },
                    "fiber": { "type": "NUMBER" },
                    "sugar": { "type": "NUMBER" },
                    "vitamins": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["calories", "protein", "carbs", "fat"]
            },
            "insight": {
                "type": "STRING",
                "description": "An empathetic, positive insight about how this food supports the user's wellbeing."
            }
        },
        "required": ["name", "nutrition", "insight"]
    })
}

/// Concatenated text of the first candidate's parts, if any.
pub fn candidate_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

pub fn parse_analysis(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let result: AnalysisResult = serde_json::from_str(text.trim())
        .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    let negative = result.nutrition.negative_fields();
    if !negative.is_empty() {
        log::warn!(
            "Accepting negative nutrition values for '{}': {}",
            result.name,
            negative.join(", ")
        );
    }
    Ok(result)
}
