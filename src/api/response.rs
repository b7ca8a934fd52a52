use serde_json::Value;

use crate::api::ApiError;

/// A successful generation: the first candidate's first text part plus the
/// full decoded payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub text: String,
    pub raw: Value,
}

/// Pulls `candidates[0].content.parts[0].text` out of a decoded
/// generateContent response.
pub fn extract_generated(raw: Value) -> Result<Generated, ApiError> {
    let has_candidate = raw
        .get("candidates")
        .and_then(Value::as_array)
        .is_some_and(|candidates| !candidates.is_empty());

    if !has_candidate {
        let block_reason = raw
            .pointer("/promptFeedback/blockReason")
            .and_then(Value::as_str)
            .map(str::to_owned);
        return Err(ApiError::NoContent { block_reason, raw });
    }

    let missing = if raw.pointer("/candidates/0/content").is_none() {
        "candidates[0].content"
    } else if raw.pointer("/candidates/0/content/parts/0").is_none() {
        "candidates[0].content.parts[0]"
    } else {
        match raw
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
        {
            Some(text) => {
                let text = text.to_string();
                return Ok(Generated { text, raw });
            }
            None => "candidates[0].content.parts[0].text",
        }
    };

    Err(ApiError::InvalidStructure { missing, raw })
}
