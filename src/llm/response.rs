//! Extract the `{"sector", "reason"}` object from a model completion.
//!
//! Models routinely wrap JSON in Markdown code fences or add a sentence of
//! prose around it.  Fences are stripped first; if the remainder still is not
//! valid JSON the outermost `{ … }` span is tried before giving up.

use serde::Deserialize;

use super::classifier::LlmError;

/// The JSON object the prompt asks for.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectorVerdict {
    pub sector: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Remove every ```` ```json ```` and ```` ``` ```` marker and trim.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a completion into a [`SectorVerdict`].
pub fn parse_verdict(completion: &str) -> Result<SectorVerdict, LlmError> {
    let cleaned = strip_code_fences(completion);
    if cleaned.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    match serde_json::from_str::<SectorVerdict>(&cleaned) {
        Ok(verdict) => Ok(verdict),
        Err(first_err) => {
            let span = outer_object(&cleaned).ok_or_else(|| LlmError::Parse(first_err.to_string()))?;
            serde_json::from_str::<SectorVerdict>(span).map_err(|e| LlmError::Parse(e.to_string()))
        }
    }
}

/// The slice from the first `{` to the last `}` inclusive.
fn outer_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
