//! Prompt builder for AI sector classification.
//!
//! [`PromptBuilder`] renders the fixed instruction template around the
//! closed set of sector labels, in two shapes:
//! * **Flat** (`build`): single message, for Cohere `/v1/chat`.
//! * **Chat** (`build_chat`): `(system_msg, user_msg)` tuple for any
//!   OpenAI-compatible `/v1/chat/completions` endpoint.

// ---------------------------------------------------------------------------
// Template pieces
// ---------------------------------------------------------------------------

const INSTRUCTION_HEAD: &str = "\
You are a sector classification assistant. Your task is to categorize a company into one of the following sectors based on its name and likely business activities:";

const INSTRUCTION_TAIL: &str = r#"
Provide your answer in a JSON format with two keys: "sector" and "reason". The "reason" should be a brief explanation for your choice.

Example:
Company: "Krungthai AXA"
Output:
{"sector": "Banking / Finance / Insurance (BFSI)", "reason": "The name contains 'Krungthai' and 'AXA', which are strongly associated with banking and insurance."}
"#;

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds sector-classification prompts.
///
/// # Example
/// ```rust
/// use sector_mapper::llm::PromptBuilder;
///
/// let builder = PromptBuilder::new(["Healthcare", "Telco / ISP"]);
/// let prompt = builder.build("True Corporation");
/// assert!(prompt.contains("Healthcare, Telco / ISP"));
/// assert!(prompt.ends_with("Company: True Corporation"));
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    instruction: String,
}

impl PromptBuilder {
    /// Create a builder listing `labels` (in order) as the allowed sectors.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = labels
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let mut instruction = String::with_capacity(1024);
        instruction.push('\n');
        instruction.push_str(INSTRUCTION_HEAD);
        instruction.push('\n');
        instruction.push_str(&joined);
        instruction.push('\n');
        instruction.push_str(INSTRUCTION_TAIL);

        Self { instruction }
    }

    /// The instruction block on its own.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Build a **flat** prompt: instruction followed by the company line.
    pub fn build(&self, org_name: &str) -> String {
        format!("{}\nCompany: {}", self.instruction, org_name)
    }

    /// Build a **(system_msg, user_msg)** pair.
    pub fn build_chat(&self, org_name: &str) -> (String, String) {
        (self.instruction.clone(), format!("Company: {org_name}"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SectorTable;

    fn builder() -> PromptBuilder {
        PromptBuilder::new(SectorTable::builtin().labels())
    }

    #[test]
    fn instruction_lists_every_label() {
        let b = builder();
        for label in SectorTable::builtin().labels() {
            assert!(b.instruction().contains(label), "missing {label}");
        }
    }

    #[test]
    fn instruction_requests_json_keys() {
        let b = builder();
        assert!(b.instruction().contains(r#""sector""#));
        assert!(b.instruction().contains(r#""reason""#));
        assert!(b.instruction().contains("Krungthai AXA"));
    }

    #[test]
    fn flat_prompt_ends_with_company() {
        let prompt = builder().build("ธนาคารกรุงเทพ");
        assert!(prompt.starts_with(builder().instruction()));
        assert!(prompt.ends_with("\nCompany: ธนาคารกรุงเทพ"));
    }

    #[test]
    fn chat_prompt_splits_instruction_and_company() {
        let (system, user) = builder().build_chat("Bangkok Bank");
        assert!(system.contains("sector classification assistant"));
        assert_eq!(user, "Company: Bangkok Bank");
    }

    #[test]
    fn labels_joined_with_commas() {
        let b = PromptBuilder::new(["A", "B", "C"]);
        assert!(b.instruction().contains("\nA, B, C\n"));
    }
}
