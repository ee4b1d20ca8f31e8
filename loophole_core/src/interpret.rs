//! Free-form interpretation by a remote language model.
//!
//! This sits beside the heuristic pipeline, never underneath it. Nothing in
//! [`crate::report`] calls an [`Interpreter`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::error::InterpretError;

pub const DEFAULT_TONE: &str = "professional";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretRequest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default = "default_tone")]
    pub tone: String,
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

impl InterpretRequest {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            jurisdiction: None,
            tone: default_tone(),
        }
    }

    #[must_use]
    pub fn with_jurisdiction(mut self, jurisdiction: Option<String>) -> Self {
        self.jurisdiction = jurisdiction.filter(|j| !j.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    /// Reject blank text before anything goes over the wire.
    pub fn validate(&self) -> Result<(), InterpretError> {
        if self.text.trim().is_empty() {
            return Err(InterpretError::MissingText);
        }
        Ok(())
    }

    /// System instructions sent alongside the text.
    #[must_use]
    pub fn instructions(&self) -> String {
        let jurisdiction = self.jurisdiction.as_deref().unwrap_or("not specified");
        format!(
            "You are \"Loophole Finance - Regulation Interpreter\".
Explain regulations and compliance concepts clearly. Educational only; not legal/tax/financial advice.
Do NOT provide instructions to break the law, evade taxes, dodge reporting, launder money, or commit fraud.
If user asks for illegal guidance, refuse briefly and offer lawful, high-level alternatives.

Return JSON ONLY with this schema:
{{\"summary\":string,\"key_points\":string[],\"risks\":string[],\"questions\":string[],\"disclaimer\":string}}

Tone: {tone}
Jurisdiction (if any): {jurisdiction}
",
            tone = self.tone,
        )
    }
}

/// Structured answer returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub summary: String,
    pub key_points: Vec<String>,
    pub risks: Vec<String>,
    pub questions: Vec<String>,
    pub disclaimer: String,
}

impl Interpretation {
    /// Parse model output. Anything other than the exact schema is
    /// [`InterpretError::InvalidOutput`].
    pub fn parse(raw: &str) -> Result<Self, InterpretError> {
        serde_json::from_str(raw.trim()).map_err(|e| InterpretError::InvalidOutput(e.to_string()))
    }

    /// Plain-text rendering in the same list style as the heuristic report.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "INTERPRETATION (informational)\n");
        let _ = writeln!(out, "Summary:\n{}\n", self.summary);
        for (label, items) in [
            ("Key points:", &self.key_points),
            ("Risks:", &self.risks),
            ("Questions to clarify:", &self.questions),
        ] {
            if items.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{label}");
            for item in items {
                let _ = writeln!(out, "• {item}");
            }
            out.push('\n');
        }
        out.push_str(&self.disclaimer);
        out
    }
}

/// A remote service that interprets regulatory text.
#[async_trait]
pub trait Interpreter: Send + Sync {
    async fn interpret(&self, request: &InterpretRequest)
    -> Result<Interpretation, InterpretError>;

    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "summary": "Platforms report customer data.",
        "key_points": ["Collect identity data", "Report annually"],
        "risks": ["Late filing penalties"],
        "questions": [],
        "disclaimer": "Educational only."
    }"#;

    struct Canned(&'static str);

    #[async_trait]
    impl Interpreter for Canned {
        async fn interpret(
            &self,
            request: &InterpretRequest,
        ) -> Result<Interpretation, InterpretError> {
            request.validate()?;
            Interpretation::parse(self.0)
        }

        fn model(&self) -> &'static str {
            "canned"
        }
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_parse_and_render() {
        let interpretation = Interpretation::parse(SAMPLE).expect("sample should parse");
        assert_eq!(interpretation.key_points.len(), 2);

        let text = interpretation.render();
        assert!(text.starts_with("INTERPRETATION (informational)\n\nSummary:\n"));
        assert!(text.contains("Key points:\n• Collect identity data\n• Report annually\n"));
        assert!(!text.contains("Questions to clarify:"));
        assert!(text.ends_with("Educational only."));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = Interpretation::parse("Sure! Here is a summary.");
        assert!(err.is_err_and(|e| e.is_invalid_output()));
    }

    #[test]
    fn test_parse_rejects_wrong_schema() {
        let err = Interpretation::parse(r#"{"summary": "only this"}"#);
        assert!(err.is_err_and(|e| e.is_invalid_output()));
    }

    #[test]
    fn test_instructions() {
        let request = InterpretRequest::new("text");
        let instructions = request.instructions();
        assert!(instructions.contains("Tone: professional"));
        assert!(instructions.contains("Jurisdiction (if any): not specified"));
        assert!(instructions.contains(r#"{"summary":string,"key_points":string[]"#));

        let request = request
            .with_jurisdiction(Some("UK".into()))
            .with_tone("plain");
        assert!(request.instructions().contains("Jurisdiction (if any): UK"));
        assert!(request.instructions().contains("Tone: plain"));
    }

    #[test]
    fn test_blank_jurisdiction_ignored() {
        let request = InterpretRequest::new("text").with_jurisdiction(Some("  ".into()));
        assert_eq!(request.jurisdiction, None);
    }

    #[tokio::test]
    async fn test_missing_text_rejected_before_parse() {
        let interpreter = Canned(SAMPLE);
        let result = interpreter.interpret(&InterpretRequest::new("  ")).await;
        assert!(matches!(result, Err(InterpretError::MissingText)));

        let result = interpreter.interpret(&InterpretRequest::new("Rules.")).await;
        assert!(result.is_ok());
    }
}
