use crate::normalize::NormalizedPlan;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_MODEL: &str = "mistral-medium";

// ---------------------------------------------------------------------------
// PlanRequest
// ---------------------------------------------------------------------------

/// Body of `POST /generate_project_plan`.
///
/// `project_name` is required by the wire format but an empty string is
/// accepted and passed through to the prompt unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub project_name: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub additional_requirements: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl PlanRequest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            model: default_model(),
            additional_requirements: String::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.additional_requirements = requirements.into();
        self
    }
}

// ---------------------------------------------------------------------------
// PlanResponse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResponse {
    pub project_name: String,
    pub ai_generated_plan: NormalizedPlan,
}

// ---------------------------------------------------------------------------
// NormalizationMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Mode A: raw model text.
    Passthrough,
    /// Mode B: Markdown flattened to visible text.
    PlainText,
    /// Mode C: flattened text split into titled sections.
    Sections,
    /// Mode D: flattened text parsed as JSON, or a fixed error object.
    #[default]
    Json,
}

impl NormalizationMode {
    pub fn all() -> &'static [NormalizationMode] {
        &[
            NormalizationMode::Passthrough,
            NormalizationMode::PlainText,
            NormalizationMode::Sections,
            NormalizationMode::Json,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NormalizationMode::Passthrough => "passthrough",
            NormalizationMode::PlainText => "plain_text",
            NormalizationMode::Sections => "sections",
            NormalizationMode::Json => "json",
        }
    }
}

impl fmt::Display for NormalizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NormalizationMode {
    type Err = crate::error::PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passthrough" | "a" => Ok(NormalizationMode::Passthrough),
            "plain_text" | "plain-text" | "b" => Ok(NormalizationMode::PlainText),
            "sections" | "c" => Ok(NormalizationMode::Sections),
            "json" | "d" => Ok(NormalizationMode::Json),
            _ => Err(crate::error::PlannerError::InvalidMode(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn request_defaults_fill_missing_fields() {
        let req: PlanRequest = serde_json::from_str(r#"{"project_name": "AI Chatbot"}"#).unwrap();
        assert_eq!(req.project_name, "AI Chatbot");
        assert_eq!(req.model, "mistral-medium");
        assert_eq!(req.additional_requirements, "");
    }

    #[test]
    fn request_without_project_name_is_rejected() {
        let res: Result<PlanRequest, _> = serde_json::from_str(r#"{"model": "mistral-small"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn request_accepts_empty_project_name() {
        let req: PlanRequest = serde_json::from_str(r#"{"project_name": ""}"#).unwrap();
        assert_eq!(req.project_name, "");
    }

    #[test]
    fn mode_roundtrip() {
        for mode in NormalizationMode::all() {
            assert_eq!(NormalizationMode::from_str(mode.as_str()).unwrap(), *mode);
        }
    }

    #[test]
    fn mode_accepts_letters() {
        assert_eq!(
            NormalizationMode::from_str("A").unwrap(),
            NormalizationMode::Passthrough
        );
        assert_eq!(
            NormalizationMode::from_str("d").unwrap(),
            NormalizationMode::Json
        );
    }

    #[test]
    fn mode_rejects_unknown() {
        assert!(NormalizationMode::from_str("yaml").is_err());
    }

    #[test]
    fn default_mode_is_json() {
        assert_eq!(NormalizationMode::default(), NormalizationMode::Json);
    }
}
