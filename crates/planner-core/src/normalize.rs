use crate::flatten::flatten;
use crate::sections::{split_sections, SectionMap};
use crate::types::NormalizationMode;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

pub const PARSE_ERROR_MESSAGE: &str = "AI response could not be parsed into JSON.";

// ---------------------------------------------------------------------------
// NormalizedPlan
// ---------------------------------------------------------------------------

/// The plan value returned to the caller.
///
/// `Unparseable` keeps the flattened text for logging; on the wire it is the
/// fixed `{"error": ...}` object and the request still succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedPlan {
    Text(String),
    Sections(SectionMap),
    Json(Value),
    Unparseable { raw: String },
}

impl NormalizedPlan {
    /// True when a fallback value stands in for the model's output.
    pub fn is_degraded(&self) -> bool {
        matches!(self, NormalizedPlan::Unparseable { .. })
    }
}

impl Serialize for NormalizedPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NormalizedPlan::Text(text) => serializer.serialize_str(text),
            NormalizedPlan::Sections(sections) => sections.serialize(serializer),
            NormalizedPlan::Json(value) => value.serialize(serializer),
            NormalizedPlan::Unparseable { .. } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", PARSE_ERROR_MESSAGE)?;
                map.end()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Turn raw completion text into the plan value for `mode`. Never fails.
pub fn normalize(raw: &str, mode: NormalizationMode) -> NormalizedPlan {
    match mode {
        NormalizationMode::Passthrough => NormalizedPlan::Text(raw.to_string()),
        NormalizationMode::PlainText => NormalizedPlan::Text(flatten(raw)),
        NormalizationMode::Sections => NormalizedPlan::Sections(split_sections(&flatten(raw))),
        NormalizationMode::Json => parse_json(flatten(raw)),
    }
}

fn parse_json(text: String) -> NormalizedPlan {
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => NormalizedPlan::Json(value),
        Err(e) => {
            tracing::warn!(error = %e, "AI response is not valid JSON; returning error object");
            NormalizedPlan::Unparseable { raw: text }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
