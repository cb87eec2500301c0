//! Instruction templates sent to the completion endpoint.
//!
//! Both templates ask for the same five sections; they differ in the output
//! format requested from the model. Building a prompt is a pure function of
//! the request, so identical requests always produce identical prompts.

use crate::types::{NormalizationMode, PlanRequest};

/// The five sections every plan is asked to contain, in order.
pub const PLAN_SECTIONS: [&str; 5] = [
    "Project Overview",
    "Required Components",
    "Implementation Steps",
    "Timeline Estimate",
    "Additional Learning Resources",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Detailed instructions asking for strictly formatted plain text.
    PlainText,
    /// Short section list asking for a structured JSON object.
    Json,
}

impl PromptStyle {
    /// JSON parsing only makes sense when the model was asked for JSON.
    pub fn for_mode(mode: NormalizationMode) -> Self {
        match mode {
            NormalizationMode::Json => PromptStyle::Json,
            NormalizationMode::Passthrough
            | NormalizationMode::PlainText
            | NormalizationMode::Sections => PromptStyle::PlainText,
        }
    }
}

pub fn build_prompt(req: &PlanRequest, style: PromptStyle) -> String {
    let mut prompt = match style {
        PromptStyle::PlainText => plain_text_prompt(&req.project_name),
        PromptStyle::Json => json_prompt(&req.project_name),
    };

    if !req.additional_requirements.is_empty() {
        prompt.push_str("\nAdditional requirements:\n");
        prompt.push_str(&req.additional_requirements);
        prompt.push('\n');
    }

    prompt
}

fn plain_text_prompt(project_name: &str) -> String {
    format!(
        r#"You are an expert AI assistant that provides structured and properly formatted project plans.
The project name is: {project_name}.

Provide the following details in a **strictly formatted** plain-text format with clear numbered sections:

1. **{overview}**
   - Summarize the project in 2-3 simple sentences.

2. **{components}**
   - Clearly separate **Hardware** and **Software** components.
   - Use a **plain-text numbered list** (no markdown, no bullet points).

3. **{steps}**
   - Write each step **on a new line** with **clear numbering** (e.g., "1.", "2.", "3.").
   - Each step must be **simple, direct, and formatted properly**.

4. **{timeline}**
   - Provide an estimated duration in **weeks/months** based on project complexity.
   - Format this section in plain text with proper paragraph spacing.

5. **{resources}**
   - List useful **URLs in plain text** (no markdown formatting).
   - Separate links **clearly** to avoid merging.

Make sure to follow the formatting rules **strictly** and avoid using markdown-style formatting like bullet points, asterisks, or unnecessary indentation.
"#,
        overview = PLAN_SECTIONS[0],
        components = PLAN_SECTIONS[1],
        steps = PLAN_SECTIONS[2],
        timeline = PLAN_SECTIONS[3],
        resources = PLAN_SECTIONS[4],
    )
}

fn json_prompt(project_name: &str) -> String {
    format!(
        r#"You are an AI expert generating structured project plans.
Project: {project_name}

Structure:
1. {overview}
2. {components} (Hardware & Software)
3. {steps}
4. {timeline}
5. {resources}

Provide responses as a structured JSON object.
"#,
        overview = PLAN_SECTIONS[0],
        components = PLAN_SECTIONS[1],
        steps = PLAN_SECTIONS[2],
        timeline = PLAN_SECTIONS[3],
        resources = PLAN_SECTIONS[4],
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
