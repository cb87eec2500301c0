use completion_client::{CompletionClient, CompletionError};
use planner_core::{build_prompt, normalize, NormalizationMode, PlanRequest, PlanResponse, PromptStyle};

/// Prompt → completion → normalization for one request.
///
/// Only the completion call can fail; normalization always yields a value.
pub async fn generate_plan(
    client: &CompletionClient,
    req: &PlanRequest,
    mode: NormalizationMode,
) -> Result<PlanResponse, CompletionError> {
    tracing::info!(
        project = %req.project_name,
        model = %req.model,
        mode = %mode,
        "generating project plan"
    );

    let prompt = build_prompt(req, PromptStyle::for_mode(mode));
    let raw = client.complete(&prompt, &req.model).await?.into_text();
    let plan = normalize(&raw, mode);

    Ok(PlanResponse {
        project_name: req.project_name.clone(),
        ai_generated_plan: plan,
    })
}
