use axum::extract::State;
use axum::Json;
use planner_core::{PlanRequest, PlanResponse};

use crate::error::AppError;
use crate::pipeline::generate_plan;
use crate::state::AppState;

/// POST /generate_project_plan — ask the model for a plan and normalize it.
pub async fn generate_project_plan(
    State(app): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let plan = generate_plan(&app.client, &req, app.config.mode).await?;
    if plan.ai_generated_plan.is_degraded() {
        tracing::warn!(project = %req.project_name, "returning parse-error placeholder plan");
    }
    Ok(Json(plan))
}
