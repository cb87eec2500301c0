use anyhow::Result;
use completion_client::CompletionClient;
use planner_core::PlanRequest;
use planner_server::pipeline::generate_plan;

use super::ConfigArgs;
use crate::output::print_json;

/// One-shot generation: same pipeline as `POST /generate_project_plan`,
/// printed to stdout instead of served.
pub fn run(
    config: ConfigArgs,
    project_name: String,
    model: String,
    requirements: String,
) -> Result<()> {
    let config = config.into_config()?;
    let client = CompletionClient::new(&config)?;
    let req = PlanRequest::new(project_name)
        .with_model(model)
        .with_requirements(requirements);

    let rt = tokio::runtime::Runtime::new()?;
    let resp = rt.block_on(generate_plan(&client, &req, config.mode))?;
    print_json(&resp)
}
