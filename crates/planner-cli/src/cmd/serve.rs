use anyhow::Result;
use planner_server::AppState;

use super::ConfigArgs;

pub fn run(config: ConfigArgs, host: &str, port: u16) -> Result<()> {
    let config = config.into_config()?;
    tracing::debug!(?config, "loaded configuration");
    let state = AppState::new(config)?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!("AI project planner → http://localhost:{actual_port}");

        tokio::select! {
            res = planner_server::serve_on(state, listener) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}
