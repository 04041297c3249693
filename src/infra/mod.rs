use std::sync::Arc;

use crate::adapter::db::gateway::project::ProjectGateway;
use crate::infra::config::AppConfig;
use crate::infra::db::init_db;
use crate::infra::state::AppState;

pub mod app;
pub mod config;
pub mod db;
pub mod setup;
pub mod state;

pub async fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db(&config).await?;
    let project_writer = ProjectGateway::new(pool);

    Ok(AppState {
        config: Arc::new(config),
        project_writer: Arc::new(project_writer),
    })
}
