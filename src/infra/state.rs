use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::application::app_error::AppError;
use crate::application::interactors::project::CreateProjectInteractor;
use crate::application::interface::gateway::project::ProjectWriter;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub project_writer: Arc<dyn ProjectWriter>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

// CreateProjectInteractor
impl<S> FromRequestParts<S> for CreateProjectInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        Ok(CreateProjectInteractor::new(app_state.project_writer.clone()))
    }
}
