use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::MessageResponse;
use crate::adapter::http::schema::project::CreateProjectRequest;
use crate::application::app_error::AppResult;
use crate::application::interactors::project::CreateProjectInteractor;
use crate::domain::entities::project::Project;

#[utoipa::path(
    post,
    path = "/projects",
    tag = "Projects",
    request_body(
        content = CreateProjectRequest,
        example = json!(
            {
                "name": "Landing page redesign",
                "description": "Marketing site rework for Q4",
                "hourly_rate": 95.0,
                "estimated_hours": 40.0
            }
        )
    ),
    responses(
        (
            status = 201,
            description = "Project created successfully",
            body = MessageResponse,
            example = json!(
                {
                    "message": "Project created successfully"
                }
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Internal Server Error"
                }
            )
        )
    )
)]
pub async fn create_project(
    interactor: CreateProjectInteractor,
    Json(payload): Json<CreateProjectRequest>,
) -> AppResult<impl IntoResponse> {
    let project = Project::new(
        payload.name,
        payload.description,
        payload.hourly_rate,
        payload.estimated_hours,
    );
    interactor.execute(project).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Project created successfully".to_string(),
        }),
    ))
}
