use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "Landing page redesign",
    "description": "Marketing site rework for Q4",
    "hourly_rate": 95.0,
    "estimated_hours": 40.0
}))]
pub struct CreateProjectRequest {
    #[schema(example = "Landing page redesign")]
    pub name: String,
    #[schema(example = "Marketing site rework for Q4")]
    pub description: Option<String>,
    #[schema(example = 95.0)]
    pub hourly_rate: f64,
    #[schema(example = 40.0)]
    pub estimated_hours: f64,
}
