use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::application::app_error::AppResult;
use crate::application::interface::gateway::project::ProjectWriter;
use crate::domain::entities::project::Project;

#[derive(Clone)]
pub struct ProjectGateway {
    pool: Pool<Postgres>,
}

impl ProjectGateway {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectWriter for ProjectGateway {
    async fn insert(&self, project: Project) -> AppResult<()> {
        sqlx::query(
            r#"
                INSERT INTO projects
                    (
                        id,
                        name,
                        description,
                        hourly_rate,
                        estimated_hours,
                        created_at,
                        updated_at
                    )
                VALUES
                    ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(project.id.value)
        .bind(project.name)
        .bind(project.description)
        .bind(project.hourly_rate)
        .bind(project.estimated_hours)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
