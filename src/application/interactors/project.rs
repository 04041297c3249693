use std::sync::Arc;

use crate::application::app_error::AppResult;
use crate::application::interface::gateway::project::ProjectWriter;
use crate::domain::entities::project::Project;

/// Hands a fully built project to the writer. The entity is shaped by the
/// caller; this layer adds no validation, translation or retry of its own.
#[derive(Clone)]
pub struct CreateProjectInteractor {
    project_writer: Arc<dyn ProjectWriter>,
}

impl CreateProjectInteractor {
    pub fn new(project_writer: Arc<dyn ProjectWriter>) -> Self {
        Self { project_writer }
    }

    pub async fn execute(&self, project: Project) -> AppResult<()> {
        self.project_writer.insert(project).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::application::app_error::AppError;
    use crate::application::interactors::project::CreateProjectInteractor;
    use crate::domain::entities::project::Project;
    use crate::tests::fixtures::{RecordingWriter, UnavailableWriter};

    fn sample_project(name: &str) -> Project {
        Project::new(name.to_string(), Some("test".to_string()), 80.0, 16.0)
    }

    // Tests that execute delegates to the writer exactly once
    // Verifies:
    // - The writer records a single insert
    // - The recorded project is the one passed in, field for field
    #[tokio::test]
    async fn test_execute_delegates_single_insert() {
        let writer = Arc::new(RecordingWriter::default());
        let interactor = CreateProjectInteractor::new(writer.clone());

        let project = sample_project("Landing page redesign");
        let project_id = project.id.value;
        let created_at = project.created_at;

        interactor.execute(project).await.expect("execute");

        let inserted = writer.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].id.value, project_id);
        assert_eq!(inserted[0].name, "Landing page redesign");
        assert_eq!(inserted[0].description.as_deref(), Some("test"));
        assert_eq!(inserted[0].hourly_rate, 80.0);
        assert_eq!(inserted[0].estimated_hours, 16.0);
        assert_eq!(inserted[0].created_at, created_at);
    }

    // Tests that consecutive calls reach the writer in call order
    #[tokio::test]
    async fn test_execute_preserves_call_order() {
        let writer = Arc::new(RecordingWriter::default());
        let interactor = CreateProjectInteractor::new(writer.clone());

        interactor.execute(sample_project("first")).await.expect("first insert");
        interactor.execute(sample_project("second")).await.expect("second insert");

        let inserted = writer.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 2);
        assert_eq!(inserted[0].name, "first");
        assert_eq!(inserted[1].name, "second");
    }

    // Tests that a writer failure reaches the caller unchanged
    // Verifies:
    // - The error is the writer's own (pool closed), not a rewrapped one
    #[tokio::test]
    async fn test_execute_propagates_writer_error() {
        let interactor = CreateProjectInteractor::new(Arc::new(UnavailableWriter::default()));

        let err = interactor
            .execute(sample_project("doomed"))
            .await
            .expect_err("writer is unavailable");

        match err {
            AppError::DatabaseError(sqlx::Error::PoolClosed) => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // Tests that a failing call still performed exactly one writer operation
    #[tokio::test]
    async fn test_execute_no_retry_on_error() {
        let writer = Arc::new(UnavailableWriter::default());
        let interactor = CreateProjectInteractor::new(writer.clone());

        let _ = interactor.execute(sample_project("doomed")).await;

        assert_eq!(*writer.calls.lock().unwrap(), 1);
    }
}
