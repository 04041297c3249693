use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::project::Project;

/// Persistence capability for projects. Implementations own their failure
/// modes; callers see them through `AppResult` untouched.
#[async_trait]
pub trait ProjectWriter: Send + Sync {
    async fn insert(&self, project: Project) -> AppResult<()>;
}
