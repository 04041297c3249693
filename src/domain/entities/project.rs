use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;

/// A freelance engagement: an hourly rate against an estimated effort.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: Id<Project>,
    pub name: String,
    pub description: Option<String>,
    pub hourly_rate: f64,
    pub estimated_hours: f64,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: String, description: Option<String>, hourly_rate: f64, estimated_hours: f64) -> Self {
        let now = Utc::now();

        Self {
            id: Id::generate(),
            name,
            description,
            hourly_rate,
            estimated_hours,
            created_at: now,
            updated_at: now,
        }
    }
}
