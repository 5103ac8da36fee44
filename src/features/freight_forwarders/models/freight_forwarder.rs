use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a rated company
#[derive(Debug, Clone, FromRow)]
pub struct FreightForwarder {
    pub id: Uuid,
    pub name: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
    pub headquarters_country: Option<String>,
    pub created_at: DateTime<Utc>,
}
