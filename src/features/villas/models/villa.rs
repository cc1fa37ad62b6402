use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a villa row. The id is assigned by storage on insert
/// and never changes afterwards.
#[derive(Debug, Clone, FromRow)]
pub struct Villa {
    pub id: i64,
    pub name: String,
    pub detail: String,
    pub occupants: i32,
    pub square_meters: i32,
    pub rate: f64,
    pub amenity: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
