use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Nested course content. Carried as-is on the course record; the service
// performs no operations or validation on these.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub name: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub course_id: Uuid,
    #[serde(default)]
    pub lesson_videos: Vec<LessonVideo>,
    #[serde(default)]
    pub materials: Vec<SectionMaterial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonVideo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration_in_minutes: i32,
    pub order: i32,
    pub video_url: String,
    pub created_at: DateTime<Utc>,
    pub section_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMaterial {
    pub id: Uuid,
    pub title: String,
    pub file_url: String,
    pub created_at: DateTime<Utc>,
    pub section_id: Uuid,
}
