use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Section;

/// Review state of a course. Variant order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CourseStatus {
    Pending,
    Approved,
    Rejected,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Pending => "Pending",
            CourseStatus::Approved => "Approved",
            CourseStatus::Rejected => "Rejected",
        }
    }

    /// Case-sensitive exact match against the variant names. Used at the
    /// update boundary, where anything else is rejected.
    pub fn from_exact(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(CourseStatus::Pending),
            "Approved" => Some(CourseStatus::Approved),
            "Rejected" => Some(CourseStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: CourseStatus,
    pub created_at: DateTime<Utc>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourseRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
}

/// Filter/sort selectors as free-form strings. Tokens are matched against
/// the field names of [`CourseView`]; unrecognized values degrade to
/// pass-through rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseQuery {
    pub search_by: String,
    pub search_string: String,
    pub sort_by: String,
    pub sort_order: String,
}

impl Default for CourseQuery {
    fn default() -> Self {
        Self {
            search_by: "Title".to_string(),
            search_string: String::new(),
            sort_by: "Title".to_string(),
            sort_order: "ASC".to_string(),
        }
    }
}

/// Output-only projection of a course. Compared by value; never aliases
/// store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: CourseStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Course> for CourseView {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            description: course.description.clone(),
            status: course.status,
            created_at: course.created_at,
        }
    }
}
