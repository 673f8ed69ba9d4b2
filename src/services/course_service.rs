use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{
    Course, CourseQuery, CourseStatus, CourseView, NewCourseRequest, UpdateCourseRequest,
};

/// Attribute a query filters on, parsed from the caller-supplied token.
/// An unrecognized token means no filtering at all: callers get the full
/// record set back rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchField {
    Title,
    Description,
    Status,
}

impl SearchField {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "Title" => Some(SearchField::Title),
            "Description" => Some(SearchField::Description),
            "Status" => Some(SearchField::Status),
            _ => None,
        }
    }

    /// Title/Description match on case-insensitive containment, Status on a
    /// case-insensitive prefix of the variant name. An empty search string
    /// matches every record either way.
    fn matches(self, course: &Course, search: &str) -> bool {
        let search = search.to_lowercase();
        match self {
            SearchField::Title => course.title.to_lowercase().contains(&search),
            SearchField::Description => course.description.to_lowercase().contains(&search),
            SearchField::Status => course.status.as_str().to_lowercase().starts_with(&search),
        }
    }
}

/// Attribute a query sorts on. Same pass-through policy as [`SearchField`]:
/// the pair (field, direction) must both parse or no sorting happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortField {
    Title,
    Description,
    Status,
    CreatedAt,
}

impl SortField {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "Title" => Some(SortField::Title),
            "Description" => Some(SortField::Description),
            "Status" => Some(SortField::Status),
            "CreatedAt" => Some(SortField::CreatedAt),
            _ => None,
        }
    }

    fn compare(self, a: &Course, b: &Course) -> Ordering {
        match self {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Description => a.description.cmp(&b.description),
            SortField::Status => a.status.cmp(&b.status),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    const ASC: &'static str = "ASC";
    const DESC: &'static str = "DESC";

    fn parse(token: &str) -> Option<Self> {
        match token {
            Self::ASC => Some(SortOrder::Asc),
            Self::DESC => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Course management operations. Absent lookup results are `Ok(None)` /
/// `Ok(false)`, never errors; only malformed input or an update against a
/// missing record fails.
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Creates a course with a fresh id and timestamp. `status` defaults to
    /// [`CourseStatus::Pending`] when not given.
    async fn create_course(
        &self,
        req: Option<NewCourseRequest>,
        status: Option<CourseStatus>,
    ) -> Result<CourseView, AppError>;

    async fn get_course_by_id(&self, course_id: Uuid) -> Result<Option<CourseView>, AppError>;

    /// Looks up the first course whose title matches exactly. A missing
    /// title argument is an error; an empty title is a valid search value.
    async fn get_course_by_title(
        &self,
        title: Option<String>,
    ) -> Result<Option<CourseView>, AppError>;

    async fn get_all_courses(&self) -> Result<Vec<CourseView>, AppError>;

    /// Filters then sorts a snapshot of the store according to the query's
    /// string selectors. Unrecognized selectors pass records through
    /// unfiltered/unsorted.
    async fn get_filtered_courses(
        &self,
        query: Option<CourseQuery>,
    ) -> Result<Vec<CourseView>, AppError>;

    /// Updates title, description and status of an existing course. Id and
    /// creation timestamp are immutable.
    async fn update_course(&self, req: Option<UpdateCourseRequest>)
        -> Result<CourseView, AppError>;

    /// Removes the course with the given id. Returns whether anything was
    /// removed; an unknown id is not an error.
    async fn delete_course(&self, course_id: Uuid) -> Result<bool, AppError>;
}

/// In-memory course store and query engine. The list is the authoritative
/// state for the process lifetime and insertion order is the default
/// iteration order. Reads share the lock; mutations take it exclusively.
///
/// Every operation completes synchronously apart from awaiting the lock;
/// the async surface exists so a persistence-backed implementation can slot
/// in behind the same trait.
pub struct InMemoryCourseService {
    courses: RwLock<Vec<Course>>,
}

impl InMemoryCourseService {
    pub fn new() -> Self {
        Self {
            courses: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryCourseService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseService for InMemoryCourseService {
    async fn create_course(
        &self,
        req: Option<NewCourseRequest>,
        status: Option<CourseStatus>,
    ) -> Result<CourseView, AppError> {
        let req = req.ok_or_else(|| {
            AppError::InvalidArgument("course creation data is required".to_string())
        })?;

        if req.title.is_empty() {
            return Err(AppError::InvalidArgument(
                "course title is required and cannot be empty".to_string(),
            ));
        }

        let course = Course {
            id: Uuid::new_v4(),
            title: req.title,
            description: req.description,
            status: status.unwrap_or(CourseStatus::Pending),
            created_at: Utc::now(),
            sections: Vec::new(),
        };
        let view = CourseView::from(&course);

        let mut courses = self.courses.write().await;
        courses.push(course);
        info!("created course {}", view.id);

        Ok(view)
    }

    async fn get_course_by_id(&self, course_id: Uuid) -> Result<Option<CourseView>, AppError> {
        let courses = self.courses.read().await;
        Ok(courses
            .iter()
            .find(|c| c.id == course_id)
            .map(CourseView::from))
    }

    async fn get_course_by_title(
        &self,
        title: Option<String>,
    ) -> Result<Option<CourseView>, AppError> {
        let title = title.ok_or_else(|| {
            AppError::InvalidArgument("course title is required to search by title".to_string())
        })?;

        let courses = self.courses.read().await;
        Ok(courses
            .iter()
            .find(|c| c.title == title)
            .map(CourseView::from))
    }

    async fn get_all_courses(&self) -> Result<Vec<CourseView>, AppError> {
        let courses = self.courses.read().await;
        Ok(courses.iter().map(CourseView::from).collect())
    }

    async fn get_filtered_courses(
        &self,
        query: Option<CourseQuery>,
    ) -> Result<Vec<CourseView>, AppError> {
        let query = query.ok_or_else(|| {
            AppError::InvalidArgument("course query parameters are required".to_string())
        })?;

        let courses = self.courses.read().await;

        let mut matched: Vec<&Course> = match SearchField::parse(&query.search_by) {
            Some(field) => courses
                .iter()
                .filter(|c| field.matches(c, &query.search_string))
                .collect(),
            None => courses.iter().collect(),
        };

        // Stable sort, so ties keep their post-filter order. DESC reverses
        // the comparator, not the result, which preserves that stability.
        if let (Some(field), Some(order)) = (
            SortField::parse(&query.sort_by),
            SortOrder::parse(&query.sort_order),
        ) {
            matched.sort_by(|a, b| match order {
                SortOrder::Asc => field.compare(a, b),
                SortOrder::Desc => field.compare(a, b).reverse(),
            });
        }

        debug!(
            "query matched {} of {} courses (searchBy={:?}, sortBy={:?})",
            matched.len(),
            courses.len(),
            query.search_by,
            query.sort_by
        );

        Ok(matched.into_iter().map(CourseView::from).collect())
    }

    async fn update_course(
        &self,
        req: Option<UpdateCourseRequest>,
    ) -> Result<CourseView, AppError> {
        let req = req.ok_or_else(|| {
            AppError::InvalidArgument("course update data is required".to_string())
        })?;

        if req.title.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "course title is required and cannot be empty or whitespace".to_string(),
            ));
        }

        let status = CourseStatus::from_exact(&req.status).ok_or_else(|| {
            AppError::InvalidArgument(format!(
                "invalid course status '{}': valid statuses are Pending, Approved or Rejected",
                req.status
            ))
        })?;

        let mut courses = self.courses.write().await;
        let course = courses.iter_mut().find(|c| c.id == req.id).ok_or_else(|| {
            AppError::NotFound(format!("course with id '{}' was not found", req.id))
        })?;

        course.title = req.title;
        course.description = req.description;
        course.status = status;
        info!("updated course {}", course.id);

        Ok(CourseView::from(&*course))
    }

    async fn delete_course(&self, course_id: Uuid) -> Result<bool, AppError> {
        if course_id.is_nil() {
            return Err(AppError::InvalidArgument(
                "course id cannot be empty".to_string(),
            ));
        }

        let mut courses = self.courses.write().await;
        match courses.iter().position(|c| c.id == course_id) {
            Some(index) => {
                courses.remove(index);
                info!("deleted course {}", course_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
