use std::sync::Arc;

use crate::services::CourseService;

#[derive(Clone)]
pub struct AppState {
    pub courses: Arc<dyn CourseService>,
}
