use axum::Json;
use axum::extract::{Path, Query};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{CourseQuery, CourseView, NewCourseRequest, UpdateCourseRequest};
use crate::state::AppState;

#[derive(Deserialize)]
struct TitleSearchParams {
    title: Option<String>,
}

#[derive(Deserialize)]
struct UpdateCourseBody {
    title: String,
    #[serde(default)]
    description: String,
    status: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/search", get(get_course_by_title))
        .route("/courses/query", get(query_courses))
        .route(
            "/courses/{id}",
            get(get_course_by_id).put(update_course).delete(delete_course),
        )
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<CourseView>>, AppError> {
    let courses = state.courses.get_all_courses().await?;
    Ok(Json(courses))
}

async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<NewCourseRequest>,
) -> Result<Json<CourseView>, AppError> {
    let course = state.courses.create_course(Some(req), None).await?;
    Ok(Json(course))
}

async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CourseView>, AppError> {
    let course = state
        .courses
        .get_course_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("course with id '{}' was not found", id)))?;
    Ok(Json(course))
}

async fn get_course_by_title(
    State(state): State<AppState>,
    Query(params): Query<TitleSearchParams>,
) -> Result<Json<CourseView>, AppError> {
    let course = state
        .courses
        .get_course_by_title(params.title)
        .await?
        .ok_or_else(|| AppError::NotFound("no course with the given title".to_string()))?;
    Ok(Json(course))
}

async fn query_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> Result<Json<Vec<CourseView>>, AppError> {
    let courses = state.courses.get_filtered_courses(Some(query)).await?;
    Ok(Json(courses))
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCourseBody>,
) -> Result<Json<CourseView>, AppError> {
    let req = UpdateCourseRequest {
        id,
        title: body.title,
        description: body.description,
        status: body.status,
    };
    let course = state.courses.update_course(Some(req)).await?;
    Ok(Json(course))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = state.courses.delete_course(id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "course with id '{}' was not found",
            id
        )))
    }
}
