pub mod course;
pub mod section;

pub use course::{Course, CourseQuery, CourseStatus, CourseView, NewCourseRequest, UpdateCourseRequest};
pub use section::{LessonVideo, Section, SectionMaterial};
