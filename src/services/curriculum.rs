use crate::models::{Course, CourseInput, CourseMaterial, Lesson, ListEnvelope};
use crate::services::api::{ApiClient, ApiError};

/// Courses, lessons and materials.
#[derive(Clone, PartialEq, Default)]
pub struct CurriculumService {
    api: ApiClient,
}

impl CurriculumService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list_courses(
        &self,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<Course>, ApiError> {
        self.api.get_json("/curriculum/courses/", params).await
    }

    pub async fn create_course(&self, input: &CourseInput) -> Result<Course, ApiError> {
        self.api.post_json("/curriculum/courses/", input).await
    }

    pub async fn update_course(&self, id: i64, input: &CourseInput) -> Result<Course, ApiError> {
        self.api
            .put_json(&format!("/curriculum/courses/{}/", id), input)
            .await
    }

    pub async fn delete_course(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/curriculum/courses/{}/", id)).await
    }

    pub async fn list_lessons(
        &self,
        course_id: i64,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<Lesson>, ApiError> {
        self.api
            .get_json(&format!("/curriculum/courses/{}/lessons/", course_id), params)
            .await
    }

    pub async fn delete_lesson(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(&format!("/curriculum/lessons/{}/", id)).await
    }

    pub async fn list_materials(
        &self,
        course_id: i64,
        params: &[(String, String)],
    ) -> Result<ListEnvelope<CourseMaterial>, ApiError> {
        self.api
            .get_json(&format!("/curriculum/courses/{}/materials/", course_id), params)
            .await
    }

    pub async fn delete_material(&self, id: i64) -> Result<(), ApiError> {
        self.api
            .delete(&format!("/curriculum/materials/{}/", id))
            .await
    }
}
