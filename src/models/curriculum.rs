use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Elementary,
    Intermediate,
    Advanced,
    Proficient,
}

impl CourseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "beginner",
            CourseLevel::Elementary => "elementary",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
            CourseLevel::Proficient => "proficient",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub level: CourseLevel,
    #[serde(default)]
    pub department: Option<String>,
    pub credits: u8,
    pub is_active: bool,
}

/// Payload for creating or updating a course from the admin form.
#[derive(Clone, PartialEq, Serialize, Default, Debug)]
pub struct CourseInput {
    pub code: String,
    pub name: String,
    pub description: String,
    pub level: String,
    pub credits: u8,
    pub is_active: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Lesson {
    pub id: i64,
    pub course: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub order: u32,
    pub is_active: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CourseMaterial {
    pub id: i64,
    pub course: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub material_type: String,
    #[serde(default)]
    pub url: Option<String>,
    pub is_active: bool,
}
