use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Course/teacher quality assessment round (survey in the backend).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Assessment {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub course: Option<i64>,
    pub status: String,
    #[serde(default)]
    pub response_count: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Feedback {
    pub id: i64,
    pub subject: String,
    pub message: String,
    pub category: String,
    /// 1-5, absent for free-form feedback.
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub submitted_by: Option<String>,
    pub status: String,
    pub created_at: NaiveDate,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ImprovementPlan {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub area: String,
    pub status: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}
