use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub campaign_type: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub budget: Option<String>,
    pub status: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Lead {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub status: String,
    pub source: String,
    #[serde(default)]
    pub campaign: Option<i64>,
    #[serde(default)]
    pub interest: String,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(default)]
    pub followup_date: Option<NaiveDate>,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for the lead capture form.
#[derive(Clone, PartialEq, Serialize, Default, Debug)]
pub struct LeadInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub source: String,
    pub interest: String,
}
