use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Classroom {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub building: Option<String>,
    pub capacity: u32,
    #[serde(default)]
    pub floor: Option<i32>,
    #[serde(default)]
    pub has_projector: bool,
    #[serde(default)]
    pub has_whiteboard: bool,
    pub is_available: bool,
}

/// Bookable teaching resource (projector cart, audio kit, ...).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub resource_type: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub location: Option<String>,
    pub status: String,
}
