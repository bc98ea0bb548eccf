use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fee line attached to a term's fee structure. Amounts are decimal strings
/// on the wire; the console displays them verbatim and never does arithmetic
/// on them.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct FeeItem {
    pub id: i64,
    pub name: String,
    pub fee_type: String,
    pub amount: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Payment {
    pub id: i64,
    pub invoice: i64,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    pub amount: String,
    pub payment_date: NaiveDate,
    pub payment_method: String,
    #[serde(default)]
    pub receipt_number: String,
    pub status: String,
}
