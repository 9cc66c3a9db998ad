//! Question records and request payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::lenient;

/// Question record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Create question request
///
/// Every field is optional at the transport boundary; the store's NOT NULL
/// constraints decide whether the record can be written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub difficulty: Option<i64>,
}

/// Search request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}
