//! Quiz request payloads

use serde::Deserialize;

use super::lenient;

/// Category selector sent by the quiz client
///
/// `id == 0` selects every category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Quiz round request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
}
