use serde::{Deserialize, Serialize};

/// A demo profile or an uploaded résumé, reduced to the skills extracted from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub cv_id: String,
    #[serde(default, alias = "student_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}
