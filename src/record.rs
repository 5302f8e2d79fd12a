// src/record.rs

use serde::{Deserialize, Serialize};

// One parsed resume. Every field is attempted on every parse; a field the
// extractors could not fill stays None/empty rather than being an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub urls: Vec<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub skills: Vec<String>,
    pub yoe: Option<String>,
    pub location: Option<String>,
    pub projects: Vec<ProjectEntry>,
    pub predicted_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: Option<String>,
    pub tech_stack: Vec<String>,
}
