use serde::{Deserialize, Serialize};

/// Contact block shown in the resume header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub major: String,
    pub institution: String,
    /// Two-decimal GPA in [2.50, 4.00].
    pub gpa: f32,
    pub graduation_year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_year: i32,
    pub end_year: i32,
    /// Achievement lines without any leading bullet marker.
    pub bullets: Vec<String>,
}

impl ExperienceEntry {
    pub fn date_range(&self) -> String {
        format!("{} - {}", self.start_year, self.end_year)
    }
}

/// One fictitious candidate. Built fresh per resume and dropped once rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub personal: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    /// Most recent position first.
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
}
