use serde::{Deserialize, Serialize};

/// A single work history entry. All fields are free text; dates are whatever
/// the submitter wrote ("October 2022", "Present").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub logo: String,
}

/// A single education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub course: String,
    pub school: String,
    pub start_date: String,
    pub end_date: String,
    pub grade: String,
    pub logo: String,
}

/// A single skill entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: String,
    pub logo: String,
}
