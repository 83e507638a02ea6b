use std::collections::HashSet;

use serde::Serialize;

use crate::prelude::{EvalError, Result};

/// The fixed universe of recognized skills. Extraction only ever returns
/// entries from this list, in this order.
pub const SKILL_VOCABULARY: [&str; 29] = [
    "Python",
    "Java",
    "Kotlin",
    "Machine Learning",
    "Data Analysis",
    "Communication",
    "Leadership",
    "Problem Solving",
    "Teamwork",
    "Android Development",
    "Firebase",
    "Google ML Kit",
    "MongoDB",
    "C",
    "C++",
    "DSA",
    "CA",
    "C#",
    "JavaScript",
    "Swift",
    "DBMS",
    "OOP",
    "Data Science",
    "AIML",
    "Node JS",
    "Express JS",
    "React JS",
    "React Native",
    "Web development",
];

/// Split the caller's comma-separated list. Entries are kept verbatim,
/// whitespace included; an empty input yields no entries.
pub fn parse_desired_skills(csv: &str) -> Vec<String> {
    if csv.is_empty() {
        return Vec::new();
    }
    csv.split(',').map(str::to_string).collect()
}

/// Share of the desired skills found in the resume. The denominator is
/// always the desired set, so an empty one is a validation error.
pub fn calculate_match_score(resume_skills: &[String], desired_skills: &[String]) -> Result<f64> {
    let desired: HashSet<&str> = desired_skills.iter().map(String::as_str).collect();
    if desired.is_empty() {
        return Err(EvalError::EmptyDesiredSkills);
    }
    let resume: HashSet<&str> = resume_skills.iter().map(String::as_str).collect();
    Ok(resume.intersection(&desired).count() as f64 / desired.len() as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Suitable,
    #[serde(rename = "Not Suitable")]
    NotSuitable,
}

impl Verdict {
    /// Judged on the unrounded score.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            Verdict::Suitable
        } else {
            Verdict::NotSuitable
        }
    }
}
