use serde::Serialize;

use crate::conf::settings;
use crate::pkg::internal::extract::{
    extract_contact, extract_email, extract_name, extract_profile_summary, extract_skills,
};
use crate::pkg::internal::read::{extract_document, DocumentFormat};
use crate::pkg::internal::skills::{
    calculate_match_score, parse_desired_skills, Verdict, SKILL_VOCABULARY,
};
use crate::pkg::internal::text::ResumeText;
use crate::prelude::{EvalError, Result};

#[derive(Debug, Serialize)]
pub struct Evaluation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub contact: String,
    pub email: String,
    pub profile_summary: String,
    pub resume_skills: Vec<String>,
    pub desired_skills: Vec<String>,
    pub match_score: f64,
    pub result: Verdict,
}

/// Single entry point: document bytes plus a format tag and the desired
/// skill list in, one evaluation record out. The caller owns the upload
/// and is free to drop it as soon as this returns.
pub fn evaluate(data: &[u8], format_tag: &str, desired_skills_csv: &str) -> Result<Evaluation> {
    let format: DocumentFormat = format_tag.parse()?;
    let desired_skills = parse_desired_skills(desired_skills_csv);
    if desired_skills.is_empty() {
        return Err(EvalError::EmptyDesiredSkills);
    }

    let raw = extract_document(data, format)?;
    let text = ResumeText::new(raw);

    let name = extract_name(text.lines());
    let contact = extract_contact(text.flat());
    let email = extract_email(text.flat());
    let profile_summary = extract_profile_summary(text.lines());
    let resume_skills = extract_skills(text.flat(), &SKILL_VOCABULARY);

    let match_score = calculate_match_score(&resume_skills, &desired_skills)?;
    let result = Verdict::from_score(match_score);
    tracing::debug!(
        "evaluated resume: {} skills found, score {:.2}, {:?}",
        resume_skills.len(),
        match_score,
        result
    );

    Ok(Evaluation {
        name: settings.include_name.then_some(name),
        contact,
        email,
        profile_summary,
        resume_skills,
        desired_skills,
        match_score: (match_score * 100.0).round() / 100.0,
        result,
    })
}
