use lazy_static::lazy_static;
use regex::Regex;

pub const NOT_FOUND: &str = "Not Found";

const NAME_KEYWORDS: [&str; 2] = ["name", "full name"];

lazy_static! {
    // optional country code, then a 3-3-4 grouping with -, . or space
    // separators and optional parens around the first group
    static ref PHONE_RE: Regex =
        Regex::new(r"\b(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap();
    static ref EMAIL_RE: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
}

/// Candidate name, from the first line mentioning a name label, falling
/// back to the first non-blank line.
pub fn extract_name<'a>(lines: impl Iterator<Item = &'a str> + Clone) -> String {
    for line in lines.clone() {
        let lowered = line.to_lowercase();
        if NAME_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return line.split(':').next_back().unwrap_or(line).trim().to_string();
        }
    }
    for line in lines {
        if !line.trim().is_empty() {
            return line.trim().to_string();
        }
    }
    NOT_FOUND.to_string()
}

pub fn extract_contact(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// First five lines joined into one string, taken as the summary.
pub fn extract_profile_summary<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    let head: Vec<&str> = lines.take(5).collect();
    if head.is_empty() {
        return NOT_FOUND.to_string();
    }
    head.join(" ").trim().to_string()
}

/// Vocabulary entries that occur anywhere in the text, case-insensitive,
/// in vocabulary order.
pub fn extract_skills(text: &str, vocabulary: &[&str]) -> Vec<String> {
    let lowered = text.to_lowercase();
    vocabulary
        .iter()
        .filter(|skill| lowered.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}
