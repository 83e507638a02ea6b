/// Collapse every whitespace run to a single space and trim the ends.
/// Idempotent.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The two views of an extracted document the field extractors work on.
///
/// Name and summary extraction scan lines, so they need the raw
/// line-structured text; the pattern extractors run over the flattened
/// form. Both are fixed at construction.
#[derive(Debug)]
pub struct ResumeText {
    raw: String,
    flat: String,
}

impl ResumeText {
    pub fn new(raw: String) -> Self {
        let flat = normalize(&raw);
        Self { raw, flat }
    }

    pub fn lines(&self) -> std::str::Lines<'_> {
        self.raw.lines()
    }

    pub fn flat(&self) -> &str {
        &self.flat
    }
}
