use regex::Regex;

/// Case-insensitive name matcher tolerant of a trailing parenthesized qualifier.
///
/// `NamePattern::new("weight")` matches `"Weight"`, `"weight (kg)"`, and
/// `"WEIGHT (measured weekly)"`, but not `"Body Weight"`. The requested name is matched
/// literally.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    #[must_use]
    pub fn new(name: &str) -> Self {
        let pattern = format!(r"^{}(?: \(.*\))?$", regex::escape(&name.to_lowercase()));

        Self {
            regex: Regex::new(&pattern).expect("an escaped literal with a fixed suffix is always a valid pattern"),
        }
    }

    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(&candidate.to_lowercase())
    }
}
