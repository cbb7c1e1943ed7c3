use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Positional insertion marker left in a blank template for each placeholder
pub const MARKER: &str = "{}";

/// A placeholder is `{`, the shortest run without `}` or a line break, then `}`
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}\n]*)\}").expect("placeholder regex is valid"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("Template has {expected} blanks but only {got} answers were given")]
    MissingAnswers { expected: usize, got: usize },

    #[error("Template has {expected} blanks but {got} answers were given")]
    SurplusAnswers { expected: usize, got: usize },
}

/// A template split into its blank form and the labels of its placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    pub blank: String,
    pub labels: Vec<String>,
}

/// Extract placeholder labels in order and replace each placeholder with a marker
pub fn parse(text: &str) -> ParsedTemplate {
    let labels: Vec<String> = PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect();
    let blank = PLACEHOLDER_REGEX.replace_all(text, MARKER).into_owned();

    log::debug!("Parsed template with {} placeholders", labels.len());
    ParsedTemplate { blank, labels }
}

/// Count the positional markers in a blank template
pub fn marker_count(blank: &str) -> usize {
    blank.matches(MARKER).count()
}

/// Substitute answers into the markers of a blank template, left to right
pub fn merge<S: AsRef<str>>(blank: &str, answers: &[S]) -> Result<String, MergeError> {
    let expected = marker_count(blank);
    let got = answers.len();
    if got < expected {
        return Err(MergeError::MissingAnswers { expected, got });
    }
    if got > expected {
        return Err(MergeError::SurplusAnswers { expected, got });
    }

    let mut merged = String::with_capacity(blank.len() + answers.iter().map(|a| a.as_ref().len()).sum::<usize>());
    let mut last = 0;
    for ((start, _), answer) in blank.match_indices(MARKER).zip(answers) {
        merged.push_str(&blank[last..start]);
        merged.push_str(answer.as_ref());
        last = start + MARKER.len();
    }
    merged.push_str(&blank[last..]);

    Ok(merged)
}
