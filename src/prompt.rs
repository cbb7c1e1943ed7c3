use crate::config::Config;
use crate::template::parse;
use eyre::{Context, Result};
use std::io::{BufRead, Write};

/// Prompt shown for one label: the prefix plus the trimmed, lowercased label
pub fn prompt_label(prefix: &str, label: &str) -> String {
    format!("{} {}: ", prefix, label.trim().to_lowercase())
}

/// Ask for one answer per label, in order
pub fn gather_answers<R: BufRead, W: Write>(
    config: &Config,
    labels: &[String],
    input: &mut R,
    out: &mut W,
) -> Result<Vec<String>> {
    let mut answers = Vec::with_capacity(labels.len());

    for label in labels {
        write!(out, "{}", prompt_label(&config.messages.prompt_prefix, label)).context("Failed to write prompt")?;
        out.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read answer")?;
        if read == 0 {
            return Err(eyre::eyre!("Input closed while asking for '{}'", label.trim()));
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        answers.push(answer.to_string());
    }

    Ok(answers)
}

/// Parse a template and collect answers for its blanks
///
/// Returns the blank template together with the answers, ready to merge.
pub fn gather_prompt_inputs<R: BufRead, W: Write>(
    config: &Config,
    template: &str,
    input: &mut R,
    out: &mut W,
) -> Result<(String, Vec<String>)> {
    let parsed = parse(template);
    let answers = gather_answers(config, &parsed.labels, input, out)?;
    Ok((parsed.blank, answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_label() {
        assert_eq!(prompt_label("Enter a", "Adjective"), "Enter a adjective: ");
        assert_eq!(prompt_label("Enter a", "  Plural Noun "), "Enter a plural noun: ");
    }

    #[test]
    fn test_gather_user_inputs() {
        let config = Config::default();
        let mut input = Cursor::new("dark\nstormy\nnight\n");
        let mut out = Vec::new();

        let (blank, answers) = gather_prompt_inputs(
            &config,
            "It was a {Adjective} and {Adjective} {Noun}.",
            &mut input,
            &mut out,
        )
        .unwrap();

        assert_eq!(blank, "It was a {} and {} {}.");
        assert_eq!(answers, vec!["dark", "stormy", "night"]);

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("Enter a adjective: ").count(), 2);
        assert!(output.contains("Enter a noun: "));
    }

    #[test]
    fn test_answers_keep_inner_spaces() {
        let config = Config::default();
        let labels = vec!["Place".to_string()];
        let mut input = Cursor::new(" the moon \r\n");
        let mut out = Vec::new();

        let answers = gather_answers(&config, &labels, &mut input, &mut out).unwrap();
        assert_eq!(answers, vec![" the moon "]);
    }

    #[test]
    fn test_last_answer_without_newline() {
        let config = Config::default();
        let labels = vec!["Noun".to_string()];
        let mut input = Cursor::new("cat");
        let mut out = Vec::new();

        assert_eq!(gather_answers(&config, &labels, &mut input, &mut out).unwrap(), vec!["cat"]);
    }

    #[test]
    fn test_input_closed_early() {
        let config = Config::default();
        let labels = vec!["Noun".to_string(), "Verb".to_string()];
        let mut input = Cursor::new("cat\n");
        let mut out = Vec::new();

        assert!(gather_answers(&config, &labels, &mut input, &mut out).is_err());
    }

    #[test]
    fn test_no_labels_asks_nothing() {
        let config = Config::default();
        let mut input = Cursor::new("");
        let mut out = Vec::new();

        let (blank, answers) = gather_prompt_inputs(&config, "Just text.", &mut input, &mut out).unwrap();
        assert_eq!(blank, "Just text.");
        assert!(answers.is_empty());
        assert!(out.is_empty());
    }
}
