use crate::config::Config;
use crate::store::path_from_title;
use colored::*;
use eyre::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{choice} is not between 1 and {count}")]
    OutOfRange { choice: usize, count: usize },
}

/// The template picked from the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub title: String,
    pub path: PathBuf,
}

pub fn show_templates<W: Write>(out: &mut W, titles: &[String]) -> Result<()> {
    for (i, title) in titles.iter().enumerate() {
        writeln!(out, "  {}. {}", (i + 1).to_string().bold(), title).context("Failed to write template list")?;
    }
    Ok(())
}

/// Parse a 1-based menu choice into a 0-based index
pub fn validate_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let choice: usize = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;
    if choice == 0 || choice > count {
        return Err(SelectionError::OutOfRange { choice, count });
    }
    Ok(choice - 1)
}

/// Ask until a valid template number is entered
pub fn choose_template<R: BufRead, W: Write>(config: &Config, input: &mut R, out: &mut W) -> Result<Selection> {
    let titles = &config.templates.titles;
    if titles.is_empty() {
        return Err(eyre::eyre!("No templates are configured"));
    }

    loop {
        write!(out, "{}", config.messages.menu_prompt).context("Failed to write menu prompt")?;
        out.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("Failed to read selection")?;
        if read == 0 {
            return Err(eyre::eyre!("Input closed before a template was chosen"));
        }

        match validate_selection(&line, titles.len()) {
            Ok(index) => {
                let title = titles[index].clone();
                let path = path_from_title(&config.templates.dir, &config.templates.suffix, &title);
                writeln!(out, "{} {}...", config.messages.confirmation, title.green())
                    .context("Failed to write confirmation")?;
                log::info!("Selected template '{}' at {}", title, path.display());
                return Ok(Selection { title, path });
            }
            Err(e) => {
                log::debug!("Rejected selection: {}", e);
                writeln!(out, "{}", config.messages.invalid_selection.red()).context("Failed to write error")?;
            }
        }
    }
}
