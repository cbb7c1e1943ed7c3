use crate::config::Config;
use crate::store::path_from_title;
use colored::*;
use eyre::{Context, Result};
use std::io::{self, Write};

pub fn run(config: &Config) -> Result<()> {
    list(config, &mut io::stdout())
}

pub fn list<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    writeln!(out, "{}", "Templates:".bold()).context("Failed to write template list")?;

    for (i, title) in config.templates.titles.iter().enumerate() {
        let path = path_from_title(&config.templates.dir, &config.templates.suffix, title);
        let mark = if path.exists() { "✓".green() } else { "✗".red() };
        writeln!(
            out,
            "  {} {}. {} {}",
            mark,
            i + 1,
            title,
            path.display().to_string().dimmed()
        )
        .context("Failed to write template list")?;
    }

    Ok(())
}
