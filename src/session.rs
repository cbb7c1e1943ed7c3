use crate::config::Config;
use crate::display::{divider_width, show_header, show_madlib};
use crate::menu::{choose_template, show_templates};
use crate::prompt::gather_prompt_inputs;
use crate::store::{read_template, save_to_file};
use crate::template::merge;
use colored::*;
use eyre::{Context, Result};
use std::io::{BufRead, Write};

/// Fill the blanks of a parsed template with the collected answers
pub fn generate_madlib(blank: &str, answers: &[String]) -> Result<String> {
    let text = merge(blank, answers).context("Failed to merge answers into template")?;
    Ok(text)
}

/// Run one full madlib: menu, prompts, result, saved file
pub fn play<R: BufRead, W: Write>(config: &Config, input: &mut R, out: &mut W) -> Result<String> {
    let width = divider_width(config);

    show_header(out, config, width)?;
    show_templates(out, &config.templates.titles)?;

    let selection = choose_template(config, input, out)?;
    let template = read_template(&selection.path)?;

    let (blank, answers) = gather_prompt_inputs(config, &template, input, out)?;
    let text = generate_madlib(&blank, &answers)?;

    show_madlib(out, config, width, &text)?;

    save_to_file(&config.output.path, &text)?;
    writeln!(
        out,
        "{} {}",
        config.messages.saved,
        config.output.path.display().to_string().cyan()
    )
    .context("Failed to write save notice")?;

    Ok(text)
}
