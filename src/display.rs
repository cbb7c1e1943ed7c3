use crate::config::Config;
use colored::*;
use eyre::{Context, Result};
use std::io::Write;

/// Terminal width in columns, or the configured default when there is no terminal
pub fn divider_width(config: &Config) -> u16 {
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => columns,
        _ => config.display.default_width,
    }
}

pub fn show_divider<W: Write>(out: &mut W, config: &Config, width: u16) -> Result<()> {
    let line = config.display.divider_char.to_string().repeat(width as usize);
    writeln!(out, "{}", line.cyan()).context("Failed to write divider")
}

pub fn show_header<W: Write>(out: &mut W, config: &Config, width: u16) -> Result<()> {
    show_divider(out, config, width)?;
    writeln!(out, "{}", config.messages.welcome.bold()).context("Failed to write header")?;
    writeln!(out, "{}", config.messages.instructions.dimmed()).context("Failed to write header")?;
    show_divider(out, config, width)
}

/// Print the finished story between two dividers
pub fn show_madlib<W: Write>(out: &mut W, config: &Config, width: u16, text: &str) -> Result<()> {
    writeln!(out).context("Failed to write madlib")?;
    show_divider(out, config, width)?;
    writeln!(out, "{}", text).context("Failed to write madlib")?;
    show_divider(out, config, width)
}
