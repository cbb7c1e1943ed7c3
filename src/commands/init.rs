use crate::config::Config;
use colored::*;
use eyre::{Context, Result};
use std::fs;
use std::path::Path;

pub fn run(config: &Config) -> Result<()> {
    init(Path::new("."), config)
}

pub fn init(work_dir: &Path, config: &Config) -> Result<()> {
    let madlib_dir = Config::local_config_dir(work_dir);

    if madlib_dir.exists() {
        println!(
            "{} .madlib/ already exists. Use {} to reinitialize.",
            "⚠".yellow(),
            "rm -rf .madlib".cyan()
        );
        return Ok(());
    }

    fs::create_dir_all(&madlib_dir).context("Failed to create .madlib directory")?;
    println!("{} Created {}", "✓".green(), ".madlib/".cyan());

    config.save_local(work_dir)?;
    println!("{} Created {}", "✓".green(), ".madlib/madlib.yml".cyan());

    println!();
    println!("Next steps:");
    println!("  1. Edit {} to add titles or change messages", ".madlib/madlib.yml".cyan());
    println!(
        "  2. Put templates in {} named like {}",
        config.templates.dir.display().to_string().cyan(),
        format!("<title>{}", config.templates.suffix).cyan()
    );
    println!("  3. Run {} to play", "madlib".cyan());

    Ok(())
}
