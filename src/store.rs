use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Derive a template's file path from its display title
///
/// The title is lowercased and spaces become underscores, then `suffix` is
/// appended and the name is placed under `dir`.
pub fn path_from_title(dir: &Path, suffix: &str, title: &str) -> PathBuf {
    let stem = title.to_lowercase().replace(' ', "_");
    dir.join(format!("{}{}", stem, suffix))
}

/// Read a template, dropping trailing whitespace and newlines
pub fn read_template(path: &Path) -> Result<String> {
    let content =
        fs::read_to_string(path).context(format!("Failed to read template {}", path.display()))?;
    Ok(content.trim_end().to_string())
}

/// Write text exactly as given, replacing any previous file
pub fn save_to_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).context("Failed to create output directory")?;
    }
    fs::write(path, text).context(format!("Failed to write {}", path.display()))?;
    log::info!("Saved madlib to: {}", path.display());
    Ok(())
}
