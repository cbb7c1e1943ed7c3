use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where templates live and which ones are offered
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplatesConfig {
    pub dir: PathBuf,
    pub suffix: String,
    pub titles: Vec<String>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./assets"),
            suffix: "_template.txt".to_string(),
            titles: vec![
                "Make Me A Video Game".to_string(),
                "Silly Story".to_string(),
                "Dark and Stormy Night".to_string(),
            ],
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./generated/madlib.txt"),
        }
    }
}

/// User-facing strings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub welcome: String,
    pub instructions: String,
    pub menu_prompt: String,
    pub invalid_selection: String,
    pub prompt_prefix: String,
    pub confirmation: String,
    pub saved: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            welcome: "Welcome to madlibs!".to_string(),
            instructions: "Pick a story, fill in the blanks, and see what you made.".to_string(),
            menu_prompt: "Which madlib would you like to play? ".to_string(),
            invalid_selection: "The selection you provided is not valid, please try again.".to_string(),
            prompt_prefix: "Enter a".to_string(),
            confirmation: "Great! let's get started creating".to_string(),
            saved: "Your madlib was saved to".to_string(),
        }
    }
}

/// Divider rendering
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub divider_char: char,
    pub default_width: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            divider_char: '=',
            default_width: 80,
        }
    }
}

/// Main configuration struct
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub templates: TemplatesConfig,
    pub output: OutputConfig,
    pub messages: MessagesConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Get the global config directory path
    pub fn global_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("madlib"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|d| d.join("madlib.yml"))
    }

    /// Get the local config directory path (relative to work_dir)
    pub fn local_config_dir(work_dir: &Path) -> PathBuf {
        work_dir.join(".madlib")
    }

    /// Get the local config file path (relative to work_dir)
    pub fn local_config_path(work_dir: &Path) -> PathBuf {
        Self::local_config_dir(work_dir).join("madlib.yml")
    }

    /// Load configuration with the cascade: explicit -> local -> global -> defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = Self::local_config_path(Path::new("."));
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(global_config) = Self::global_config_path()
            && global_config.exists()
        {
            match Self::load_from_file(&global_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", global_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        fs::write(&path, content).context("Failed to write config file")?;
        log::info!("Saved config to: {}", path.as_ref().display());
        Ok(())
    }

    /// Save to the local config path (.madlib/madlib.yml)
    pub fn save_local(&self, work_dir: &Path) -> Result<()> {
        self.save(Self::local_config_path(work_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.templates.dir, PathBuf::from("./assets"));
        assert_eq!(config.templates.suffix, "_template.txt");
        assert_eq!(config.templates.titles.len(), 3);
        assert_eq!(config.templates.titles[2], "Dark and Stormy Night");
        assert_eq!(config.output.path, PathBuf::from("./generated/madlib.txt"));
        assert_eq!(
            config.messages.invalid_selection,
            "The selection you provided is not valid, please try again."
        );
        assert_eq!(config.display.divider_char, '=');
        assert_eq!(config.display.default_width, 80);
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("madlib.yml");

        let config = Config::default();
        config.save(&config_path).unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.templates.titles, config.templates.titles);
        assert_eq!(loaded.output.path, config.output.path);
        assert_eq!(loaded.messages.welcome, config.messages.welcome);
    }

    #[test]
    fn test_load_from_yaml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("madlib.yml");

        let yaml = r#"
templates:
  dir: "./stories"
  titles:
    - "A"
    - "B"

output:
  path: "./out/story.txt"

messages:
  prompt_prefix: "Give me a"

display:
  divider_char: "-"
"#;

        let mut file = fs::File::create(&config_path).unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.templates.dir, PathBuf::from("./stories"));
        assert_eq!(config.templates.suffix, "_template.txt");
        assert_eq!(config.templates.titles, vec!["A", "B"]);
        assert_eq!(config.output.path, PathBuf::from("./out/story.txt"));
        assert_eq!(config.messages.prompt_prefix, "Give me a");
        assert_eq!(config.messages.welcome, "Welcome to madlibs!");
        assert_eq!(config.display.divider_char, '-');
        assert_eq!(config.display.default_width, 80);
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yml");
        assert!(Config::load(Some(&missing)).is_err());
    }
}
