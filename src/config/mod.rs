use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub model: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    #[serde(default = "default_plan_file")]
    pub plan_file: String,

    #[serde(default = "default_plan_data_file")]
    pub plan_data_file: String,

    #[serde(default = "default_task_file")]
    pub task_file: String,
}

// Default value functions
fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_plan_file() -> String {
    "training_plan.md".to_string()
}

fn default_plan_data_file() -> String {
    "training_plan.json".to_string()
}

fn default_task_file() -> String {
    "practice_task.md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            plan_file: default_plan_file(),
            plan_data_file: default_plan_data_file(),
            task_file: default_task_file(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.python-trainer/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".python-trainer"))
    }

    /// Get config file path (~/.python-trainer/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config_file = Self::config_file()?;

        let mut config = if config_file.exists() {
            let contents =
                fs::read_to_string(&config_file).context("Failed to read config file")?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            tracing::info!("Config file not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

        let config_file = Self::config_file()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Apply API_KEY, BASE_URL and MODEL_NAME environment overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = env::var("API_KEY") {
            if !api_key.is_empty() {
                self.api.api_key = api_key;
            }
        }
        if let Ok(base_url) = env::var("BASE_URL") {
            if !base_url.is_empty() {
                self.api.base_url = base_url;
            }
        }
        if let Ok(model) = env::var("MODEL_NAME") {
            if !model.is_empty() {
                self.api.model = model;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://api.openai.com/v1");
        assert_eq!(config.api.timeout_seconds, 60);
        assert!(config.api.model.is_empty());
        assert_eq!(config.output.plan_file, "training_plan.md");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.api.base_url, deserialized.api.base_url);
        assert_eq!(config.output.task_file, deserialized.output.task_file);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[api]\nmodel = \"gpt-4o-mini\"\n").unwrap();

        assert_eq!(config.api.model, "gpt-4o-mini");
        assert_eq!(config.api.base_url, "https://api.openai.com/v1");
        assert_eq!(config.output.plan_data_file, "training_plan.json");
    }

    #[test]
    fn test_env_overrides() {
        env::set_var("API_KEY", "sk-test");
        env::set_var("BASE_URL", "https://llm.example.com/v1");
        env::set_var("MODEL_NAME", "test-model");

        let mut config = Config::default();
        config.apply_env_overrides();

        env::remove_var("API_KEY");
        env::remove_var("BASE_URL");
        env::remove_var("MODEL_NAME");

        assert_eq!(config.api.api_key, "sk-test");
        assert_eq!(config.api.base_url, "https://llm.example.com/v1");
        assert_eq!(config.api.model, "test-model");
    }
}
