use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_CONFIG_PATH: &str = "CASES_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const ENV_DATA_DIR: &str = "CASES_DATA_DIR";

const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";
const ENV_BASE_URL: &str = "ANTHROPIC_BASE_URL";
const ENV_MODEL: &str = "ANALYSIS_MODEL";
const ENV_MAX_TOKENS: &str = "ANALYSIS_MAX_TOKENS";

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20240620";
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Case categories shipped with the data set (file-name stems)
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "О_банкротстве_в_т.ч_юридического_лица",
    "о_направлении_гражданина__больного_алкоголизмом__etc",
    "О_признании_сделки_недействительной",
    "ОБ_ОБЯЗАНИИ__ПОНУЖДЕНИИ_(ИСПОЛНЕНИЯ_ТРЕБОВАНИЯ_etc",
    "Об_установлении_фактов__имеющих_юридическое_значение",
    "Об_установлении_фактов__имеющих_юридическое_значение_etc",
    "По_жалобам_на_нотариальные_действия_или_отказ_etc",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Overrides the built-in category list when present
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub categories: Vec<String>,
    /// Directory holding `{category}.json` and `{category}_analysis.json`
    pub data_dir: PathBuf,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            data_dir: PathBuf::from("."),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let file = Self::load_config_file(&config_path).unwrap_or_default();

        // Environment wins over the config file
        let data_dir = std::env::var(ENV_DATA_DIR)
            .ok()
            .map(PathBuf::from)
            .or(file.data_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let categories = match file.categories {
            Some(categories) if !categories.is_empty() => categories,
            _ => Config::default().categories,
        };

        Self {
            categories,
            data_dir,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse_config_file(path, &contents),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    fn parse_config_file(path: &Path, contents: &str) -> Option<ConfigFile> {
        let contents = contents.trim();
        if contents.is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Some(ConfigFile::default());
        }

        match serde_yaml::from_str(contents) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration from file");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for the language-model API, including the credential
///
/// Built once at startup and handed to the client that performs the call.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl LlmConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing(ENV_API_KEY))?;

        let base_url = lookup(ENV_BASE_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = lookup(ENV_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let max_tokens = match lookup(ENV_MAX_TOKENS) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid {}, using default", ENV_MAX_TOKENS);
                DEFAULT_MAX_TOKENS
            }),
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(Self {
            api_key,
            base_url,
            model,
            max_tokens,
        })
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}
