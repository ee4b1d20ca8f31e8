use anyhow::Context;
use loophole_core::interpret::DEFAULT_TONE;
use loophole_core::{DEFAULT_OUTPUT_FILE, Lexicon, Mode};
use loophole_providers::{DEFAULT_BASE_URL, DEFAULT_MODEL, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const API_KEY_PLACEHOLDER: &str = "your-openai-api-key-here";

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub interpreter: InterpreterConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub lexicon: Lexicon,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "OpenAiConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "OpenAiConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl OpenAiConfig {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    const fn default_timeout_secs() -> u64 {
        60
    }

    /// The configured key, or `OPENAI_API_KEY` when the file has none.
    pub fn resolve_api_key(&self) -> anyhow::Result<String> {
        Self::pick_api_key(&self.api_key, std::env::var(API_KEY_ENV).ok())
    }

    fn pick_api_key(configured: &str, env: Option<String>) -> anyhow::Result<String> {
        let configured = configured.trim();
        if !configured.is_empty() && configured != API_KEY_PLACEHOLDER {
            return Ok(configured.to_string());
        }
        env.map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No API key configured. Set providers.openai.api_key in the config file or export {API_KEY_ENV}."
                )
            })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InterpreterConfig {
    #[serde(default = "InterpreterConfig::default_model")]
    pub model: String,
    #[serde(default = "InterpreterConfig::default_tone")]
    pub tone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            model: Self::default_model(),
            tone: Self::default_tone(),
            jurisdiction: None,
            retry: RetryPolicy::default(),
        }
    }
}

impl InterpreterConfig {
    fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    fn default_tone() -> String {
        DEFAULT_TONE.to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReportConfig {
    #[serde(default)]
    pub default_mode: Mode,
    #[serde(default = "ReportConfig::default_output_file")]
    pub output_file: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::default(),
            output_file: Self::default_output_file(),
        }
    }
}

impl ReportConfig {
    fn default_output_file() -> PathBuf {
        PathBuf::from(DEFAULT_OUTPUT_FILE)
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("loophole"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'loophole init' to create config.",
                config_path.display()
            );
        }

        Self::from_file(&config_path)
    }

    /// Load the config file if there is one, otherwise use defaults.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::from_file(&config_path)
        } else {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config JSON; the lexicon is normalized on the way in.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let mut config: Self = serde_json::from_str(content)?;
        config.lexicon = config.lexicon.normalized();
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Add your OpenAI API key (or export {API_KEY_ENV})");
        println!("   2. Run 'loophole explain -f regulation.txt' for an offline summary");
        println!("   3. Run 'loophole interpret -f regulation.txt' for a model interpretation");
        println!();
        println!("🔧 Configuration options:");
        println!("   - report.default_mode: neutral, simple, trader or risks");
        println!("   - interpreter.jurisdiction: passed to the model when set");
        println!("   - lexicon: replace the keyword and ambiguity word lists");
        println!();
        Ok(())
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "providers": {
    "openai": {
      "api_key": "your-openai-api-key-here",
      "base_url": "https://api.openai.com/v1",
      "timeout_secs": 60
    }
  },
  "interpreter": {
    "model": "gpt-4o-mini",
    "tone": "professional",
    "retry": {
      "base_delays_ms": [1000, 2000, 4000],
      "final_retries": 1,
      "final_delay_ms": 8000
    }
  },
  "report": {
    "default_mode": "neutral",
    "output_file": "loop-hole-finance-output.txt"
  }
}"#;
