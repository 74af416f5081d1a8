use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MomoConfig {
    pub llm: LlmConfig,
    pub pet: PetDefaults,
    pub storage: StorageConfig,
    pub sim: SimConfig,
}

impl MomoConfig {
    /// Load config from a TOML file, falling back to defaults for missing
    /// fields. After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: MomoConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return
    /// defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("MOMO_LLM_API_KEY") {
            self.llm.api_key = Some(v);
        }
        if let Ok(v) = std::env::var("MOMO_LLM_MODEL") {
            self.llm.model = v;
        }
        if let Ok(v) = std::env::var("MOMO_LLM_BASE_URL") {
            self.llm.base_url = v;
        }
        if let Ok(v) = std::env::var("MOMO_DATA_DIR") {
            self.storage.data_dir = v;
        }
        if let Ok(v) = std::env::var("MOMO_TICK_INTERVAL_SECS") {
            if let Ok(n) = v.parse() {
                self.sim.tick_interval_secs = n;
            }
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API key for the chat provider. Absent or empty means the
    /// orchestrator runs in fallback-only mode; this is decided once at
    /// startup, never re-checked per message.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// How many prior messages to include in each prompt, oldest first.
    pub history_window: usize,
    /// Seconds to wait for the remote call before falling back.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            max_tokens: 120,
            temperature: 0.9,
            history_window: 8,
            timeout_secs: 30,
        }
    }
}

impl LlmConfig {
    /// True when a usable key is configured. Computed once at startup to
    /// pick remote vs. fallback-only mode.
    pub fn remote_available(&self) -> bool {
        self.api_key.as_deref().map_or(false, |k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PetDefaults {
    pub name: String,
    pub personality: String,
    pub character: String,
}

impl Default for PetDefaults {
    fn default() -> Self {
        Self {
            name: "Momo".to_string(),
            personality: "playful".to_string(),
            character: "mochi".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for persisted state files.
    pub data_dir: String,
    /// Key under which the pet state is stored.
    pub state_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            state_key: "pet".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Periodic decay tick cadence for the host loop.
    pub tick_interval_secs: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: 30,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
