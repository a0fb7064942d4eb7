use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixes the random source; random from OS entropy when unset.
    pub seed: Option<u64>,
    pub bot: BotConfig,
    pub resources: ResourceConfig,
    pub knowledge: KnowledgeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub name: String,
    pub greetings: Vec<String>,
    pub farewells: Vec<String>,
    pub fallbacks: Vec<String>,
    pub farewell_triggers: Vec<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "Chatbot".to_string(),
            greetings: strings(&["Hello!", "Hi there!", "Hey!", "Greetings!"]),
            farewells: strings(&["Goodbye!", "See you later!", "Bye!", "Take care!"]),
            fallbacks: strings(&[
                "Interesting! Tell me more.",
                "I don’t have an answer for that yet. Try something else!",
            ]),
            farewell_triggers: strings(&["bye", "exit", "quit"]),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Directory holding `tokenizer.txt`, `stopwords.txt` and `lemmas.txt`.
    /// The compiled-in resources are used when unset.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// A `.toml` or `.json` knowledge file. The built-in table is used when unset.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Looks for `config.toml` in the working directory, then in the data
    /// directory, and falls back to defaults. Environment overrides apply last.
    pub fn load() -> Result<Self> {
        let mut candidates = vec![std::env::current_dir()?.join(CONFIG_FILE)];
        if let Ok(data_dir) = crate::utils::paths::get_data_dir() {
            candidates.push(data_dir.join(CONFIG_FILE));
        }

        let mut config = match candidates.iter().find(|p| p.exists()) {
            Some(path) => Self::read(path)?,
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE);
                Self::default()
            }
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Loads one specific file. Missing or malformed files are errors.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::read(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        info!("⚙️  Loaded configuration from {:?}", path);
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(seed) = std::env::var("PARROT_SEED") {
            let seed = seed
                .trim()
                .parse::<u64>()
                .with_context(|| format!("PARROT_SEED is not a number: {}", seed))?;
            self.seed = Some(seed);
        }
        if let Ok(dir) = std::env::var("PARROT_RESOURCES") {
            self.resources.dir = Some(PathBuf::from(dir));
        }
        if let Ok(path) = std::env::var("PARROT_KNOWLEDGE") {
            self.knowledge.path = Some(PathBuf::from(path));
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
