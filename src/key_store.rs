use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted when the key store has no saved key.
pub const API_KEY_ENV_VAR: &str = "GROQ_API_KEY";

/// Fixed slot name for the Groq API key inside the store file.
const API_KEY_SLOT: &str = "groqApiKey";

const STORE_FILE_NAME: &str = "keys.json";

/// Small persistent key-value store holding the user-supplied API token.
/// Backed by a JSON file under `$RECIPE_FINDER_HOME` (default
/// `~/.recipe_finder/`).
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    pub fn open_default() -> Self {
        let dir = env::var_os("RECIPE_FINDER_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".recipe_finder")))
            .unwrap_or_else(|| PathBuf::from(".recipe_finder"));
        Self {
            path: dir.join(STORE_FILE_NAME),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved API key, if any. A missing store file is not an error.
    pub fn load_api_key(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read key store at {:?}", self.path))?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw)
            .with_context(|| format!("Key store at {:?} is not valid JSON", self.path))?;
        Ok(entries
            .get(API_KEY_SLOT)
            .filter(|key| !key.trim().is_empty())
            .cloned())
    }

    /// Persists the API key, creating the store directory on first use.
    pub fn save_api_key(&self, api_key: &str) -> Result<()> {
        let mut entries: BTreeMap<String, String> = if self.path.exists() {
            let raw = fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read key store at {:?}", self.path))?;
            serde_json::from_str(&raw).unwrap_or_default()
        } else {
            BTreeMap::new()
        };
        entries.insert(API_KEY_SLOT.to_string(), api_key.trim().to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create key store directory {:?}", parent))?;
        }
        let raw = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write key store at {:?}", self.path))?;
        Ok(())
    }

    /// Key resolution order: saved store entry first, then the environment
    /// (dotenv has already been applied by the caller). `None` means the
    /// external collaborator is simply not consulted.
    pub fn resolve_api_key(&self) -> Result<Option<String>> {
        if let Some(key) = self.load_api_key()? {
            return Ok(Some(key));
        }
        Ok(env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty()))
    }
}
