use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;

/// Small persistent key/value store backed by a JSON file.
///
/// Changes stay in memory until [`Preferences::commit`].
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl Preferences {
    /// Loads preferences from `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("failed to parse preferences {}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read preferences {}", path.display()));
            }
        };

        Ok(Self { path, values })
    }

    /// Returns the stored flag, or `default` when absent or not a boolean.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), Value::Bool(value));
    }

    /// Writes the store to disk, creating parent directories as needed.
    pub fn commit(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let text = serde_json::to_string_pretty(&self.values)
            .context("failed to serialize preferences")?;
        fs::write(&self.path, text)
            .with_context(|| format!("failed to write preferences {}", self.path.display()))
    }
}
