use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "stockroom.json";
const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

/// Configuration for stockroom, stored as stockroom.json next to the
/// inventory file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Name of the backing inventory file, resolved against the working
    /// directory unless absolute.
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,
}

fn default_inventory_file() -> String {
    DEFAULT_INVENTORY_FILE.to_string()
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            inventory_file: default_inventory_file(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get_inventory_file(&self) -> &str {
        &self.inventory_file
    }

    pub fn set_inventory_file(&mut self, file: &str) {
        self.inventory_file = file.to_string();
    }
}
