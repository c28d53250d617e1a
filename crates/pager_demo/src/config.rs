use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{bail, Context};
use pager_core::{ListConfig, DEFAULT_PAGE_SIZE};
use pager_logging::pager_info;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "pager_demo.ron";

/// Settings read from the demo's RON file. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub page_size: usize,
    /// Items the in-memory data source holds.
    pub total_items: usize,
    pub initial_items: Vec<String>,
    pub log_to_file: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE.get(),
            total_items: 35,
            initial_items: Vec::new(),
            log_to_file: false,
        }
    }
}

impl DemoConfig {
    pub fn list_config(&self) -> anyhow::Result<ListConfig<String>> {
        let Some(page_size) = NonZeroUsize::new(self.page_size) else {
            bail!("page_size must be positive");
        };
        Ok(ListConfig::new(page_size).with_initial_items(self.initial_items.iter().cloned()))
    }
}

/// Reads `path`; a missing file yields the defaults.
pub fn load(path: &Path) -> anyhow::Result<DemoConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(DemoConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let config: DemoConfig =
        ron::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    pager_info!("Loaded demo config from {:?}", path);
    Ok(config)
}
