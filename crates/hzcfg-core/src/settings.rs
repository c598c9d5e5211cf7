//! Launcher settings file
//!
//! An optional TOML, JSON or YAML file that fixes the product, the classpath
//! roots and a base set of properties:
//!
//! ```toml
//! type = "client"
//! classpath = ["conf", "/opt/hazelcast/resources"]
//!
//! [properties]
//! "cluster.name" = "dev"
//! ```

use crate::{ConfigType, Properties, Result};
use hzcfg_fs::{ClassPath, ConfigStore, NormalizedPath};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Product whose configuration is loaded
    #[serde(rename = "type")]
    pub config_type: Option<ConfigType>,

    /// Classpath roots; relative entries are taken against the settings file's directory
    pub classpath: Vec<String>,

    /// Base properties, overridden by the environment and explicit definitions
    pub properties: Properties,

    #[serde(skip)]
    base_dir: Option<NormalizedPath>,
}

impl Settings {
    /// Load settings from a file, detecting the format from its extension.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let mut settings: Settings = ConfigStore::new().load(path)?;
        settings.base_dir = path.parent();
        tracing::debug!(path = %path, "Loaded launcher settings");
        Ok(settings)
    }

    /// Build the classpath described by these settings.
    ///
    /// `fallback_base` anchors relative entries when the settings were not
    /// loaded from a file.
    pub fn classpath(&self, fallback_base: &NormalizedPath) -> ClassPath {
        let base = self.base_dir.as_ref().unwrap_or(fallback_base);
        self.classpath
            .iter()
            .fold(ClassPath::new(), |classpath, entry| {
                classpath.with_root(base.resolve(entry))
            })
    }
}
