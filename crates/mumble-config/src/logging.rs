use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

fn default_level() -> SmolStr {
    SmolStr::new_static("info")
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    /// Disabled logging discards every event
    #[serde(default)]
    pub enabled: bool,
    /// Fallback filter when `RUST_LOG` isn't set
    #[serde(default = "default_level")]
    pub level: SmolStr,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_level(),
        }
    }
}
