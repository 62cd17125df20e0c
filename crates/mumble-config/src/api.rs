use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    base_url: SmolStr,
}

impl Configuration {
    #[must_use]
    pub fn new<U>(base_url: U) -> Self
    where
        U: Into<SmolStr>,
    {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Base URL of the API without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
