pub mod api;
pub mod auth;
pub mod logging;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    pub api: api::Configuration,
    pub auth: Option<auth::Configuration>,
    #[serde(default)]
    pub logging: logging::Configuration,
}

impl Configuration {
    pub async fn load<P>(path: P) -> eyre::Result<Self>
    where
        P: AsRef<Path>,
    {
        let content = fs::read_to_string(path).await?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> eyre::Result<Self> {
        toml::from_str(content).map_err(eyre::Report::from)
    }
}

#[cfg(test)]
mod test {
    use super::Configuration;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal() {
        let config = Configuration::parse(
            r#"
            [api]
            base-url = "https://api.mumble.example.com/"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url(), "https://api.mumble.example.com");
        assert!(config.auth.is_none());
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn full() {
        let config = Configuration::parse(
            r#"
            [api]
            base-url = "https://api.mumble.example.com"

            [auth]
            region = "ap-northeast-1"
            user-pool-id = "ap-northeast-1_abcdef"
            user-pool-web-client-id = "client"
            identity-pool-id = "ap-northeast-1:1234"

            [auth.oauth]
            domain = "mumble.auth.ap-northeast-1.amazoncognito.com"
            scope = ["email", "openid"]
            redirect-sign-in = "http://localhost:5173/"
            redirect-sign-out = "http://localhost:5173/"
            response-type = "code"

            [logging]
            enabled = true
            level = "debug"
            "#,
        )
        .unwrap();

        let auth = config.auth.unwrap();
        assert_eq!(
            auth.provider_name(),
            "cognito-idp.ap-northeast-1.amazonaws.com/ap-northeast-1_abcdef"
        );
        assert_eq!(auth.oauth.scope, ["email", "openid"]);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn missing_api_section() {
        assert!(Configuration::parse("[logging]\nenabled = true").is_err());
    }
}
