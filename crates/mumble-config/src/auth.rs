//! Settings of the hosted identity provider
//!
//! The client never interprets these. They are carried so that whatever signs the user in can be configured from the same file.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OAuthConfiguration {
    pub domain: SmolStr,
    pub scope: Vec<SmolStr>,
    pub redirect_sign_in: SmolStr,
    pub redirect_sign_out: SmolStr,
    pub response_type: SmolStr,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    pub region: SmolStr,
    pub user_pool_id: SmolStr,
    pub user_pool_web_client_id: SmolStr,
    pub identity_pool_id: SmolStr,
    pub oauth: OAuthConfiguration,
}

impl Configuration {
    /// Name of the identity provider as used in identity pool logins
    #[must_use]
    pub fn provider_name(&self) -> String {
        format!(
            "cognito-idp.{}.amazonaws.com/{}",
            self.region, self.user_pool_id
        )
    }
}
