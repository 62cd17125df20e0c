use crate::{session::User, MumbleApi};
use mumble_type::UserConfig;

/// The signed-in user together with their configuration
///
/// The configuration is refetched whenever the user changes
pub struct CurrentUser {
    api: MumbleApi,
    user: Option<User>,
    user_config: Option<UserConfig>,
}

impl CurrentUser {
    #[must_use]
    pub fn new(api: MumbleApi) -> Self {
        Self {
            api,
            user: None,
            user_config: None,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn user_config(&self) -> Option<&UserConfig> {
        self.user_config.as_ref()
    }

    /// Switch the current user
    ///
    /// Setting the user that is already current does nothing. A failed configuration fetch is logged and leaves
    /// the configuration empty. The configuration of the previous user is never kept around.
    pub async fn set_user(&mut self, user: Option<User>) {
        if self.user == user {
            return;
        }

        self.user_config = None;
        self.user = user;

        let Some(ref user) = self.user else {
            return;
        };

        match self.api.get_user_config(user).await {
            Ok(user_config) => self.user_config = Some(user_config),
            Err(error) => tracing::dispatcher::with_default(self.api.dispatch(), || {
                error!(username = user.username(), ?error, "failed to get user config");
            }),
        }
    }
}
