use iso8601_timestamp::Timestamp;
use smol_str::SmolStr;
use std::fmt;

/// Signed-in session issued by the identity provider
#[derive(Clone, Eq, PartialEq)]
pub struct Session {
    id_token: SmolStr,
    expires_at: Option<Timestamp>,
}

impl Session {
    /// Session around an identity token (a JWT)
    #[must_use]
    pub fn new<T>(id_token: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self {
            id_token: id_token.into(),
            expires_at: None,
        }
    }

    #[must_use]
    pub fn with_expiry(self, expires_at: Timestamp) -> Self {
        Self {
            expires_at: Some(expires_at),
            ..self
        }
    }

    #[must_use]
    pub fn id_token(&self) -> &str {
        &self.id_token
    }

    #[must_use]
    pub fn expires_at(&self) -> Option<Timestamp> {
        self.expires_at
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.expires_at
            .map_or(true, |expires_at| expires_at > Timestamp::now_utc())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id_token", &"[redacted]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    username: SmolStr,
    session: Option<Session>,
}

impl User {
    /// User that isn't signed in
    #[must_use]
    pub fn new<U>(username: U) -> Self
    where
        U: Into<SmolStr>,
    {
        Self {
            username: username.into(),
            session: None,
        }
    }

    #[must_use]
    pub fn with_session(self, session: Session) -> Self {
        Self {
            session: Some(session),
            ..self
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The session, if there is one and it hasn't expired yet
    #[must_use]
    pub fn active_session(&self) -> Option<&Session> {
        self.session.as_ref().filter(|session| session.is_active())
    }
}
