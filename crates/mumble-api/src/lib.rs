#[macro_use]
extern crate tracing;

use self::error::{Error, Result};
use http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method, Request,
};
use mumble_config::api::Configuration;
use mumble_http_client::{Body, Client, ClientBuilder};
use mumble_type::{ap::ACTIVITY_STREAMS_MIME_TYPE, validate, NewPost, UserConfig};
use simd_json::OwnedValue;
use std::future::Future;
use tracing::{instrument::WithSubscriber, Dispatch};
use typed_builder::TypedBuilder;

pub mod collection;
pub mod current_user;
pub mod error;
pub mod session;

pub use self::{
    collection::{extract_post, OrderedCollection, OrderedCollectionPage},
    current_user::CurrentUser,
    session::{Session, User},
};

/// HTTP client builder matching what the API client uses by default
///
/// Responses aren't capped in size. Whether a document is acceptable is decided by validation alone.
#[must_use]
pub fn client_builder() -> ClientBuilder {
    Client::builder().content_length_limit(None)
}

/// Client of the Mumble API
///
/// Every call is a single attempt. Nothing is cached and nothing is retried.
#[derive(Clone, TypedBuilder)]
pub struct MumbleApi {
    config: Configuration,
    #[builder(default = client_builder().build())]
    client: Client,
    /// Sink for the client's log events
    ///
    /// Defaults to a dispatcher that drops everything
    #[builder(default = Dispatch::none(), setter(into))]
    dispatch: Dispatch,
}

impl MumbleApi {
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self::builder().config(config).build()
    }

    pub(crate) fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    fn user_url(&self, user: &User, resource: &str) -> String {
        format!(
            "{}/users/{}/{resource}",
            self.config.base_url(),
            user.username()
        )
    }

    /// Run a future with this client's dispatcher as the default
    pub(crate) async fn scoped<F>(&self, fut: F) -> F::Output
    where
        F: Future,
    {
        fut.with_subscriber(self.dispatch.clone()).await
    }

    /// Unauthenticated GET asking for Activity Streams JSON
    pub(crate) async fn get_activity_json(&self, url: &str) -> Result<OwnedValue> {
        let req = Request::builder()
            .method(Method::GET)
            .uri(url)
            .header(ACCEPT, ACTIVITY_STREAMS_MIME_TYPE)
            .body(Body::empty())?;

        let response = self.client.execute(req).await?;
        debug!(%url, status = %response.status(), "fetched activity streams document");

        Ok(response.json().await?)
    }

    /// Fetch the configuration of a user
    ///
    /// # Errors
    ///
    /// - The user has no active session (checked before anything is sent)
    /// - The request failed
    /// - The payload isn't a valid user configuration
    pub async fn get_user_config(&self, user: &User) -> Result<UserConfig> {
        self.scoped(async {
            let session = user.active_session().ok_or(Error::NoSession)?;
            debug!(username = user.username(), "fetching user config");

            let req = Request::builder()
                .method(Method::GET)
                .uri(self.user_url(user, "config"))
                .header(AUTHORIZATION, session.id_token())
                .body(Body::empty())?;

            let payload: OwnedValue = self.client.execute(req).await?.json().await?;
            validate::validate_user_config(&payload).map_err(|error| {
                debug!(%error, "invalid user config");
                Error::InvalidResponse(error)
            })
        })
        .await
    }

    /// Submit a post to the outbox of a user
    ///
    /// The response isn't inspected beyond logging unsuccessful status codes
    ///
    /// # Errors
    ///
    /// - The user has no active session (checked before anything is sent)
    /// - Serialising the post failed
    /// - The request failed
    pub async fn submit_post(&self, user: &User, post: &NewPost) -> Result<()> {
        self.scoped(async {
            let session = user.active_session().ok_or(Error::NoSession)?;
            debug!(username = user.username(), "submitting post");

            let req = Request::builder()
                .method(Method::POST)
                .uri(self.user_url(user, "outbox"))
                .header(AUTHORIZATION, session.id_token())
                .header(CONTENT_TYPE, ACTIVITY_STREAMS_MIME_TYPE)
                .body(Body::json(post)?)?;

            let response = self.client.execute(req).await?;
            if !response.status().is_success() {
                warn!(status = %response.status(), "outbox responded with an unsuccessful status");
            }

            Ok::<_, Error>(())
        })
        .await
    }

    /// Fetch the outbox collection of a user
    ///
    /// This doesn't require a session
    ///
    /// # Errors
    ///
    /// - The request failed
    /// - The payload isn't a collection with a `first` link
    pub async fn get_outbox(&self, user: &User) -> Result<OrderedCollection<'_>> {
        self.scoped(async {
            let payload = self
                .get_activity_json(&self.user_url(user, "outbox"))
                .await?;

            OrderedCollection::new(self, &payload)
        })
        .await
    }
}
