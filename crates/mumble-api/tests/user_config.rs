use bytes::Bytes;
use http::{header::AUTHORIZATION, Method, Request, Response};
use http_body_util::Full;
use iso8601_timestamp::Timestamp;
use mumble_api::{error::Error, MumbleApi, Session, User};
use mumble_config::api::Configuration;
use mumble_http_client::{Body, Client};
use mumble_type::{UserConfig, ValidationErrorKind};
use pretty_assertions::assert_eq;
use std::{
    convert::Infallible,
    sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    },
};
use tower::service_fn;

const BASE_URL: &str = "https://mumble.example.com/api/";

fn alice() -> User {
    User::new("alice").with_session(Session::new("alice.id.token"))
}

fn api_returning(body: &'static str) -> MumbleApi {
    let client = service_fn(move |req: Request<Body>| async move {
        assert_eq!(req.method(), Method::GET);
        assert_eq!(
            req.uri().to_string(),
            "https://mumble.example.com/api/users/alice/config"
        );
        assert_eq!(req.headers()[AUTHORIZATION], "alice.id.token");

        Ok::<_, Infallible>(Response::new(Full::new(Bytes::from_static(
            body.as_bytes(),
        ))))
    });

    MumbleApi::builder()
        .config(Configuration::new(BASE_URL))
        .client(Client::builder().service(client))
        .build()
}

fn counting_api(counter: Arc<AtomicU32>) -> MumbleApi {
    let client = service_fn(move |_req: Request<Body>| {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Infallible>(Response::new(Full::new(Bytes::new())))
        }
    });

    MumbleApi::builder()
        .config(Configuration::new(BASE_URL))
        .client(Client::builder().service(client))
        .build()
}

#[tokio::test]
async fn fetch_user_config() {
    let api = api_returning(r#"{"objectsBucketName":"mumble-objects-alice"}"#);
    let config = api.get_user_config(&alice()).await.unwrap();

    assert_eq!(
        config,
        UserConfig {
            objects_bucket_name: "mumble-objects-alice".into(),
        }
    );
}

#[tokio::test]
async fn invalid_user_config() {
    let api = api_returning(r#"{"objectsBucket":"mumble-objects-alice"}"#);
    let error = api.get_user_config(&alice()).await.unwrap_err();

    let Error::InvalidResponse(error) = error else {
        panic!("expected an invalid response error");
    };
    assert_eq!(error.path(), "$.objectsBucketName");
    assert_eq!(error.kind(), ValidationErrorKind::Missing);
}

#[tokio::test]
async fn user_config_is_not_an_object() {
    let api = api_returning(r#"["mumble-objects-alice"]"#);
    let error = api.get_user_config(&alice()).await.unwrap_err();

    assert!(matches!(error, Error::InvalidResponse(..)));
}

#[tokio::test]
async fn undecodable_user_config() {
    let api = api_returning("Internal Server Error");
    let error = api.get_user_config(&alice()).await.unwrap_err();

    assert!(matches!(error, Error::HttpClient(..)));
}

#[tokio::test]
async fn no_session() {
    let counter = Arc::new(AtomicU32::new(0));
    let api = counting_api(counter.clone());

    let error = api.get_user_config(&User::new("alice")).await.unwrap_err();
    assert!(matches!(error, Error::NoSession));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn expired_session() {
    let counter = Arc::new(AtomicU32::new(0));
    let api = counting_api(counter.clone());

    let expired = Timestamp::parse("2000-01-01T00:00:00Z").unwrap();
    let user = User::new("alice").with_session(Session::new("alice.id.token").with_expiry(expired));

    let error = api.get_user_config(&user).await.unwrap_err();
    assert!(matches!(error, Error::NoSession));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}
