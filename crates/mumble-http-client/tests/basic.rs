use bytes::Bytes;
use core::convert::Infallible;
use http::{header::USER_AGENT, Request, Response};
use http_body_util::Empty;
use mumble_http_client::{Body, Client};
use tower::service_fn;

#[tokio::test]
async fn basic_request() {
    let client = service_fn(|req: Request<Body>| async move {
        assert_eq!(req.uri().path_and_query().unwrap(), "/path");
        assert!(req.headers()[USER_AGENT]
            .to_str()
            .unwrap()
            .starts_with("mumble-http-client/"));

        Ok::<_, Infallible>(Response::new(Empty::<Bytes>::new()))
    });
    let client = Client::builder().service(client);

    let response = client.get("https://example.com/path").await.unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
async fn request_headers_take_precedence() {
    let client = service_fn(|req: Request<Body>| async move {
        assert_eq!(req.headers()["accept"], "text/plain");
        assert_eq!(req.headers()[USER_AGENT], "mumble-test");

        Ok::<_, Infallible>(Response::new(Empty::<Bytes>::new()))
    });
    let client = Client::builder()
        .default_header("accept", "application/activity+json")
        .unwrap()
        .user_agent("mumble-test")
        .unwrap()
        .service(client);

    let req = Request::builder()
        .uri("https://example.com/")
        .header("accept", "text/plain")
        .body(Body::empty())
        .unwrap();
    let response = client.execute(req).await.unwrap();

    assert!(response.status().is_success());
}

#[tokio::test]
async fn body_limit() {
    let client = service_fn(|_req: Request<Body>| async move {
        Ok::<_, Infallible>(Response::new(http_body_util::Full::new(
            Bytes::from_static(&[b'a'; 64]),
        )))
    });
    let client = Client::builder()
        .content_length_limit(Some(16))
        .service(client);

    let response = client.get("https://example.com/").await.unwrap();
    assert!(response.bytes().await.is_err());
}
