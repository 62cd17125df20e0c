use mumble_type::ValidationError;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] http::Error),

    #[error(transparent)]
    HttpClient(#[from] mumble_http_client::Error),

    #[error("Malformed collection: {0}")]
    MalformedCollection(ValidationError),

    #[error("Malformed collection page: {0}")]
    MalformedPage(ValidationError),

    #[error("Invalid response: {0}")]
    InvalidResponse(ValidationError),

    #[error("User has no active session")]
    NoSession,

    #[error(transparent)]
    SimdJson(#[from] simd_json::Error),
}
