use reqwest::StatusCode;
use thiserror::Error;

/// Failure taxonomy for the gateway. Every condition is surfaced to the
/// direct caller; nothing is retried, recovered, or suppressed internally.
#[derive(Debug, Error)]
pub enum Error {
    /// The host and path could not be combined into a valid request URL.
    /// This is the only purely local, pre-network failure.
    #[error("Request error: {0}")]
    Request(String),

    /// A failure status, or a success status with an empty body where a
    /// structured type was expected.
    #[error("Response error (Status {}): {detail}", .status.as_u16())]
    Response { status: StatusCode, detail: String },

    /// A success status whose body does not parse into the expected schema.
    #[error("Decoding error (Status {}): {detail}", .status.as_u16())]
    Decoding { status: StatusCode, detail: String },

    /// The transport did not produce an HTTP-shaped response at all
    /// (connection failure, aborted exchange, body read failure).
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_detail() {
        let err = Error::Response {
            status: StatusCode::TOO_MANY_REQUESTS,
            detail: "quota exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "Response error (Status 429): quota exceeded"
        );

        let err = Error::Decoding {
            status: StatusCode::OK,
            detail: "missing field `query`".into(),
        };
        assert!(err.to_string().starts_with("Decoding error (Status 200):"));
    }
}
