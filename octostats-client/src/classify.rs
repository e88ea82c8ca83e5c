//! Transport failure classification
//!
//! Total mapping from a raw [`TransportError`] to the user-facing
//! [`FetchError`] taxonomy. Every possible transport outcome lands in
//! exactly one variant; nothing here retries or guesses.

use octostats_core::FetchError;
use tracing::debug;

use crate::api::TransportError;

/// Classify a transport failure into the user-facing taxonomy.
///
/// Statuses with dedicated semantics (404, 403) get their own variants; any
/// other server status becomes `ApiError` carrying the server's message
/// when the error body provided one. Failures where no response arrived are
/// `NetworkError`; failures on our side of the wire are `Unexpected`.
pub fn classify(failure: TransportError) -> FetchError {
    debug!(failure = %failure, "Classifying transport failure");

    match failure {
        TransportError::Status { status: 404, .. } => FetchError::NotFound,
        TransportError::Status { status: 403, .. } => FetchError::RateLimited,
        TransportError::Status { status, message } => FetchError::ApiError(
            message.unwrap_or_else(|| format!("request failed with status {}", status)),
        ),
        TransportError::NoResponse { .. } => FetchError::NetworkError,
        TransportError::Client { .. } => FetchError::Unexpected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16, message: Option<&str>) -> TransportError {
        TransportError::Status {
            status: code,
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_404_is_not_found() {
        assert_eq!(classify(status(404, Some("Not Found"))), FetchError::NotFound);
        // The body message never changes the 404 classification
        assert_eq!(classify(status(404, None)), FetchError::NotFound);
    }

    #[test]
    fn test_403_is_rate_limited() {
        assert_eq!(
            classify(status(403, Some("API rate limit exceeded"))),
            FetchError::RateLimited
        );
    }

    #[test]
    fn test_other_status_uses_server_message() {
        assert_eq!(
            classify(status(500, Some("Server Error"))),
            FetchError::ApiError("Server Error".to_string())
        );
        assert_eq!(
            classify(status(502, None)),
            FetchError::ApiError("request failed with status 502".to_string())
        );
    }

    #[test]
    fn test_401_is_api_error_not_rate_limited() {
        assert!(matches!(
            classify(status(401, Some("Requires authentication"))),
            FetchError::ApiError(_)
        ));
    }

    #[test]
    fn test_no_response_is_network_error() {
        let failure = TransportError::NoResponse {
            detail: "connection refused".to_string(),
        };
        assert_eq!(classify(failure), FetchError::NetworkError);
    }

    #[test]
    fn test_client_failure_is_unexpected() {
        let failure = TransportError::Client {
            detail: "invalid header value".to_string(),
        };
        assert_eq!(classify(failure), FetchError::Unexpected);
    }
}
