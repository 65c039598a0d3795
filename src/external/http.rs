// 📡 HTTP Helpers - Status checks and JSON decoding for review service calls

use super::error::ExternalServiceError;
use serde::de::DeserializeOwned;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success, otherwise
/// [`ExternalServiceError::Api`] carrying the status code and body.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, ExternalServiceError> {
    if !resp.status().is_success() {
        return Err(ExternalServiceError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the body and decode it as JSON.
///
/// Decoding failures are reported as [`ExternalServiceError::Parse`] so a
/// malformed payload is distinguishable from a transport failure.
pub(crate) async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ExternalServiceError> {
    let body = resp.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ExternalServiceError::Parse(e.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_check_response_api_error() {
        let resp = mock_response(401, "unauthorized");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ExternalServiceError::Api { status: 401, ref message } if message == "unauthorized"
        ));
    }

    #[tokio::test]
    async fn test_check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn test_read_json_malformed_body() {
        let resp = mock_response(200, "not json");
        let err = read_json::<serde_json::Value>(resp).await.unwrap_err();
        assert!(matches!(err, ExternalServiceError::Parse(_)));
    }

    #[tokio::test]
    async fn test_read_json_valid_body() {
        let resp = mock_response(200, r#"{"reviews": []}"#);
        let value: serde_json::Value = read_json(resp).await.unwrap();
        assert_eq!(value["reviews"], serde_json::json!([]));
    }
}
