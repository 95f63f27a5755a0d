use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use finvo::{encode, EncodableRequest, EncodedPart, FinvoError};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.finvo.io/v1/";

/// Environment variable holding the API key, read by [`FinvoClient::from_env`].
pub const API_KEY_VAR: &str = "FINVO_API_KEY";

/// Environment variable overriding the base URL.
pub const API_URL_VAR: &str = "FINVO_API_URL";

/// HTTP transport for the Finvo API.
///
/// Holds the `reqwest::Client`, the base URL, and the API key, and injects
/// the `Authorization` header on every call. Entity services borrow a
/// reference to this client at construction time; the client itself keeps
/// no mutable state, so one instance can serve concurrent calls from any
/// number of services.
#[derive(Debug)]
pub struct FinvoClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl FinvoClient {
    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("failed to build HTTP client"),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different deployment (staging, local mock).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, FinvoError> {
        // A trailing slash keeps Url::join from eating the last path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        self.base_url = Url::parse(&normalized)
            .map_err(|e| FinvoError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        Ok(self)
    }

    /// Create a client with a custom reqwest::Client.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Create a client from `FINVO_API_KEY` and optional `FINVO_API_URL`.
    pub fn from_env() -> Result<Self, FinvoError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| FinvoError::Config(format!("{API_KEY_VAR} is not set")))?;
        let client = Self::new(api_key);
        match std::env::var(API_URL_VAR) {
            Ok(base_url) => client.with_base_url(&base_url),
            Err(_) => Ok(client),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, FinvoError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| FinvoError::Config(format!("invalid endpoint path '{path}': {e}")))
    }

    fn auth_header(&self) -> String {
        format!("Api-Key {}", self.api_key)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FinvoError> {
        let url = self.endpoint(path)?;
        tracing::debug!(method = "GET", %url, "dispatching request");
        let request = self.http.get(url).header("Authorization", self.auth_header());
        read_json(send(request).await?).await
    }

    pub(crate) async fn get_json_with<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, FinvoError> {
        let url = self.endpoint(path)?;
        tracing::debug!(method = "GET", %url, "dispatching request");
        let request = self
            .http
            .get(url)
            .header("Authorization", self.auth_header())
            .query(query);
        read_json(send(request).await?).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, FinvoError> {
        let url = self.endpoint(path)?;
        tracing::debug!(method = "POST", %url, "dispatching request");
        let request = self
            .http
            .post(url)
            .header("Authorization", self.auth_header())
            .json(body);
        read_json(send(request).await?).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, FinvoError> {
        let url = self.endpoint(path)?;
        tracing::debug!(method = "PUT", %url, "dispatching request");
        let request = self
            .http
            .put(url)
            .header("Authorization", self.auth_header())
            .json(body);
        read_json(send(request).await?).await
    }

    /// POST a flattened multipart body. Encoding happens before anything
    /// touches the network: a malformed payload aborts the call with no
    /// partial body ever sent.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &EncodableRequest,
    ) -> Result<T, FinvoError> {
        let form = to_form(encode(payload)?)?;
        let url = self.endpoint(path)?;
        tracing::debug!(method = "POST", %url, "dispatching multipart request");
        let request = self
            .http
            .post(url)
            .header("Authorization", self.auth_header())
            .multipart(form);
        read_json(send(request).await?).await
    }

    pub(crate) async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &EncodableRequest,
    ) -> Result<T, FinvoError> {
        let form = to_form(encode(payload)?)?;
        let url = self.endpoint(path)?;
        tracing::debug!(method = "PUT", %url, "dispatching multipart request");
        let request = self
            .http
            .put(url)
            .header("Authorization", self.auth_header())
            .multipart(form);
        read_json(send(request).await?).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), FinvoError> {
        let url = self.endpoint(path)?;
        tracing::debug!(method = "DELETE", %url, "dispatching request");
        let request = self
            .http
            .delete(url)
            .header("Authorization", self.auth_header());
        send(request).await?;
        Ok(())
    }
}

/// Send a request and surface non-2xx responses as [`FinvoError::Api`].
async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, FinvoError> {
    let response = request
        .send()
        .await
        .map_err(|e| FinvoError::Http(format!("request failed: {e}")))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(FinvoError::Api {
        status: status.as_u16(),
        message: error_message(&body, status),
    })
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FinvoError> {
    response
        .json::<T>()
        .await
        .map_err(|e| FinvoError::Http(format!("response parse failed: {e}")))
}

/// Pull a human-readable message out of an error body. The API returns
/// `{"message": ...}` (sometimes `{"detail": ...}`); fall back to the raw
/// body, then to the status reason.
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "detail"] {
            if let Some(message) = value.get(key).and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}

/// Convert encoded pairs into a reqwest multipart form. Repeated part
/// names are preserved as repeated fields, never collapsed.
fn to_form(parts: Vec<(String, EncodedPart)>) -> Result<reqwest::multipart::Form, FinvoError> {
    let mut form = reqwest::multipart::Form::new();
    for (name, part) in parts {
        form = match part {
            EncodedPart::Text(value) => form.text(name, value),
            EncodedPart::Blob(blob) => {
                let mut file_part =
                    reqwest::multipart::Part::bytes(blob.data.to_vec()).file_name(blob.file_name);
                if let Some(content_type) = blob.content_type {
                    file_part = file_part.mime_str(&content_type).map_err(|e| {
                        FinvoError::Encoding(format!("invalid content type: {e}"))
                    })?;
                }
                form.part(name, file_part)
            }
        };
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use finvo::Attachment;

    #[test]
    fn test_endpoint_joining() {
        let client = FinvoClient::new("k")
            .with_base_url("https://staging.finvo.io/v1")
            .unwrap();

        let url = client.endpoint("invoices").unwrap();
        assert_eq!(url.as_str(), "https://staging.finvo.io/v1/invoices");

        let url = client.endpoint("/invoices/inv_42").unwrap();
        assert_eq!(url.as_str(), "https://staging.finvo.io/v1/invoices/inv_42");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = FinvoClient::new("k").with_base_url("not a url").unwrap_err();
        assert!(matches!(err, FinvoError::Config(_)));
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        assert_eq!(
            error_message(r#"{"message": "title is required"}"#, status),
            "title is required"
        );
        assert_eq!(
            error_message(r#"{"detail": "not found"}"#, status),
            "not found"
        );
        assert_eq!(error_message("plain text", status), "plain text");
        assert_eq!(error_message("", status), "Bad Request");
    }

    #[test]
    fn test_to_form_accepts_mixed_parts() {
        let parts = vec![
            ("title".to_string(), EncodedPart::Text("Invoice".to_string())),
            (
                "file".to_string(),
                EncodedPart::Blob(
                    Attachment::new("logo.png", &b"\x89PNG"[..]).with_content_type("image/png"),
                ),
            ),
        ];
        assert!(to_form(parts).is_ok());
    }

    #[test]
    fn test_to_form_rejects_bad_content_type() {
        let parts = vec![(
            "file".to_string(),
            EncodedPart::Blob(
                Attachment::new("logo.png", &b"\x89PNG"[..]).with_content_type("not/a valid/mime"),
            ),
        )];
        let err = to_form(parts).unwrap_err();
        assert!(matches!(err, FinvoError::Encoding(_)));
    }
}
