//! REST client shared by every page.
//!
//! Attaches the bearer token from the session, unwraps the
//! `{ success, data, message }` envelope and maps status codes onto
//! [`ApiError`]. A 401 ends the session before the error reaches the caller.

use crate::shared::api_utils::api_url;
use crate::system::session::Session;
use contracts::shared::envelope::ApiResponse;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Session expired, please sign in again")]
    Unauthorized,
    #[error("Subscription expired{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Forbidden {
        message: Option<String>,
        data: Option<Value>,
    },
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Http { status: u16, message: Option<String> },
    #[error("{}", .message.as_deref().unwrap_or("Request was rejected"))]
    Rejected { message: Option<String> },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to encode request: {0}")]
    Encode(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Forbidden { message, .. }
            | ApiError::Http { message, .. }
            | ApiError::Rejected { message } => message.as_deref().filter(|m| !m.trim().is_empty()),
            _ => None,
        }
    }

    /// Server message when present, otherwise the operation-specific fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Extracts `message` or `data.message` from an error body.
fn extract_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| {
            body.get("data")
                .and_then(|data| data.get("message"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
}

/// Classifies a finished HTTP exchange.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> Result<ApiResponse<T>, ApiError> {
    if (200..300).contains(&status) {
        if body.trim().is_empty() {
            return Ok(ApiResponse::empty());
        }
        let envelope: ApiResponse<T> =
            serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        if envelope.is_rejected() {
            return Err(ApiError::Rejected {
                message: envelope.message,
            });
        }
        return Ok(envelope);
    }

    let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let message = extract_message(&parsed);
    match status {
        401 => Err(ApiError::Unauthorized),
        403 => Err(ApiError::Forbidden {
            message,
            data: parsed.get("data").cloned().filter(|d| !d.is_null()),
        }),
        _ => Err(ApiError::Http { status, message }),
    }
}

/// Unwraps `data`, treating its absence as a malformed response.
pub fn require_data<T>(response: ApiResponse<T>) -> Result<T, ApiError> {
    response
        .data
        .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Clone, Copy)]
pub struct ApiClient {
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.execute(Method::Get, path.to_string(), None).await
    }

    /// GET with a query string built by `serde_qs`.
    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<ApiResponse<T>, ApiError>
    where
        Q: Serialize,
        T: DeserializeOwned,
    {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
        let path = if qs.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, qs)
        };
        self.execute(Method::Get, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(Method::Post, path.to_string(), Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.execute(Method::Put, path.to_string(), Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.execute(Method::Delete, path.to_string(), None).await
    }

    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        let builder = builder.header("Accept", "application/json");
        match self.session.bearer() {
            Some(header) => builder.header("Authorization", &header),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = api_url(&path);
        log::debug!("{} {}", method, path);

        let builder = self.builder(method, &url);
        let response = match body {
            Some(body) => {
                builder
                    .json(&body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let result = interpret::<T>(status, &text);
        match &result {
            Err(ApiError::Unauthorized) => {
                log::warn!("{} {} -> 401, ending session", method, path);
                self.session.end_and_redirect();
            }
            Err(ApiError::Forbidden { .. }) => {
                log::warn!("{} {} -> 403 (subscription)", method, path);
            }
            Err(err) => log::warn!("{} {} failed: {}", method, path, err),
            Ok(_) => {}
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_success_envelope() {
        let body = r#"{"success":true,"data":[1,2,3],"pagination":{"page":1,"limit":15,"total":3,"totalPages":1}}"#;
        let response = interpret::<Vec<u32>>(200, body).unwrap();
        assert_eq!(response.data, Some(vec![1, 2, 3]));
        assert_eq!(response.pagination.unwrap().total_pages, 1);
    }

    #[test]
    fn test_interpret_empty_body() {
        let response = interpret::<Value>(204, "").unwrap();
        assert!(!response.is_rejected());
        assert!(response.data.is_none());
    }

    #[test]
    fn test_interpret_body_without_success_flag() {
        let response =
            interpret::<Value>(200, r#"{"data":{"id":"1"},"message":"Deleted"}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some("Deleted"));
        assert_eq!(response.data.unwrap()["id"], "1");

        let response = interpret::<Value>(200, r#"{"message":"Profile updated"}"#).unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn test_interpret_rejected_envelope() {
        let err = interpret::<Value>(200, r#"{"success":false,"message":"Article number taken"}"#)
            .unwrap_err();
        assert_eq!(err.user_message("Something went wrong"), "Article number taken");
    }

    #[test]
    fn test_interpret_unauthorized() {
        let err = interpret::<Value>(401, r#"{"message":"jwt expired"}"#).unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_interpret_forbidden_keeps_partial_data() {
        let body = r#"{"success":false,"message":"Subscription expired","data":{"companyName":"Acme"}}"#;
        match interpret::<Value>(403, body).unwrap_err() {
            ApiError::Forbidden { message, data } => {
                assert_eq!(message.as_deref(), Some("Subscription expired"));
                assert_eq!(data.unwrap()["companyName"], "Acme");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_interpret_nested_error_message() {
        let body = r#"{"data":{"message":"Username already exists"}}"#;
        let err = interpret::<Value>(400, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: Some("Username already exists".into())
            }
        );
        assert_eq!(err.user_message("Operation failed"), "Username already exists");
    }

    #[test]
    fn test_user_message_fallback() {
        let err = interpret::<Value>(500, "<html>oops</html>").unwrap_err();
        assert_eq!(err.user_message("Operation failed"), "Operation failed");
        assert_eq!(ApiError::Network("offline".into()).user_message("Operation failed"), "Operation failed");
    }

    #[test]
    fn test_require_data() {
        assert_eq!(require_data(ApiResponse::ok(5)).unwrap(), 5);
        let empty: ApiResponse<u32> = interpret(200, r#"{"success":true}"#).unwrap();
        assert!(matches!(require_data(empty), Err(ApiError::Decode(_))));
    }
}
