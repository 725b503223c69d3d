//! Single HTTP entry point for every backend call.
//!
//! Attaches the JSON content type and, when the session holds a token, the
//! bearer header; normalizes non-2xx responses into [`ApiError::Http`].

use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use crate::shared::config::AppConfig;
use crate::system::auth::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct Gateway {
    config: AppConfig,
    session: Session,
}

impl Gateway {
    pub fn new(config: AppConfig, session: Session) -> Self {
        Self { config, session }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(HttpMethod::Get, path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let json = encode_body(body)?;
        self.send(HttpMethod::Post, path, Some(json)).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let json = encode_body(body)?;
        self.send(HttpMethod::Patch, path, Some(json)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(HttpMethod::Delete, path, None).await
    }

    /// Issue one request. No retries, no timeout, no caching.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let url = self.config.url(path);
        log::debug!("{} {}", method.as_str(), path);

        let token = self.session.token_untracked();
        let mut builder = builder_for(method, &url);
        for (name, value) in request_headers(token.as_deref()) {
            builder = builder.header(name, &value);
        }

        let request = match body {
            Some(json) => builder.body(json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let text = if status == 204 {
            String::new()
        } else {
            response
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?
        };

        if !(200..300).contains(&status) {
            log::warn!("{} {} failed with {} {}", method.as_str(), path, status, status_text);
        }
        decode_response(status, &status_text, &text)
    }
}

fn builder_for(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Patch => Request::patch(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Headers sent with every request.
pub fn request_headers(token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_string())];
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.push(("Authorization", format!("Bearer {}", token)));
    }
    headers
}

/// Turn a finished response into a typed value or an [`ApiError`].
///
/// 204 and empty 2xx bodies decode from JSON `null`, so callers expecting
/// `()`, `Option<_>` or `Value` succeed without a body.
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        if status == 204 || body.trim().is_empty() {
            return serde_json::from_value(Value::Null).map_err(|e| ApiError::Decode(e.to_string()));
        }
        return serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("API Error: {}", status_text));
    Err(ApiError::Http { status, message })
}

pub fn use_gateway() -> Gateway {
    use_context::<Gateway>().expect("Gateway not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn methods_cover_the_resource_verbs() {
        let verbs: Vec<_> = [HttpMethod::Get, HttpMethod::Post, HttpMethod::Patch, HttpMethod::Delete]
            .iter()
            .map(HttpMethod::as_str)
            .collect();
        assert_eq!(verbs, ["GET", "POST", "PATCH", "DELETE"]);
    }

    #[test]
    fn bearer_header_only_with_token() {
        let anonymous = request_headers(None);
        assert_eq!(anonymous, vec![("Content-Type", "application/json".to_string())]);

        let signed = request_headers(Some("abc"));
        assert_eq!(signed[1], ("Authorization", "Bearer abc".to_string()));
        assert_eq!(request_headers(Some("")).len(), 1);
    }

    #[test]
    fn no_content_decodes_without_body() {
        let unit: () = decode_response(204, "No Content", "").unwrap();
        assert_eq!(unit, ());
        let value: Value = decode_response(204, "No Content", "garbage").unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn success_body_is_parsed() {
        let value: Value = decode_response(200, "OK", r#"{"id":"1","name":"A"}"#).unwrap();
        assert_eq!(value, json!({"id":"1","name":"A"}));
    }

    #[test]
    fn error_body_message_is_surfaced() {
        let err = decode_response::<Value>(400, "Bad Request", r#"{"message":"Name is required"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: "Name is required".into()
            }
        );
    }

    #[test]
    fn unparseable_error_falls_back_to_status_text() {
        let err = decode_response::<Value>(502, "Bad Gateway", "<html>").unwrap_err();
        assert_eq!(err.to_string(), "API Error: Bad Gateway");
        let err = decode_response::<Value>(500, "Internal Server Error", r#"{"error":"x"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "API Error: Internal Server Error");
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = decode_response::<Vec<Value>>(200, "OK", "{").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
