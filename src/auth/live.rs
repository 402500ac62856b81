//! Live authenticator: one POST to the remote login endpoint, no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Authenticator, Credentials, LoginError};
use crate::config::AuthMode;

pub struct LiveAuthenticator {
    client: Client,
    login_url: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Body returned by the login endpoint
#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LoginResponse {
    /// The token, or the server's error message when there is none
    pub fn into_token(self) -> Result<String, LoginError> {
        match self.token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(token),
            None => match self.error.filter(|e| !e.is_empty()) {
                Some(message) => Err(LoginError::Rejected(message)),
                None => Err(LoginError::MissingToken),
            },
        }
    }
}

impl LiveAuthenticator {
    pub fn new(login_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            login_url: login_url.into(),
        })
    }

    /// Use a preconfigured client (proxy, TLS or timeout settings)
    pub fn with_client(client: Client, login_url: impl Into<String>) -> Self {
        Self {
            client,
            login_url: login_url.into(),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

/// Map a response status to a login failure.
///
/// Checked in priority order; `None` means the status is a success.
fn status_error(status: u16) -> Option<LoginError> {
    match status {
        400 => Some(LoginError::InvalidCredentials),
        401 => Some(LoginError::Unauthorized),
        429 => Some(LoginError::RateLimited),
        s if s >= 500 => Some(LoginError::Server),
        200..=299 => None,
        s => Some(LoginError::UnexpectedStatus(s)),
    }
}

/// Collapse a transport failure into one of the fixed user messages.
///
/// The raw error only goes to the log.
fn transport_error(err: reqwest::Error) -> LoginError {
    tracing::warn!(error = %err, "Login request failed");

    if err.is_timeout() {
        LoginError::Timeout
    } else if is_connect(&err) || err.is_request() {
        LoginError::Network
    } else {
        LoginError::Unexpected
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_connect(err: &reqwest::Error) -> bool {
    err.is_connect()
}

// The fetch backend reports refused connections as request errors.
#[cfg(target_arch = "wasm32")]
fn is_connect(_err: &reqwest::Error) -> bool {
    false
}

#[async_trait(?Send)]
impl Authenticator for LiveAuthenticator {
    fn mode(&self) -> AuthMode {
        AuthMode::Live
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<String, LoginError> {
        let response = self
            .client
            .post(&self.login_url)
            .json(&LoginRequest {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        if let Some(err) = status_error(status) {
            tracing::info!(status, "Login rejected by server");
            return Err(err);
        }

        let body: LoginResponse = response.json().await.map_err(transport_error)?;
        body.into_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api/login", addr)
    }

    async fn spawn_fixed(status: StatusCode, body: Value) -> String {
        let router = Router::new().route(
            "/api/login",
            post(move || {
                let body = body.clone();
                async move { (status, Json(body)) }
            }),
        );
        spawn_server(router).await
    }

    async fn login_against(url: &str) -> Result<String, LoginError> {
        let client = Client::builder().no_proxy().build().unwrap();
        LiveAuthenticator::with_client(client, url)
            .authenticate(&Credentials::new("eve.holt@reqres.in", "cityslicka"))
            .await
    }

    #[test]
    fn test_status_priority() {
        assert_eq!(status_error(200), None);
        assert_eq!(status_error(204), None);
        assert_eq!(status_error(400), Some(LoginError::InvalidCredentials));
        assert_eq!(status_error(401), Some(LoginError::Unauthorized));
        assert_eq!(status_error(429), Some(LoginError::RateLimited));
        assert_eq!(status_error(500), Some(LoginError::Server));
        assert_eq!(status_error(503), Some(LoginError::Server));
        assert_eq!(status_error(404), Some(LoginError::UnexpectedStatus(404)));
        assert_eq!(status_error(302), Some(LoginError::UnexpectedStatus(302)));
    }

    #[test]
    fn test_response_without_token() {
        let body: LoginResponse = serde_json::from_str(r#"{"error":"Missing password"}"#).unwrap();
        assert_eq!(
            body.into_token().unwrap_err().to_string(),
            "Missing password"
        );

        let body: LoginResponse = serde_json::from_str(r#"{"token":"","error":""}"#).unwrap();
        assert_eq!(body.into_token().unwrap_err(), LoginError::MissingToken);
    }

    #[tokio::test]
    async fn test_success_posts_credentials() {
        let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let seen_by_handler = seen.clone();
        let router = Router::new().route(
            "/api/login",
            post(move |Json(payload): Json<Value>| {
                let seen = seen_by_handler.clone();
                async move {
                    *seen.lock().unwrap() = Some(payload);
                    Json(json!({ "token": "QpwL5tke4Pnpja7X4" }))
                }
            }),
        );
        let url = spawn_server(router).await;

        let token = login_against(&url).await.unwrap();

        assert_eq!(token, "QpwL5tke4Pnpja7X4");
        assert_eq!(
            seen.lock().unwrap().clone(),
            Some(json!({ "email": "eve.holt@reqres.in", "password": "cityslicka" }))
        );
    }

    #[tokio::test]
    async fn test_bad_request_ignores_body() {
        let url = spawn_fixed(StatusCode::BAD_REQUEST, json!({ "token": "should-not-matter" })).await;

        let err = login_against(&url).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_status_messages() {
        let cases = [
            (StatusCode::UNAUTHORIZED, "Unauthorized. Please check your credentials."),
            (StatusCode::TOO_MANY_REQUESTS, "Too many requests. Please try again later."),
            (StatusCode::BAD_GATEWAY, "Server error. Please try again later."),
            (StatusCode::FORBIDDEN, "Login failed (403)"),
        ];

        for (status, expected) in cases {
            let url = spawn_fixed(status, json!({})).await;
            let err = login_against(&url).await.unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[tokio::test]
    async fn test_success_without_token() {
        let url = spawn_fixed(StatusCode::OK, json!({ "error": "user not found" })).await;
        assert_eq!(
            login_against(&url).await.unwrap_err(),
            LoginError::Rejected("user not found".to_string())
        );

        let url = spawn_fixed(StatusCode::OK, json!({ "id": 4 })).await;
        assert_eq!(
            login_against(&url).await.unwrap_err().to_string(),
            "Login failed - no token received"
        );
    }

    #[tokio::test]
    async fn test_unparseable_body() {
        let router = Router::new().route("/api/login", post(|| async { "<html>oops</html>" }));
        let url = spawn_server(router).await;

        assert_eq!(
            login_against(&url).await.unwrap_err().to_string(),
            "Network error. Please try again."
        );
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let router = Router::new().route(
            "/api/login",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({ "token": "too-late" }))
            }),
        );
        let url = spawn_server(router).await;

        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let err = LiveAuthenticator::with_client(client, url)
            .authenticate(&Credentials::new("eve.holt@reqres.in", "cityslicka"))
            .await
            .unwrap_err();

        assert_eq!(err, LoginError::Timeout);
        assert_eq!(err.to_string(), "Request timeout. Please try again.");
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = login_against(&format!("http://{}/api/login", addr))
            .await
            .unwrap_err();
        assert_eq!(err, LoginError::Network);
    }
}
