use std::time::Duration;

use crate::error::{Result, SyncError};
use crate::spotify_rs::types::SpotifyTokenResponse;

pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Spotify application credentials
#[derive(Debug, Clone)]
pub struct SpotifyApiCredentials {
    client_id: String,
    client_secret: String,
}

impl SpotifyApiCredentials {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

/// Exchange application credentials for an access token.
/// https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow
pub async fn request_client_credentials_token(
    token_url: &str,
    credentials: &SpotifyApiCredentials,
) -> Result<SpotifyTokenResponse> {
    let response = reqwest::Client::new()
        .post(token_url)
        // Serializes to x-www-form-urlencoded and sets the header, as spotify requires
        .form(&[("grant_type", "client_credentials")])
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .timeout(Duration::from_secs(10))
        .send()
        .await
        .map_err(SyncError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SyncError::Auth {
            status,
            body: response
                .text()
                .await
                .unwrap_or("Failed to get error text".to_string()),
        });
    }

    let token: SpotifyTokenResponse = response.json().await?;
    tracing::debug!(
        client_id = credentials.client_id(),
        expires_in = token.expires_in,
        "Received spotify access token"
    );
    Ok(token)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        Form, Json, Router,
        http::{HeaderMap, StatusCode, header::AUTHORIZATION},
        response::{IntoResponse, Response},
        routing::post,
    };
    use serde_json::json;

    use super::*;

    // "id:secret" in base64
    const BASIC: &str = "Basic aWQ6c2VjcmV0";

    async fn token(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> Response {
        let auth = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        if auth != Some(BASIC) {
            return (StatusCode::BAD_REQUEST, "invalid_client").into_response();
        }
        if form.get("grant_type").map(String::as_str) != Some("client_credentials") {
            return (StatusCode::BAD_REQUEST, "unsupported_grant_type").into_response();
        }
        Json(json!({
            "access_token": "abc",
            "token_type": "Bearer",
            "expires_in": 3600
        }))
        .into_response()
    }

    async fn serve() -> String {
        let router = Router::new().route("/api/token", post(token));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}/api/token")
    }

    #[tokio::test]
    async fn test_request_token() {
        let url = serve().await;
        let credentials = SpotifyApiCredentials::new("id".into(), "secret".into());

        let token = request_client_credentials_token(&url, &credentials)
            .await
            .unwrap();

        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_in, 3600);
    }

    #[tokio::test]
    async fn test_bad_credentials_is_auth_error() {
        let url = serve().await;
        let credentials = SpotifyApiCredentials::new("id".into(), "wrong".into());

        let err = request_client_credentials_token(&url, &credentials)
            .await
            .unwrap_err();

        match err {
            SyncError::Auth { status, body } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(body, "invalid_client");
            }
            other => panic!("expected auth error, got {other:?}"),
        }
    }
}
