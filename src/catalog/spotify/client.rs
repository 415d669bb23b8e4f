//! Spotify Web API client
//!
//! Two requests per query:
//! 1. Client-credentials token from the accounts service
//! 2. Track search with the bearer token, top hit only
//!
//! See: https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, CatalogResult, ClientCredentials};
use crate::catalog::ensure_success;

const ACCOUNTS_URL: &str = "https://accounts.spotify.com";
const API_URL: &str = "https://api.spotify.com";

/// Spotify API client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    credentials: Option<ClientCredentials>,
    accounts_url: String,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(http_client: reqwest::Client, credentials: Option<ClientCredentials>) -> Self {
        Self {
            http_client,
            credentials,
            accounts_url: ACCOUNTS_URL.to_string(),
            api_url: API_URL.to_string(),
        }
    }

    /// Create a client for testing with a custom base URL for both services
    #[cfg(test)]
    pub fn with_base_url(
        credentials: Option<ClientCredentials>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            http_client: reqwest::Client::new(),
            credentials,
            accounts_url: base_url.clone(),
            api_url: base_url,
        }
    }

    /// Search for a track. Never fails; problems give an empty result.
    pub async fn query(&self, title: &str, artist: &str) -> CatalogResult {
        let Some(token) = self.login().await else {
            return CatalogResult::default();
        };

        match self.search(title, artist, &token).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(target: "catalog", "Spotify query for {:?} failed: {}", title, e);
                CatalogResult::default()
            }
        }
    }

    /// Obtain an access token, or `None` if login failed.
    pub async fn login(&self) -> Option<String> {
        match self.request_token().await {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::error!(target: "catalog", "Error logging into Spotify API: {}", e);
                None
            }
        }
    }

    async fn request_token(&self) -> Result<String, CatalogError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(CatalogError::MissingCredentials("spotify client id/secret"))?;

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
        ];

        let response = self
            .http_client
            .post(format!("{}/api/token", self.accounts_url))
            .form(&params)
            .send()
            .await
            .map_err(|e| CatalogError::Login(e.to_string()))?;

        let token = ensure_success(response)
            .await
            .map_err(|e| CatalogError::Login(e.to_string()))?
            .json::<dto::TokenResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        Ok(token.access_token)
    }

    async fn search(
        &self,
        title: &str,
        artist: &str,
        token: &str,
    ) -> Result<CatalogResult, CatalogError> {
        let query = format!("track:{} artist:{}", title, artist);

        let response = self
            .http_client
            .get(format!("{}/v1/search", self.api_url))
            .query(&[
                ("q", query.as_str()),
                ("type", "track"),
                ("limit", "1"),
                ("market", "US"),
            ])
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let response = ensure_success(response)
            .await?
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        adapter::to_catalog_result(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> Option<ClientCredentials> {
        ClientCredentials::from_parts(Some("id-123"), Some("secret-456"))
    }

    async fn mount_token(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_id=id-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "spotify-token",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .mount(server)
            .await;
    }

    #[test]
    fn test_client_creation() {
        let client = SpotifyClient::new(reqwest::Client::new(), None);
        assert_eq!(client.accounts_url, "https://accounts.spotify.com");
        assert_eq!(client.api_url, "https://api.spotify.com");
    }

    #[tokio::test]
    async fn test_query_success() {
        let server = MockServer::start().await;
        mount_token(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("q", "track:Song Z artist:Artist Q"))
            .and(query_param("type", "track"))
            .and(query_param("limit", "1"))
            .and(query_param("market", "US"))
            .and(header("authorization", "Bearer spotify-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": {"items": [{
                    "name": "Song Z",
                    "artists": [{"name": "Artist Q"}],
                    "album": {"images": [{"url": "https://i.scdn.co/image/640"}]},
                    "external_urls": {"spotify": "https://open.spotify.com/track/1"}
                }]}
            })))
            .mount(&server)
            .await;

        let client = SpotifyClient::with_base_url(credentials(), server.uri());
        let result = client.query("Song Z", "Artist Q").await;

        assert_eq!(result.song_name.as_deref(), Some("Song Z"));
        assert_eq!(result.artist.as_deref(), Some("Artist Q"));
        assert_eq!(result.album_art.as_deref(), Some("https://i.scdn.co/image/640"));
        assert_eq!(result.link.as_deref(), Some("https://open.spotify.com/track/1"));
    }

    #[tokio::test]
    async fn test_login_failure_skips_search() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = SpotifyClient::with_base_url(credentials(), server.uri());
        assert!(client.login().await.is_none());
        assert!(client.query("Song Z", "Artist Q").await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credentials_gives_empty_result() {
        let client = SpotifyClient::with_base_url(None, "http://127.0.0.1:9");
        assert!(client.query("Song Z", "Artist Q").await.is_empty());
    }

    #[tokio::test]
    async fn test_zero_matches_gives_empty_result() {
        let server = MockServer::start().await;
        mount_token(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"tracks": {"items": []}})),
            )
            .mount(&server)
            .await;

        let client = SpotifyClient::with_base_url(credentials(), server.uri());
        assert!(client.query("Nothing", "Nobody").await.is_empty());
    }

    #[tokio::test]
    async fn test_garbled_response_gives_empty_result() {
        let server = MockServer::start().await;
        mount_token(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = SpotifyClient::with_base_url(credentials(), server.uri());
        assert!(client.query("Song Z", "Artist Q").await.is_empty());
    }
}
