#![deny(clippy::all, clippy::pedantic)]

use marquee_api_types::{ContentDocument, LoginRequest, MovieRecord, SettingsDocument};
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("server URL is required (use --server or MARQUEE_SERVER_URL)")]
    MissingServer,
    #[error("admin secret is required (use --secret or MARQUEE_ADMIN_SECRET)")]
    MissingSecret,
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server rejected the request: status {0}")]
    Server(StatusCode),
    #[error("draft error: {0}")]
    Draft(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Clone, Debug)]
pub struct Ctx {
    pub client: Client,
    pub base: Url,
    pub secret: Option<String>,
}

impl Ctx {
    pub fn new(server: &str, secret: Option<String>) -> Result<Self, CliError> {
        let base = Url::parse(server)?.join("/")?;
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self {
            client,
            base,
            secret,
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("marquee-cli/", env!("CARGO_PKG_VERSION"))
    }

    fn secret(&self) -> Result<&str, CliError> {
        self.secret.as_deref().ok_or(CliError::MissingSecret)
    }

    fn url(&self, path: &str) -> Result<Url, CliError> {
        self.base.join(path).map_err(CliError::Url)
    }

    /// `POST /api/wp-login`: true when the password matches.
    pub async fn login(&self, password: &str) -> Result<bool, CliError> {
        let response = self
            .client
            .post(self.url("/api/wp-login")?)
            .json(&LoginRequest {
                password: password.to_string(),
            })
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            status => Err(CliError::Server(status)),
        }
    }

    /// Fetch the published document: posts plus settings.
    pub async fn pull(&self) -> Result<ContentDocument, CliError> {
        let posts: Vec<MovieRecord> = self
            .get_json("/wp-json/wp/v2/posts")
            .await?;
        let settings: SettingsDocument = self
            .get_json("/wp-json/wp/v2/settings")
            .await?;
        Ok(ContentDocument {
            movies: posts,
            settings,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let response = self.client.get(self.url(path)?).send().await?;
        if !response.status().is_success() {
            return Err(CliError::Server(response.status()));
        }
        Ok(response.json().await?)
    }

    /// `POST /api/wp-save`: replace the server's document with `document`.
    pub async fn publish(&self, document: &ContentDocument) -> Result<(), CliError> {
        let secret = self.secret()?.to_string();
        let response = self
            .client
            .post(self.url("/api/wp-save")?)
            .header(reqwest::header::AUTHORIZATION, secret)
            .json(document)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(CliError::Server(response.status()))
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;

    #[tokio::test]
    async fn login_maps_statuses() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/wp-login")
                    .json_body(serde_json::json!({"password": "right"}));
                then.status(200);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/wp-login")
                    .json_body(serde_json::json!({"password": "wrong"}));
                then.status(401);
            })
            .await;

        let ctx = Ctx::new(&server.base_url(), None).expect("ctx");
        assert!(ctx.login("right").await.expect("login"));
        assert!(!ctx.login("wrong").await.expect("login"));
    }

    #[tokio::test]
    async fn publish_sends_the_secret_in_the_authorization_header() {
        let server = MockServer::start_async().await;
        let accepted = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/wp-save")
                    .header("authorization", "s3cret");
                then.status(200);
            })
            .await;

        let ctx = Ctx::new(&server.base_url(), Some("s3cret".to_string())).expect("ctx");
        let document: ContentDocument =
            serde_json::from_value(crate::draft::tests::sample_document_json()).expect("document");
        ctx.publish(&document).await.expect("publish");
        accepted.assert_async().await;
    }

    #[tokio::test]
    async fn publish_without_a_secret_fails_before_any_request() {
        let ctx = Ctx::new("http://127.0.0.1:9", None).expect("ctx");
        let document: ContentDocument =
            serde_json::from_value(crate::draft::tests::sample_document_json()).expect("document");
        assert!(matches!(
            ctx.publish(&document).await,
            Err(CliError::MissingSecret)
        ));
    }
}
