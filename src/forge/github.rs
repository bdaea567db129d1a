//! Implements the Forge trait for GitHub
use async_trait::async_trait;
use log::*;
use reqwest::{
    StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use crate::{
    config::HostConfig,
    error::Result,
    forge::{
        traits::Forge,
        types::{ApiOutcome, CreateRelease, Release, Repository},
    },
};

const ACCEPT_VALUE: &str = "application/vnd.github.v3+json";
const USER_AGENT_VALUE: &str = "lcg-release";

/// GitHub client over a single reqwest session carrying fixed
/// authorization and accept headers across all requests.
pub struct Github {
    http: reqwest::Client,
    api_base: String,
    owner: String,
    repo: String,
}

impl Github {
    /// Create a GitHub client with token authentication preconfigured as
    /// default headers.
    pub fn new(config: &HostConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut auth =
            HeaderValue::from_str(&format!("token {}", config.token.expose_secret()))?;
        auth.set_sensitive(true);

        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
        })
    }

    fn repo_url(&self, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}{suffix}",
            self.api_base, self.owner, self.repo
        )
    }
}

/// Drop the templated `{?name,label}` query placeholder from an upload URL.
fn strip_upload_template(url: &str) -> &str {
    match url.find('{') {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Fold a response into a decoded payload, a missing resource, or an
/// unexpected status with its body.
async fn classify<T: DeserializeOwned>(response: reqwest::Response) -> Result<ApiOutcome<T>> {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED => Ok(ApiOutcome::Success(response.json().await?)),
        StatusCode::NOT_FOUND => Ok(ApiOutcome::NotFound),
        status => {
            let body = response.text().await.unwrap_or_default();
            Ok(ApiOutcome::Error {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl Forge for Github {
    async fn get_release_by_tag(&self, tag: &str) -> Result<ApiOutcome<Release>> {
        let url = self.repo_url(&format!("/releases/tags/{tag}"));
        debug!("GET {url}");

        let response = self.http.get(url).send().await?;
        classify(response).await
    }

    async fn create_release(&self, req: CreateRelease) -> Result<ApiOutcome<Release>> {
        let url = self.repo_url("/releases");
        debug!("POST {url}");

        let response = self.http.post(url).json(&req).send().await?;
        classify(response).await
    }

    async fn upload_asset(
        &self,
        upload_url: &str,
        name: &str,
        data: Vec<u8>,
    ) -> Result<ApiOutcome<()>> {
        let url = strip_upload_template(upload_url).to_string();
        debug!("POST {url}?name={name}");

        let response = self
            .http
            .post(url)
            .query(&[("name", name)])
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(data)
            .send()
            .await?;

        // Only 201 counts as an uploaded asset.
        match response.status() {
            StatusCode::CREATED => Ok(ApiOutcome::Success(())),
            status => {
                let body = response.text().await.unwrap_or_default();
                Ok(ApiOutcome::Error {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    async fn get_repository(&self) -> Result<ApiOutcome<Repository>> {
        let url = self.repo_url("");
        debug!("GET {url}");

        let response = self.http.get(url).send().await?;
        classify(response).await
    }

    async fn list_releases(&self) -> Result<ApiOutcome<Vec<Release>>> {
        let url = self.repo_url("/releases");
        debug!("GET {url}");

        let response = self.http.get(url).send().await?;
        classify(response).await
    }
}
