use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::CoreError;

/// Everything except the installation-token call goes through the CORS
/// relay fronting the GHIN API, so the relay base URL is the one piece of
/// configuration this client carries.
#[derive(Clone)]
pub struct GhinClient {
    http: Client,
    base_url: String,
    installations_url: String,
}

impl GhinClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            installations_url: super::auth::INSTALLATIONS_URL.to_string(),
        }
    }

    /// Points the installation-token call at a different endpoint. Tests use
    /// this to run the token exchange against a local stub.
    #[must_use]
    pub fn with_installations_url(mut self, url: &str) -> Self {
        self.installations_url = url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn installations_url(&self) -> &str {
        &self.installations_url
    }

    /// GET a relay path with query params, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the request fails, the relay answers with a
    /// non-success status, or the body is not the expected JSON shape
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        bearer: Option<&str>,
    ) -> Result<T, CoreError> {
        let endpoint = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let url =
            Url::parse_with_params(&endpoint, query).map_err(|e| CoreError::Parse(e.to_string()))?;

        let mut request = self.http.get(url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;
        Self::decode(resp).await
    }

    /// POST a JSON body to an absolute URL with extra headers, decoding the
    /// JSON response. Callers pass the relay endpoint or the installations
    /// endpoint; this method does not prepend the base URL.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the request fails, the server answers with a
    /// non-success status, or the body is not the expected JSON shape
    pub async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &serde_json::Value,
    ) -> Result<T, CoreError> {
        let mut request = self.http.post(url).json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let resp = request.send().await?;
        Self::decode(resp).await
    }

    #[must_use]
    pub fn relay_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, CoreError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CoreError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| CoreError::Parse(e.to_string()))
    }
}
