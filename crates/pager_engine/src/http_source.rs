use std::marker::PhantomData;
use std::time::Duration;

use pager_core::{FetchError, PageRequest};
use serde::de::DeserializeOwned;
use url::Url;

use crate::PageSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSourceSettings {
    pub offset_param: String,
    pub limit_param: String,
    /// Field of a JSON object holding the page array. `None` expects the
    /// response body to be the array itself.
    pub items_field: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Largest page body accepted, checked against `Content-Length` and
    /// again while the body is read.
    pub max_bytes: u64,
}

impl Default for HttpSourceSettings {
    fn default() -> Self {
        Self {
            offset_param: "offset".to_string(),
            limit_param: "limit".to_string(),
            items_field: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Fetches pages of JSON items with `GET {endpoint}?offset=..&limit=..`.
#[derive(Debug, Clone)]
pub struct HttpPageSource<T> {
    client: reqwest::Client,
    endpoint: Url,
    settings: HttpSourceSettings,
    _items: PhantomData<fn() -> T>,
}

impl<T> HttpPageSource<T> {
    pub fn new(endpoint: &str, settings: HttpSourceSettings) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|err| FetchError::with_cause(format!("invalid endpoint {endpoint}"), err))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::with_cause("failed to build http client", err))?;
        Ok(Self {
            client,
            endpoint,
            settings,
            _items: PhantomData,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn page_url(&self, page: PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(&self.settings.offset_param, &page.offset.to_string())
            .append_pair(&self.settings.limit_param, &page.limit.to_string());
        url
    }
}

impl<T: DeserializeOwned> HttpPageSource<T> {
    fn decode(&self, body: &[u8]) -> Result<Vec<T>, FetchError> {
        let Some(field) = self.settings.items_field.as_deref() else {
            return serde_json::from_slice(body)
                .map_err(|err| FetchError::with_cause("malformed page body", err));
        };
        let mut value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|err| FetchError::with_cause("malformed page body", err))?;
        let items = value
            .get_mut(field)
            .map(serde_json::Value::take)
            .ok_or_else(|| FetchError::new(format!("page body has no `{field}` field")))?;
        serde_json::from_value(items)
            .map_err(|err| FetchError::with_cause(format!("malformed `{field}` field"), err))
    }
}

#[async_trait::async_trait]
impl<T> PageSource<T> for HttpPageSource<T>
where
    T: DeserializeOwned + Send,
{
    async fn fetch_page(&self, page: PageRequest) -> Result<Vec<T>, FetchError> {
        let url = self.page_url(page);
        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(format!("http status {} from {}", status.as_u16(), url)));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(map_reqwest_error)? {
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }
        self.decode(&body)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(format!(
        "page body too large: {actual} bytes (max {max_bytes})"
    ))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::with_cause("timeout", err);
    }
    FetchError::with_cause("network error", err)
}
