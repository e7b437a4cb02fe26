use catalog_logging::{catalog_info, catalog_trace, catalog_warn};
use serde_json::Value;
use url::Url;

use crate::{
    EngineError, EngineSettings, FetchError, DETAIL_FAILURE_MESSAGE, LIST_FAILURE_MESSAGE,
};

pub const DEFAULT_BASE_URL: &str = "https://perenual.com/api";

/// One network call per invocation, no retries.
#[async_trait::async_trait]
pub trait RemoteSource: Send + Sync {
    /// `GET {base}/species-list?key=..&{filter}&page={page}`
    async fn fetch_page(&self, filter: &str, page: u32) -> Result<Value, FetchError>;

    /// `GET {base}/species/details/{id}?key=..`
    ///
    /// An empty body comes back as `Value::Null`.
    async fn fetch_detail(&self, id: u64) -> Result<Value, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSource {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl ReqwestSource {
    pub fn new(settings: &EngineSettings) -> Result<Self, EngineError> {
        let base_url = Url::parse(&settings.base_url).map_err(|err| EngineError::InvalidBaseUrl {
            url: settings.base_url.clone(),
            reason: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(EngineError::InvalidBaseUrl {
                url: settings.base_url.clone(),
                reason: "cannot be a base".to_string(),
            });
        }

        // No request timeout: a slow answer is waited for, never cut off.
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url,
            api_key: settings.api_key.clone(),
        })
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }

    /// The filter fragment goes into the query as given, without re-encoding.
    pub(crate) fn page_url(&self, filter: &str, page: u32) -> Url {
        let mut url = self.endpoint(&["species-list"]);
        let mut query = url.query().unwrap_or_default().to_string();
        if !filter.is_empty() {
            query.push('&');
            query.push_str(filter);
        }
        query.push_str(&format!("&page={page}"));
        url.set_query(Some(&query));
        url
    }

    pub(crate) fn detail_url(&self, id: u64) -> Url {
        self.endpoint(&["species", "details", &id.to_string()])
    }

    async fn get_json(&self, url: Url, failure: &str) -> Result<Value, FetchError> {
        // The query holds the credential; only the path goes to the log.
        let path = url.path().to_string();
        catalog_info!("GET {}", path);

        let response = self.client.get(url).send().await.map_err(|err| {
            catalog_warn!("GET {} failed: {}", path, err);
            FetchError::new(failure)
        })?;

        let status = response.status();
        if !status.is_success() {
            catalog_warn!("GET {} returned {}", path, status);
            return Err(FetchError::new(failure));
        }

        let body = response.bytes().await.map_err(|err| {
            catalog_warn!("GET {} body read failed: {}", path, err);
            FetchError::new(failure)
        })?;
        catalog_trace!("GET {} body of {} bytes", path, body.len());
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|err| {
            catalog_warn!("GET {} returned invalid json: {}", path, err);
            FetchError::new(failure)
        })
    }
}

#[async_trait::async_trait]
impl RemoteSource for ReqwestSource {
    async fn fetch_page(&self, filter: &str, page: u32) -> Result<Value, FetchError> {
        let url = self.page_url(filter, page);
        self.get_json(url, LIST_FAILURE_MESSAGE).await
    }

    async fn fetch_detail(&self, id: u64) -> Result<Value, FetchError> {
        let url = self.detail_url(id);
        self.get_json(url, DETAIL_FAILURE_MESSAGE).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base_url: &str) -> ReqwestSource {
        ReqwestSource::new(&EngineSettings {
            base_url: base_url.to_string(),
            api_key: "k3y".to_string(),
            ..EngineSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn page_url_keeps_filter_between_key_and_page() {
        let url = source("https://perenual.com/api").page_url("edible=1", 2);
        assert_eq!(
            url.as_str(),
            "https://perenual.com/api/species-list?key=k3y&edible=1&page=2"
        );
    }

    #[test]
    fn empty_filter_adds_no_pair() {
        let url = source("https://perenual.com/api/").page_url("", 1);
        assert_eq!(
            url.as_str(),
            "https://perenual.com/api/species-list?key=k3y&page=1"
        );
    }

    #[test]
    fn filter_fragment_is_sent_verbatim() {
        let url = source("https://perenual.com/api").page_url("indoor", 1);
        assert_eq!(
            url.as_str(),
            "https://perenual.com/api/species-list?key=k3y&indoor&page=1"
        );

        let url = source("https://perenual.com/api").page_url("q=rose%20bush&edible=1", 3);
        assert_eq!(
            url.as_str(),
            "https://perenual.com/api/species-list?key=k3y&q=rose%20bush&edible=1&page=3"
        );
    }

    #[test]
    fn detail_url_puts_id_in_path() {
        let url = source("https://perenual.com/api").detail_url(1234);
        assert_eq!(
            url.as_str(),
            "https://perenual.com/api/species/details/1234?key=k3y"
        );
    }

    #[test]
    fn rejects_unparseable_base() {
        let err = ReqwestSource::new(&EngineSettings {
            base_url: "not a url".to_string(),
            ..EngineSettings::default()
        })
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidBaseUrl { .. }));
    }
}
