use crate::{FetchError, OptionEntry, ParentValues};

use async_trait::async_trait;
use url::Url;

/// One options request: which filter of which resource, and the current
/// values of the filter's parents.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsRequest {
    pub resource: String,
    pub filter: String,
    pub parents: ParentValues,
}

impl OptionsRequest {
    /// Query-string pairs, `resource` and `filter` first.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("resource".to_string(), self.resource.clone()),
            ("filter".to_string(), self.filter.clone()),
        ];
        query.extend(self.parents.to_query());
        query
    }
}

/// Where a select gets its options from.
#[async_trait]
pub trait OptionsSource: Send + Sync + 'static {
    async fn fetch(&self, request: &OptionsRequest) -> Result<Vec<OptionEntry>, FetchError>;
}

/// Fetches options from the options endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpOptionsSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpOptionsSource {
    pub const PATH: &'static str = "dependent-filter-options";

    /// `base` is the server's origin, `prefix` the path the endpoints are
    /// mounted under.
    pub fn new(base: &str, prefix: &str) -> Result<Self, FetchError> {
        let prefix = prefix.trim_matches('/');
        let path = if prefix.is_empty() {
            Self::PATH.to_string()
        } else {
            format!("{prefix}/{}", Self::PATH)
        };

        let endpoint = Url::parse(base)?.join(&path)?;
        Ok(Self::with_client(reqwest::Client::new(), endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl OptionsSource for HttpOptionsSource {
    async fn fetch(&self, request: &OptionsRequest) -> Result<Vec<OptionEntry>, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&request.to_query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
