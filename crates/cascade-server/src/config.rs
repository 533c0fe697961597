use std::net::{Ipv4Addr, SocketAddr};

#[derive(Debug, Clone)]
pub struct Config {
    listen: SocketAddr,
    prefix: String,
    database_url: String,
    per_page: u64,
}

impl Config {
    pub const DEFAULT_PREFIX: &'static str = "/nova-vendor/cascade";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&self) -> SocketAddr {
        self.listen
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn with_listen(mut self, listen: SocketAddr) -> Self {
        self.listen = listen;
        self
    }

    /// Sets the path every endpoint is mounted under. A leading `/` is added
    /// and trailing ones are dropped.
    pub fn with_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        let prefix = prefix.as_ref().trim_matches('/');
        self.prefix = if prefix.is_empty() {
            String::new()
        } else {
            format!("/{prefix}")
        };
        self
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn with_per_page(mut self, per_page: u64) -> Self {
        self.per_page = per_page;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            prefix: Self::DEFAULT_PREFIX.to_string(),
            database_url: "sqlite::memory:".to_string(),
            per_page: cascade::Resource::DEFAULT_PER_PAGE,
        }
    }
}
