/// Failure to fetch a dropdown's options.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    #[error("server responded with status {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Other(String),
}
