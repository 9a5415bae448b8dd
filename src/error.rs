use thiserror::Error;

pub use anyhow::Context;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("no quote data returned for ticker {ticker}")]
    DataUnavailable { ticker: String },
    #[error("malformed {what} payload: {message}")]
    Parse { what: &'static str, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn transport<U: Into<String>>(url: U, source: reqwest::Error) -> Self {
        AppError::Transport {
            url: url.into(),
            source,
        }
    }

    pub fn parse<M: Into<String>>(what: &'static str, message: M) -> Self {
        AppError::Parse {
            what,
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport { .. })
    }

    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, AppError::DataUnavailable { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, AppError::Parse { .. })
    }
}
