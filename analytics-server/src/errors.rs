use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid bind address {0}: {1}")]
    InvalidBind(String, #[source] std::net::AddrParseError),

    #[error("HttpError {0}")]
    Http(#[from] hyper::Error),

    #[error("Analytics server shut down")]
    Exited,
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
