use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("http request failed: {0}")]
    Http(String),

    #[error("api request failed: {status}")]
    Status { status: u16 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json parse error at {path}: {message}")]
    Json { path: String, message: String },

    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("FIT parse error: {0}")]
    Fit(String),

    #[error("unexpected API response format")]
    UnexpectedResponse,

    #[error("not authenticated: no access token")]
    NotAuthenticated,

    #[error("unsupported input file: {0}")]
    UnsupportedInput(String),
}

impl DashboardError {
    pub(crate) fn from_json(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        DashboardError::Json {
            path: e.path().to_string(),
            message: e.into_inner().to_string(),
        }
    }
}

impl From<ureq::Error> for DashboardError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(status, _) => DashboardError::Status { status },
            ureq::Error::Transport(t) => DashboardError::Http(t.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Strikt JSON-parsing med feltsti i feilmeldingen.
pub(crate) fn from_json_str<T: serde::de::DeserializeOwned>(s: &str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(s);
    serde_path_to_error::deserialize(&mut de).map_err(DashboardError::from_json)
}
