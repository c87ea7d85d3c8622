use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cannot export node {id} with unknown coordinates: lat={lat:?}, lon={lon:?}")]
    MissingCoordinates {
        id: i64,
        lat: Option<f64>,
        lon: Option<f64>,
    },

    #[error("entity {0} is not part of this document")]
    UnknownReference(i64),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("registry returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "registry")]
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCoordinates { .. } => "MISSING_COORDINATES",
            Self::UnknownReference(_) => "UNKNOWN_REFERENCE",
            Self::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Http { .. } => "HTTP_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            #[cfg(feature = "registry")]
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
