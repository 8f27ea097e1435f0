use thiserror::Error;

/// Rejection raised by the calculator for input it refuses to sum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Non integer numbers are not allowed")]
    NonInteger,

    #[error("Negative numbers are not allowed")]
    Negative,

    #[error("Malformed custom delimiter")]
    MalformedDelimiter,
}

/// Failures of the HTTP adapter, each tied to a response status.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Missing 'numbers' in request")]
    MissingNumbers,

    #[error("'numbers' must be a string")]
    InvalidNumbers,

    #[error("Invalid JSON in request")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid request body encoding")]
    InvalidEncoding(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Not found")]
    NotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RequestError {
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            RequestError::MethodNotAllowed => 405,
            RequestError::NotFound => 404,
            RequestError::MissingNumbers
            | RequestError::InvalidNumbers
            | RequestError::InvalidJson(_)
            | RequestError::InvalidEncoding(_)
            | RequestError::Validation(_) => 400,
        }
    }
}

impl From<base64::DecodeError> for RequestError {
    fn from(error: base64::DecodeError) -> Self {
        RequestError::InvalidEncoding(error.to_string())
    }
}
