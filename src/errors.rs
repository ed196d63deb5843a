/// All error types that can occur when talking to a Nanoleaf controller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request could not be completed (connect, timeout, body read).
    #[error("http {action} error: {err}")]
    Http { action: String, err: reqwest::Error },

    /// The controller answered with a non-success status code.
    #[error("{action} failed with http status {status}")]
    Status { action: String, status: u16 },

    /// The controller rejected the auth token.
    #[error("controller at {addr} rejected the auth token")]
    Unauthorized { addr: String },

    /// Failed to deserialize JSON data.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// The response was valid JSON but not of the expected shape.
    #[error("unexpected response to {action}: {body}")]
    UnexpectedResponse { action: String, body: String },

    /// The platform configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A turn-on attribute had the wrong type or range.
    #[error("invalid attribute {key}: {reason}")]
    InvalidAttribute { key: String, reason: String },
}

impl Error {
    /// Create a new http transport error
    pub fn http(action: &str, err: reqwest::Error) -> Self {
        Error::Http {
            action: action.to_string(),
            err,
        }
    }

    /// Create a new http status error
    pub fn status(action: &str, status: u16) -> Self {
        Error::Status {
            action: action.to_string(),
            status,
        }
    }

    /// Create a new unexpected response error
    pub fn unexpected_response(action: &str, body: &serde_json::Value) -> Self {
        Error::UnexpectedResponse {
            action: action.to_string(),
            body: body.to_string(),
        }
    }

    /// Create a new invalid attribute error
    pub fn invalid_attribute(key: &str, reason: &str) -> Self {
        Error::InvalidAttribute {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
