//! Error types for the zephyrus client.
//!
//! Every failure a completion call can produce is captured here: errors the
//! remote service reports in its payload, transport-level failures, and
//! payloads whose shape we do not recognize. The session loop renders errors
//! to the user via `Display`, so the strings here are the user-facing ones.

use std::error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for the zephyrus client.
#[derive(Clone, Debug)]
pub enum Error {
    /// The remote service understood the request but reported a logical
    /// error in its response payload.
    Api {
        /// Human-readable error message from the payload.
        message: String,
    },

    /// The request completed with a non-success HTTP status.
    HttpStatus {
        /// HTTP status code.
        status_code: u16,
        /// Raw response body, as returned by the server.
        body: String,
    },

    /// The request did not complete before the client-side timeout elapsed.
    Timeout {
        /// Human-readable error message.
        message: String,
        /// Duration of the timeout in seconds.
        duration: Option<f64>,
    },

    /// The connection to the remote service could not be established.
    Connection {
        /// Human-readable error message.
        message: String,
        /// Underlying cause.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// A successful response whose payload matched no recognized schema.
    Malformed {
        /// The stringified payload, kept whole for diagnosis.
        raw: String,
    },

    /// Authentication error (missing or rejected API key).
    Authentication {
        /// Human-readable error message.
        message: String,
    },

    /// I/O error.
    Io {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Arc<io::Error>,
    },

    /// A URL parsing or manipulation error.
    Url {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<url::ParseError>,
    },

    /// Any failure not otherwise classified.
    Unexpected {
        /// Human-readable error message.
        message: String,
    },
}

impl Error {
    /// Creates a new API error.
    pub fn api(message: impl Into<String>) -> Self {
        Error::Api {
            message: message.into(),
        }
    }

    /// Creates a new HTTP status error.
    pub fn http_status(status_code: u16, body: impl Into<String>) -> Self {
        Error::HttpStatus {
            status_code,
            body: body.into(),
        }
    }

    /// Creates a new timeout error.
    pub fn timeout(message: impl Into<String>, duration: Option<f64>) -> Self {
        Error::Timeout {
            message: message.into(),
            duration,
        }
    }

    /// Creates a new connection error.
    pub fn connection(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Connection {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new malformed-response error.
    pub fn malformed(raw: impl Into<String>) -> Self {
        Error::Malformed { raw: raw.into() }
    }

    /// Creates a new authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: message.into(),
        }
    }

    /// Creates a new I/O error.
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            message: message.into(),
            source: Arc::new(source),
        }
    }

    /// Creates a new URL error.
    pub fn url(message: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Error::Url {
            message: message.into(),
            source,
        }
    }

    /// Creates a new unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Error::Unexpected {
            message: message.into(),
        }
    }

    /// Returns true if this error came from the service's error payload.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns true if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Returns true if this error is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }

    /// Returns true if this error is a malformed-response error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed { .. })
    }

    /// Returns true if this error is related to authentication.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// Returns true if the server answered 402 Payment Required.
    ///
    /// This is the one status with control-flow consequence: the chat
    /// session terminates on it instead of continuing.
    pub fn is_payment_required(&self) -> bool {
        self.status_code() == Some(402)
    }

    /// Returns the status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api { message } => {
                write!(f, "API Error: {message}")
            }
            Error::HttpStatus { status_code, body } => {
                write!(f, "HTTP error {status_code}: {body}")
            }
            Error::Timeout { message, duration } => {
                if let Some(duration) = duration {
                    write!(f, "Timeout error: {message} ({duration} seconds)")
                } else {
                    write!(f, "Timeout error: {message}")
                }
            }
            Error::Connection { message, .. } => {
                write!(f, "Connection error: {message}")
            }
            Error::Malformed { raw } => {
                write!(f, "Unexpected API response format: {raw}")
            }
            Error::Authentication { message } => {
                write!(f, "Authentication error: {message}")
            }
            Error::Io { message, .. } => {
                write!(f, "I/O error: {message}")
            }
            Error::Url { message, .. } => {
                write!(f, "URL error: {message}")
            }
            Error::Unexpected { message } => {
                write!(f, "Unexpected error: {message}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Connection { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Io { source, .. } => Some(source),
            Error::Url { source, .. } => {
                source.as_ref().map(|e| e as &(dyn error::Error + 'static))
            }
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(err.to_string(), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::url(format!("URL parse error: {err}"), Some(err))
    }
}

/// A specialized Result type for zephyrus operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_display_is_user_facing() {
        let err = Error::api("model loading");
        assert_eq!(err.to_string(), "API Error: model loading");
    }

    #[test]
    fn http_status_display_includes_code_and_body() {
        let err = Error::http_status(402, "Payment Required");
        assert_eq!(err.to_string(), "HTTP error 402: Payment Required");
    }

    #[test]
    fn timeout_display_includes_duration() {
        let err = Error::timeout("request timed out", Some(60.0));
        assert_eq!(
            err.to_string(),
            "Timeout error: request timed out (60 seconds)"
        );
    }

    #[test]
    fn malformed_display_carries_raw_payload() {
        let err = Error::malformed("{\"foo\":1}");
        assert_eq!(
            err.to_string(),
            "Unexpected API response format: {\"foo\":1}"
        );
    }

    #[test]
    fn payment_required_only_for_402() {
        assert!(Error::http_status(402, "").is_payment_required());
        assert!(!Error::http_status(500, "").is_payment_required());
        assert!(!Error::api("nope").is_payment_required());
    }

    #[test]
    fn status_code_only_for_http_status() {
        assert_eq!(Error::http_status(503, "busy").status_code(), Some(503));
        assert_eq!(Error::timeout("t", None).status_code(), None);
    }
}
