// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Failure of the availability round trip.
///
/// Used to pick a user-facing message; the raw detail is only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (DNS, connection refused, TLS...).
    Request(String),

    /// No response before the configured timeout.
    Timeout,

    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The body was not the expected JSON document.
    Decode(String),
}

impl TransportError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            TransportError::Request(_) => "error-availability-request",
            TransportError::Timeout => "error-availability-timeout",
            TransportError::Status(_) => "error-availability-status",
            TransportError::Decode(_) => "error-availability-decode",
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Request(msg) => write!(f, "Request failed: {}", msg),
            TransportError::Timeout => write!(f, "Request timed out"),
            TransportError::Status(code) => write!(f, "Unexpected HTTP status {}", code),
            TransportError::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn transport_error_display_is_for_logs() {
        let err = TransportError::Status(500);
        assert_eq!(format!("{}", err), "Unexpected HTTP status 500");
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(TransportError::from(parse), TransportError::Decode(_)));
    }

    #[test]
    fn transport_error_i18n_keys() {
        assert_eq!(TransportError::Timeout.i18n_key(), "error-availability-timeout");
        assert_eq!(
            TransportError::Decode(String::new()).i18n_key(),
            "error-availability-decode"
        );
    }
}
