//! # DID Metadata Errors

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// DID metadata errors.
///
/// Any error returned by a store operation means no state change occurred.
#[derive(Error, Debug, Deserialize)]
pub enum Error {
    /// The DID is not valid base58 or does not decode to the expected length.
    #[error(r#"{{"code": 400, "detail": {}}}"#, quoted(.0))]
    InvalidIdentifierFormat(String),

    /// The wallet handle is closed, unknown, or otherwise invalid.
    #[error(r#"{{"code": 401, "detail": {}}}"#, quoted(.0))]
    InvalidWalletHandle(String),

    /// No metadata has been set for the DID in this wallet.
    #[error(r#"{{"code": 404, "detail": {}}}"#, quoted(.0))]
    RecordNotFound(String),

    /// The store encountered an unexpected condition in the provider or a
    /// dependant library.
    #[error(r#"{{"code": 500, "detail": {}}}"#, quoted(.0))]
    Server(String),
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MetadataError {
            code: self.code(),
            detail: self.detail().to_string(),
        }
        .serialize(serializer)
    }
}

// JSON string literal for `detail`, escaping quotes and backslashes.
fn quoted(detail: &str) -> String {
    serde_json::Value::from(detail).to_string()
}

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Self::Server(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Server(error.to_string())
    }
}

/// Construct an `Error::InvalidIdentifierFormat` error from a string or
/// format string with arguments.
#[macro_export]
macro_rules! invalid_identifier {
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::InvalidIdentifierFormat(format!($fmt, $($arg)*))
    };
    ($err:expr $(,)?) => {
        $crate::Error::InvalidIdentifierFormat(format!($err))
    };
}

/// Construct an `Error::Server` error from a string or format string with
/// arguments.
#[macro_export]
macro_rules! server {
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::Server(format!($fmt, $($arg)*))
    };
    ($err:expr $(,)?) => {
        $crate::Error::Server(format!($err))
    };
}

// Error response for serializing internal errors to JSON.
#[derive(Deserialize, Serialize)]
struct MetadataError {
    /// Error code.
    code: u16,

    /// Error description.
    detail: String,
}

impl Error {
    /// Transform error to a `{"code", "detail"}` JSON value.
    #[must_use]
    pub fn to_json(self) -> serde_json::Value {
        serde_json::json!({"code": self.code(), "detail": self.detail()})
    }

    /// The human-readable description carried by the error.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidIdentifierFormat(d)
            | Self::InvalidWalletHandle(d)
            | Self::RecordNotFound(d)
            | Self::Server(d) => d,
        }
    }

    /// The numeric code carried by the error.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::InvalidIdentifierFormat(_) => 400,
            Self::InvalidWalletHandle(_) => 401,
            Self::RecordNotFound(_) => 404,
            Self::Server(_) => 500,
        }
    }
}

#[cfg(test)]
mod test {
    use anyhow::anyhow;
    use serde_json::{Value, json};

    use super::*;

    // Test that error details are retuned as json.
    #[test]
    fn err_json() {
        let err = Error::RecordNotFound("no metadata".into());
        let ser: Value = serde_json::from_str(&err.to_string()).unwrap();
        assert_eq!(ser, json!({"code": 404, "detail": "no metadata"}));
    }

    #[test]
    fn macro_literal() {
        let err = invalid_identifier!("bad did");
        let ser = serde_json::to_value(&err).unwrap();
        assert_eq!(ser, json!({"code": 400, "detail": "bad did"}));
    }

    #[test]
    fn macro_tt() {
        let err = invalid_identifier!("bad did: {}", "abc");
        assert_eq!(err.to_json(), json!({"code": 400, "detail": "bad did: abc"}));
    }

    #[test]
    fn from_anyhow() {
        let err: Error = anyhow!("disk full").into();
        assert_eq!(err.code(), 500);
        assert_eq!(err.to_json(), json!({"code": 500, "detail": "disk full"}));
    }

    // Quotes and backslashes in the detail must not break the JSON.
    #[test]
    fn escaped_detail() {
        let detail = r#"DID is not valid base58: bad"did\x"#;
        let err = Error::InvalidIdentifierFormat(detail.to_string());
        let ser: Value = serde_json::from_str(&err.to_string()).expect("should be json");
        assert_eq!(ser, json!({"code": 400, "detail": detail}));
        assert_eq!(serde_json::to_value(&err).unwrap(), ser);
        assert_eq!(err.to_json(), ser);
    }

    #[test]
    fn server_macro() {
        let detail = "record corrupt";
        let err = server!("{detail}");
        assert!(matches!(err, Error::Server(ref d) if d == "record corrupt"));
    }
}
