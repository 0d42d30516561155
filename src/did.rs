//! # DID
//!
//! Syntactic validation of Decentralized Identifiers.
//!
//! An unqualified DID is a base58 (Bitcoin alphabet) string decoding to
//! [`DID_LEN`] bytes. A qualified DID prefixes the unqualified identifier
//! with `did:<method>:`, where the method name is lowercase ASCII letters
//! and digits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, invalid_identifier};

/// Decoded length, in bytes, of a valid identifier.
pub const DID_LEN: usize = 16;

const PREFIX: &str = "did:";

/// A syntactically valid DID.
///
/// The original string is retained as-is: a qualified DID and its
/// unqualified form are different values.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Did(String);

impl Did {
    /// Parse and validate a DID string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifierFormat`] when the method segment of
    /// a qualified DID is malformed, when the identifier is not base58, or
    /// when it does not decode to [`DID_LEN`] bytes.
    pub fn parse(did: &str) -> Result<Self> {
        let id = match did.strip_prefix(PREFIX) {
            Some(rest) => {
                let Some((method, id)) = rest.split_once(':') else {
                    return Err(invalid_identifier!("qualified DID has no method: {did}"));
                };
                if method.is_empty()
                    || !method.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
                {
                    return Err(invalid_identifier!("invalid DID method: {did}"));
                }
                id
            }
            None => did,
        };

        let Ok(bytes) = bs58::decode(id).into_vec() else {
            return Err(invalid_identifier!("DID is not valid base58: {did}"));
        };
        if bytes.len() != DID_LEN {
            return Err(invalid_identifier!(
                "DID decodes to {} bytes, expected {DID_LEN}: {did}",
                bytes.len()
            ));
        }

        Ok(Self(did.to_string()))
    }

    /// The DID method, when the DID is qualified.
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.0.strip_prefix(PREFIX).and_then(|rest| rest.split_once(':')).map(|(m, _)| m)
    }

    /// The base58 identifier with any `did:<method>:` prefix removed.
    #[must_use]
    pub fn unqualified(&self) -> &str {
        self.0
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.split_once(':'))
            .map_or(self.0.as_str(), |(_, id)| id)
    }

    /// The DID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Did {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Did {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Did> for String {
    fn from(did: Did) -> Self {
        did.0
    }
}

impl AsRef<str> for Did {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DID: &str = "V4SGRU86Z58d6TV7PBUe6f";

    #[test]
    fn unqualified() {
        let did = Did::parse(DID).expect("should parse");
        assert_eq!(did.as_str(), DID);
        assert_eq!(did.unqualified(), DID);
        assert_eq!(did.method(), None);
    }

    #[test]
    fn qualified() {
        let did: Did = format!("did:sov:{DID}").parse().expect("should parse");
        assert_eq!(did.method(), Some("sov"));
        assert_eq!(did.unqualified(), DID);
        assert_eq!(did.to_string(), format!("did:sov:{DID}"));
    }

    #[test]
    fn not_base58() {
        let Err(Error::InvalidIdentifierFormat(_)) = Did::parse("invalid_base58string") else {
            panic!("should be InvalidIdentifierFormat");
        };
    }

    // '0', 'O', 'I' and 'l' are excluded from the base58 alphabet
    #[test]
    fn excluded_characters() {
        for did in ["0SGRU86Z58d6TV7PBUe6f", "OSGRU86Z58d6TV7PBUe6f", "lSGRU86Z58d6TV7PBUe6f"] {
            assert!(Did::parse(did).is_err(), "{did} should be rejected");
        }
    }

    #[test]
    fn wrong_length() {
        // 32 bytes
        let verkey = "GJ1SzoWzavQYfNL9XkaJdrQejfztN4XqdsiV4ct3LXKL";
        let Err(Error::InvalidIdentifierFormat(e)) = Did::parse(verkey) else {
            panic!("should be InvalidIdentifierFormat");
        };
        assert!(e.contains("expected 16"));

        assert!(Did::parse("").is_err());
        assert!(Did::parse("V4SGRU86Z58").is_err());
    }

    #[test]
    fn malformed_method() {
        assert!(Did::parse(&format!("did::{DID}")).is_err());
        assert!(Did::parse(&format!("did:SOV:{DID}")).is_err());
        assert!(Did::parse("did:sov").is_err());
        assert!(Did::parse("did:sov:invalid_base58string").is_err());
    }

    #[test]
    fn serde() {
        let did: Did = serde_json::from_str(&format!("\"{DID}\"")).expect("should deserialize");
        assert_eq!(serde_json::to_string(&did).unwrap(), format!("\"{DID}\""));
        assert!(serde_json::from_str::<Did>("\"invalid_base58string\"").is_err());
    }
}
