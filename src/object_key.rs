//! Object key validation.
//!
//! Keys are placed into the URL path verbatim; they are not percent-encoded by the signer. The policy here only
//! admits keys whose characters are already URL-safe so the signed path and the emitted path are identical.

use {
    crate::{constants::*, PresignError},
    lazy_static::lazy_static,
    regex::Regex,
    std::fmt::{Display, Formatter, Result as FmtResult},
};

lazy_static! {
    /// First character not allowed in an object key.
    static ref DISALLOWED_KEY_CHAR: Regex = Regex::new(r"[^A-Za-z0-9\-._~/]").unwrap();
}

/// An S3 object key that has passed the path-traversal and charset policy.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Validate `key` and wrap it.
    ///
    /// Rejected keys:
    /// * the empty string;
    /// * keys starting or ending with `/`;
    /// * keys containing an empty segment (`a//b`), a `.` segment, or `..` anywhere;
    /// * keys containing a character outside `A-Za-z0-9-._~/`.
    pub fn new<S: Into<String>>(key: S) -> Result<Self, PresignError> {
        let key = key.into();

        if key.is_empty() {
            return Err(PresignError::InvalidObjectKey(MSG_KEY_EMPTY.to_string()));
        }

        if key.starts_with('/') {
            return Err(PresignError::InvalidObjectKey(format!("{}{}", MSG_KEY_LEADING_SLASH, key)));
        }

        if key.ends_with('/') {
            return Err(PresignError::InvalidObjectKey(format!("{}{}", MSG_KEY_TRAILING_SLASH, key)));
        }

        if let Some(m) = DISALLOWED_KEY_CHAR.find(&key) {
            return Err(PresignError::InvalidObjectKey(format!(
                "{}{:?} in {}",
                MSG_KEY_DISALLOWED_CHARACTER,
                m.as_str(),
                key
            )));
        }

        if key.contains("..") {
            return Err(PresignError::InvalidObjectKey(format!("{}{}", MSG_KEY_RELATIVE_SEGMENT, key)));
        }

        for segment in key.split('/') {
            match segment {
                "" => return Err(PresignError::InvalidObjectKey(format!("{}{}", MSG_KEY_EMPTY_SEGMENT, key))),
                "." => {
                    return Err(PresignError::InvalidObjectKey(format!("{}{}", MSG_KEY_RELATIVE_SEGMENT, key)))
                }
                _ => (),
            }
        }

        Ok(Self(key))
    }

    /// The key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final `/`-delimited segment of the key, suitable as a download filename.
    pub fn file_name(&self) -> &str {
        // Validation guarantees a non-empty final segment.
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ObjectKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ObjectKey {
    type Error = PresignError;

    fn try_from(key: &str) -> Result<Self, PresignError> {
        Self::new(key)
    }
}

impl TryFrom<String> for ObjectKey {
    type Error = PresignError;

    fn try_from(key: String) -> Result<Self, PresignError> {
        Self::new(key)
    }
}
