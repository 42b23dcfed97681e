use {
    crate::constants::*,
    derive_builder::UninitializedFieldError,
    http::status::StatusCode,
    scratchstack_errors::ServiceError,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// The broad category of a [`PresignError`].
///
/// Callers that only need to decide between "fix the deployment", "reject the caller's input", and "internal fault"
/// should match on this rather than on individual error variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Required configuration (credentials, region, bucket) is missing or malformed.
    Configuration,

    /// The caller supplied an object key, expiration, or timestamp that is not acceptable.
    Validation,

    /// An underlying hash or HMAC primitive failed.
    Crypto,
}

/// Error returned when a presigned URL cannot be generated.
#[derive(Debug)]
#[non_exhaustive]
pub enum PresignError {
    /// A hash or HMAC primitive rejected its input. This is never downgraded to a partially signed URL.
    Crypto(/* message */ String),

    /// The bucket name, region, or endpoint host cannot be used to form a valid S3 host.
    InvalidConfiguration(/* message */ String),

    /// The requested expiration is outside `(0, 604800]` seconds.
    InvalidExpiration(/* message */ String),

    /// The object key failed the path/charset policy: it was empty, started or ended with `/`, contained an empty
    /// or relative (`.`, `..`) segment, or contained a character outside `A-Za-z0-9-._~/`.
    InvalidObjectKey(/* message */ String),

    /// A signing timestamp string was not in `YYYYMMDD'T'HHMMSS'Z'` format, or the signing instant falls outside
    /// the years 0000-9999.
    InvalidTimestamp(/* message */ String),

    /// One or more of the access key id, secret access key, region, or bucket name is missing.
    MissingConfiguration(/* message */ String),

    /// A request was built without its object key or expiration.
    MissingParameter(/* message */ String),
}

impl PresignError {
    /// The broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Crypto(_) => ErrorKind::Crypto,
            Self::InvalidExpiration(_)
            | Self::InvalidObjectKey(_)
            | Self::InvalidTimestamp(_)
            | Self::MissingParameter(_) => ErrorKind::Validation,
            Self::InvalidConfiguration(_) | Self::MissingConfiguration(_) => ErrorKind::Configuration,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Crypto(_) => ERR_CODE_INTERNAL_FAILURE,
            Self::InvalidConfiguration(_) => ERR_CODE_INVALID_CONFIGURATION,
            Self::InvalidExpiration(_) => ERR_CODE_INVALID_EXPIRATION,
            Self::InvalidObjectKey(_) => ERR_CODE_INVALID_OBJECT_KEY,
            Self::InvalidTimestamp(_) => ERR_CODE_INVALID_TIMESTAMP,
            Self::MissingConfiguration(_) => ERR_CODE_MISSING_CONFIGURATION,
            Self::MissingParameter(_) => ERR_CODE_MISSING_PARAMETER,
        }
    }

    fn http_status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Configuration | ErrorKind::Crypto => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ServiceError for PresignError {
    fn error_code(&self) -> &'static str {
        PresignError::error_code(self)
    }

    fn http_status(&self) -> StatusCode {
        PresignError::http_status(self)
    }
}

impl Display for PresignError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Crypto(msg) => f.write_str(msg),
            Self::InvalidConfiguration(msg) => f.write_str(msg),
            Self::InvalidExpiration(msg) => f.write_str(msg),
            Self::InvalidObjectKey(msg) => f.write_str(msg),
            Self::InvalidTimestamp(msg) => f.write_str(msg),
            Self::MissingConfiguration(msg) => f.write_str(msg),
            Self::MissingParameter(msg) => f.write_str(msg),
        }
    }
}

impl Error for PresignError {}

impl From<UninitializedFieldError> for PresignError {
    fn from(e: UninitializedFieldError) -> PresignError {
        PresignError::MissingConfiguration(format!("{}{}", MSG_MISSING_CONFIGURATION, e.field_name()))
    }
}
