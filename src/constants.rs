//! Common constants used throughout the crate.
//!
//! Tests that are testing the content of an error code or message should not use these constants;
//! they should use hard-coded strings so the tests are also testing for misspellings.
//!
//! Please keep this file organized alphabetically. (This can be a bit hard with comments, etc.)

/// Algorithm for AWS SigV4
pub(crate) const AWS4_HMAC_SHA256: &str = "AWS4-HMAC-SHA256";

/// Prefix prepended to the secret access key to form `kSecret`.
pub(crate) const AWS4_PREFIX: &str = "AWS4";

/// String included at the end of the AWS SigV4 credential scope
pub(crate) const AWS4_REQUEST: &str = "aws4_request";

/// Compact ISO8601 date format used in the credential scope.
pub(crate) const DATE_FORMAT: &str = "%Y%m%d";

/// Environment variable: access key id.
pub(crate) const ENV_AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";

/// Environment variable: fallback region.
pub(crate) const ENV_AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";

/// Environment variable: region.
pub(crate) const ENV_AWS_REGION: &str = "AWS_REGION";

/// Environment variable: secret access key.
pub(crate) const ENV_AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// Environment variable: session token for temporary credentials.
pub(crate) const ENV_AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Environment variable: bucket name.
pub(crate) const ENV_S3_BUCKET_NAME: &str = "S3_BUCKET_NAME";

/// Environment variable: endpoint host override.
pub(crate) const ENV_S3_ENDPOINT_HOST: &str = "S3_ENDPOINT_HOST";

/// Error code: InternalFailure
pub(crate) const ERR_CODE_INTERNAL_FAILURE: &str = "InternalFailure";

/// Error code: InvalidConfiguration
pub(crate) const ERR_CODE_INVALID_CONFIGURATION: &str = "InvalidConfiguration";

/// Error code: InvalidExpiration
pub(crate) const ERR_CODE_INVALID_EXPIRATION: &str = "InvalidExpiration";

/// Error code: InvalidObjectKey
pub(crate) const ERR_CODE_INVALID_OBJECT_KEY: &str = "InvalidObjectKey";

/// Error code: InvalidTimestamp
pub(crate) const ERR_CODE_INVALID_TIMESTAMP: &str = "InvalidTimestamp";

/// Error code: MissingConfiguration
pub(crate) const ERR_CODE_MISSING_CONFIGURATION: &str = "MissingConfiguration";

/// Error code: MissingParameter
pub(crate) const ERR_CODE_MISSING_PARAMETER: &str = "MissingParameter";

/// Header that must be signed in every presigned URL.
pub(crate) const HOST: &str = "host";

/// Compact ISO8601 timestamp format used for `X-Amz-Date` and the string to sign.
pub(crate) const ISO8601_COMPACT_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Maximum lifetime of a SigV4 presigned URL: seven days.
pub const MAX_EXPIRATION_SECONDS: i64 = 604_800;

/// Only method presigned by this crate.
pub(crate) const METHOD_GET: &str = "GET";

/// Error message: `"Invalid bucket name: "`
pub(crate) const MSG_INVALID_BUCKET_NAME: &str = "Invalid bucket name: ";

/// Error message: `"Invalid endpoint host: "`
pub(crate) const MSG_INVALID_ENDPOINT_HOST: &str = "Invalid endpoint host: ";

/// Error message: `"Invalid region: "`
pub(crate) const MSG_INVALID_REGION: &str = "Invalid region: ";

/// Error message: `"Object key contains a disallowed character: "`
pub(crate) const MSG_KEY_DISALLOWED_CHARACTER: &str = "Object key contains a disallowed character: ";

/// Error message: `"Object key must not be empty"`
pub(crate) const MSG_KEY_EMPTY: &str = "Object key must not be empty";

/// Error message: `"Object key contains an empty path segment: "`
pub(crate) const MSG_KEY_EMPTY_SEGMENT: &str = "Object key contains an empty path segment: ";

/// Error message: `"Object key must not start with '/': "`
pub(crate) const MSG_KEY_LEADING_SLASH: &str = "Object key must not start with '/': ";

/// Error message: `"Object key contains a relative path segment: "`
pub(crate) const MSG_KEY_RELATIVE_SEGMENT: &str = "Object key contains a relative path segment: ";

/// Error message: `"Object key must not end with '/': "`
pub(crate) const MSG_KEY_TRAILING_SLASH: &str = "Object key must not end with '/': ";

/// Error message: `"Missing required configuration: "`
pub(crate) const MSG_MISSING_CONFIGURATION: &str = "Missing required configuration: ";

/// Error message: `"Missing required parameter: "`
pub(crate) const MSG_MISSING_PARAMETER: &str = "Missing required parameter: ";

/// Error message: `"Signing timestamp is outside the years 0000-9999: "`
pub(crate) const MSG_TIMESTAMP_OUT_OF_RANGE: &str = "Signing timestamp is outside the years 0000-9999: ";

/// Placeholder logged in place of credentials.
pub(crate) const REDACTED: &str = "<redacted>";

/// Suffix of the virtual-hosted S3 endpoint.
pub(crate) const S3_HOST_SUFFIX: &str = "amazonaws.com";

/// Service name used in the credential scope.
pub(crate) const S3_SERVICE: &str = "s3";

/// Length of a SHA-256 digest in bytes.
pub(crate) const SHA256_OUTPUT_LEN: usize = 32;

/// Payload hash token for presigned requests; the object body is never hashed.
pub(crate) const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Query parameter for the signature algorithm
pub(crate) const X_AMZ_ALGORITHM: &str = "X-Amz-Algorithm";

/// Query parameter for delivering the access key
pub(crate) const X_AMZ_CREDENTIAL: &str = "X-Amz-Credential";

/// Query parameter for delivering the date
pub(crate) const X_AMZ_DATE: &str = "X-Amz-Date";

/// Query parameter for the lifetime of the URL in seconds
pub(crate) const X_AMZ_EXPIRES: &str = "X-Amz-Expires";

/// Query parameter for delivering the session token
pub(crate) const X_AMZ_SECURITY_TOKEN: &str = "X-Amz-Security-Token";

/// Query parameter for delivering the signature
pub(crate) const X_AMZ_SIGNATURE: &str = "X-Amz-Signature";

/// Query parameter specifying the signed headers
pub(crate) const X_AMZ_SIGNED_HEADERS: &str = "X-Amz-SignedHeaders";
