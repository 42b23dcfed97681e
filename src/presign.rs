//! Presigned URL generation.
//!
//! This implements the AWS [SigV4 query-string authentication](https://docs.aws.amazon.com/AmazonS3/latest/API/sigv4-query-string-auth.html)
//! algorithm for unsigned-payload `GET` requests against S3.

use {
    crate::{
        canonical::CanonicalRequest, constants::*, KSecretKey, ObjectKey, PresignConfig, PresignError,
        PresignRequest, SigningTimestamp,
    },
    chrono::{DateTime, Duration, Utc},
    log::{debug, trace},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// A presigned `GET` URL for a single object.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresignedUrl {
    url: String,
    file_name: String,
    signature: String,
    expires_in: i64,
    timestamp: SigningTimestamp,
}

impl PresignedUrl {
    /// The absolute `https` URL.
    #[inline]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Suggested download filename: the final path segment of the object key.
    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The lowercase hex signature carried in `X-Amz-Signature`.
    #[inline]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The lifetime of the URL in seconds, as carried in `X-Amz-Expires`.
    #[inline]
    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }

    /// The instant the URL was signed at.
    #[inline]
    pub fn timestamp(&self) -> &SigningTimestamp {
        &self.timestamp
    }

    /// The instant after which S3 rejects the URL.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.timestamp.instant() + Duration::seconds(self.expires_in)
    }

    /// Consume this, returning the URL string.
    pub fn into_url(self) -> String {
        self.url
    }
}

impl Display for PresignedUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.url)
    }
}

/// The SigV4 credential scope: `{date}/{region}/s3/aws4_request`.
pub fn credential_scope(date: &str, region: &str) -> String {
    format!("{}/{}/{}/{}", date, region, S3_SERVICE, AWS4_REQUEST)
}

/// The SigV4 string to sign for a canonical request hash.
pub fn string_to_sign(timestamp: &str, credential_scope: &str, canonical_request_sha256_hex: &str) -> String {
    format!("{}\n{}\n{}\n{}", AWS4_HMAC_SHA256, timestamp, credential_scope, canonical_request_sha256_hex)
}

/// Ensure the expiration is within the SigV4 limit of `(0, 604800]` seconds.
pub fn validate_expiration(expiration_seconds: i64) -> Result<i64, PresignError> {
    if expiration_seconds <= 0 || expiration_seconds > MAX_EXPIRATION_SECONDS {
        return Err(PresignError::InvalidExpiration(format!(
            "Expiration must be between 1 and {} seconds: {}",
            MAX_EXPIRATION_SECONDS, expiration_seconds
        )));
    }

    Ok(expiration_seconds)
}

/// Generate a presigned `GET` URL for the object named in `request`, signed at `timestamp`.
///
/// This is a pure function of its inputs: the same configuration, request, and timestamp always yield the same URL.
///
/// # Parameters
/// * `config` - The credentials and bucket location. Validated before any cryptographic work begins.
/// * `request` - The object key and lifetime of the URL.
/// * `timestamp` - The signing instant. Usually this is [`SigningTimestamp::now()`]; see [`presign_get_url_now`].
///
/// # Errors
/// * [`PresignError::MissingConfiguration`] if a required configuration field is empty.
/// * [`PresignError::InvalidConfiguration`] if the bucket name, region, or endpoint host cannot form a valid S3 host.
/// * [`PresignError::InvalidObjectKey`] if the key fails the key policy (see [`ObjectKey::new`]).
/// * [`PresignError::InvalidExpiration`] if the expiration is outside `(0, 604800]`.
/// * [`PresignError::InvalidTimestamp`] if `timestamp` falls outside the years 0000-9999.
/// * [`PresignError::Crypto`] if an HMAC primitive fails. No URL is produced in this case.
pub fn presign_get_url(
    config: &PresignConfig,
    request: &PresignRequest,
    timestamp: &SigningTimestamp,
) -> Result<PresignedUrl, PresignError> {
    config.validate()?;
    let object_key = ObjectKey::new(request.object_key())?;
    let expires_in = validate_expiration(request.expiration_seconds())?;
    timestamp.check_signable()?;

    let host = config.host();
    let scope = credential_scope(timestamp.date(), config.region());
    let canonical_request = CanonicalRequest::for_presigned_get(
        &object_key,
        &host,
        config.access_key_id(),
        &scope,
        timestamp,
        expires_in,
        config.session_token(),
    );
    trace!("Created canonical request: {:?}", canonical_request);

    let string_to_sign =
        string_to_sign(timestamp.timestamp(), &scope, &canonical_request.canonical_request_sha256_hex());
    trace!("String to sign:\n{}", string_to_sign);

    // The date string is the one already used in the scope, so both derive from the same instant.
    let signing_key =
        KSecretKey::new(config.secret_access_key()).to_kdate_str(timestamp.date())?.to_ksigning(config.region())?;
    let signature = signing_key.sign(&string_to_sign)?;

    let url = format!(
        "https://{}{}?{}&{}={}",
        host,
        canonical_request.canonical_path(),
        canonical_request.canonical_query_string(),
        X_AMZ_SIGNATURE,
        signature
    );

    debug!(
        "Presigned GET for {}{} with scope {} valid for {}s",
        host,
        canonical_request.canonical_path(),
        scope,
        expires_in
    );

    Ok(PresignedUrl {
        url,
        file_name: object_key.file_name().to_string(),
        signature,
        expires_in,
        timestamp: timestamp.clone(),
    })
}

/// Generate a presigned `GET` URL signed at the current time.
///
/// The system clock is read exactly once. See [`presign_get_url`] for details.
pub fn presign_get_url_now(config: &PresignConfig, request: &PresignRequest) -> Result<PresignedUrl, PresignError> {
    presign_get_url(config, request, &SigningTimestamp::now())
}
