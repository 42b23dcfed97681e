use {
    crate::{canonical::virtual_hosted_s3_host, constants::*, PresignError},
    derive_builder::{Builder, UninitializedFieldError},
    lazy_static::lazy_static,
    regex::Regex,
    std::{
        env,
        fmt::{Debug, Formatter, Result as FmtResult},
    },
};

lazy_static! {
    /// S3 DNS-compatible bucket names: 3-63 characters of `a-z0-9.-`, starting and ending alphanumerically.
    static ref BUCKET_NAME: Regex = Regex::new(r"^[a-z0-9][a-z0-9.\-]{1,61}[a-z0-9]$").unwrap();

    /// AWS region names, e.g. `us-east-1`.
    static ref REGION: Regex = Regex::new(r"^[a-z0-9\-]+$").unwrap();

    /// A DNS host name with an optional port.
    static ref ENDPOINT_HOST: Regex =
        Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9.\-]*[A-Za-z0-9])?(?::[0-9]{1,5})?$").unwrap();
}

/// Credentials and bucket location used to presign URLs.
///
/// This is constructed once at process startup and passed by reference into the signer. The signer never reads the
/// environment itself.
///
/// PresignConfig structs are immutable. Use [`PresignConfigBuilder`] to programmatically construct a configuration,
/// or [`PresignConfig::from_env`] to read it from the standard AWS environment variables.
#[derive(Builder, Clone)]
#[builder(build_fn(error = "PresignError"))]
#[non_exhaustive]
pub struct PresignConfig {
    /// The AWS access key id.
    #[builder(setter(into))]
    access_key_id: String,

    /// The AWS secret access key.
    #[builder(setter(into))]
    secret_access_key: String,

    /// The session token for temporary credentials, if any.
    #[builder(setter(into, strip_option), default)]
    session_token: Option<String>,

    /// The region the bucket lives in.
    #[builder(setter(into))]
    region: String,

    /// The bucket name.
    #[builder(setter(into))]
    bucket_name: String,

    /// Host to address instead of the virtual-hosted `{bucket}.s3.{region}.amazonaws.com` endpoint.
    #[builder(setter(into, strip_option), default)]
    endpoint_host: Option<String>,
}

impl PresignConfig {
    /// Create a [PresignConfigBuilder] to construct a [PresignConfig].
    #[inline]
    pub fn builder() -> PresignConfigBuilder {
        PresignConfigBuilder::default()
    }

    /// Read the configuration from the environment.
    ///
    /// * `AWS_ACCESS_KEY_ID` (required)
    /// * `AWS_SECRET_ACCESS_KEY` (required)
    /// * `AWS_SESSION_TOKEN` (optional)
    /// * `AWS_REGION`, falling back to `AWS_DEFAULT_REGION` (required)
    /// * `S3_BUCKET_NAME` (required)
    /// * `S3_ENDPOINT_HOST` (optional)
    ///
    /// Empty variables are treated as unset. All missing variables are reported together.
    pub fn from_env() -> Result<Self, PresignError> {
        let access_key_id = env_var(ENV_AWS_ACCESS_KEY_ID);
        let secret_access_key = env_var(ENV_AWS_SECRET_ACCESS_KEY);
        let region = env_var(ENV_AWS_REGION).or_else(|| env_var(ENV_AWS_DEFAULT_REGION));
        let bucket_name = env_var(ENV_S3_BUCKET_NAME);

        let missing: Vec<&str> = [
            (ENV_AWS_ACCESS_KEY_ID, access_key_id.is_none()),
            (ENV_AWS_SECRET_ACCESS_KEY, secret_access_key.is_none()),
            (ENV_AWS_REGION, region.is_none()),
            (ENV_S3_BUCKET_NAME, bucket_name.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, is_missing)| is_missing.then_some(name))
        .collect();

        match (access_key_id, secret_access_key, region, bucket_name) {
            (Some(access_key_id), Some(secret_access_key), Some(region), Some(bucket_name)) => Ok(Self {
                access_key_id,
                secret_access_key,
                session_token: env_var(ENV_AWS_SESSION_TOKEN),
                region,
                bucket_name,
                endpoint_host: env_var(ENV_S3_ENDPOINT_HOST),
            }),
            _ => Err(PresignError::MissingConfiguration(format!(
                "{}{}",
                MSG_MISSING_CONFIGURATION,
                missing.join(", ")
            ))),
        }
    }

    /// Ensure every required field is non-empty and that the bucket name, region, and endpoint host form a valid
    /// S3 host.
    ///
    /// The signer calls this before any cryptographic work so a misconfigured deployment fails with
    /// [`PresignError::MissingConfiguration`] or [`PresignError::InvalidConfiguration`] rather than producing a URL
    /// AWS will reject or one that points somewhere else entirely.
    pub fn validate(&self) -> Result<(), PresignError> {
        let missing: Vec<&str> = [
            ("access_key_id", &self.access_key_id),
            ("secret_access_key", &self.secret_access_key),
            ("region", &self.region),
            ("bucket_name", &self.bucket_name),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.trim().is_empty().then_some(name))
        .collect();

        if !missing.is_empty() {
            return Err(PresignError::MissingConfiguration(format!(
                "{}{}",
                MSG_MISSING_CONFIGURATION,
                missing.join(", ")
            )));
        }

        // Both end up in the URL host and the credential scope.
        if !BUCKET_NAME.is_match(&self.bucket_name) {
            return Err(PresignError::InvalidConfiguration(format!("{}{}", MSG_INVALID_BUCKET_NAME, self.bucket_name)));
        }

        if !REGION.is_match(&self.region) {
            return Err(PresignError::InvalidConfiguration(format!("{}{}", MSG_INVALID_REGION, self.region)));
        }

        if let Some(host) = &self.endpoint_host {
            if !ENDPOINT_HOST.is_match(host) {
                return Err(PresignError::InvalidConfiguration(format!("{}{}", MSG_INVALID_ENDPOINT_HOST, host)));
            }
        }

        Ok(())
    }

    /// Retrieve the access key id.
    #[inline]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Retrieve the secret access key.
    #[inline]
    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    /// Retrieve the session token, if any.
    #[inline]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Retrieve the region.
    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Retrieve the bucket name.
    #[inline]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Retrieve the endpoint host override, if any.
    #[inline]
    pub fn endpoint_host(&self) -> Option<&str> {
        self.endpoint_host.as_deref()
    }

    /// The host presigned URLs are addressed to and signed for.
    pub fn host(&self) -> String {
        match &self.endpoint_host {
            Some(host) => host.clone(),
            None => virtual_hosted_s3_host(&self.bucket_name, &self.region),
        }
    }
}

impl Debug for PresignConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PresignConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .field("region", &self.region)
            .field("bucket_name", &self.bucket_name)
            .field("endpoint_host", &self.endpoint_host)
            .finish()
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// A request for a presigned `GET` URL for a single object.
///
/// PresignRequest structs are immutable. Use [`PresignRequestBuilder`] or [`PresignRequest::new`] to construct one.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
#[builder(build_fn(private, name = "build_fields", error = "UninitializedFieldError"))]
#[non_exhaustive]
pub struct PresignRequest {
    /// The object key. Validated against the key policy when signing.
    #[builder(setter(into))]
    object_key: String,

    /// How long the URL remains valid, in seconds. Must be in `(0, 604800]`.
    expiration_seconds: i64,
}

impl PresignRequestBuilder {
    /// Build the [PresignRequest].
    ///
    /// A missing object key or expiration is caller input, so it is reported as [`PresignError::MissingParameter`]
    /// rather than as a configuration fault.
    pub fn build(&self) -> Result<PresignRequest, PresignError> {
        self.build_fields()
            .map_err(|e| PresignError::MissingParameter(format!("{}{}", MSG_MISSING_PARAMETER, e.field_name())))
    }
}

impl PresignRequest {
    /// Create a new request for `object_key`, valid for `expiration_seconds`.
    pub fn new<S: Into<String>>(object_key: S, expiration_seconds: i64) -> Self {
        Self {
            object_key: object_key.into(),
            expiration_seconds,
        }
    }

    /// Create a [PresignRequestBuilder] to construct a [PresignRequest].
    #[inline]
    pub fn builder() -> PresignRequestBuilder {
        PresignRequestBuilder::default()
    }

    /// Retrieve the object key.
    #[inline]
    pub fn object_key(&self) -> &str {
        &self.object_key
    }

    /// Retrieve the requested lifetime in seconds.
    #[inline]
    pub fn expiration_seconds(&self) -> i64 {
        self.expiration_seconds
    }
}
