use {
    crate::{constants::SHA256_OUTPUT_LEN, PresignError},
    hmac::{Hmac, Mac},
    sha2::{Digest, Sha256},
};

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 of `value` keyed by `key`, returned as raw bytes.
#[inline]
pub(crate) fn hmac_sha256(key: &[u8], value: &[u8]) -> Result<[u8; SHA256_OUTPUT_LEN], PresignError> {
    if key.is_empty() {
        return Err(PresignError::Crypto("HMAC-SHA256 key must not be empty".to_string()));
    }

    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| PresignError::Crypto(e.to_string()))?;
    mac.update(value);
    Ok(mac.finalize().into_bytes().into())
}

#[inline]
pub(crate) fn sha256(value: &[u8]) -> [u8; SHA256_OUTPUT_LEN] {
    Sha256::digest(value).into()
}

#[inline]
pub(crate) fn sha256_hex(value: &[u8]) -> String {
    hex::encode(sha256(value))
}
