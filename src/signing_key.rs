use {
    crate::{constants::*, crypto::hmac_sha256, PresignError},
    chrono::NaiveDate,
    std::fmt::{Debug, Display, Formatter, Result as FmtResult},
};

/// A raw AWS secret key (`kSecret`), stored with its `"AWS4"` prefix.
#[derive(Clone, PartialEq, Eq)]
pub struct KSecretKey {
    /// The secret key, prefixed with "AWS4".
    prefixed_key: Vec<u8>,
}

/// The `kDate` key: `HMAC_SHA256("AWS4" + KSecretKey, "YYYYMMDD")`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KDateKey {
    /// The raw key.
    key: [u8; SHA256_OUTPUT_LEN],
}

/// The `kRegion` key: an AWS `kDate` key, HMAC-SHA256 hashed with the region.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KRegionKey {
    /// The raw key.
    key: [u8; SHA256_OUTPUT_LEN],
}

/// The `kService` key: an AWS `kRegion` key, HMAC-SHA256 hashed with `"s3"`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KServiceKey {
    /// The raw key.
    key: [u8; SHA256_OUTPUT_LEN],
}

/// The `kSigning` key: an AWS `kService` key, HMAC-SHA256 hashed with the "aws4_request" string.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KSigningKey {
    /// The resulting raw signing key.
    key: [u8; SHA256_OUTPUT_LEN],
}

impl AsRef<[u8]> for KSecretKey {
    fn as_ref(&self) -> &[u8] {
        // Remove the "AWS4" prefix.
        &self.prefixed_key[AWS4_PREFIX.len()..]
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KDateKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KRegionKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KServiceKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

impl AsRef<[u8; SHA256_OUTPUT_LEN]> for KSigningKey {
    fn as_ref(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.key
    }
}

// Key material is never printed, not even in debug output.
macro_rules! opaque_fmt {
    ($($ty:ident),+) => {
        $(
            impl Debug for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                    f.write_str(stringify!($ty))
                }
            }

            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                    f.write_str(stringify!($ty))
                }
            }
        )+
    };
}

opaque_fmt!(KSecretKey, KDateKey, KRegionKey, KServiceKey, KSigningKey);

impl KSecretKey {
    /// Create a new `KSecretKey` from a raw AWS secret access key.
    pub fn new(raw: &str) -> Self {
        let mut prefixed_key = Vec::with_capacity(AWS4_PREFIX.len() + raw.len());
        prefixed_key.extend_from_slice(AWS4_PREFIX.as_bytes());
        prefixed_key.extend_from_slice(raw.as_bytes());
        Self {
            prefixed_key,
        }
    }

    /// Create a new `KDateKey` from this `KSecretKey` and a date.
    pub fn to_kdate(&self, date: NaiveDate) -> Result<KDateKey, PresignError> {
        self.to_kdate_str(&date.format(DATE_FORMAT).to_string())
    }

    /// Create a new `KDateKey` from this `KSecretKey` and a date already rendered as `YYYYMMDD`.
    pub fn to_kdate_str(&self, date: &str) -> Result<KDateKey, PresignError> {
        Ok(KDateKey {
            key: hmac_sha256(self.prefixed_key.as_slice(), date.as_bytes())?,
        })
    }

    /// Create a new `KRegionKey` from this `KSecretKey`, a date, and a region.
    pub fn to_kregion(&self, date: NaiveDate, region: &str) -> Result<KRegionKey, PresignError> {
        self.to_kdate(date)?.to_kregion(region)
    }

    /// Create a new `KServiceKey` for S3 from this `KSecretKey`, a date, and a region.
    pub fn to_kservice(&self, date: NaiveDate, region: &str) -> Result<KServiceKey, PresignError> {
        self.to_kdate(date)?.to_kservice(region)
    }

    /// Create a new `KSigningKey` for S3 from this `KSecretKey`, a date, and a region.
    pub fn to_ksigning(&self, date: NaiveDate, region: &str) -> Result<KSigningKey, PresignError> {
        self.to_kdate(date)?.to_ksigning(region)
    }
}

impl KDateKey {
    /// Create a new `KRegionKey` from this `KDateKey` and a region.
    pub fn to_kregion(&self, region: &str) -> Result<KRegionKey, PresignError> {
        Ok(KRegionKey {
            key: hmac_sha256(self.key.as_slice(), region.as_bytes())?,
        })
    }

    /// Create a new `KServiceKey` for S3 from this `KDateKey` and a region.
    pub fn to_kservice(&self, region: &str) -> Result<KServiceKey, PresignError> {
        self.to_kregion(region)?.to_kservice()
    }

    /// Create a new `KSigningKey` for S3 from this `KDateKey` and a region.
    pub fn to_ksigning(&self, region: &str) -> Result<KSigningKey, PresignError> {
        self.to_kregion(region)?.to_ksigning()
    }
}

impl KRegionKey {
    /// Create a new `KServiceKey` for S3 from this `KRegionKey`.
    ///
    /// The service is always `s3`; it is a protocol constant for presigned object URLs.
    pub fn to_kservice(&self) -> Result<KServiceKey, PresignError> {
        Ok(KServiceKey {
            key: hmac_sha256(self.key.as_slice(), S3_SERVICE.as_bytes())?,
        })
    }

    /// Create a new `KSigningKey` for S3 from this `KRegionKey`.
    pub fn to_ksigning(&self) -> Result<KSigningKey, PresignError> {
        self.to_kservice()?.to_ksigning()
    }
}

impl KServiceKey {
    /// Create a new `KSigningKey` from this `KServiceKey`.
    pub fn to_ksigning(&self) -> Result<KSigningKey, PresignError> {
        Ok(KSigningKey {
            key: hmac_sha256(self.key.as_slice(), AWS4_REQUEST.as_bytes())?,
        })
    }
}

impl KSigningKey {
    /// Sign `string_to_sign`, returning the lowercase hex signature.
    pub fn sign(&self, string_to_sign: &str) -> Result<String, PresignError> {
        Ok(hex::encode(hmac_sha256(self.key.as_slice(), string_to_sign.as_bytes())?))
    }
}

#[cfg(test)]
mod tests {
    use {crate::KSecretKey, chrono::NaiveDate};

    #[test_log::test]
    fn test_signing_key_derived() {
        let date = NaiveDate::from_ymd_opt(2015, 8, 30).unwrap();

        let ksecret1a = KSecretKey::new("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY");
        let ksecret1b = KSecretKey::new("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY");
        let ksecret2 = KSecretKey::new("wJalrXUtnFEMI/K7MDENG+bPxRfiCZEXAMPLEKEY");

        assert_eq!(ksecret1a, ksecret1b);
        assert_eq!(ksecret1a, ksecret1a.clone());
        assert_ne!(ksecret1a, ksecret2);
        assert_eq!(format!("{:?}", ksecret1a).as_str(), "KSecretKey");
        assert_eq!(format!("{}", ksecret1a).as_str(), "KSecretKey");
        assert_eq!(ksecret1a.as_ref(), b"wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY");

        let kdate1a = ksecret1a.to_kdate(date).unwrap();
        let kdate1b = ksecret1b.to_kdate(date).unwrap();
        let kdate2 = ksecret2.to_kdate(date).unwrap();
        assert_eq!(
            kdate1a.as_ref(),
            &[
                0x01u8, 0x38u8, 0xc7u8, 0xa6u8, 0xcbu8, 0xd6u8, 0x0au8, 0xa7u8, 0x27u8, 0xb2u8, 0xf6u8, 0x53u8, 0xa5u8,
                0x22u8, 0x56u8, 0x74u8, 0x39u8, 0xdfu8, 0xb9u8, 0xf3u8, 0xe7u8, 0x2bu8, 0x21u8, 0xf9u8, 0xb2u8, 0x59u8,
                0x41u8, 0xa4u8, 0x2fu8, 0x04u8, 0xa7u8, 0xcdu8
            ]
        );
        assert_eq!(kdate1a, kdate1b);
        assert_ne!(kdate1a, kdate2);
        assert_eq!(ksecret1a.to_kdate_str("20150830").unwrap(), kdate1a);
        assert_eq!(format!("{:?}", kdate1a).as_str(), "KDateKey");

        let kregion1a = kdate1a.to_kregion("us-east-1").unwrap();
        let kregion2 = kdate2.to_kregion("us-east-1").unwrap();
        assert_eq!(
            kregion1a.as_ref(),
            &[
                0xf3u8, 0x3du8, 0x58u8, 0x08u8, 0x50u8, 0x4bu8, 0xf3u8, 0x48u8, 0x12u8, 0xe5u8, 0xfau8, 0xdeu8, 0x63u8,
                0x30u8, 0x8bu8, 0x42u8, 0x4bu8, 0x24u8, 0x4cu8, 0x59u8, 0x18u8, 0x9bu8, 0xe2u8, 0xa5u8, 0x91u8, 0xddu8,
                0x22u8, 0x82u8, 0xc7u8, 0xcbu8, 0x56u8, 0x3fu8
            ]
        );
        assert_ne!(kregion1a, kregion2);
        assert_ne!(kregion1a, kdate1a.to_kregion("us-west-2").unwrap());
        assert_eq!(format!("{}", kregion1a).as_str(), "KRegionKey");

        let kservice1a = kregion1a.to_kservice().unwrap();
        let ksigning1a = kservice1a.to_ksigning().unwrap();
        assert_eq!(format!("{:?}", kservice1a).as_str(), "KServiceKey");
        assert_eq!(format!("{:?}", ksigning1a).as_str(), "KSigningKey");

        assert_eq!(ksecret1a.to_kregion(date, "us-east-1").unwrap(), kregion1a);
        assert_eq!(ksecret1a.to_kservice(date, "us-east-1").unwrap(), kservice1a);
        assert_eq!(ksecret1a.to_ksigning(date, "us-east-1").unwrap(), ksigning1a);
        assert_eq!(kdate1a.to_kservice("us-east-1").unwrap(), kservice1a);
        assert_eq!(kdate1a.to_ksigning("us-east-1").unwrap(), ksigning1a);
        assert_eq!(kregion1a.to_ksigning().unwrap(), ksigning1a);
    }

    #[test_log::test]
    fn test_s3_signing_key_vector() {
        // Signing key from the S3 query-string authentication example (20130524/us-east-1/s3).
        let date = NaiveDate::from_ymd_opt(2013, 5, 24).unwrap();
        let ksecret = KSecretKey::new("wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
        let ksigning = ksecret.to_ksigning(date, "us-east-1").unwrap();

        let string_to_sign = "AWS4-HMAC-SHA256\n\
            20130524T000000Z\n\
            20130524/us-east-1/s3/aws4_request\n\
            3bfa292879f6447bbcda7001decf97f4a54dc650c8942174ae0a9121cf58ad04";
        assert_eq!(
            ksigning.sign(string_to_sign).unwrap(),
            "aeeed9bbccd4d02ee5c0109b86d86835f995330da4c265957d157751f604d404"
        );
    }

    #[test_log::test]
    fn test_intermediate_keys_are_raw_bytes() {
        // Feeding hex-encoded intermediates into the next link yields a different (wrong) key.
        let date = NaiveDate::from_ymd_opt(2013, 5, 24).unwrap();
        let ksecret = KSecretKey::new("wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
        let kdate = ksecret.to_kdate(date).unwrap();
        let hex_kdate = hex::encode(kdate.as_ref());
        let wrong = crate::crypto::hmac_sha256(hex_kdate.as_bytes(), b"us-east-1").unwrap();
        assert_ne!(&wrong, kdate.to_kregion("us-east-1").unwrap().as_ref());
    }
}
