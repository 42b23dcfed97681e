#![no_main]
use {
    arbitrary::Arbitrary,
    chrono::{TimeZone, Utc},
    libfuzzer_sys::{fuzz_target, Corpus},
    scratchstack_aws_presign::{presign_get_url, ErrorKind, PresignConfig, PresignRequest, SigningTimestamp},
};

#[derive(Arbitrary, Debug)]
struct PresignInput {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
    region: String,
    bucket_name: String,
    object_key: String,
    expiration_seconds: i64,
    epoch_seconds: u32,
}

fuzz_target!(|data: PresignInput| -> Corpus {
    let mut builder = PresignConfig::builder();
    builder
        .access_key_id(data.access_key_id)
        .secret_access_key(data.secret_access_key)
        .region(data.region)
        .bucket_name(data.bucket_name);
    if let Some(token) = data.session_token {
        builder.session_token(token);
    }

    let Ok(config) = builder.build() else {
        return Corpus::Reject;
    };

    let Some(instant) = Utc.timestamp_opt(i64::from(data.epoch_seconds), 0).single() else {
        return Corpus::Reject;
    };
    let timestamp = SigningTimestamp::from(instant);
    let request = PresignRequest::new(data.object_key, data.expiration_seconds);

    match presign_get_url(&config, &request, &timestamp) {
        Ok(url) => {
            assert!(url.url().starts_with("https://"));
            assert_eq!(url.signature().len(), 64);
            assert!(url.url().ends_with(url.signature()));
            Corpus::Keep
        }
        Err(e) => {
            // Every input the signer accepts must be signable; crypto failures are never expected.
            assert_ne!(e.kind(), ErrorKind::Crypto, "{}", e);
            Corpus::Reject
        }
    }
});
