use {
    crate::{
        constants::{DATE_FORMAT, ISO8601_COMPACT_FORMAT, MSG_TIMESTAMP_OUT_OF_RANGE},
        PresignError,
    },
    chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc},
    lazy_static::lazy_static,
    regex::Regex,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

lazy_static! {
    /// Compact ISO 8601 timestamp format used by SigV4: `YYYYMMDD'T'HHMMSS'Z'`.
    static ref ISO8601_COMPACT_REGEX: Regex =
        Regex::new(r"^\d{4}(?:0[1-9]|1[0-2])(?:0[1-9]|[12][0-9]|3[01])T(?:[01][0-9]|2[0-3])[0-5][0-9][0-5][0-9]Z$")
            .unwrap();
}

/// The instant a URL is signed at, along with the two string forms SigV4 needs.
///
/// Both the date-only form (used in the credential scope and key derivation) and the full form (used in
/// `X-Amz-Date` and the string to sign) are rendered from the same captured instant. Signatures built from two
/// separate clock reads would fail validation across a midnight boundary.
///
/// SigV4 dates are exactly eight digits, so only instants in the years 0000 through 9999 can be signed. Any
/// `DateTime<Utc>` converts, but signing an instant outside that range fails with
/// [`PresignError::InvalidTimestamp`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SigningTimestamp {
    instant: DateTime<Utc>,
    date: String,
    timestamp: String,
}

impl SigningTimestamp {
    /// Capture the current time. The system clock is read exactly once.
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// The captured instant, truncated to whole seconds.
    #[inline]
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// The calendar date of the instant.
    #[inline]
    pub fn naive_date(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    /// The date in `YYYYMMDD` form.
    #[inline]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The full timestamp in `YYYYMMDD'T'HHMMSS'Z'` form.
    #[inline]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Ensure the instant renders as an eight-digit SigV4 date.
    pub(crate) fn check_signable(&self) -> Result<(), PresignError> {
        if (0..=9999).contains(&self.instant.year()) {
            Ok(())
        } else {
            Err(PresignError::InvalidTimestamp(format!("{}{}", MSG_TIMESTAMP_OUT_OF_RANGE, self.timestamp)))
        }
    }
}

impl From<DateTime<Utc>> for SigningTimestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        // SigV4 timestamps have one-second resolution; drop anything finer so `instant()` agrees with `timestamp()`.
        let instant = Utc.timestamp_opt(instant.timestamp(), 0).single().unwrap_or(instant);

        Self {
            instant,
            date: instant.format(DATE_FORMAT).to_string(),
            timestamp: instant.format(ISO8601_COMPACT_FORMAT).to_string(),
        }
    }
}

impl FromStr for SigningTimestamp {
    type Err = PresignError;

    /// Parse a compact ISO 8601 UTC timestamp, e.g. `20130524T000000Z`.
    fn from_str(s: &str) -> Result<Self, PresignError> {
        if !ISO8601_COMPACT_REGEX.is_match(s) {
            return Err(PresignError::InvalidTimestamp(format!(
                "Timestamp must be in ISO-8601 'basic format' (YYYYMMDD'T'HHMMSS'Z'). Got '{}'",
                s
            )));
        }

        // The regex does not know about month lengths (e.g. 20230231), so chrono gets the final say.
        let naive = NaiveDateTime::parse_from_str(s, ISO8601_COMPACT_FORMAT)
            .map_err(|e| PresignError::InvalidTimestamp(format!("Invalid timestamp '{}': {}", s, e)))?;

        Ok(Self::from(naive.and_utc()))
    }
}

impl Display for SigningTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::SigningTimestamp,
        crate::ErrorKind,
        chrono::{NaiveDate, TimeZone, Timelike, Utc},
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_forms_share_instant() {
        let instant = Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap();
        let ts = SigningTimestamp::from(instant);
        assert_eq!(ts.date(), "20150830");
        assert_eq!(ts.timestamp(), "20150830T123600Z");
        assert_eq!(ts.instant(), instant);
        assert_eq!(ts.naive_date(), NaiveDate::from_ymd_opt(2015, 8, 30).unwrap());
        assert_eq!(ts.to_string(), "20150830T123600Z");
    }

    #[test_log::test]
    fn test_midnight_boundary() {
        let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let ts = SigningTimestamp::from(instant);
        assert_eq!(ts.date(), "20231231");
        assert_eq!(ts.timestamp(), "20231231T235959Z");
        assert!(ts.timestamp().starts_with(ts.date()));
    }

    #[test_log::test]
    fn test_subsecond_truncated() {
        let instant = Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap().with_nanosecond(999_000_000).unwrap();
        let ts = SigningTimestamp::from(instant);
        assert_eq!(ts.instant().nanosecond(), 0);
        assert_eq!(ts.timestamp(), "20150830T123600Z");
    }

    #[test_log::test]
    fn test_parse_valid() {
        let ts = SigningTimestamp::from_str("20130524T000000Z").unwrap();
        assert_eq!(ts.date(), "20130524");
        assert_eq!(ts.timestamp(), "20130524T000000Z");
        assert_eq!(ts.instant(), Utc.with_ymd_and_hms(2013, 5, 24, 0, 0, 0).unwrap());
    }

    #[test_log::test]
    fn test_parse_invalid() {
        for bad in [
            "",
            "2013-05-24T00:00:00Z",
            "20130524T000000",
            "20131324T000000Z",
            "20130524T240000Z",
            "20230231T000000Z",
        ] {
            let e = SigningTimestamp::from_str(bad).unwrap_err();
            assert_eq!(e.kind(), ErrorKind::Validation, "{}", bad);
        }
    }

    #[test_log::test]
    fn test_signable_range() {
        for year in [0, 1970, 9999] {
            let ts = SigningTimestamp::from(Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap());
            assert_eq!(ts.date().len(), 8, "{}", year);
            assert!(ts.check_signable().is_ok(), "{}", year);
        }

        for year in [-1, 10000] {
            let ts = SigningTimestamp::from(Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap());
            let e = ts.check_signable().unwrap_err();
            assert_eq!(e.kind(), ErrorKind::Validation, "{}", year);
            assert!(e.to_string().starts_with("Signing timestamp is outside the years 0000-9999: "));
        }
    }

    #[test_log::test]
    fn test_now_is_consistent() {
        let ts = SigningTimestamp::now();
        assert!(ts.timestamp().starts_with(ts.date()));
        assert_eq!(ts.timestamp().len(), 16);
    }
}
