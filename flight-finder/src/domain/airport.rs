//! Airport code type.

use std::fmt;

/// Error returned when parsing an invalid IATA airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIataCode {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `IataCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use flight_finder::domain::IataCode;
///
/// let icn = IataCode::parse("ICN").unwrap();
/// assert_eq!(icn.as_str(), "ICN");
///
/// // Lowercase is rejected by the strict parser
/// assert!(IataCode::parse("icn").is_err());
///
/// // ... but accepted by the normalizing one
/// assert_eq!(IataCode::parse_normalized("icn").unwrap(), icn);
///
/// // Wrong length is rejected
/// assert!(IataCode::parse("IC").is_err());
/// assert!(IataCode::parse("ICNN").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IataCode([u8; 3]);

impl IataCode {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIataCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIataCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidIataCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(IataCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse an IATA code, normalizing lowercase input to uppercase.
    ///
    /// User-supplied codes often arrive lowercase; anything other than
    /// 3 ASCII letters is still rejected.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidIataCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIataCode {
                reason: "must be exactly 3 characters",
            });
        }

        let mut normalized = [0u8; 3];
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_alphabetic() {
                return Err(InvalidIataCode {
                    reason: "must be ASCII letters A-Z",
                });
            }
            normalized[i] = b.to_ascii_uppercase();
        }

        Ok(IataCode(normalized))
    }

    /// Returns the IATA code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }

    /// Korean city name for well-known airports.
    pub fn city_name(&self) -> Option<&'static str> {
        let name = match self.as_str() {
            "ICN" => "인천",
            "GMP" => "김포",
            "CJU" => "제주",
            "PUS" => "부산",
            "CTS" => "삿포로",
            "NRT" => "도쿄/나리타",
            "HND" => "도쿄/하네다",
            "KIX" => "오사카",
            "FUK" => "후쿠오카",
            "HKG" => "홍콩",
            "BKK" => "방콕",
            "SGN" => "호찌민",
            "DPS" => "발리",
            "SIN" => "싱가포르",
            "TPE" => "타이페이",
            "MNL" => "마닐라",
            "CEB" => "세부",
            "BKI" => "코타키나발루",
            "LAX" => "로스앤젤레스",
            "JFK" => "뉴욕",
            "CDG" => "파리",
            "FCO" => "로마",
            "BCN" => "바르셀로나",
            "IST" => "이스탄불",
            _ => return None,
        };
        Some(name)
    }

    /// Display label: `"ICN (인천)"` for known airports, the bare code
    /// otherwise.
    pub fn label(&self) -> String {
        match self.city_name() {
            Some(city) => format!("{} ({})", self.as_str(), city),
            None => self.as_str().to_string(),
        }
    }
}

impl fmt::Debug for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IataCode({})", self.as_str())
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid IATA codes: 3 uppercase ASCII letters
    fn valid_iata_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z]{3}")
            .unwrap()
            .prop_filter("must be 3 chars", |s| s.len() == 3)
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_iata_string()) {
            let code = IataCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any valid IATA code can be parsed
        #[test]
        fn valid_always_parses(s in valid_iata_string()) {
            prop_assert!(IataCode::parse(&s).is_ok());
        }

        /// Normalizing parse agrees with strict parse after uppercasing
        #[test]
        fn normalized_matches_uppercased(s in "[a-zA-Z]{3}") {
            let normalized = IataCode::parse_normalized(&s).unwrap();
            let upper = IataCode::parse(&s.to_ascii_uppercase()).unwrap();
            prop_assert_eq!(normalized, upper);
        }

        /// Lowercase letters are always rejected by the strict parser
        #[test]
        fn lowercase_rejected(s in "[a-z]{3}") {
            prop_assert!(IataCode::parse(&s).is_err());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(IataCode::parse(&s).is_err());
            prop_assert!(IataCode::parse_normalized(&s).is_err());
        }

        /// Strings with digits are rejected
        #[test]
        fn digits_rejected(
            s in "[A-Z0-9]{3}".prop_filter("has digit", |s| {
                s.chars().any(|c| c.is_ascii_digit())
            }),
        ) {
            prop_assert!(IataCode::parse(&s).is_err());
            prop_assert!(IataCode::parse_normalized(&s).is_err());
        }
    }
}
