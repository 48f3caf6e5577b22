//! Framing between UUID representations and the 128-bit integers the converter works on.
//!
//! Accepted text shapes, hex digits in either case:
//! - `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (hyphens at byte offsets 8, 13, 18, 23)
//! - `xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx`
//! - either of the above wrapped in `{` and `}`
//!
//! Anything else is rejected with [`Error::InvalidUuid`].

use uuid::Uuid;

use crate::error::{Error, Result};

const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Values that can be turned into the 128-bit form of a UUID.
pub trait UuidInput {
    /// Returns the UUID as a big-endian 128-bit integer.
    fn to_uuid_value(&self) -> Result<u128>;
}

impl UuidInput for str {
    fn to_uuid_value(&self) -> Result<u128> {
        parse_uuid(self)
    }
}

impl UuidInput for String {
    fn to_uuid_value(&self) -> Result<u128> {
        parse_uuid(self)
    }
}

impl UuidInput for Uuid {
    #[inline]
    fn to_uuid_value(&self) -> Result<u128> {
        Ok(self.as_u128())
    }
}

impl UuidInput for u128 {
    #[inline]
    fn to_uuid_value(&self) -> Result<u128> {
        Ok(*self)
    }
}

impl UuidInput for [u8; 16] {
    #[inline]
    fn to_uuid_value(&self) -> Result<u128> {
        Ok(u128::from_be_bytes(*self))
    }
}

impl<T: UuidInput + ?Sized> UuidInput for &T {
    #[inline]
    fn to_uuid_value(&self) -> Result<u128> {
        (**self).to_uuid_value()
    }
}

/// Strip braces and hyphens, returning the 32 hex digits exactly as written.
fn hex_digits(input: &str) -> Result<[u8; 32]> {
    let mut bytes = input.as_bytes();
    if let [b'{', inner @ .., b'}'] = bytes {
        bytes = inner;
    }

    let mut digits = [0u8; 32];
    match bytes.len() {
        32 => digits.copy_from_slice(bytes),
        36 => {
            if HYPHEN_POSITIONS.iter().any(|&i| bytes[i] != b'-') {
                return Err(Error::invalid_uuid("misplaced hyphen"));
            }
            let mut n = 0;
            for (i, &b) in bytes.iter().enumerate() {
                if !HYPHEN_POSITIONS.contains(&i) {
                    digits[n] = b;
                    n += 1;
                }
            }
        }
        _ => return Err(Error::invalid_uuid("invalid length")),
    }
    Ok(digits)
}

/// Normalize any accepted UUID shape to its 32 lowercase hex digits.
///
/// ```
/// use shortuuid::uuid_format::normalize_uuid_input;
/// let n = normalize_uuid_input("{2A162EE5-02F4-4701-9E87-72762CBCE5E2}").unwrap();
/// assert_eq!(n, "2a162ee502f447019e8772762cbce5e2");
/// ```
pub fn normalize_uuid_input(input: &str) -> Result<String> {
    Ok(hex::encode(parse_uuid(input)?.to_be_bytes()))
}

/// Parse any accepted UUID shape into its 128-bit value.
pub fn parse_uuid(input: &str) -> Result<u128> {
    let digits = hex_digits(input)?;
    let mut raw = [0u8; 16];
    hex::decode_to_slice(digits, &mut raw).map_err(|_| Error::invalid_uuid("invalid hex digit"))?;
    Ok(u128::from_be_bytes(raw))
}

/// Format a 128-bit value as a canonical lowercase hyphenated UUID string.
pub fn format_uuid(value: u128) -> String {
    Uuid::from_u128(value).hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUE: u128 = 0x2a16_2ee5_02f4_4701_9e87_7276_2cbc_e5e2;

    #[test]
    fn should_parse_all_four_shapes_to_same_value() {
        for input in [
            "2a162ee5-02f4-4701-9e87-72762cbce5e2",
            "2a162ee502f447019e8772762cbce5e2",
            "{2a162ee5-02f4-4701-9e87-72762cbce5e2}",
            "{2A162EE502F447019E8772762CBCE5E2}",
        ] {
            assert_eq!(parse_uuid(input).unwrap(), VALUE, "{input}");
        }
    }

    #[test]
    fn should_reject_hyphens_in_wrong_positions() {
        let err = parse_uuid("2a162ee50-2f4-4701-9e87-72762cbce5e2").unwrap_err();
        assert_eq!(err, Error::invalid_uuid("misplaced hyphen"));
    }

    #[test]
    fn should_reject_non_hex_digit() {
        let err = parse_uuid("2a162ee5-02f4-4701-9e87-72762cbce5eg").unwrap_err();
        assert_eq!(err, Error::invalid_uuid("invalid hex digit"));
    }

    #[test]
    fn should_reject_hyphen_in_unhyphenated_shape() {
        assert!(parse_uuid("2a162ee5-02f447019e8772762cbce5e").is_err());
    }

    #[test]
    fn should_reject_unbalanced_or_doubled_braces() {
        assert!(parse_uuid("{2a162ee502f447019e8772762cbce5e2").is_err());
        assert!(parse_uuid("2a162ee502f447019e8772762cbce5e2}").is_err());
        assert!(parse_uuid("{{2a162ee502f447019e8772762cbce5e2}}").is_err());
    }

    #[test]
    fn should_reject_wrong_length_and_non_ascii_without_panicking() {
        assert_eq!(parse_uuid("").unwrap_err(), Error::invalid_uuid("invalid length"));
        assert!(parse_uuid("urn:uuid:2a162ee5-02f4-4701-9e87-72762cbce5e2").is_err());
        // 36 bytes with a multi-byte char straddling a hyphen slot.
        assert!(parse_uuid("2a162ee5é2f4-4701-9e87-72762cbce5e2").is_err());
    }

    #[test]
    fn should_format_canonical_lowercase_hyphenated() {
        assert_eq!(format_uuid(VALUE), "2a162ee5-02f4-4701-9e87-72762cbce5e2");
        assert_eq!(format_uuid(0), "00000000-0000-0000-0000-000000000000");
        assert_eq!(format_uuid(u128::MAX), "ffffffff-ffff-ffff-ffff-ffffffffffff");
    }

    #[test]
    fn should_take_binary_inputs_as_is() {
        let u = Uuid::from_u128(VALUE);
        assert_eq!(u.to_uuid_value().unwrap(), VALUE);
        assert_eq!(VALUE.to_uuid_value().unwrap(), VALUE);
        assert_eq!(VALUE.to_be_bytes().to_uuid_value().unwrap(), VALUE);
    }
}
