use uuid::Uuid;

use crate::alphabet::{Alphabet, PredefinedAlphabet};
use crate::converter;
use crate::error::{Error, Result};
use crate::uuid_format::{self, UuidInput};

/// A reversible UUID codec bound to one alphabet.
///
/// Build it once and reuse it; encoding and decoding only read the alphabet, so a single
/// instance can be shared across threads.
///
/// ```
/// use shortuuid::ShortUuid;
/// let codec = ShortUuid::default();
/// let short = codec.encode("2a162ee5-02f4-4701-9e87-72762cbce5e2").unwrap();
/// assert_eq!(short, "9VprZJ9U7Tgg2PJ8BfTAek");
/// assert_eq!(codec.decode(&short).unwrap(), "2a162ee5-02f4-4701-9e87-72762cbce5e2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUuid {
    alphabet: Alphabet,
}

impl ShortUuid {
    /// Create a codec over an already validated alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// Create a codec over a custom alphabet string, one symbol per grapheme cluster.
    pub fn with_alphabet(symbols: &str) -> Result<Self> {
        Alphabet::new(symbols).map(Self::new)
    }

    /// Create a codec over one of the predefined alphabets.
    pub fn predefined(p: PredefinedAlphabet) -> Self {
        Self::new(p.alphabet())
    }

    /// Create a codec from configuration.
    pub fn from_config(config: &AlphabetConfig) -> Result<Self> {
        let codec = match config {
            AlphabetConfig::Named(p) => Self::predefined(*p),
            AlphabetConfig::Custom(symbols) => Self::with_alphabet(symbols)?,
        };
        tracing::debug!(
            radix = codec.alphabet.radix(),
            width = codec.alphabet.width(),
            "configured short uuid codec"
        );
        Ok(codec)
    }

    /// The alphabet in use.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Length in symbols of every encoded value.
    #[inline]
    pub fn width(&self) -> usize {
        self.alphabet.width()
    }

    /// Encode a UUID to its short form.
    ///
    /// String inputs may be hyphenated or not, braced or not, in either case. Every
    /// malformed input is reported as [`Error::InvalidUuid`].
    pub fn encode(&self, input: impl UuidInput) -> Result<String> {
        let value = Self::uuid_value(input)?;
        converter::encode_int(value, &self.alphabet)
    }

    /// Append the short form of `input` to `dst`, returning the number of symbols written.
    ///
    /// `dst` is left unchanged on error.
    pub fn encode_into(&self, input: impl UuidInput, dst: &mut String) -> Result<usize> {
        let value = Self::uuid_value(input)?;
        converter::encode_int_into(value, &self.alphabet, dst)
    }

    /// Like [`encode`](Self::encode) but panics with the error message on failure.
    pub fn encode_or_panic(&self, input: impl UuidInput) -> String {
        match self.encode(input) {
            Ok(s) => s,
            Err(e) => panic!("{e}"),
        }
    }

    /// Decode a short form back to the canonical hyphenated lowercase UUID string.
    ///
    /// Every malformed input is reported as [`Error::InvalidInput`].
    pub fn decode(&self, input: &str) -> Result<String> {
        converter::decode_string(input, &self.alphabet).map(uuid_format::format_uuid)
    }

    /// Decode a short form to a [`Uuid`].
    pub fn decode_uuid(&self, input: &str) -> Result<Uuid> {
        converter::decode_string(input, &self.alphabet).map(Uuid::from_u128)
    }

    /// Like [`decode`](Self::decode) but panics with the error message on failure.
    pub fn decode_or_panic(&self, input: &str) -> String {
        match self.decode(input) {
            Ok(s) => s,
            Err(e) => panic!("{e}"),
        }
    }

    fn uuid_value(input: impl UuidInput) -> Result<u128> {
        input.to_uuid_value().inspect_err(|e| {
            tracing::trace!(error = %e, "rejecting uuid input");
        })
    }
}

impl Default for ShortUuid {
    fn default() -> Self {
        Self::predefined(PredefinedAlphabet::default())
    }
}

impl TryFrom<AlphabetConfig> for ShortUuid {
    type Error = Error;

    fn try_from(config: AlphabetConfig) -> Result<Self> {
        Self::from_config(&config)
    }
}

/// Alphabet selection as it appears in configuration.
///
/// With the `serde` feature this (de)serializes as `{"named": "base57"}` or
/// `{"custom": "0123456789abcdef"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AlphabetConfig {
    /// One of the predefined alphabets, by symbolic name.
    Named(PredefinedAlphabet),
    /// A custom symbol set, one symbol per grapheme cluster.
    Custom(String),
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self::Named(PredefinedAlphabet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_base57_width_22() {
        let codec = ShortUuid::default();
        assert_eq!(codec.alphabet().radix(), 57);
        assert_eq!(codec.width(), 22);
    }

    #[test]
    fn should_leave_buffer_untouched_when_encode_into_fails() {
        let codec = ShortUuid::default();
        let mut buf = String::from("prefix");
        assert!(codec.encode_into("not-a-uuid", &mut buf).is_err());
        assert_eq!(buf, "prefix");
    }

    #[test]
    fn should_build_from_named_and_custom_config() {
        let named = ShortUuid::try_from(AlphabetConfig::Named(PredefinedAlphabet::Base62)).unwrap();
        assert_eq!(named.alphabet().radix(), 62);

        let custom = ShortUuid::try_from(AlphabetConfig::Custom("0123456789abcdef".into())).unwrap();
        assert_eq!(custom.width(), 32);

        let bad = ShortUuid::try_from(AlphabetConfig::Custom("abc".into()));
        assert!(matches!(bad, Err(Error::InvalidAlphabet(_))));
    }

    #[test]
    #[should_panic(expected = "Invalid UUID")]
    fn should_panic_with_message_when_encode_or_panic_fails() {
        let _ = ShortUuid::default().encode_or_panic("nope");
    }

    #[test]
    #[should_panic(expected = "Invalid input: invalid length")]
    fn should_panic_with_message_when_decode_or_panic_fails() {
        let _ = ShortUuid::default().decode_or_panic("short");
    }
}
