//! Shortuuid: reversible, fixed-width short strings for UUIDs.
//!
//! A UUID is read as a 128-bit unsigned integer and written in the positional number system
//! defined by an alphabet, most significant symbol first, left-padded with the alphabet's
//! zero symbol so every output has the same width. Decoding reverses the conversion and
//! re-formats the value as a canonical hyphenated lowercase UUID.
//!
//! This crate provides two layers:
//! - `ShortUuid`: a codec bound to one `Alphabet`, built once and reused.
//! - Free functions (`encode`, `decode`, ...) over a process-wide default codec using the
//!   57-symbol alphabet, whose encoded width is 22.
//!
//! Quick start
//!
//! ```
//! use shortuuid::{PredefinedAlphabet, ShortUuid};
//!
//! // Default base57 codec
//! let short = shortuuid::encode("2a162ee5-02f4-4701-9e87-72762cbce5e2").unwrap();
//! assert_eq!(short, "9VprZJ9U7Tgg2PJ8BfTAek");
//! assert_eq!(shortuuid::decode(&short).unwrap(), "2a162ee5-02f4-4701-9e87-72762cbce5e2");
//!
//! // Braced and uppercase input normalizes to the same value
//! assert_eq!(shortuuid::encode("{2A162EE5-02F4-4701-9E87-72762CBCE5E2}").unwrap(), short);
//!
//! // A codec over another alphabet
//! let b62 = ShortUuid::predefined(PredefinedAlphabet::Base62);
//! assert_eq!(b62.encode(uuid::Uuid::nil()).unwrap(), "0".repeat(22));
//! ```
//!
//! Compatibility between independent implementations requires both sides to agree on the
//! same alphabet; the mapping is a deterministic bijection, not a security boundary.
pub mod alphabet;
pub mod codec;
pub mod converter;
pub mod error;
pub mod uuid_format;

use std::sync::LazyLock;

pub use alphabet::{Alphabet, PredefinedAlphabet};
pub use codec::{AlphabetConfig, ShortUuid};
pub use error::{Error, Result};
pub use uuid_format::UuidInput;

static DEFAULT_CODEC: LazyLock<ShortUuid> = LazyLock::new(ShortUuid::default);

/// The process-wide base57 codec used by the free functions.
pub fn default_codec() -> &'static ShortUuid {
    &DEFAULT_CODEC
}

/// Encode a UUID with the default codec.
pub fn encode(input: impl UuidInput) -> Result<String> {
    DEFAULT_CODEC.encode(input)
}

/// Encode a UUID with the default codec, panicking on malformed input.
pub fn encode_or_panic(input: impl UuidInput) -> String {
    DEFAULT_CODEC.encode_or_panic(input)
}

/// Decode a short string with the default codec.
pub fn decode(input: &str) -> Result<String> {
    DEFAULT_CODEC.decode(input)
}

/// Decode a short string with the default codec, panicking on malformed input.
pub fn decode_or_panic(input: &str) -> String {
    DEFAULT_CODEC.decode_or_panic(input)
}
