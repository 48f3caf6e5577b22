use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};

/// An ordered set of unique symbols defining the radix and output characters of a codec.
///
/// Symbols are extended grapheme clusters, so an alphabet may mix ASCII letters with
/// multi-codepoint emoji. Once built an alphabet is immutable and can be shared freely
/// between threads.
///
/// ```
/// use shortuuid::Alphabet;
/// let a = Alphabet::new("0123456789abcdef").unwrap();
/// assert_eq!(a.radix(), 16);
/// assert_eq!(a.width(), 32);
/// assert_eq!(a.zero_symbol(), "0");
/// ```
#[derive(Clone)]
pub struct Alphabet {
    symbols: Vec<String>,
    index: HashMap<String, usize>,
    width: usize,
}

impl Alphabet {
    /// Smallest accepted radix.
    pub const MIN_SYMBOLS: usize = 16;
    /// Largest accepted radix.
    pub const MAX_SYMBOLS: usize = 256;

    /// Build an alphabet from a string, one symbol per grapheme cluster.
    pub fn new(symbols: &str) -> Result<Self> {
        Self::build(symbols.graphemes(true).map(str::to_owned).collect())
    }

    /// Build an alphabet from an explicit list of symbols.
    ///
    /// Every entry must be exactly one grapheme cluster.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Self> {
        let mut owned = Vec::with_capacity(symbols.len());
        for s in symbols {
            let s = s.as_ref();
            if s.graphemes(true).count() != 1 {
                return Err(Error::invalid_alphabet(format!(
                    "symbol {s:?} is not a single grapheme cluster"
                )));
            }
            owned.push(s.to_owned());
        }
        Self::build(owned)
    }

    fn build(symbols: Vec<String>) -> Result<Self> {
        let radix = symbols.len();
        if radix < Self::MIN_SYMBOLS {
            return Err(Error::invalid_alphabet(format!(
                "too few symbols (got {radix}, need at least {})",
                Self::MIN_SYMBOLS
            )));
        }
        if radix > Self::MAX_SYMBOLS {
            return Err(Error::invalid_alphabet(format!(
                "too many symbols (got {radix}, at most {})",
                Self::MAX_SYMBOLS
            )));
        }

        let mut index = HashMap::with_capacity(radix);
        for (i, s) in symbols.iter().enumerate() {
            if index.insert(s.clone(), i).is_some() {
                return Err(Error::invalid_alphabet(format!("duplicate symbol {s:?}")));
            }
        }

        // Every encoded string must split back into the same symbols.
        let mut pair = String::new();
        for a in &symbols {
            for b in &symbols {
                pair.clear();
                pair.push_str(a);
                pair.push_str(b);
                if pair.graphemes(true).next() != Some(a.as_str()) {
                    return Err(Error::invalid_alphabet(format!(
                        "symbols merge when concatenated ({a:?} + {b:?})"
                    )));
                }
            }
        }

        let width = encoded_width(radix);
        tracing::debug!(radix, width, "built alphabet");
        Ok(Self {
            symbols,
            index,
            width,
        })
    }

    /// Number of symbols, i.e. the numeric base.
    #[inline]
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// Fixed number of symbols in every encoded value.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Symbol for digit `i`, or `None` if `i >= radix`.
    #[inline]
    pub fn symbol(&self, i: usize) -> Option<&str> {
        self.symbols.get(i).map(String::as_str)
    }

    /// Digit value of `symbol`, or `None` if it is not part of the alphabet.
    #[inline]
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    /// The symbol at index 0, used for left padding.
    #[inline]
    pub fn zero_symbol(&self) -> &str {
        &self.symbols[0]
    }

    /// All symbols in digit order.
    pub fn symbols(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.symbols.iter().map(String::as_str)
    }

    /// Upper bound on the encoded length in bytes.
    pub(crate) fn max_encoded_len(&self) -> usize {
        let widest = self.symbols.iter().map(String::len).max().unwrap_or(0);
        widest * self.width
    }
}

/// Number of base-`radix` digits needed for `u128::MAX`.
///
/// Equal to `ceil(128 / log2(radix))`, computed on integers to avoid float rounding.
fn encoded_width(radix: usize) -> usize {
    let radix = radix as u128;
    let mut rest = u128::MAX;
    let mut digits = 0;
    while rest > 0 {
        rest /= radix;
        digits += 1;
    }
    digits
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &self.symbols.concat())
            .field("radix", &self.radix())
            .field("width", &self.width)
            .finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.symbols {
            f.write_str(s)?;
        }
        Ok(())
    }
}

impl FromStr for Alphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Alphabets selectable by symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PredefinedAlphabet {
    #[cfg_attr(feature = "serde", serde(rename = "base32"))]
    Base32,
    #[cfg_attr(feature = "serde", serde(rename = "base32_crockford"))]
    Base32Crockford,
    #[cfg_attr(feature = "serde", serde(rename = "base32_hex"))]
    Base32Hex,
    #[cfg_attr(feature = "serde", serde(rename = "base32_rfc4648"))]
    Base32Rfc4648,
    #[cfg_attr(feature = "serde", serde(rename = "base32_z"))]
    Base32Z,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "base57"))]
    Base57,
    #[cfg_attr(feature = "serde", serde(rename = "base58"))]
    Base58,
    #[cfg_attr(feature = "serde", serde(rename = "base62"))]
    Base62,
    #[cfg_attr(feature = "serde", serde(rename = "base64"))]
    Base64,
    #[cfg_attr(feature = "serde", serde(rename = "base64_url"))]
    Base64Url,
}

impl PredefinedAlphabet {
    /// Every predefined alphabet, in name order.
    pub const ALL: [PredefinedAlphabet; 10] = [
        Self::Base32,
        Self::Base32Crockford,
        Self::Base32Hex,
        Self::Base32Rfc4648,
        Self::Base32Z,
        Self::Base57,
        Self::Base58,
        Self::Base62,
        Self::Base64,
        Self::Base64Url,
    ];

    /// The symbolic name, e.g. `"base57"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base32 => "base32",
            Self::Base32Crockford => "base32_crockford",
            Self::Base32Hex => "base32_hex",
            Self::Base32Rfc4648 => "base32_rfc4648",
            Self::Base32Z => "base32_z",
            Self::Base57 => "base57",
            Self::Base58 => "base58",
            Self::Base62 => "base62",
            Self::Base64 => "base64",
            Self::Base64Url => "base64_url",
        }
    }

    /// The character set, index 0 first.
    pub const fn symbols(self) -> &'static str {
        match self {
            Self::Base32 | Self::Base32Rfc4648 => "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567",
            Self::Base32Crockford => "0123456789ABCDEFGHJKMNPQRSTVWXYZ",
            Self::Base32Hex => "0123456789ABCDEFGHIJKLMNOPQRSTUV",
            Self::Base32Z => "ybndrfg8ejkmcpqxot1uwisza345h769",
            Self::Base57 => "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
            Self::Base58 => "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
            Self::Base62 => "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
            Self::Base64 => "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
            Self::Base64Url => "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
        }
    }

    /// Build the alphabet. Predefined sets are always valid.
    pub fn alphabet(self) -> Alphabet {
        match Alphabet::new(self.symbols()) {
            Ok(a) => a,
            Err(e) => unreachable!("predefined alphabet {} rejected: {e}", self.name()),
        }
    }
}

impl fmt::Display for PredefinedAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredefinedAlphabet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::invalid_alphabet(format!("unknown alphabet name {s:?}")))
    }
}

impl From<PredefinedAlphabet> for Alphabet {
    fn from(p: PredefinedAlphabet) -> Self {
        p.alphabet()
    }
}
