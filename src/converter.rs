use unicode_segmentation::UnicodeSegmentation;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Encode `value` as exactly `alphabet.width()` symbols, most significant first.
///
/// Values needing fewer digits are left-padded with the zero symbol.
///
/// ```
/// use shortuuid::{converter, PredefinedAlphabet};
/// let a = PredefinedAlphabet::Base57.alphabet();
/// assert_eq!(converter::encode_int(0, &a).unwrap(), "2222222222222222222222");
/// ```
pub fn encode_int(value: u128, alphabet: &Alphabet) -> Result<String> {
    let mut out = String::with_capacity(alphabet.max_encoded_len());
    encode_int_into(value, alphabet, &mut out)?;
    Ok(out)
}

/// Append the encoding of `value` to `dst` and return the number of symbols written.
///
/// `dst` is left untouched on error.
pub fn encode_int_into(value: u128, alphabet: &Alphabet, dst: &mut String) -> Result<usize> {
    let radix = alphabet.radix() as u128;
    let width = alphabet.width();

    // Least significant digit first; a u128 has at most 128 digits in any radix >= 2.
    let mut digits = [0u8; 128];
    let mut n = 0;
    let mut rest = value;
    while rest > 0 {
        digits[n] = (rest % radix) as u8;
        rest /= radix;
        n += 1;
    }

    if n > width {
        return Err(Error::InternalInvariant(format!(
            "incorrect length (value needs {n} symbols, width is {width})"
        )));
    }

    let start = dst.len();
    dst.reserve(alphabet.max_encoded_len());
    for _ in n..width {
        dst.push_str(alphabet.zero_symbol());
    }
    for &d in digits[..n].iter().rev() {
        match alphabet.symbol(d as usize) {
            Some(s) => dst.push_str(s),
            None => {
                dst.truncate(start);
                return Err(Error::InternalInvariant(format!("digit {d} has no symbol")));
            }
        }
    }
    Ok(width)
}

/// Decode a string of exactly `alphabet.width()` symbols back to its integer value.
///
/// Fails with [`Error::InvalidInput`] on a length mismatch, on the first symbol outside
/// the alphabet, or when the value does not fit in 128 bits.
pub fn decode_string(s: &str, alphabet: &Alphabet) -> Result<u128> {
    let width = alphabet.width();
    let len = s.graphemes(true).take(width + 1).count();
    if len != width {
        tracing::trace!(expected = width, "rejecting encoded value of wrong length");
        return Err(Error::invalid_input("invalid length"));
    }

    let radix = alphabet.radix() as u128;
    let mut acc: u128 = 0;
    for symbol in s.graphemes(true) {
        let Some(digit) = alphabet.index_of(symbol) else {
            tracing::trace!(symbol, "rejecting encoded value with unknown symbol");
            return Err(Error::invalid_input("invalid character"));
        };
        acc = acc
            .checked_mul(radix)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or_else(|| {
                tracing::trace!("rejecting encoded value above u128::MAX");
                Error::invalid_input("out of range")
            })?;
    }
    Ok(acc)
}
