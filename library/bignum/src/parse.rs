use crate::{BigInt, Limb, ParseIntError, LIMB_BITS};

/// Number of hex digits that exactly fill one limb
const DIGITS_PER_LIMB: usize = (LIMB_BITS / 4) as usize;

/// A hexadecimal integer literal which has been checked for well-formedness
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HexDigits<'a> {
    pub negative: bool,
    /// The digits without the sign, guaranteed non-empty and ASCII hexadecimal
    pub digits: &'a str,
}

/// Checks that `s` is an optional `-` followed by one or more hexadecimal digits
///
/// Errors report the byte index of the first offending character in `s`.
pub fn validate_hex(s: &str) -> Result<HexDigits<'_>, ParseIntError> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if digits.is_empty() {
        return Err(ParseIntError::Empty);
    }
    let offset = negative as usize;
    if let Some((index, digit)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(ParseIntError::InvalidDigit {
            digit,
            index: index + offset,
        });
    }
    Ok(HexDigits { negative, digits })
}

impl BigInt {
    /// Parses a hexadecimal string with an optional leading `-` and no radix prefix
    ///
    /// Digits are case-insensitive. Eight digits fill one limb, so the input is consumed in
    /// eight-digit chunks starting from the least-significant end.
    pub fn from_hex(s: &str) -> Result<Self, ParseIntError> {
        let HexDigits { negative, digits } = validate_hex(s)?;
        let bytes = digits.as_bytes();
        let mut limbs = Vec::with_capacity((bytes.len() + DIGITS_PER_LIMB - 1) / DIGITS_PER_LIMB);
        for chunk in bytes.rchunks(DIGITS_PER_LIMB) {
            let limb = chunk
                .iter()
                .fold(0, |acc: Limb, &b| (acc << 4) | hex_value(b));
            limbs.push(limb);
        }
        Ok(Self::from_vec(negative, limbs))
    }
}

#[inline]
fn hex_value(b: u8) -> Limb {
    match b {
        b'0'..=b'9' => (b - b'0') as Limb,
        b'a'..=b'f' => (b - b'a' + 10) as Limb,
        b'A'..=b'F' => (b - b'A' + 10) as Limb,
        _ => unreachable!("digits are validated before conversion"),
    }
}
