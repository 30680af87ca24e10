use core::cmp::Ordering;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{FromPrimitive, ToPrimitive, Zero};

use super::Backend;
use crate::{DivisionError, FloatError, ParseIntError};

/// The backend built on `num_bigint::BigInt`
///
/// Only available when the `native` feature is enabled.
#[derive(Debug, Copy, Clone, Default)]
pub struct NativeBackend;

impl Backend for NativeBackend {
    type Big = BigInt;

    const NAME: &'static str = "native";

    fn from_hex(s: &str) -> Result<BigInt, ParseIntError> {
        // num-bigint is more lenient than we are (it accepts `_` separators and a `+` sign),
        // so the input goes through the same validation as the limb engine first
        let hex = unboxed_bignum::validate_hex(s)?;
        let magnitude =
            BigInt::parse_bytes(hex.digits.as_bytes(), 16).ok_or(ParseIntError::Empty)?;
        Ok(if hex.negative { -magnitude } else { magnitude })
    }

    #[inline]
    fn from_i64(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn from_f64(n: f64) -> Result<BigInt, FloatError> {
        FloatError::from_category(n.classify())?;
        BigInt::from_f64(n.trunc()).ok_or(FloatError::Infinite)
    }

    /// Uses the same correctly rounded conversion as the limb engine, so both backends
    /// produce identical floats for values beyond the exact range
    fn to_f64(x: &BigInt) -> f64 {
        let (sign, digits) = x.to_u32_digits();
        let magnitude = unboxed_bignum::magnitude_to_f64(&digits);
        if sign == Sign::Minus {
            -magnitude
        } else {
            magnitude
        }
    }

    #[inline]
    fn to_i64(x: &BigInt) -> Option<i64> {
        ToPrimitive::to_i64(x)
    }

    #[inline]
    fn is_zero(x: &BigInt) -> bool {
        Zero::is_zero(x)
    }

    #[inline]
    fn is_negative(x: &BigInt) -> bool {
        x.sign() == Sign::Minus
    }

    #[inline]
    fn bits(x: &BigInt) -> u64 {
        x.bits()
    }

    #[inline]
    fn cmp(x: &BigInt, y: &BigInt) -> Ordering {
        x.cmp(y)
    }

    #[inline]
    fn add(x: &BigInt, y: &BigInt) -> BigInt {
        x + y
    }

    #[inline]
    fn sub(x: &BigInt, y: &BigInt) -> BigInt {
        x - y
    }

    #[inline]
    fn mul(x: &BigInt, y: &BigInt) -> BigInt {
        x * y
    }

    fn div_floor(x: &BigInt, y: &BigInt) -> Result<BigInt, DivisionError> {
        if Zero::is_zero(y) {
            return Err(DivisionError);
        }
        Ok(Integer::div_floor(x, y))
    }

    fn mod_floor(x: &BigInt, y: &BigInt) -> Result<BigInt, DivisionError> {
        if Zero::is_zero(y) {
            return Err(DivisionError);
        }
        Ok(Integer::mod_floor(x, y))
    }

    fn div_trunc(x: &BigInt, y: &BigInt) -> Result<BigInt, DivisionError> {
        if Zero::is_zero(y) {
            return Err(DivisionError);
        }
        Ok(x / y)
    }

    fn rem_trunc(x: &BigInt, y: &BigInt) -> Result<BigInt, DivisionError> {
        if Zero::is_zero(y) {
            return Err(DivisionError);
        }
        Ok(x % y)
    }

    #[inline]
    fn and(x: &BigInt, y: &BigInt) -> BigInt {
        x & y
    }

    #[inline]
    fn or(x: &BigInt, y: &BigInt) -> BigInt {
        x | y
    }

    #[inline]
    fn xor(x: &BigInt, y: &BigInt) -> BigInt {
        x ^ y
    }

    #[inline]
    fn not(x: &BigInt) -> BigInt {
        !x
    }

    #[inline]
    fn neg(x: &BigInt) -> BigInt {
        -x
    }

    #[inline]
    fn shl(x: &BigInt, bits: u32) -> BigInt {
        x << bits
    }

    #[inline]
    fn shr(x: &BigInt, bits: u32) -> BigInt {
        x >> bits
    }
}
