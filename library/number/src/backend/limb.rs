use core::cmp::Ordering;

use unboxed_bignum::BigInt;

use super::Backend;
use crate::{DivisionError, FloatError, ParseIntError};

/// The backend built on the limb-based engine in `unboxed_bignum`
///
/// This backend is always available.
#[derive(Debug, Copy, Clone, Default)]
pub struct LimbBackend;

impl Backend for LimbBackend {
    type Big = BigInt;

    const NAME: &'static str = "limb";

    #[inline]
    fn from_hex(s: &str) -> Result<BigInt, ParseIntError> {
        BigInt::from_hex(s)
    }

    #[inline]
    fn from_i64(n: i64) -> BigInt {
        BigInt::from_i64(n)
    }

    #[inline]
    fn from_f64(n: f64) -> Result<BigInt, FloatError> {
        BigInt::from_f64(n)
    }

    #[inline]
    fn to_f64(x: &BigInt) -> f64 {
        x.to_f64()
    }

    #[inline]
    fn to_i64(x: &BigInt) -> Option<i64> {
        x.to_i64()
    }

    #[inline]
    fn is_zero(x: &BigInt) -> bool {
        x.is_zero()
    }

    #[inline]
    fn is_negative(x: &BigInt) -> bool {
        x.is_negative()
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

    #[inline]
    fn div_floor(x: &BigInt, y: &BigInt) -> Result<BigInt, DivisionError> {
        x.div_floor(y)
    }

    #[inline]
    fn mod_floor(x: &BigInt, y: &BigInt) -> Result<BigInt, DivisionError> {
        x.mod_floor(y)
    }

    #[inline]
    fn div_trunc(x: &BigInt, y: &BigInt) -> Result<BigInt, DivisionError> {
        x.div_trunc(y)
    }

    #[inline]
    fn rem_trunc(x: &BigInt, y: &BigInt) -> Result<BigInt, DivisionError> {
        x.rem_trunc(y)
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
