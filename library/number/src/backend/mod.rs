//! The operation set an arbitrary-precision integer implementation must provide.
//!
//! [`Int`](crate::Int) is generic over [`Backend`], and uses it for every value which
//! does not fit the small representation. Backends must agree exactly on every result,
//! including the sign and rounding conventions documented on each operation, so that
//! swapping one for another is unobservable.
mod limb;
#[cfg(feature = "native")]
mod native;
mod selected;

pub use self::limb::LimbBackend;
#[cfg(feature = "native")]
pub use self::native::NativeBackend;
pub use self::selected::{AnyBig, SelectedBackend};

use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;

use crate::{DivisionError, FloatError, ParseIntError};

pub trait Backend: fmt::Debug + Copy + Default + Send + Sync + 'static {
    /// The immutable arbitrary-precision value type of this backend
    type Big: Clone + fmt::Debug + fmt::Display + Eq + Hash + Send + Sync;

    /// A short, human-readable name for diagnostics
    const NAME: &'static str;

    /// Parses an optional `-` followed by one or more hexadecimal digits
    fn from_hex(s: &str) -> Result<Self::Big, ParseIntError>;

    fn from_i64(n: i64) -> Self::Big;

    /// Converts a finite float, truncating toward zero
    fn from_f64(n: f64) -> Result<Self::Big, FloatError>;

    /// Converts to the nearest float, rounding half to even
    fn to_f64(x: &Self::Big) -> f64;

    /// Converts exactly, or returns `None` if the value is outside the `i64` range
    fn to_i64(x: &Self::Big) -> Option<i64>;

    fn is_zero(x: &Self::Big) -> bool;

    /// Returns true if the value is less than zero
    fn is_negative(x: &Self::Big) -> bool;

    /// The number of bits needed to express the magnitude
    fn bits(x: &Self::Big) -> u64;

    fn cmp(x: &Self::Big, y: &Self::Big) -> Ordering;

    fn add(x: &Self::Big, y: &Self::Big) -> Self::Big;

    fn sub(x: &Self::Big, y: &Self::Big) -> Self::Big;

    fn mul(x: &Self::Big, y: &Self::Big) -> Self::Big;

    /// Quotient rounded toward negative infinity
    fn div_floor(x: &Self::Big, y: &Self::Big) -> Result<Self::Big, DivisionError>;

    /// Modulus with the sign of the divisor, or zero
    fn mod_floor(x: &Self::Big, y: &Self::Big) -> Result<Self::Big, DivisionError>;

    /// Quotient rounded toward zero
    fn div_trunc(x: &Self::Big, y: &Self::Big) -> Result<Self::Big, DivisionError>;

    /// Remainder with the sign of the dividend, or zero
    fn rem_trunc(x: &Self::Big, y: &Self::Big) -> Result<Self::Big, DivisionError>;

    /// Two's complement AND
    fn and(x: &Self::Big, y: &Self::Big) -> Self::Big;

    /// Two's complement OR
    fn or(x: &Self::Big, y: &Self::Big) -> Self::Big;

    /// Two's complement XOR
    fn xor(x: &Self::Big, y: &Self::Big) -> Self::Big;

    /// Two's complement NOT, i.e. `-x - 1`
    fn not(x: &Self::Big) -> Self::Big;

    fn neg(x: &Self::Big) -> Self::Big;

    fn shl(x: &Self::Big, bits: u32) -> Self::Big;

    /// Arithmetic shift, rounding toward negative infinity
    fn shr(x: &Self::Big, bits: u32) -> Self::Big;
}
