use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};
use std::borrow::Cow;

use log::trace;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::backend::{Backend, SelectedBackend};
use crate::{DivisionError, FloatError, ParseIntError};

/// The number of bits an integer may occupy, excluding the sign, and still be exactly
/// representable as a float
const SAFE_BITS: u32 = 53;

/// This enum unifies the small and arbitrary-precision integer representations
///
/// Values whose magnitude is below 2^53 are kept as plain machine integers, everything else is
/// delegated to the backend `B`. A value which has been promoted to `Big` stays `Big`, as do all
/// values derived from it, even when they would fit the small representation again.
#[derive(Debug, Clone)]
pub enum Int<B: Backend = SelectedBackend> {
    Small(i64),
    Big(B::Big),
}
impl<B: Backend> Int<B> {
    pub const MAX_SMALL: i64 = (1 << SAFE_BITS) - 1;
    pub const MIN_SMALL: i64 = -Self::MAX_SMALL;

    #[inline]
    pub fn new(i: i64) -> Self {
        if i < Self::MIN_SMALL || i > Self::MAX_SMALL {
            trace!(target: "unboxed", "promoting {} to a {} big integer", i, B::NAME);
            Self::Big(B::from_i64(i))
        } else {
            Self::Small(i)
        }
    }

    /// Parses an optional `-` followed by one or more hexadecimal digits
    ///
    /// The result is always a big integer, regardless of its magnitude.
    pub fn from_hex(s: &str) -> Result<Self, ParseIntError> {
        B::from_hex(s).map(Self::Big)
    }

    /// Converts a finite float to an integer, truncating toward zero
    pub fn from_f64(n: f64) -> Result<Self, FloatError> {
        FloatError::from_category(n.classify())?;
        let n = n.trunc();
        if n.abs() <= Self::MAX_SMALL as f64 {
            Ok(Self::Small(n as i64))
        } else {
            B::from_f64(n).map(Self::Big)
        }
    }

    /// Forces this value into the big representation
    pub fn promote(self) -> Self {
        match self {
            Self::Small(i) => {
                trace!(target: "unboxed", "promoting {} to a {} big integer", i, B::NAME);
                Self::Big(B::from_i64(i))
            }
            big => big,
        }
    }

    #[inline]
    pub fn is_small(&self) -> bool {
        matches!(self, Self::Small(_))
    }

    #[inline]
    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big(_))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Small(i) => *i == 0,
            Self::Big(i) => B::is_zero(i),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Self::Small(i) => *i < 0,
            Self::Big(i) => B::is_negative(i),
        }
    }

    /// Returns -1, 0 or 1 according to the sign of this integer
    pub fn signum(&self) -> i32 {
        match self {
            Self::Small(i) => i.signum() as i32,
            Self::Big(i) if B::is_negative(i) => -1,
            Self::Big(i) if B::is_zero(i) => 0,
            Self::Big(_) => 1,
        }
    }

    pub fn abs(&self) -> Self {
        match self {
            Self::Small(i) => Self::Small(i.abs()),
            Self::Big(i) if B::is_negative(i) => Self::Big(B::neg(i)),
            Self::Big(_) => self.clone(),
        }
    }

    /// Determines the fewest bits necessary to express this integer value, not including the sign
    pub fn bits(&self) -> u64 {
        match self {
            Self::Small(i) => (64 - i.unsigned_abs().leading_zeros()) as u64,
            Self::Big(i) => B::bits(i),
        }
    }

    /// Converts to the nearest float, exactly if the value is small
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Small(i) => *i as f64,
            Self::Big(i) => B::to_f64(i),
        }
    }

    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Small(i) => Some(*i),
            Self::Big(i) => B::to_i64(i),
        }
    }

    /// Quotient rounded toward negative infinity
    pub fn div_floor(&self, rhs: &Self) -> Result<Self, DivisionError> {
        self.checked_binary(
            rhs,
            |x, y| checked_divisor(y).map(|y| Integer::div_floor(&x, &y)),
            B::div_floor,
        )
    }

    /// Modulus which is either zero, or has the sign of `rhs`
    pub fn mod_floor(&self, rhs: &Self) -> Result<Self, DivisionError> {
        self.checked_binary(
            rhs,
            |x, y| checked_divisor(y).map(|y| Integer::mod_floor(&x, &y)),
            B::mod_floor,
        )
    }

    /// Quotient rounded toward zero
    pub fn div_trunc(&self, rhs: &Self) -> Result<Self, DivisionError> {
        self.checked_binary(rhs, |x, y| checked_divisor(y).map(|y| x / y), B::div_trunc)
    }

    /// Remainder which is either zero, or has the sign of `self`
    pub fn rem_trunc(&self, rhs: &Self) -> Result<Self, DivisionError> {
        self.checked_binary(rhs, |x, y| checked_divisor(y).map(|y| x % y), B::rem_trunc)
    }

    fn to_big(&self) -> Cow<'_, B::Big> {
        match self {
            Self::Small(i) => Cow::Owned(B::from_i64(*i)),
            Self::Big(i) => Cow::Borrowed(i),
        }
    }

    /// Applies `small` when both operands are small and its result stays within the small range,
    /// otherwise promotes both operands and applies `big`
    fn binary<S, G>(&self, rhs: &Self, small: S, big: G) -> Self
    where
        S: FnOnce(i64, i64) -> Option<i64>,
        G: FnOnce(&B::Big, &B::Big) -> B::Big,
    {
        if let (Self::Small(x), Self::Small(y)) = (self, rhs) {
            match small(*x, *y) {
                Some(i) if (Self::MIN_SMALL..=Self::MAX_SMALL).contains(&i) => {
                    return Self::Small(i)
                }
                _ => trace!(
                    target: "unboxed",
                    "promoting operands {} and {} to {} big integers",
                    x,
                    y,
                    B::NAME
                ),
            }
        }
        Self::Big(big(&self.to_big(), &rhs.to_big()))
    }

    /// Like `binary`, for operations which fail on a zero divisor
    fn checked_binary<S, G>(&self, rhs: &Self, small: S, big: G) -> Result<Self, DivisionError>
    where
        S: FnOnce(i64, i64) -> Result<i64, DivisionError>,
        G: FnOnce(&B::Big, &B::Big) -> Result<B::Big, DivisionError>,
    {
        match (self, rhs) {
            (Self::Small(x), Self::Small(y)) => small(*x, *y).map(Self::new),
            _ => big(&self.to_big(), &rhs.to_big()).map(Self::Big),
        }
    }
}

#[inline]
fn checked_divisor(y: i64) -> Result<i64, DivisionError> {
    if y == 0 {
        Err(DivisionError)
    } else {
        Ok(y)
    }
}

impl<B: Backend> Default for Int<B> {
    #[inline]
    fn default() -> Self {
        Self::Small(0)
    }
}

impl<B: Backend> fmt::Display for Int<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Small(int) => fmt::Display::fmt(int, f),
            Self::Big(int) => fmt::Display::fmt(int, f),
        }
    }
}

impl<B: Backend> Eq for Int<B> {}
impl<B: Backend> PartialEq for Int<B> {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl<B: Backend> PartialEq<i64> for Int<B> {
    fn eq(&self, rhs: &i64) -> bool {
        match self {
            Self::Small(lhs) => lhs.eq(rhs),
            Self::Big(lhs) => B::to_i64(lhs) == Some(*rhs),
        }
    }
}
impl<B: Backend> PartialEq<Int<B>> for i64 {
    fn eq(&self, rhs: &Int<B>) -> bool {
        rhs.eq(self)
    }
}

impl<B: Backend> Ord for Int<B> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => lhs.cmp(rhs),
            (lhs, rhs) => B::cmp(&lhs.to_big(), &rhs.to_big()),
        }
    }
}
impl<B: Backend> PartialOrd for Int<B> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

fn add<B: Backend>(x: &Int<B>, y: &Int<B>) -> Int<B> {
    x.binary(y, i64::checked_add, B::add)
}

fn sub<B: Backend>(x: &Int<B>, y: &Int<B>) -> Int<B> {
    x.binary(y, i64::checked_sub, B::sub)
}

fn mul<B: Backend>(x: &Int<B>, y: &Int<B>) -> Int<B> {
    x.binary(y, i64::checked_mul, B::mul)
}

// The bitwise operators can't overflow an i64, but `-2^53` may come out of them
fn and<B: Backend>(x: &Int<B>, y: &Int<B>) -> Int<B> {
    x.binary(y, |x, y| Some(x & y), B::and)
}

fn or<B: Backend>(x: &Int<B>, y: &Int<B>) -> Int<B> {
    x.binary(y, |x, y| Some(x | y), B::or)
}

fn xor<B: Backend>(x: &Int<B>, y: &Int<B>) -> Int<B> {
    x.binary(y, |x, y| Some(x ^ y), B::xor)
}

fn div<B: Backend>(x: &Int<B>, y: &Int<B>) -> Result<Int<B>, DivisionError> {
    x.div_trunc(y)
}

fn rem<B: Backend>(x: &Int<B>, y: &Int<B>) -> Result<Int<B>, DivisionError> {
    x.rem_trunc(y)
}

fn neg<B: Backend>(x: &Int<B>) -> Int<B> {
    match x {
        Int::Small(i) => Int::Small(-i),
        Int::Big(i) => Int::Big(B::neg(i)),
    }
}

fn not<B: Backend>(x: &Int<B>) -> Int<B> {
    match x {
        Int::Small(i) => Int::new(!i),
        Int::Big(i) => Int::Big(B::not(i)),
    }
}

fn shl<B: Backend>(x: &Int<B>, bits: u32) -> Int<B> {
    match x {
        Int::Small(i) if bits < SAFE_BITS => match i.checked_mul(1 << bits) {
            Some(shifted) if (Int::<B>::MIN_SMALL..=Int::<B>::MAX_SMALL).contains(&shifted) => {
                Int::Small(shifted)
            }
            _ => Int::Big(B::shl(&B::from_i64(*i), bits)),
        },
        Int::Small(0) => Int::Small(0),
        Int::Small(i) => Int::Big(B::shl(&B::from_i64(*i), bits)),
        Int::Big(i) => Int::Big(B::shl(i, bits)),
    }
}

fn shr<B: Backend>(x: &Int<B>, bits: u32) -> Int<B> {
    match x {
        // Shifting a small value by 53 or more bits leaves only its sign
        Int::Small(i) => Int::Small(i >> bits.min(SAFE_BITS)),
        Int::Big(i) => Int::Big(B::shr(i, bits)),
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $impl:ident, $output:ty) => {
        impl<B: Backend> $trait<&Int<B>> for &Int<B> {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: &Int<B>) -> Self::Output {
                $impl(self, rhs)
            }
        }
        impl<B: Backend> $trait<Int<B>> for &Int<B> {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: Int<B>) -> Self::Output {
                $impl(self, &rhs)
            }
        }
        impl<B: Backend> $trait<&Int<B>> for Int<B> {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: &Int<B>) -> Self::Output {
                $impl(&self, rhs)
            }
        }
        impl<B: Backend> $trait<Int<B>> for Int<B> {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: Int<B>) -> Self::Output {
                $impl(&self, &rhs)
            }
        }
        impl<B: Backend> $trait<i64> for Int<B> {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: i64) -> Self::Output {
                $impl(&self, &Int::new(rhs))
            }
        }
    };
}

forward_binop!(Add, add, add, Int<B>);
forward_binop!(Sub, sub, sub, Int<B>);
forward_binop!(Mul, mul, mul, Int<B>);
forward_binop!(BitAnd, bitand, and, Int<B>);
forward_binop!(BitOr, bitor, or, Int<B>);
forward_binop!(BitXor, bitxor, xor, Int<B>);
forward_binop!(Div, div, div, Result<Int<B>, DivisionError>);
forward_binop!(Rem, rem, rem, Result<Int<B>, DivisionError>);

impl<B: Backend> Neg for Int<B> {
    type Output = Int<B>;

    fn neg(self) -> Self::Output {
        neg(&self)
    }
}
impl<B: Backend> Neg for &Int<B> {
    type Output = Int<B>;

    fn neg(self) -> Self::Output {
        neg(self)
    }
}

impl<B: Backend> Not for Int<B> {
    type Output = Int<B>;

    fn not(self) -> Self::Output {
        not(&self)
    }
}
impl<B: Backend> Not for &Int<B> {
    type Output = Int<B>;

    fn not(self) -> Self::Output {
        not(self)
    }
}

impl<B: Backend> Shl<u32> for Int<B> {
    type Output = Int<B>;

    fn shl(self, bits: u32) -> Self::Output {
        shl(&self, bits)
    }
}
impl<B: Backend> Shl<u32> for &Int<B> {
    type Output = Int<B>;

    fn shl(self, bits: u32) -> Self::Output {
        shl(self, bits)
    }
}

impl<B: Backend> Shr<u32> for Int<B> {
    type Output = Int<B>;

    fn shr(self, bits: u32) -> Self::Output {
        shr(&self, bits)
    }
}
impl<B: Backend> Shr<u32> for &Int<B> {
    type Output = Int<B>;

    fn shr(self, bits: u32) -> Self::Output {
        shr(self, bits)
    }
}

impl<B: Backend> Zero for Int<B> {
    #[inline]
    fn zero() -> Self {
        Self::Small(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Int::is_zero(self)
    }
}
impl<B: Backend> One for Int<B> {
    #[inline]
    fn one() -> Self {
        Self::Small(1)
    }
}

macro_rules! from_small_primitive {
    ($($ty:ty),*) => {
        $(
            impl<B: Backend> From<$ty> for Int<B> {
                #[inline(always)]
                fn from(i: $ty) -> Self {
                    Self::Small(i.into())
                }
            }
        )*
    };
}

from_small_primitive!(u8, u16, u32, i8, i16, i32);

impl<B: Backend> From<i64> for Int<B> {
    #[inline(always)]
    fn from(i: i64) -> Self {
        Self::new(i)
    }
}
impl<B: Backend> From<u64> for Int<B> {
    fn from(i: u64) -> Self {
        match i64::try_from(i) {
            Ok(i) => Self::new(i),
            Err(_) => Self::Big(big_from_u64::<B>(i)),
        }
    }
}
impl<B: Backend> From<usize> for Int<B> {
    #[inline]
    fn from(i: usize) -> Self {
        Self::from(i as u64)
    }
}
impl<B: Backend> From<i128> for Int<B> {
    fn from(i: i128) -> Self {
        if let Ok(i) = i64::try_from(i) {
            return Self::new(i);
        }
        let high = B::shl(&B::from_i64((i >> 64) as i64), 64);
        Self::Big(B::add(&high, &big_from_u64::<B>(i as u64)))
    }
}

fn big_from_u64<B: Backend>(i: u64) -> B::Big {
    match i64::try_from(i) {
        Ok(i) => B::from_i64(i),
        Err(_) => {
            let high = B::shl(&B::from_i64((i >> 32) as i64), 32);
            B::add(&high, &B::from_i64((i & 0xffff_ffff) as i64))
        }
    }
}
