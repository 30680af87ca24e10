//! Immutable arbitrary-precision integers built on 32-bit limbs.
//!
//! A [`BigInt`] is a sign and a magnitude stored least-significant limb first.
//! Values are canonical: there are no redundant high zero limbs and zero is never
//! negative, so structural equality is numeric equality. The magnitude lives in
//! shared immutable storage, which makes clones and negations cheap and makes
//! every value safe to share between threads.
//!
//!     use unboxed_bignum::BigInt;
//!
//!     let x = BigInt::from_hex("-1f4").unwrap();
//!     assert_eq!(x.to_string(), "-500");
//!
//!     let (q, r) = x.div_mod_floor(&BigInt::from(7)).unwrap();
//!     assert_eq!((q.to_string(), r.to_string()), ("-72".to_string(), "4".to_string()));
mod arith;
mod bitwise;
mod convert;
mod div;
mod error;
mod format;
mod magnitude;
mod ops;
mod parse;
mod shift;

pub use self::convert::magnitude_to_f64;
pub use self::error::{DivisionError, FloatError, ParseIntError};
pub use self::parse::{validate_hex, HexDigits};

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use std::sync::Arc;

/// A single digit of a magnitude
pub type Limb = u32;
/// Accumulator wide enough for a limb product plus two carries
pub(crate) type DoubleLimb = u64;

pub const LIMB_BITS: u32 = Limb::BITS;

/// An immutable arbitrary-precision signed integer
#[derive(Clone)]
pub struct BigInt {
    negative: bool,
    limbs: Arc<[Limb]>,
}
impl BigInt {
    /// Builds a canonical value from a sign and a (possibly untrimmed) magnitude
    pub(crate) fn from_vec(negative: bool, mut limbs: Vec<Limb>) -> Self {
        while limbs.len() > 1 && limbs[limbs.len() - 1] == 0 {
            limbs.pop();
        }
        if limbs.is_empty() {
            limbs.push(0);
        }
        let negative = negative && !(limbs.len() == 1 && limbs[0] == 0);
        Self {
            negative,
            limbs: limbs.into(),
        }
    }

    /// Builds a value from a sign and a little-endian magnitude
    ///
    /// The magnitude may contain high zero limbs, or be empty, in which case the value is zero.
    pub fn from_limbs(negative: bool, limbs: &[Limb]) -> Self {
        Self::from_vec(negative, limbs.to_vec())
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_vec(false, vec![0])
    }

    #[inline]
    pub fn one() -> Self {
        Self::from_vec(false, vec![1])
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns -1, 0 or 1 depending on the sign of this value
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// The canonical magnitude, least-significant limb first
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Determines the fewest bits necessary to express the magnitude of this value
    pub fn bits(&self) -> u64 {
        magnitude::bit_length(&self.limbs)
    }

    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// Returns `-self`, sharing the magnitude
    pub fn negate(&self) -> Self {
        Self {
            negative: !self.negative && !self.is_zero(),
            limbs: self.limbs.clone(),
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Eq for BigInt {}
impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.limbs == other.limbs
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.limbs.hash(state);
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => magnitude::cmp(&self.limbs, &other.limbs),
            (true, true) => magnitude::cmp(&other.limbs, &self.limbs),
        }
    }
}
impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
