use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

use crate::{magnitude, shift, BigInt, FloatError, Limb, LIMB_BITS};

const F64_MANTISSA_BITS: u32 = f64::MANTISSA_DIGITS - 1;
const F64_EXPONENT_BIAS: i64 = 1023;

impl BigInt {
    pub fn from_u64(n: u64) -> Self {
        Self::from_vec(false, vec![n as Limb, (n >> LIMB_BITS) as Limb])
    }

    pub fn from_i64(n: i64) -> Self {
        let magnitude = n.unsigned_abs();
        Self::from_vec(
            n < 0,
            vec![magnitude as Limb, (magnitude >> LIMB_BITS) as Limb],
        )
    }

    /// Converts a finite float to an integer, truncating any fractional part
    ///
    /// The conversion is exact for every finite input: a float whose magnitude is at least
    /// `2^64` is decomposed into its mantissa and exponent rather than going through a
    /// machine integer.
    pub fn from_f64(n: f64) -> Result<Self, FloatError> {
        FloatError::from_category(n.classify())?;
        let n = n.trunc();
        let magnitude = n.abs();
        if magnitude < 18446744073709551616.0 {
            let int = Self::from_u64(magnitude as u64);
            return Ok(if n < 0.0 { int.negate() } else { int });
        }
        let bits = magnitude.to_bits();
        let exponent = ((bits >> F64_MANTISSA_BITS) & 0x7ff) as i64;
        let mantissa = (bits & ((1 << F64_MANTISSA_BITS) - 1)) | (1 << F64_MANTISSA_BITS);
        let scale = exponent - F64_EXPONENT_BIAS - F64_MANTISSA_BITS as i64;
        debug_assert!(scale > 0);
        let int = shift::shl(&Self::from_u64(mantissa), scale as u32);
        Ok(if n < 0.0 { int.negate() } else { int })
    }

    /// Converts to the nearest float, rounding half to even
    ///
    /// Magnitudes beyond the range of `f64` become infinite.
    pub fn to_f64(&self) -> f64 {
        let magnitude = magnitude_to_f64(&self.limbs);
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Returns this value as an `i64`, or `None` if it does not fit
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude_to_u64()?;
        if self.negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    /// Returns this value as a `u64`, or `None` if it is negative or does not fit
    pub fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        self.magnitude_to_u64()
    }

    fn magnitude_to_u64(&self) -> Option<u64> {
        match &*self.limbs {
            [low] => Some(*low as u64),
            [low, high] => Some(((*high as u64) << LIMB_BITS) | *low as u64),
            _ => None,
        }
    }
}

/// Correctly rounded conversion of a magnitude to `f64`
///
/// The top 64 bits are converted by the hardware, with every bit below them folded into
/// the lowest bit as a sticky bit, so the single rounding step sees the exact tie-breaking
/// information.
pub fn magnitude_to_f64(limbs: &[Limb]) -> f64 {
    let bits = magnitude::bit_length(limbs);
    if bits <= 64 {
        let low = limbs.first().copied().unwrap_or(0) as u64;
        let high = limbs.get(1).copied().unwrap_or(0) as u64;
        return ((high << LIMB_BITS) | low) as f64;
    }
    if bits > f64::MAX_EXP as u64 {
        return f64::INFINITY;
    }

    let drop = (bits - 64) as usize;
    let top = shift::shr_magnitude(limbs, drop);
    let mut top = ((top[1] as u64) << LIMB_BITS) | top[0] as u64;
    let dropped_limbs = drop / LIMB_BITS as usize;
    let dropped_bits = (drop % LIMB_BITS as usize) as u32;
    let sticky = limbs[..dropped_limbs].iter().any(|&limb| limb != 0)
        || (dropped_bits > 0 && limbs[dropped_limbs] & ((1 << dropped_bits) - 1) != 0);
    if sticky {
        top |= 1;
    }
    // Scaling by a power of two is exact, and `drop` is small enough for a normal exponent
    let scale = f64::from_bits(((F64_EXPONENT_BIAS + drop as i64) as u64) << F64_MANTISSA_BITS);
    top as f64 * scale
}

impl From<i64> for BigInt {
    #[inline]
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}
impl From<u64> for BigInt {
    #[inline]
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}
impl From<i32> for BigInt {
    #[inline]
    fn from(n: i32) -> Self {
        Self::from_i64(n.into())
    }
}
impl From<u32> for BigInt {
    #[inline]
    fn from(n: u32) -> Self {
        Self::from_vec(false, vec![n])
    }
}

impl Zero for BigInt {
    #[inline]
    fn zero() -> Self {
        BigInt::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> Self {
        BigInt::one()
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        BigInt::to_i64(self)
    }

    fn to_u64(&self) -> Option<u64> {
        BigInt::to_u64(self)
    }

    fn to_f64(&self) -> Option<f64> {
        Some(BigInt::to_f64(self))
    }
}

impl FromPrimitive for BigInt {
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigInt::from_i64(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(BigInt::from_u64(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        BigInt::from_f64(n).ok()
    }
}
