use core::cmp::Ordering;

use crate::{arith, magnitude, BigInt, DivisionError, DoubleLimb, Limb, LIMB_BITS};

const LIMB_MAX: DoubleLimb = Limb::MAX as DoubleLimb;

/// Divides magnitude `u` by non-zero magnitude `v`, returning `(quotient, remainder)`
///
/// This is Knuth's algorithm D (TAOCP vol. 2, 4.3.1): both operands are normalized so
/// the divisor's top limb has its high bit set, which keeps every quotient digit
/// estimate at most two above the true digit.
fn divmod_magnitude(u: &[Limb], v: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(!magnitude::is_zero(v));
    if magnitude::cmp(u, v) == Ordering::Less {
        return (vec![0], u.to_vec());
    }
    if v.len() == 1 {
        let (q, r) = magnitude::divmod_limb(u, v[0]);
        return (q, vec![r]);
    }

    let shift = v[v.len() - 1].leading_zeros();
    let (v, _) = normalize(v, shift);
    let (mut u, carry) = normalize(u, shift);
    // The dividend always gets one extra high limb to hold the first partial remainder
    u.push(carry);
    let n = v.len();
    let m = u.len() - n - 1;

    let v_top = v[n - 1] as DoubleLimb;
    let v_next = v[n - 2] as DoubleLimb;
    let mut q = vec![0; m + 1];
    for j in (0..=m).rev() {
        let top = ((u[j + n] as DoubleLimb) << LIMB_BITS) | u[j + n - 1] as DoubleLimb;
        let mut q_hat = top / v_top;
        let mut r_hat = top % v_top;
        while q_hat > LIMB_MAX
            || q_hat * v_next > ((r_hat << LIMB_BITS) | u[j + n - 2] as DoubleLimb)
        {
            q_hat -= 1;
            r_hat += v_top;
            if r_hat > LIMB_MAX {
                break;
            }
        }

        // u[j..=j+n] -= q_hat * v
        let mut borrow: i64 = 0;
        for i in 0..n {
            let product = q_hat * v[i] as DoubleLimb;
            let t = u[i + j] as i64 - borrow - (product & LIMB_MAX) as i64;
            u[i + j] = t as Limb;
            borrow = (product >> LIMB_BITS) as i64 - (t >> LIMB_BITS);
        }
        let t = u[j + n] as i64 - borrow;
        u[j + n] = t as Limb;

        // The estimate was one too high, so the partial remainder went negative: add back
        if t < 0 {
            q_hat -= 1;
            let mut carry: DoubleLimb = 0;
            for i in 0..n {
                let sum = u[i + j] as DoubleLimb + v[i] as DoubleLimb + carry;
                u[i + j] = sum as Limb;
                carry = sum >> LIMB_BITS;
            }
            u[j + n] = u[j + n].wrapping_add(carry as Limb);
        }
        q[j] = q_hat as Limb;
    }

    u.truncate(n);
    (q, denormalize(&u, shift))
}

/// Shifts `a` left by `shift < LIMB_BITS` bits, returning the shifted limbs and the bits
/// shifted out
fn normalize(a: &[Limb], shift: u32) -> (Vec<Limb>, Limb) {
    if shift == 0 {
        return (a.to_vec(), 0);
    }
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0;
    for &limb in a {
        out.push((limb << shift) | carry);
        carry = limb >> (LIMB_BITS - shift);
    }
    (out, carry)
}

/// Undoes `normalize` on a remainder, which is always a multiple of `2^shift`
fn denormalize(a: &[Limb], shift: u32) -> Vec<Limb> {
    if shift == 0 {
        return a.to_vec();
    }
    let mut out = vec![0; a.len()];
    for i in 0..a.len() {
        let high = a.get(i + 1).map(|&next| next << (LIMB_BITS - shift)).unwrap_or(0);
        out[i] = (a[i] >> shift) | high;
    }
    out
}

impl BigInt {
    /// Truncating division, returns `(quotient, remainder)`
    ///
    /// The quotient is rounded toward zero, and the remainder is zero or has the sign of `self`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), DivisionError> {
        if divisor.is_zero() {
            return Err(DivisionError);
        }
        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()));
        }
        let (q, r) = divmod_magnitude(&self.limbs, &divisor.limbs);
        Ok((
            BigInt::from_vec(self.negative ^ divisor.negative, q),
            BigInt::from_vec(self.negative, r),
        ))
    }

    /// Floored division, returns `(quotient, modulus)`
    ///
    /// The quotient is rounded toward negative infinity, and the modulus is zero or has the
    /// sign of `divisor`.
    pub fn div_mod_floor(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), DivisionError> {
        let (q, r) = self.div_rem(divisor)?;
        if r.is_zero() || r.negative == divisor.negative {
            Ok((q, r))
        } else {
            Ok((arith::decrement(&q), arith::add(&r, divisor)))
        }
    }

    /// Truncating quotient, rounded toward zero
    pub fn div_trunc(&self, divisor: &BigInt) -> Result<BigInt, DivisionError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Truncating remainder, zero or with the sign of `self`
    pub fn rem_trunc(&self, divisor: &BigInt) -> Result<BigInt, DivisionError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Floored quotient, rounded toward negative infinity
    pub fn div_floor(&self, divisor: &BigInt) -> Result<BigInt, DivisionError> {
        self.div_mod_floor(divisor).map(|(q, _)| q)
    }

    /// Floored modulus, zero or with the sign of `divisor`
    pub fn mod_floor(&self, divisor: &BigInt) -> Result<BigInt, DivisionError> {
        self.div_mod_floor(divisor).map(|(_, m)| m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn int(i: i64) -> BigInt {
        BigInt::from(i)
    }

    fn hex(s: &str) -> BigInt {
        BigInt::from_hex(s).unwrap()
    }

    #[test]
    fn floor_division_rounds_toward_negative_infinity() {
        assert_eq!(int(-7).div_floor(&int(2)), Ok(int(-4)));
        assert_eq!(int(-7).mod_floor(&int(2)), Ok(int(1)));
        assert_eq!(int(7).div_floor(&int(-2)), Ok(int(-4)));
        assert_eq!(int(7).mod_floor(&int(-2)), Ok(int(-1)));
        assert_eq!(int(-7).div_floor(&int(-2)), Ok(int(3)));
        assert_eq!(int(-7).mod_floor(&int(-2)), Ok(int(-1)));
        assert_eq!(int(-8).mod_floor(&int(2)), Ok(BigInt::zero()));
    }

    #[test]
    fn truncating_division_rounds_toward_zero() {
        assert_eq!(int(-7).div_trunc(&int(2)), Ok(int(-3)));
        assert_eq!(int(-7).rem_trunc(&int(2)), Ok(int(-1)));
        assert_eq!(int(7).div_trunc(&int(-2)), Ok(int(-3)));
        assert_eq!(int(7).rem_trunc(&int(-2)), Ok(int(1)));
    }

    #[test]
    fn divisor_larger_than_dividend() {
        let big = hex("1000000000000000000000");
        assert_eq!(int(5).div_rem(&big), Ok((BigInt::zero(), int(5))));
        assert_eq!(int(-5).div_mod_floor(&big), Ok((int(-1), arith::sub(&big, &int(5)))));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(int(1).div_floor(&BigInt::zero()), Err(DivisionError));
        assert_eq!(int(1).mod_floor(&BigInt::zero()), Err(DivisionError));
        assert_eq!(int(1).div_trunc(&BigInt::zero()), Err(DivisionError));
        assert_eq!(BigInt::zero().rem_trunc(&BigInt::zero()), Err(DivisionError));
    }

    #[test]
    fn multi_limb_division() {
        // (2^128 - 1) / (2^64 - 1) = 2^64 + 1
        let x = hex("ffffffffffffffffffffffffffffffff");
        let y = hex("ffffffffffffffff");
        assert_eq!(x.div_rem(&y), Ok((hex("10000000000000001"), BigInt::zero())));

        // 0x123456789abcdef0123456789 = 0xfedcba987 * q + r
        let x = hex("123456789abcdef0123456789");
        let y = hex("fedcba987");
        let (q, r) = x.div_rem(&y).unwrap();
        assert_eq!(q, hex("124924924998d0e9"));
        assert_eq!(r, hex("a14026baa"));
    }

    #[test]
    fn division_exercises_add_back_step() {
        // The refined estimate for the low quotient limb is still one too high here
        let x = hex("7fffffff800000010000000000000000");
        let y = hex("800000008000000200000005");
        let (q, r) = x.div_rem(&y).unwrap();
        assert_eq!(q, hex("fffffffd"));
        assert_eq!(r, hex("80000000800000010000000f"));
        assert_eq!(arith::add(&arith::mul(&q, &y), &r), x);
    }
}
