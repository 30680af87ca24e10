//! Bitwise operations with two's complement semantics.
//!
//! A negative operand `x` is represented over `width` limbs as `2^(32*width) - |x|`,
//! where `width` is one limb wider than the longer magnitude, so the top limb of every
//! operand is pure sign extension. The result is negative exactly when its sign bit
//! is set, which matches the usual rules: AND when both operands are negative, OR when
//! either is, XOR when exactly one is.
use crate::{arith, magnitude, BigInt, Limb};

#[derive(Copy, Clone)]
enum BitOp {
    And,
    Or,
    Xor,
}
impl BitOp {
    #[inline]
    fn apply(self, x: Limb, y: Limb) -> Limb {
        match self {
            Self::And => x & y,
            Self::Or => x | y,
            Self::Xor => x ^ y,
        }
    }

    #[inline]
    fn sign(self, x: bool, y: bool) -> bool {
        match self {
            Self::And => x & y,
            Self::Or => x | y,
            Self::Xor => x ^ y,
        }
    }
}

fn to_twos_complement(x: &BigInt, width: usize) -> Vec<Limb> {
    let mut limbs = x.limbs.to_vec();
    if x.negative {
        // 2^n - |x| == !(|x| - 1) over n bits
        magnitude::decrement(&mut limbs);
        limbs.resize(width, 0);
        limbs.iter_mut().for_each(|limb| *limb = !*limb);
    } else {
        limbs.resize(width, 0);
    }
    limbs
}

fn from_twos_complement(negative: bool, mut limbs: Vec<Limb>) -> BigInt {
    if negative {
        // |x| == !(2^n - |x|) + 1 over n bits
        limbs.iter_mut().for_each(|limb| *limb = !*limb);
        magnitude::increment(&mut limbs);
    }
    BigInt::from_vec(negative, limbs)
}

fn bitop(op: BitOp, x: &BigInt, y: &BigInt) -> BigInt {
    let width = x.limbs.len().max(y.limbs.len()) + 1;
    let lhs = to_twos_complement(x, width);
    let rhs = to_twos_complement(y, width);
    let limbs = lhs
        .iter()
        .zip(rhs.iter())
        .map(|(&l, &r)| op.apply(l, r))
        .collect();
    from_twos_complement(op.sign(x.negative, y.negative), limbs)
}

pub(crate) fn and(x: &BigInt, y: &BigInt) -> BigInt {
    bitop(BitOp::And, x, y)
}

pub(crate) fn or(x: &BigInt, y: &BigInt) -> BigInt {
    bitop(BitOp::Or, x, y)
}

pub(crate) fn xor(x: &BigInt, y: &BigInt) -> BigInt {
    bitop(BitOp::Xor, x, y)
}

/// `!x == -x - 1`
pub(crate) fn not(x: &BigInt) -> BigInt {
    arith::decrement(&x.negate())
}
