use core::ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Not, Shl, Shr, Sub};

use crate::{arith, bitwise, shift, BigInt};

/// Implements a binary operator for every combination of owned and borrowed operands,
/// forwarding to a function over two references
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $impl:path) => {
        impl $trait<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $impl(self, rhs)
            }
        }
        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $impl(self, &rhs)
            }
        }
        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &BigInt) -> BigInt {
                $impl(&self, rhs)
            }
        }
        impl $trait<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $impl(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, arith::add);
forward_binop!(Sub, sub, arith::sub);
forward_binop!(Mul, mul, arith::mul);
forward_binop!(BitAnd, bitand, bitwise::and);
forward_binop!(BitOr, bitor, bitwise::or);
forward_binop!(BitXor, bitxor, bitwise::xor);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        bitwise::not(self)
    }
}
impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        bitwise::not(&self)
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, bits: u32) -> BigInt {
        shift::shl(self, bits)
    }
}
impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, bits: u32) -> BigInt {
        shift::shl(&self, bits)
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    fn shr(self, bits: u32) -> BigInt {
        shift::shr(self, bits)
    }
}
impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, bits: u32) -> BigInt {
        shift::shr(&self, bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn operators_forward_to_engine() {
        let x = BigInt::from(12);
        let y = BigInt::from(10);
        assert_eq!(&x & &y, BigInt::from(8));
        assert_eq!(BigInt::from(5) ^ BigInt::from(3), BigInt::from(6));
        assert_eq!(&x | y.clone(), BigInt::from(14));
        assert_eq!(x.clone() + &y, BigInt::from(22));
        assert_eq!(&x - &y, BigInt::from(2));
        assert_eq!(&x * &y, BigInt::from(120));
        assert_eq!(-&x, BigInt::from(-12));
        assert_eq!(!x.clone(), BigInt::from(-13));
        assert_eq!(BigInt::from(3) << 2, BigInt::from(12));
        assert_eq!(BigInt::from(-7) >> 1, BigInt::from(-4));
    }

    #[test]
    fn product_beyond_safe_range() {
        let x = BigInt::from(9007199254740991i64);
        assert_eq!((x * BigInt::from(2)).to_string(), "18014398509481982");
    }
}
