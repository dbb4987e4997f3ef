/// Drops the most significant zero limbs of a little-endian magnitude.
macro_rules! trim_leading_zero {
    ($vec: expr) => {
        {
            while $vec.last() == Some(&0) {
                $vec.pop();
            }
        }
    };
}

/// Implements the owned and mixed forms of a binary operator, and its
/// `*Assign` counterparts, on top of the `&BigInt op &BigInt` impl.
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                $imp::$method(self, &rhs)
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = $imp::$method(&*self, &rhs);
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = $imp::$method(&*self, rhs);
            }
        }
    };
}

/// Implements an `i64` scalar operator for both `BigInt` and `&BigInt`.
macro_rules! forward_scalar_op {
    ($imp: ident, $method: ident, $output: ty) => {
        impl $imp<i64> for BigInt {
            type Output = $output;

            fn $method(self, rhs: i64) -> Self::Output {
                $imp::$method(&self, rhs)
            }
        }
    };
}
