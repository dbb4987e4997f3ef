//! Big Int \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers, stored as base `10^9` limbs,
//!   with decimal parsing and printing, comparison, and truncating division.
//! - [`BigIntError`]: the error returned by parsing and by the fallible division API.

#[macro_use]
mod macros;

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod big_int_div;
mod error;

pub use big_int::BigInt;
pub use error::{BigIntError, ParseErrorKind, Result};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        assert_eq!(a.to_string(), "10000000000000");
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a * -3_i64).to_string(), "-30000000000000");
        assert_eq!(&a % 7_i64, 10000000000000 % 7);
    }
}
