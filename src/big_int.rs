//! # BigInt
//! Immutable arbitrary-precision signed integers, stored as a sign flag and a
//! little-endian vector of base `10^9` limbs.
//! # Example
//! ```
//! use big_int::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b: BigInt = "-900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "9100000000000");
//! assert_eq!((&a - &b).to_string(), "10900000000000");
//! assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
//! assert_eq!((&a / &b).to_string(), "-11");
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! ```
//!

use std::fmt::{self, Display};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};
use std::cmp::{Ord, PartialOrd, Ordering};
use std::str::FromStr;

use crate::big_int_constants::*;
use crate::big_int_cache::*;
use crate::error::{BigIntError, ParseErrorKind, Result};

pub const ZERO: BigInt = BigInt { negative: false, mag: Vec::new() };

/// Arbitrary-precision signed integer.
///
/// Zero is always the empty magnitude with `negative == false`, and the
/// magnitude never carries a most significant zero limb, so the derived
/// equality is value equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) mag: Vec<u32>,
}

// 实现构造
impl BigInt {
    /// Builds a value from a raw magnitude, restoring the canonical form.
    pub(crate) fn from_raw(mut mag: Vec<u32>, negative: bool) -> BigInt {
        trim_leading_zero!(mag);
        let negative = negative && !mag.is_empty();
        BigInt { negative, mag }
    }

    fn value_of(val: u128, negative: bool) -> BigInt {
        if val == 0 {
            return ZERO;
        } else if val <= MAX_CONSTANT as u128 {
            if negative {
                return NEG_CACHE[val as usize].clone();
            } else {
                return POS_CACHE[val as usize].clone();
            }
        }
        let mut mag = Vec::with_capacity(5);
        let mut rest = val;
        while rest != 0 {
            mag.push((rest % BASE_U128) as u32);
            rest /= BASE_U128;
        }
        BigInt { negative, mag }
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64, u128);
impl_signed_to_big_int!(i8, i16, i32, isize, i64, i128);

// 杂项辅助函数
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_positive(&self) -> bool {
        !self.negative && !self.mag.is_empty()
    }

    /// Returns `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.mag.is_empty() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt { negative: false, mag: self.mag.clone() }
    }

    /// The base `10^9` limbs of the magnitude, least significant first.
    pub fn limbs(&self) -> &[u32] {
        &self.mag
    }

    /// Converts to `i64`, or `None` if the value does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        let mut val: u64 = 0;
        for &limb in self.mag.iter().rev() {
            val = val.checked_mul(BASE_U64)?.checked_add(limb as u64)?;
        }
        if self.negative {
            if val <= i64::MAX as u64 + 1 {
                Some((val as i64).wrapping_neg())
            } else {
                None
            }
        } else {
            i64::try_from(val).ok()
        }
    }
}

// 实现解析
impl BigInt {
    /// Parses an optional `-` followed by one or more ASCII digits.
    ///
    /// Leading zeros are accepted, and `"-0"` parses to zero.
    pub fn parse(val: &str) -> Result<BigInt> {
        let bytes = val.as_bytes();
        let cursor = if bytes.first() == Some(&b'-') { 1 } else { 0 };
        let negative = cursor == 1;

        if cursor == bytes.len() {
            return Err(ParseErrorKind::Empty.into());
        }

        if let Some((position, found)) = val
            .char_indices()
            .skip(cursor)
            .find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(ParseErrorKind::InvalidDigit { position, found }.into());
        }

        let digits = &bytes[cursor..];
        let mut mag = Vec::with_capacity(digits.len() / BASE_DIGITS + 1);
        for group in digits.rchunks(BASE_DIGITS) {
            let limb = group
                .iter()
                .fold(0u32, |acc, d| acc * 10 + (d - b'0') as u32);
            mag.push(limb);
        }

        Ok(BigInt::from_raw(mag, negative))
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::parse(s)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<Self> {
        BigInt::parse(val)
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &BigInt::mag_to_string(&self.mag))
    }
}

impl BigInt {
    fn mag_to_string(mag: &[u32]) -> String {
        let Some((&high, rest)) = mag.split_last() else {
            return String::from("0");
        };

        let mut result = String::with_capacity(mag.len() * BASE_DIGITS);
        let high_digits = BigInt::limb_digits(high);
        let first_nonzero = high_digits
            .iter()
            .position(|&d| d != b'0')
            .unwrap_or(BASE_DIGITS - 1);
        result.extend(high_digits[first_nonzero..].iter().map(|&d| d as char));

        // Every lower limb is zero-padded to the full group width
        for &limb in rest.iter().rev() {
            result.extend(BigInt::limb_digits(limb).iter().map(|&d| d as char));
        }
        result
    }

    fn limb_digits(mut limb: u32) -> [u8; BASE_DIGITS] {
        let mut digits = [b'0'; BASE_DIGITS];
        for d in digits.iter_mut().rev() {
            *d = b'0' + (limb % 10) as u8;
            limb /= 10;
        }
        digits
    }
}

// 实现大小比较
impl BigInt {
    /// Compares two trimmed magnitudes.
    pub(crate) fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => BigInt::compare_mag(&self.mag, &other.mag),
            (true, true) => BigInt::compare_mag(&other.mag, &self.mag),
        }
    }
}

// 实现加法
impl BigInt {
    fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0;
        for (i, &limb) in long.iter().enumerate() {
            // at most 2 * (BASE - 1) + 1, which fits in u32
            let mut sum = limb + short.get(i).copied().unwrap_or(0) + carry;
            if sum >= BASE {
                sum -= BASE;
                carry = 1;
            } else {
                carry = 0;
            }
            result.push(sum);
        }
        if carry != 0 {
            result.push(carry);
        }
        result
    }

    /// `x -= y` on magnitudes.
    ///
    /// The caller guarantees `x >= y`; only debug builds check it.
    pub(crate) fn sub_mag_assign(x: &mut Vec<u32>, y: &[u32]) {
        debug_assert!(
            BigInt::compare_mag(x, y) != Ordering::Less,
            "magnitude subtraction would underflow"
        );
        let mut borrow = 0_i64;
        for (i, limb) in x.iter_mut().enumerate() {
            if i >= y.len() && borrow == 0 {
                break;
            }
            let mut difference = *limb as i64 - y.get(i).copied().unwrap_or(0) as i64 - borrow;
            if difference < 0 {
                difference += BASE as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            *limb = difference as u32;
        }
        trim_leading_zero!(x);
    }

    /// Adds `y_mag` carrying the sign `y_negative` to `x`.
    ///
    /// Subtraction is the same dispatch with the sign of `y` flipped.
    fn add_signed(x: &BigInt, y_mag: &[u32], y_negative: bool) -> BigInt {
        if x.negative == y_negative {
            return BigInt::from_raw(BigInt::add_mag(&x.mag, y_mag), x.negative);
        }

        match BigInt::compare_mag(&x.mag, y_mag) {
            Ordering::Less => {
                let mut mag = y_mag.to_vec();
                BigInt::sub_mag_assign(&mut mag, &x.mag);
                BigInt::from_raw(mag, y_negative)
            },
            Ordering::Equal => ZERO,
            Ordering::Greater => {
                let mut mag = x.mag.clone();
                BigInt::sub_mag_assign(&mut mag, y_mag);
                BigInt::from_raw(mag, x.negative)
            },
        }
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        BigInt::add_signed(self, &rhs.mag, rhs.negative)
    }
}

forward_binop!(Add, add, AddAssign, add_assign);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(ZERO, |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(ZERO, |acc, x| &acc + x)
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { negative, mag } = self;
        BigInt::from_raw(mag, !negative)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现减法
impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        BigInt::add_signed(self, &rhs.mag, !rhs.negative)
    }
}

forward_binop!(Sub, sub, SubAssign, sub_assign);

// 实现乘法
impl BigInt {
    /// Schoolbook product of two magnitudes.
    fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let mut result = vec![0u32; x.len() + y.len()];
        for (i, &a) in x.iter().enumerate() {
            let mut carry: u64 = 0;
            for (j, &b) in y.iter().enumerate() {
                // (BASE - 1)^2 + 2 * (BASE - 1) < BASE^2 < 2^64
                let product = a as u64 * b as u64 + result[i + j] as u64 + carry;
                result[i + j] = (product % BASE_U64) as u32;
                carry = product / BASE_U64;
            }
            result[i + y.len()] = carry as u32;
        }
        result
    }

    /// `mag *= m` in a single carry pass.
    pub(crate) fn mul_mag_small(mag: &mut Vec<u32>, m: u64) {
        let mut carry: u128 = 0;
        for limb in mag.iter_mut() {
            let product = *limb as u128 * m as u128 + carry;
            *limb = (product % BASE_U128) as u32;
            carry = product / BASE_U128;
        }
        while carry != 0 {
            mag.push((carry % BASE_U128) as u32);
            carry /= BASE_U128;
        }
        trim_leading_zero!(mag);
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return ZERO;
        }
        let mag = BigInt::mul_mag(&self.mag, &rhs.mag);
        BigInt::from_raw(mag, self.negative != rhs.negative)
    }
}

forward_binop!(Mul, mul, MulAssign, mul_assign);

impl Mul<i64> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: i64) -> Self::Output {
        if self.is_zero() || rhs == 0 {
            return ZERO;
        }
        let mut mag = self.mag.clone();
        BigInt::mul_mag_small(&mut mag, rhs.unsigned_abs());
        BigInt::from_raw(mag, self.negative != (rhs < 0))
    }
}

forward_scalar_op!(Mul, mul, BigInt);

impl MulAssign<i64> for BigInt {
    fn mul_assign(&mut self, rhs: i64) {
        *self = &*self * rhs;
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::from(1u8), |acc, x| &acc * &x)
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::from(1u8), |acc, x| &acc * x)
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_from() {
    let num: i8 = -12;
    let big_num = BigInt::from(num);
    assert_eq!(big_num.mag, vec![12]);
    assert!(big_num.negative);

    let num: i32 = 1_000_000_007;
    let big_num = BigInt::from(num);
    assert_eq!(big_num.mag, vec![7, 1]);
    assert!(!big_num.negative);

    let big_num = BigInt::from(0_i64);
    assert!(big_num.mag.is_empty());
    assert!(!big_num.negative);

    let big_num = BigInt::from(i64::MIN);
    assert_eq!(big_num.to_string(), "-9223372036854775808");

    let big_num = BigInt::from(u128::MAX);
    assert_eq!(big_num.to_string(), "340282366920938463463374607431768211455");

    assert_eq!(BigInt::from(-16_i64), big("-16"));
    assert_eq!(BigInt::from(17_u8), big("17"));
}

#[test]
fn test_parse() {
    let a = big("123456789012345678901");
    assert_eq!(a.mag, vec![345678901, 456789012, 123]);
    assert!(!a.negative);

    let a = big("-1000000000");
    assert_eq!(a.mag, vec![0, 1]);
    assert!(a.negative);

    assert_eq!(big("007"), BigInt::from(7));
    assert_eq!(big("-000000000000000000"), ZERO);
    assert!(!big("-0").negative);
}

#[test]
fn test_parse_errors() {
    assert_eq!(BigInt::parse(""), Err(BigIntError::Parse(ParseErrorKind::Empty)));
    assert_eq!(BigInt::parse("-"), Err(BigIntError::Parse(ParseErrorKind::Empty)));
    assert_eq!(
        BigInt::parse("12a4"),
        Err(BigIntError::Parse(ParseErrorKind::InvalidDigit { position: 2, found: 'a' }))
    );
    assert_eq!(
        BigInt::parse("+5"),
        Err(BigIntError::Parse(ParseErrorKind::InvalidDigit { position: 0, found: '+' }))
    );
    assert_eq!(
        BigInt::parse("--5"),
        Err(BigIntError::Parse(ParseErrorKind::InvalidDigit { position: 1, found: '-' }))
    );
    assert_eq!(
        BigInt::parse("1 000"),
        Err(BigIntError::Parse(ParseErrorKind::InvalidDigit { position: 1, found: ' ' }))
    );
    assert_eq!(
        BigInt::parse("9é"),
        Err(BigIntError::Parse(ParseErrorKind::InvalidDigit { position: 1, found: 'é' }))
    );
}

#[test]
fn test_to_string() {
    for s in [
        "0",
        "7",
        "-7",
        "1000000000",
        "-1000000000000000000",
        "12345678909876523784950683472613487560983287654321",
        "100000000000000000000000000000000000001",
    ] {
        assert_eq!(big(s).to_string(), s);
    }
    assert_eq!(ZERO.to_string(), "0");
    assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
}

#[test]
fn test_to_i64() {
    assert_eq!(big("123456789110").to_i64(), Some(123456789110));
    assert_eq!(big("-9223372036854775808").to_i64(), Some(i64::MIN));
    assert_eq!(big("9223372036854775807").to_i64(), Some(i64::MAX));
    assert_eq!(big("9223372036854775808").to_i64(), None);
    assert_eq!(big("-9223372036854775809").to_i64(), None);
    assert_eq!(big("100000000000000000000000000").to_i64(), None);
}

#[test]
fn test_compare() {
    let values = [
        big("-100000000000000000000"),
        big("-999999999"),
        big("-1"),
        ZERO,
        big("1"),
        big("999999999"),
        big("1000000000"),
        big("100000000000000000000"),
    ];
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
            assert_eq!(a == b, i == j);
        }
    }
    assert!(big("-5") < big("-4"));
    assert!(big("123456789123456789") > big("123456789123456788"));
    assert!(big("-0") >= ZERO);
}

#[test]
fn test_add() {
    assert_eq!(
        big("12345678901234567890") + big("1"),
        big("12345678901234567891")
    );
    assert_eq!(big("999999999") + big("1"), big("1000000000"));
    assert_eq!(
        (big("999999999999999999999999999") + big("1")).to_string(),
        "1000000000000000000000000000"
    );
    assert_eq!(big("-5") + big("3"), big("-2"));
    assert_eq!(big("5") + big("-8"), big("-3"));
    assert_eq!(big("-5") + big("-8"), big("-13"));
    assert_eq!((big("-5") + big("5")).to_string(), "0");

    let mut a = big("1");
    a += big("2");
    a += &big("3");
    assert_eq!(a, BigInt::from(6));
}

#[test]
fn test_sub() {
    assert_eq!((big("0") - big("0")).to_string(), "0");
    assert_eq!(big("1000000000") - big("1"), big("999999999"));
    assert_eq!(
        big("1000000000000000000000000000") - big("1"),
        big("999999999999999999999999999")
    );
    assert_eq!(big("3") - big("5"), big("-2"));
    assert_eq!(big("-3") - big("5"), big("-8"));
    assert_eq!(big("-3") - big("-5"), big("2"));
    assert_eq!(big("3") - big("-5"), big("8"));
    assert_eq!(big("-5") - big("-3"), big("-2"));
    assert_eq!(big("7") - ZERO, big("7"));
    assert_eq!(ZERO - big("7"), big("-7"));

    let a = big("-98765432109876543210");
    assert!((&a - &a).is_zero());
    assert!(!(&a - &a).is_negative());

    let mut b = big("10");
    b -= &big("25");
    assert_eq!(b, BigInt::from(-15));
}

#[test]
fn test_neg() {
    assert_eq!(-big("5"), big("-5"));
    assert_eq!(-&big("-5"), big("5"));
    assert_eq!(-ZERO, ZERO);
    assert!(!(-ZERO).is_negative());
}

#[test]
fn test_mul() {
    assert_eq!(
        big("1000000000") * big("1000000000"),
        big("1000000000000000000")
    );
    assert_eq!(
        (big("999999999999999999") * big("999999999999999999")).to_string(),
        "999999999999999998000000000000000001"
    );
    assert_eq!(big("-3") * big("4"), big("-12"));
    assert_eq!(big("-3") * big("-4"), big("12"));
    assert_eq!((big("-3") * ZERO).to_string(), "0");
    assert_eq!((ZERO * big("-123456789012345678901234567890")).to_string(), "0");

    let a = big("123456789012345678901234567890");
    let b = big("987654321098765432109876543210");
    assert_eq!(
        (&a * &b).to_string(),
        "121932631137021795226185032733622923332237463801111263526900"
    );
}

#[test]
fn test_mul_scalar() {
    let a = big("999999999999999999");
    assert_eq!(&a * 1_000_000_007_i64, big("1000000006999999998999999993"));
    assert_eq!(&a * -2_i64, big("-1999999999999999998"));
    assert_eq!(big("-7") * -3_i64, big("21"));
    assert_eq!((big("-7") * 0_i64).to_string(), "0");
    assert_eq!(
        big("2") * i64::MIN,
        big("-18446744073709551616")
    );

    let mut b = big("5");
    b *= -5_i64;
    assert_eq!(b, BigInt::from(-25));
}

#[test]
fn test_sum_product() {
    let values: Vec<BigInt> = (1..=25).map(BigInt::from).collect();
    assert_eq!(values.iter().sum::<BigInt>(), BigInt::from(325));
    assert_eq!(
        values.into_iter().product::<BigInt>().to_string(),
        "15511210043330985984000000"
    );
    assert_eq!(Vec::<BigInt>::new().into_iter().sum::<BigInt>(), ZERO);
}
