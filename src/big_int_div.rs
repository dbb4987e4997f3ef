//! Scalar and long division.
//!
//! Both follow the truncating convention: the quotient is rounded toward
//! zero and a non-zero remainder takes the sign of the dividend, so
//! `(a / b) * b + a % b == a` always holds.

use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

use tracing::{debug, trace};

use crate::big_int::{BigInt, ZERO};
use crate::big_int_constants::*;
use crate::error::{BigIntError, Result};

// 实现除以机器字
impl BigInt {
    /// `mag /= d` in a single pass from the most significant limb, returning
    /// the remainder. `d` must be non-zero.
    pub(crate) fn div_mag_small(mag: &mut Vec<u32>, d: u64) -> u64 {
        let d = d as u128;
        let mut rem: u128 = 0;
        for limb in mag.iter_mut().rev() {
            let cur = rem * BASE_U128 + *limb as u128;
            // rem < d, so the quotient digit is below BASE
            *limb = (cur / d) as u32;
            rem = cur % d;
        }
        trim_leading_zero!(mag);
        rem as u64
    }

    /// Divides by a machine-width integer, returning the quotient and the
    /// remainder. The remainder has the sign of `self`.
    ///
    /// ```
    /// use big_int::BigInt;
    ///
    /// let a: BigInt = "-5".parse().unwrap();
    /// let (q, r) = a.div_rem_i64(2).unwrap();
    /// assert_eq!(q.to_string(), "-2");
    /// assert_eq!(r, -1);
    /// ```
    pub fn div_rem_i64(&self, m: i64) -> Result<(BigInt, i64)> {
        if m == 0 {
            debug!(dividend_limbs = self.mag.len(), "scalar division by zero rejected");
            return Err(BigIntError::DivisionByZero);
        }
        let mut mag = self.mag.clone();
        // the remainder is below |m| <= 2^63, so it fits in i64
        let rem = BigInt::div_mag_small(&mut mag, m.unsigned_abs()) as i64;
        let quotient = BigInt::from_raw(mag, self.negative != (m < 0));
        let rem = if self.negative { -rem } else { rem };
        Ok((quotient, rem))
    }

    pub fn div_i64(&self, m: i64) -> Result<BigInt> {
        self.div_rem_i64(m).map(|(q, _)| q)
    }

    pub fn rem_i64(&self, m: i64) -> Result<i64> {
        self.div_rem_i64(m).map(|(_, r)| r)
    }
}

// 实现长除法
impl BigInt {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// The quotient is truncated toward zero and the remainder has the sign
    /// of `self`.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            debug!(dividend_limbs = self.mag.len(), "division by zero rejected");
            return Err(BigIntError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((ZERO, ZERO));
        }

        let (q, r) = match BigInt::compare_mag(&self.mag, &divisor.mag) {
            Ordering::Less => return Ok((ZERO, self.clone())),
            Ordering::Equal => (vec![1], vec![]),
            Ordering::Greater if divisor.mag.len() == 1 => {
                let mut q = self.mag.clone();
                let r = BigInt::div_mag_small(&mut q, divisor.mag[0] as u64);
                (q, vec![r as u32])
            },
            Ordering::Greater => BigInt::divide_knuth(&self.mag, &divisor.mag),
        };

        let quotient = BigInt::from_raw(q, self.negative != divisor.negative);
        let remainder = BigInt::from_raw(r, self.negative);
        Ok((quotient, remainder))
    }

    /// Returns `None` if `divisor` is zero.
    pub fn checked_div(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(q, _)| q)
    }

    /// Returns `None` if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(_, r)| r)
    }

    /// Uses Algorithm D in Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1,
    /// on base `10^9` magnitudes. Returns the quotient and remainder magnitudes.
    fn divide_knuth(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
        let n = v.len();

        // D1 normalize
        // scaling by norm leaves the divisor n limbs long with a leading
        // limb of at least BASE / 2, so each trial digit is at most 2 too big
        let norm = (BASE / (v[n - 1] + 1)) as u64;
        let mut u = u.to_vec();
        BigInt::mul_mag_small(&mut u, norm);
        let mut v = v.to_vec();
        BigInt::mul_mag_small(&mut v, norm);
        debug_assert_eq!(v.len(), n);
        let v_high = v[n - 1] as u64;

        trace!(norm, dividend_limbs = u.len(), divisor_limbs = n, "normalized long division");

        let mut q = vec![0u32; u.len()];
        let mut rem: Vec<u32> = Vec::with_capacity(n + 1);
        let mut product: Vec<u32> = Vec::with_capacity(n + 1);
        for j in (0..u.len()).rev() {
            // D2 bring down the next limb
            rem.insert(0, u[j]);
            trim_leading_zero!(rem);

            // D3 calculate qhat from the top two limbs, rem < v * BASE
            let s1 = rem.get(n).copied().unwrap_or(0) as u64;
            let s2 = rem.get(n - 1).copied().unwrap_or(0) as u64;
            let mut qhat = ((s1 * BASE_U64 + s2) / v_high).min(BASE_U64 - 1);

            // D4 multiply and correct
            product.clear();
            product.extend_from_slice(&v);
            BigInt::mul_mag_small(&mut product, qhat);
            let mut corrections = 0;
            while BigInt::compare_mag(&product, &rem) == Ordering::Greater {
                qhat -= 1;
                BigInt::sub_mag_assign(&mut product, &v);
                corrections += 1;
            }
            if corrections > 0 {
                trace!(position = j, corrections, "trial quotient digit corrected");
            }

            // D5 subtract
            BigInt::sub_mag_assign(&mut rem, &product);
            q[j] = qhat as u32;
        }

        // D8 unnormalize
        let lost = BigInt::div_mag_small(&mut rem, norm);
        debug_assert_eq!(lost, 0, "normalized remainder must be divisible by norm");

        (q, rem)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if `rhs` is zero.
    fn div(self, rhs: &BigInt) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((q, _)) => q,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

forward_binop!(Div, div, DivAssign, div_assign);

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: &BigInt) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((_, r)) => r,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

forward_binop!(Rem, rem, RemAssign, rem_assign);

impl Div<i64> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: i64) -> Self::Output {
        match self.div_rem_i64(rhs) {
            Ok((q, _)) => q,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

forward_scalar_op!(Div, div, BigInt);

impl DivAssign<i64> for BigInt {
    fn div_assign(&mut self, rhs: i64) {
        *self = &*self / rhs;
    }
}

impl Rem<i64> for &BigInt {
    type Output = i64;

    fn rem(self, rhs: i64) -> Self::Output {
        match self.div_rem_i64(rhs) {
            Ok((_, r)) => r,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

forward_scalar_op!(Rem, rem, i64);

#[cfg(test)]
fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_div_rem_signs() {
    let cases = [
        ("-5", "2", "-2", "-1"),
        ("5", "-2", "-2", "1"),
        ("-5", "-2", "2", "-1"),
        ("5", "2", "2", "1"),
        ("-4", "2", "-2", "0"),
        ("3", "7", "0", "3"),
        ("-3", "7", "0", "-3"),
        ("0", "-7", "0", "0"),
        ("7", "7", "1", "0"),
        ("-7", "7", "-1", "0"),
    ];
    for (a, b, q, r) in cases {
        let (quotient, remainder) = big(a).div_rem(&big(b)).unwrap();
        assert_eq!(quotient.to_string(), q, "{} / {}", a, b);
        assert_eq!(remainder.to_string(), r, "{} % {}", a, b);
    }
}

#[test]
fn test_div() {
    // test divide one word
    let a = big("10000000000000000000000000000000000");
    let b = big("1000");
    let c = big("10000000000000000000000000000000");
    assert_eq!(a / b, c);
    // test divide Knuth
    let a = big("123456789123456789");
    let b = big("987654321");
    assert_eq!(&a / &b, big("124999998"));
    assert_eq!(&a % &b, big("973765431"));
    assert_eq!(big("124999998") * &b + big("973765431"), a);

    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    let r = big("1193100845153944161348506284633422837373178517256300220003478173303874237852253838030233949");
    let (q, rem) = a.div_rem(&b).unwrap();
    assert_eq!(q, c);
    assert_eq!(rem, r);
    assert_eq!(-&a / &b, -&c);
    assert_eq!(-&a % &b, -&r);
}

#[test]
fn test_mod() {
    let a = big("12");
    let b = big("8");
    assert_eq!(a % b, big("4"));

    let a = big("10000000000000000");
    let b = big("10");
    assert_eq!(a % b, ZERO);

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let r = big("393707270751296419349581795408095683999332705291");
    assert_eq!(&a % &b, r);
    assert_eq!(&a / &b, big("44532135147185277413589594536286141607822"));
}

#[test]
fn test_div_correction_path() {
    // divisors whose leading limb is small force a large normalization factor
    let b = big("1000000000000000001");
    let a = big("999999999999999999999999999999999999999999999");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(&q * &b + &r, a);
    assert!(BigInt::compare_mag(&r.mag, &b.mag) == Ordering::Less);

    let b = big("999999999999999999999999999");
    let a = &(&b * &b) - &BigInt::from(1);
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q, &b - &BigInt::from(1));
    assert_eq!(r, &b - &BigInt::from(1));
}

#[test]
fn test_div_by_zero() {
    let a = big("5");
    assert_eq!(a.div_rem(&ZERO), Err(BigIntError::DivisionByZero));
    assert_eq!(a.checked_div(&ZERO), None);
    assert_eq!(a.checked_rem(&ZERO), None);
    assert_eq!(a.div_rem_i64(0), Err(BigIntError::DivisionByZero));
    assert_eq!(a.div_i64(0), Err(BigIntError::DivisionByZero));
    assert_eq!(a.rem_i64(0), Err(BigIntError::DivisionByZero));
    assert_eq!(ZERO.div_rem(&ZERO), Err(BigIntError::DivisionByZero));
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_operator_by_zero_panics() {
    let _ = big("5") / big("0");
}

#[test]
#[should_panic(expected = "attempt to calculate the remainder with a divisor of zero")]
fn test_rem_scalar_operator_by_zero_panics() {
    let _ = big("5") % 0_i64;
}

#[test]
fn test_div_rem_scalar() {
    let a = big("-5");
    assert_eq!(a.div_rem_i64(2), Ok((big("-2"), -1)));
    assert_eq!(a.div_rem_i64(-2), Ok((big("2"), -1)));
    assert_eq!(big("5").div_rem_i64(-2), Ok((big("-2"), 1)));

    let a = big("123456789123456789123456789");
    assert_eq!(&a / 1000_i64, big("123456789123456789123456"));
    assert_eq!(&a % 1000_i64, 789);
    assert_eq!(-&a % 1000_i64, -789);

    let (q, r) = a.div_rem_i64(i64::MIN).unwrap();
    assert_eq!(&q * i64::MIN + BigInt::from(r), a);
    assert!(q.is_negative());

    let (q, r) = a.div_rem_i64(i64::MAX).unwrap();
    assert_eq!(&q * i64::MAX + BigInt::from(r), a);

    let mut b = big("1000000000000");
    b /= -1000_i64;
    assert_eq!(b, big("-1000000000"));
}

#[test]
fn test_div_assign() {
    let mut a = big("1000000000000000000000");
    a /= big("1000000000000");
    assert_eq!(a, big("1000000000"));
    a %= &big("999");
    assert_eq!(a, big("1"));
}
