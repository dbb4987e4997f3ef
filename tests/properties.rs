use big_int::{BigInt, BigIntError};
use proptest::prelude::*;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

/// Canonical decimal strings: no leading zeros, no `-0`.
fn canonical_decimal() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        "-?[1-9][0-9]{0,80}",
    ]
}

proptest! {
    #[test]
    fn parse_print_round_trip(s in canonical_decimal()) {
        prop_assert_eq!(big(&s).to_string(), s);
    }

    #[test]
    fn leading_zeros_are_discarded(zeros in 0usize..20, s in "[1-9][0-9]{0,40}") {
        let padded = format!("-{}{}", "0".repeat(zeros), s);
        prop_assert_eq!(big(&padded).to_string(), format!("-{}", s));
    }

    #[test]
    fn matches_i128_arithmetic(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (a as i128, b as i128);

        prop_assert_eq!(&x + &y, BigInt::from(a + b));
        prop_assert_eq!(&x - &y, BigInt::from(a - b));
        prop_assert_eq!(&x * &y, BigInt::from(a * b));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!(&x / &y, BigInt::from(a / b));
            prop_assert_eq!(&x % &y, BigInt::from(a % b));
        }
    }

    #[test]
    fn additive_inverse(a in canonical_decimal(), b in canonical_decimal()) {
        let (a, b) = (big(&a), big(&b));
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert_eq!((&a - &a).to_string(), "0");
    }

    #[test]
    fn ring_laws(a in canonical_decimal(), b in canonical_decimal(), c in canonical_decimal()) {
        let (a, b, c) = (big(&a), big(&b), big(&c));
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        prop_assert_eq!((&a * &BigInt::from(0)).to_string(), "0");
    }

    #[test]
    fn division_identity(a in canonical_decimal(), b in canonical_decimal()) {
        let (a, b) = (big(&a), big(&b));
        if b.is_zero() {
            prop_assert_eq!(a.div_rem(&b), Err(BigIntError::DivisionByZero));
        } else {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert!(r.abs() < b.abs());
            if !r.is_zero() {
                prop_assert_eq!(r.is_negative(), a.is_negative());
            }
        }
    }

    #[test]
    fn scalar_division_agrees_with_long_division(a in canonical_decimal(), m in any::<i64>()) {
        let a = big(&a);
        if m == 0 {
            prop_assert_eq!(a.div_rem_i64(m), Err(BigIntError::DivisionByZero));
        } else {
            let (q, r) = a.div_rem_i64(m).unwrap();
            let (q2, r2) = a.div_rem(&BigInt::from(m)).unwrap();
            prop_assert_eq!(q, q2);
            prop_assert_eq!(BigInt::from(r), r2);
        }
    }

    #[test]
    fn scalar_multiplication_agrees(a in canonical_decimal(), m in any::<i64>()) {
        let a = big(&a);
        prop_assert_eq!(&a * m, &a * &BigInt::from(m));
    }

    #[test]
    fn ordering_matches_difference_sign(a in canonical_decimal(), b in canonical_decimal()) {
        let (a, b) = (big(&a), big(&b));
        let d = &a - &b;
        prop_assert_eq!(a < b, d.is_negative() && !d.is_zero());
        prop_assert_eq!(a == b, d.is_zero());
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(
        (big("12345678901234567890") + big("1")).to_string(),
        "12345678901234567891"
    );
    assert_eq!(
        (big("1000000000") * big("1000000000")).to_string(),
        "1000000000000000000"
    );
    assert_eq!((big("-5") / big("2")).to_string(), "-2");
    assert_eq!((big("-5") % big("2")).to_string(), "-1");
    assert_eq!((big("0") - big("0")).to_string(), "0");

    let (q, r) = big("123456789123456789").div_rem(&big("987654321")).unwrap();
    assert_eq!(q.to_string(), "124999998");
    assert_eq!(&q * &big("987654321") + &r, big("123456789123456789"));

    assert_eq!(big("5").div_rem(&big("0")), Err(BigIntError::DivisionByZero));
    assert_eq!(big("5").div_rem_i64(0), Err(BigIntError::DivisionByZero));
}
