//! Algebraic Property Tests
//!
//! Randomized checks of the ring-like laws the operations must satisfy,
//! cross-checked against native u64 arithmetic where the values fit.

use proptest::prelude::*;

use crate::{Natural, NaturalAdd, NaturalCompare, NaturalDiv, NaturalMul, NaturalSub};

/// Decimal strings with no artificial leading zeros, up to 30 digits
fn canonical_digit_string() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        "[1-9][0-9]{0,29}",
    ]
}

fn natural() -> impl Strategy<Value = Natural> {
    canonical_digit_string().prop_map(|s| s.parse().unwrap())
}

proptest! {
    #[test]
    fn string_roundtrip(s in canonical_digit_string()) {
        let x: Natural = s.parse().unwrap();
        prop_assert_eq!(x.to_string(), s);
    }

    #[test]
    fn add_commutes(a in natural(), b in natural()) {
        prop_assert_eq!(NaturalAdd::add(&a, &b), NaturalAdd::add(&b, &a));
    }

    #[test]
    fn add_associates(a in natural(), b in natural(), c in natural()) {
        let left = NaturalAdd::add(&NaturalAdd::add(&a, &b), &c);
        let right = NaturalAdd::add(&a, &NaturalAdd::add(&b, &c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn add_identity(a in natural()) {
        prop_assert_eq!(NaturalAdd::add(&a, &Natural::zero()), a);
    }

    #[test]
    fn mul_commutes(a in natural(), b in natural()) {
        prop_assert_eq!(NaturalMul::mul(&a, &b), NaturalMul::mul(&b, &a));
    }

    #[test]
    fn mul_identity_and_annihilator(a in natural()) {
        prop_assert_eq!(NaturalMul::mul(&a, &Natural::one()), a.clone());
        prop_assert_eq!(NaturalMul::mul(&a, &Natural::zero()), Natural::zero());
    }

    #[test]
    fn sub_inverts_add(a in natural(), b in natural()) {
        // Order the operands so the difference exists
        let (hi, lo) = if NaturalCompare::gte(&a, &b) { (a, b) } else { (b, a) };
        let diff = NaturalSub::sub(&hi, &lo).unwrap();
        prop_assert_eq!(NaturalAdd::add(&diff, &lo), hi);
    }

    #[test]
    fn add_matches_native(a in 0u64..=u32::MAX as u64, b in 0u64..=u32::MAX as u64) {
        let sum = NaturalAdd::add(&Natural::from_u64(a), &Natural::from_u64(b));
        prop_assert_eq!(sum, Natural::from_u64(a + b));
    }

    #[test]
    fn mul_matches_native(a in 0u64..=u32::MAX as u64, b in 0u64..=u32::MAX as u64) {
        let product = NaturalMul::mul(&Natural::from_u64(a), &Natural::from_u64(b));
        prop_assert_eq!(product, Natural::from_u64(a * b));
    }

    // Quotients stay small: repeated subtraction is O(quotient) work
    #[test]
    fn div_matches_native(a in 0u64..100_000u64, b in 1u64..1_000u64) {
        let quotient = NaturalDiv::div(&Natural::from_u64(a), &Natural::from_u64(b)).unwrap();
        prop_assert_eq!(quotient, Natural::from_u64(a / b));
    }

    #[test]
    fn div_is_largest_fitting_quotient(a in 0u64..50_000u64, b in 1u64..500u64) {
        let an = Natural::from_u64(a);
        let bn = Natural::from_u64(b);
        let q = NaturalDiv::div(&an, &bn).unwrap();

        // q*b <= a, and (q+1)*b > a
        prop_assert!(NaturalCompare::le(&NaturalMul::mul(&q, &bn), &an));
        let next = NaturalMul::mul(&NaturalAdd::inc(&q), &bn);
        prop_assert!(NaturalCompare::gt(&next, &an));
    }

    #[test]
    fn comparator_trichotomy(a in natural(), b in natural()) {
        let gt = NaturalCompare::gt(&a, &b);
        let lt = NaturalCompare::gt(&b, &a);
        let eq = a == b;
        prop_assert_eq!(u8::from(gt) + u8::from(lt) + u8::from(eq), 1);
    }

    #[test]
    fn comparator_matches_native(a in any::<u64>(), b in any::<u64>()) {
        let ord = NaturalCompare::cmp(&Natural::from_u64(a), &Natural::from_u64(b));
        prop_assert_eq!(ord, a.cmp(&b));
    }
}
