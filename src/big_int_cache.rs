use lazy_static::*;

use crate::BigInt;
use crate::big_int_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = {
        let mut cache: [BigInt; MAX_CONSTANT + 1] = Default::default();
        for (i, value) in cache.iter_mut().enumerate().skip(1) {
            *value = BigInt::from_raw(vec![i as u32], false);
        }
        cache
    };
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = {
        let mut cache: [BigInt; MAX_CONSTANT + 1] = Default::default();
        for (i, value) in cache.iter_mut().enumerate().skip(1) {
            *value = BigInt::from_raw(vec![i as u32], true);
        }
        cache
    };
}

#[test]
fn test_cache_is_canonical() {
    assert!(POS_CACHE[0].is_zero());
    assert!(!NEG_CACHE[0].is_negative());
    for i in 1..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[i].limbs(), &[i as u32]);
        assert_eq!(NEG_CACHE[i].limbs(), &[i as u32]);
        assert!(NEG_CACHE[i].is_negative());
        assert_eq!(-&POS_CACHE[i], NEG_CACHE[i]);
    }
}
