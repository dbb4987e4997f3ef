/// Limb base. Every limb of a magnitude lies in `[0, BASE)`.
pub const BASE: u32 = 1_000_000_000;

/// Decimal digits per limb, `BASE == 10^BASE_DIGITS`.
pub const BASE_DIGITS: usize = 9;

pub const BASE_U64: u64 = BASE as u64;

pub const BASE_U128: u128 = BASE as u128;

/// Largest absolute value served from the small-value cache.
pub const MAX_CONSTANT: usize = 16;
