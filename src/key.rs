use core::fmt::Debug;

/// `2^64 / φ`, the golden-ratio fraction `0.6180339887...` in 64-bit fixed
/// point.
///
/// Multiplying a key by this constant and keeping the low 64 bits yields
/// `frac(key * A)` exactly, with no floating point rounding.
pub const GOLDEN_RATIO_FRACTION: u64 = 0x9E37_79B9_7F4A_7C15;

/// A scalar key that can be placed with multiplicative (Fibonacci) hashing.
///
/// Keys are compared with `Eq` and hashed through their 64-bit
/// representation. Implemented for every primitive integer up to 64 bits.
/// Signed integers are sign-extended before the cast.
pub trait ScalarKey: Copy + Eq + Ord + Debug {
    /// The key as a 64-bit integer, wrapping modulo `2^64`.
    fn to_u64(self) -> u64;
}

macro_rules! impl_scalar_key {
    ($($t:ty => $via:ty),* $(,)?) => {
        $(
            impl ScalarKey for $t {
                #[inline(always)]
                fn to_u64(self) -> u64 {
                    self as $via as u64
                }
            }
        )*
    };
}

impl_scalar_key! {
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u64,
    usize => u64,
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i64,
    isize => i64,
}

/// Computes `floor(capacity * frac(key * A))` for the golden-ratio fraction
/// `A`.
///
/// The fractional part is taken in 64-bit fixed point and the scaling by
/// `capacity` happens in 128 bits, so the result is exact for every key and
/// always lies in `0..capacity`. Consecutive keys land far apart, which lets
/// the table use power-of-two capacities without clustering.
///
/// # Panics
///
/// Panics in debug builds if `capacity` is zero.
///
/// # Examples
///
/// ```rust
/// use fib_chain::key::fibonacci_index;
///
/// assert_eq!(fibonacci_index(1u64, 8), 4);
/// assert_eq!(fibonacci_index(2u64, 8), 1);
/// for key in 0..1000u32 {
///     assert!(fibonacci_index(key, 16) < 16);
/// }
/// ```
#[inline(always)]
pub fn fibonacci_index<K: ScalarKey>(key: K, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    let fraction = key.to_u64().wrapping_mul(GOLDEN_RATIO_FRACTION);
    ((fraction as u128 * capacity as u128) >> 64) as usize
}
