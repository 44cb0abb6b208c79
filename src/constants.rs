/// Typical CPU cache line size in bytes.
///
/// Most modern CPUs have a cache line of 64 bytes. Every cache-aligned type
/// in this crate is aligned to this value.
pub const CACHE_LINE_SIZE: usize = 64;

const _: () = assert!(CACHE_LINE_SIZE == 64);
const _: () = assert!(CACHE_LINE_SIZE.is_power_of_two());
