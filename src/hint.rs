//! Branch prediction hints.
//!
//! Stable Rust has no `__builtin_expect`; calling a `#[cold]` function on the
//! unexpected side of a branch gives the optimizer the same information.

#[inline]
#[cold]
const fn cold() {}

/// Marks the current branch as rarely taken.
#[inline(always)]
pub const fn cold_path() {
    cold()
}

/// Returns `b`, hinting that it is usually `true`.
#[inline(always)]
pub const fn likely(b: bool) -> bool {
    if !b {
        cold()
    }
    b
}

/// Returns `b`, hinting that it is usually `false`.
#[inline(always)]
pub const fn unlikely(b: bool) -> bool {
    if b {
        cold()
    }
    b
}

const _: () = assert!(likely(true));
const _: () = assert!(!likely(false));
const _: () = assert!(unlikely(true));
const _: () = assert!(!unlikely(false));
