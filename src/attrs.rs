//! Inlining and symbol visibility shorthands.
//!
//! Each macro wraps one function item and applies a single attribute or
//! visibility, so call sites read the same way regardless of which of them
//! is used:
//!
//! ```
//! hints::never_inline! {
//!     fn slow_path(x: u32) -> u32 { x * 3 }
//! }
//! hints::always_inline! {
//!     pub const fn fast_path(x: u32) -> u32 { x + 1 }
//! }
//! assert_eq!(fast_path(slow_path(2)), 7);
//! ```

/// Applies `#[inline(never)]` to a function.
///
/// Any function item is accepted, including `const`, `unsafe` and
/// `extern "C"` functions.
#[macro_export]
macro_rules! never_inline {
    ($($item:tt)*) => {
        #[inline(never)]
        $($item)*
    };
}

/// Applies `#[inline(always)]` to a function.
///
/// Any function item is accepted, including `const`, `unsafe` and
/// `extern "C"` functions.
#[macro_export]
macro_rules! always_inline {
    ($($item:tt)*) => {
        #[inline(always)]
        $($item)*
    };
}

/// Declares a function visible only inside the current crate.
///
/// The item is written without a visibility; qualifiers such as `const`,
/// `unsafe`, `async` and `extern "C"` are kept.
#[macro_export]
macro_rules! hidden {
    ($(#[$meta:meta])* fn $($rest:tt)*) => {
        $(#[$meta])*
        pub(crate) fn $($rest)*
    };
    ($(#[$meta:meta])* const $($rest:tt)*) => {
        $(#[$meta])*
        pub(crate) const $($rest)*
    };
    ($(#[$meta:meta])* async $($rest:tt)*) => {
        $(#[$meta])*
        pub(crate) async $($rest)*
    };
    ($(#[$meta:meta])* unsafe $($rest:tt)*) => {
        $(#[$meta])*
        pub(crate) unsafe $($rest)*
    };
    ($(#[$meta:meta])* extern $($rest:tt)*) => {
        $(#[$meta])*
        pub(crate) extern $($rest)*
    };
}

/// Declares an unmangled `extern "C"` function with public visibility, so the
/// symbol is exported from a `cdylib` or `staticlib`.
///
/// `unsafe fn` and `const fn` are accepted as well.
#[macro_export]
macro_rules! export {
    ($(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)? $body:block) => {
        $(#[$meta])*
        #[unsafe(no_mangle)]
        pub extern "C" fn $name($($arg: $ty),*) $(-> $ret)? $body
    };
    ($(#[$meta:meta])* unsafe fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)? $body:block) => {
        $(#[$meta])*
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name($($arg: $ty),*) $(-> $ret)? $body
    };
    ($(#[$meta:meta])* const fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)? $body:block) => {
        $(#[$meta])*
        #[unsafe(no_mangle)]
        pub const extern "C" fn $name($($arg: $ty),*) $(-> $ret)? $body
    };
}

/// Keeps a hot function out of line so it gets its own body in the text
/// section, where the linker can place it.
///
/// Aligning function code to [`CACHE_LINE_SIZE`](crate::constants::CACHE_LINE_SIZE)
/// needs the nightly-only `fn_align` attribute, so on stable this applies
/// `#[inline(never)]` and nothing else.
///
/// ```
/// hints::cacheline_aligned_fn! {
///     pub fn drain(batch: &[u64]) -> u64 { batch.iter().sum() }
/// }
/// assert_eq!(drain(&[1, 2, 3]), 6);
/// ```
#[macro_export]
macro_rules! cacheline_aligned_fn {
    ($($item:tt)*) => {
        $crate::never_inline! { $($item)* }
    };
}
