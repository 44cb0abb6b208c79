//! Low-level helpers for hot-path code.
//!
//! Branch prediction hints, inlining and visibility shorthands, cache-line
//! alignment, build-time feature toggles and a debug trace that disappears
//! from release builds unless the `debug-trace` feature is enabled.

pub mod align;
pub mod attrs;
pub mod constants;
pub mod debug;
pub mod features;
pub mod hint;

pub mod prelude {
    pub use crate::align::{AlignError, Aligned128, Aligned16, Aligned32, Aligned64, Alignment, CachePadded};
    pub use crate::constants::CACHE_LINE_SIZE;
    pub use crate::features::{Features, USE_COMPRESSED_PTRS, USE_SIZE_CACHES};
    pub use crate::hint::{cold_path, likely, unlikely};
}
