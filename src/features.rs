//! Build-time toggles.
//!
//! Both toggles are off unless the matching Cargo feature is enabled:
//!
//! ```toml
//! hints = { version = "0.1", features = ["compressed-ptrs", "size-caches"] }
//! ```

use std::fmt;

/// Store pointers in a compressed form. Enabled by `compressed-ptrs`.
pub const USE_COMPRESSED_PTRS: bool = cfg!(feature = "compressed-ptrs");

/// Keep per-size caches. Enabled by `size-caches`.
pub const USE_SIZE_CACHES: bool = cfg!(feature = "size-caches");

/// Snapshot of the toggles this crate was built with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Features {
    pub compressed_ptrs: bool,
    pub size_caches: bool,
    pub debug_trace: bool,
}

impl Features {
    pub const fn current() -> Self {
        Features {
            compressed_ptrs: USE_COMPRESSED_PTRS,
            size_caches: USE_SIZE_CACHES,
            debug_trace: crate::debug::TRACE_ENABLED,
        }
    }

    fn enabled(&self) -> impl Iterator<Item = &'static str> {
        [
            ("compressed-ptrs", self.compressed_ptrs),
            ("size-caches", self.size_caches),
            ("debug-trace", self.debug_trace),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
    }

    /// Reports the enabled toggles at info level.
    pub fn log_summary(&self) {
        log::info!(target: crate::debug::TARGET, "build features: {}", self);
    }
}

impl Default for Features {
    fn default() -> Self {
        Features::current()
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.enabled().peekable();
        if names.peek().is_none() {
            return f.write_str("none");
        }
        for (i, name) in names.enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
