//! Aligned storage.
//!
//! [`CachePadded`] keeps a value on its own cache line so that neighbouring
//! fields written by other threads do not cause false sharing. The
//! [`aligned_type!`](crate::aligned_type) macro defines wrappers for any other
//! power-of-two alignment, and [`Alignment`] covers the cases where the
//! alignment is only known at runtime.

use crate::constants::CACHE_LINE_SIZE;
use thiserror::Error;

/// Defines a transparent wrapper type aligned to `$align` bytes.
///
/// The generated type derefs to the wrapped value and its size is rounded up
/// to a multiple of the alignment.
///
/// ```
/// hints::aligned_type!(
///     /// Aligned to a 4 KiB page.
///     PageAligned, 4096
/// );
///
/// let page = PageAligned::new([0u8; 16]);
/// assert_eq!(align_of_val(&page), 4096);
/// assert_eq!(page.len(), 16);
/// ```
#[macro_export]
macro_rules! aligned_type {
    ($(#[$meta:meta])* $name:ident, $align:tt) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
        #[repr(C, align($align))]
        pub struct $name<T> {
            value: T,
        }

        impl<T> $name<T> {
            /// Alignment of this wrapper in bytes.
            pub const ALIGN: usize = $align;

            pub const fn new(value: T) -> Self {
                Self { value }
            }

            pub fn into_inner(self) -> T {
                self.value
            }
        }

        impl<T> ::core::ops::Deref for $name<T> {
            type Target = T;

            #[inline(always)]
            fn deref(&self) -> &T {
                &self.value
            }
        }

        impl<T> ::core::ops::DerefMut for $name<T> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut T {
                &mut self.value
            }
        }

        impl<T> ::core::convert::From<T> for $name<T> {
            fn from(value: T) -> Self {
                Self::new(value)
            }
        }

        impl<T: ::core::fmt::Debug> ::core::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(stringify!($name)).field("value", &self.value).finish()
            }
        }
    };
}

aligned_type!(
    /// Pads and aligns a value to the length of a cache line.
    CachePadded, 64
);
aligned_type!(Aligned16, 16);
aligned_type!(Aligned32, 32);
aligned_type!(Aligned64, 64);
aligned_type!(Aligned128, 128);

const _: () = assert!(align_of::<CachePadded<u8>>() == CACHE_LINE_SIZE);
const _: () = assert!(size_of::<CachePadded<u8>>() == CACHE_LINE_SIZE);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AlignError {
    #[error("alignment must be non-zero")]
    Zero,
    #[error("alignment {0} is not a power of two")]
    NotPowerOfTwo(usize),
    #[error("aligning {addr:#x} up to {align} overflows")]
    Overflow { addr: usize, align: usize },
}

/// A validated power-of-two alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alignment(usize);

impl Alignment {
    pub const CACHE_LINE: Alignment = Alignment(CACHE_LINE_SIZE);

    pub fn new(align: usize) -> Result<Self, AlignError> {
        if align == 0 {
            return Err(AlignError::Zero);
        }
        if !align.is_power_of_two() {
            return Err(AlignError::NotPowerOfTwo(align));
        }
        Ok(Alignment(align))
    }

    /// Alignment of `T`.
    pub const fn of<T>() -> Self {
        Alignment(align_of::<T>())
    }

    pub const fn get(self) -> usize {
        self.0
    }

    #[inline(always)]
    const fn mask(self) -> usize {
        self.0 - 1
    }

    #[inline(always)]
    pub const fn is_aligned(self, addr: usize) -> bool {
        addr & self.mask() == 0
    }

    #[inline(always)]
    pub fn is_aligned_ptr<T>(self, ptr: *const T) -> bool {
        self.is_aligned(ptr.addr())
    }

    /// Rounds `addr` down to the previous multiple of this alignment.
    #[inline(always)]
    pub const fn align_down(self, addr: usize) -> usize {
        addr & !self.mask()
    }

    /// Rounds `addr` up to the next multiple of this alignment.
    pub fn align_up(self, addr: usize) -> Result<usize, AlignError> {
        addr.checked_add(self.mask())
            .map(|v| self.align_down(v))
            .ok_or(AlignError::Overflow { addr, align: self.0 })
    }

    /// Bytes to add to `addr` to reach the next aligned address.
    pub fn padding_for(self, addr: usize) -> Result<usize, AlignError> {
        Ok(self.align_up(addr)? - addr)
    }
}

impl TryFrom<usize> for Alignment {
    type Error = AlignError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Alignment::new(value)
    }
}
