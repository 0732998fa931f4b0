use core::fmt;
use core::hash::Hash;

/// Opaque object handle.
///
/// Every kind of device object has its own handle type so a buffer handle
/// cannot be passed where a program is expected. `EMPTY` is reserved and
/// never names a live object.
pub trait Handle: Copy + Eq + Hash + fmt::Debug {
    const EMPTY: Self;

    fn from_raw(raw: u64) -> Self;

    fn raw(self) -> u64;

    #[inline]
    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub struct $name(u64);

        impl $name {
            /// Reserved "no object" handle.
            pub const EMPTY: Self = Self(u64::MAX);

            #[inline]
            pub const fn raw(self) -> u64 {
                self.0
            }
        }

        impl Handle for $name {
            const EMPTY: Self = $name::EMPTY;

            #[inline]
            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            #[inline]
            fn raw(self) -> u64 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::EMPTY
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if *self == Self::EMPTY {
                    write!(f, concat!(stringify!($name), "(EMPTY)"))
                } else {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                }
            }
        }
    };
}

define_handle!(
    /// Handle of a raw byte buffer.
    BufferId
);

define_handle!(
    /// Handle of a vertex-pull configuration.
    PullerId
);

define_handle!(
    /// Handle of a shader program.
    ProgramId
);
