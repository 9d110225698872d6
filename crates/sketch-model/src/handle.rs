#![forbid(unsafe_code)]

//! Typed handles for sketch objects.
//!
//! Every object in a [`Sketch`](crate::Sketch) is addressed by a small integer
//! handle. Handles are plain `Copy` values: holding one never keeps the
//! referenced object alive, and a handle may outlive the object it names.

use std::fmt;

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(pub u32);

        impl $name {
            /// Create a handle from a raw value.
            #[must_use]
            pub const fn new(v: u32) -> Self {
                Self(v)
            }

            /// Get the raw handle value.
            #[must_use]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{:03x}"), self.0)
            }
        }
    };
}

define_handle!(
    /// Handle of a [`Group`](crate::Group).
    GroupId,
    "g"
);
define_handle!(
    /// Handle of a [`Request`](crate::Request).
    RequestId,
    "r"
);
define_handle!(
    /// Handle of a [`Constraint`](crate::Constraint).
    ConstraintId,
    "c"
);
define_handle!(
    /// Handle of a [`Param`](crate::Param).
    ParamId,
    "p"
);
define_handle!(
    /// Handle of a [`Style`](crate::Style).
    StyleId,
    "s"
);
define_handle!(
    /// Handle of a generated entity (point, line, normal, workplane...).
    EntityId,
    "e"
);
