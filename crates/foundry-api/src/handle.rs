//! Opaque handle referencing a container block.
//!
//! Index `0` is reserved as the invalid sentinel; every valid handle carries
//! a non-zero index. Handles own nothing, the container governs the lifetime
//! of whatever they reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Passive key into a [`BlockStore`](crate::BlockStore).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Handle(u32);

impl Handle {
    /// The invalid sentinel.
    pub const INVALID: Self = Self(0);

    /// Wrap a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Return the invalid sentinel.
    #[must_use]
    pub const fn invalid() -> Self {
        Self::INVALID
    }

    /// Raw index value.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// True unless this is the reserved index `0`.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#invalid")
        }
    }
}

impl From<u32> for Handle {
    fn from(index: u32) -> Self {
        Self(index)
    }
}
