//! Error types for handle list operations.
//!
//! Range and validity violations are surfaced immediately; nothing is
//! clamped or truncated. Resource exhaustion inside the container is the only
//! failure a builder can report.

use crate::Handle;
use thiserror::Error;

/// Errors raised by a [`BlockStore`](crate::BlockStore) or the list layer on top of it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FoundryError {
    /// The handle does not resolve to an allocated block.
    #[error("F001: Handle {handle} does not resolve to an allocated block")]
    InvalidHandle {
        /// The offending handle.
        handle: Handle,
    },

    /// Element index past the end of a block.
    #[error("F002: Index {index} out of range for list {list} of length {len}")]
    IndexOutOfRange {
        /// The block being accessed.
        list: Handle,
        /// The requested element index.
        index: u32,
        /// Length of the block at the time of access.
        len: u32,
    },

    /// The container cannot satisfy an allocation or growth request.
    #[error("F003: Container capacity exceeded: requested {requested}, available {available}")]
    CapacityExceeded {
        /// Number of blocks or elements requested.
        requested: u64,
        /// Number still available under the configured limit.
        available: u64,
    },

    /// A set-once slot was assigned twice.
    #[error("F004: Slot '{slot}' is already configured; registration denied")]
    AlreadyConfigured {
        /// Name of the slot.
        slot: &'static str,
    },
}

impl FoundryError {
    /// Whether the container ran out of room.
    #[must_use]
    pub fn is_resource_exhaustion(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

/// Result alias for Foundry operations.
pub type Result<T> = std::result::Result<T, FoundryError>;
