//! Container limits.

use serde::{Deserialize, Serialize};

/// Configuration for [`Container`](crate::Container) creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Maximum number of blocks. Index `0` is reserved, so at most
    /// `u32::MAX - 1` blocks are addressable regardless of this value.
    pub max_blocks: u32,
    /// Maximum number of elements per block, checked on allocation and append.
    pub max_block_len: u32,
    /// Number of block slots to reserve up front. Never more than
    /// `max_blocks` slots are reserved.
    pub initial_blocks: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            max_blocks: Self::DEFAULT_MAX_BLOCKS,
            max_block_len: Self::DEFAULT_MAX_BLOCK_LEN,
            initial_blocks: 64,
        }
    }
}

impl ContainerConfig {
    /// Default ceiling on the number of blocks a container may hold.
    pub const DEFAULT_MAX_BLOCKS: u32 = 1 << 20;

    /// Default ceiling on the number of elements in one block.
    pub const DEFAULT_MAX_BLOCK_LEN: u32 = 1 << 16;

    /// Configuration limited only by the handle index space.
    pub fn unbounded() -> Self {
        Self {
            max_blocks: u32::MAX - 1,
            max_block_len: u32::MAX,
            initial_blocks: 0,
        }
    }

    /// Set the block count limit.
    pub fn with_max_blocks(mut self, max_blocks: u32) -> Self {
        self.max_blocks = max_blocks.min(u32::MAX - 1);
        self
    }

    /// Set the per-block element limit.
    pub fn with_max_block_len(mut self, max_block_len: u32) -> Self {
        self.max_block_len = max_block_len;
        self
    }

    /// Set the number of block slots reserved at creation.
    pub fn with_initial_blocks(mut self, initial_blocks: usize) -> Self {
        self.initial_blocks = initial_blocks.min(self.max_blocks as usize);
        self
    }

    /// Block slots a container should reserve, bounded by `max_blocks`.
    pub fn reserved_blocks(&self) -> usize {
        self.initial_blocks.min(self.max_blocks as usize)
    }
}
