//! Block arena backing handle lists.
//!
//! The container is an arena of variable-length blocks, each an ordered run
//! of element handles:
//!
//! ```text
//! #1 -> [ #4 ][ #9 ][ #2 ]
//! #2 -> [ ]
//! #3 -> [ #1 ][ #invalid ]
//! ```
//!
//! Block `#n` lives at arena position `n - 1`, so index `0` is never issued
//! and stays free to act as the invalid sentinel. Blocks grow in place and
//! are never freed.

use crate::ContainerConfig;
use foundry_api::{BlockStore, FoundryError, Handle, Result};
use parking_lot::RwLock;

/// Handles rendered per row by [`Container::dump_block`].
const DUMP_ROW: usize = 8;

/// Shared, append-only arena of handle blocks.
///
/// All access goes through `&self`; each operation holds the internal lock
/// only for its own duration.
pub struct Container {
    /// Block storage, indexed by `handle.index() - 1`.
    blocks: RwLock<Vec<Vec<Handle>>>,
    /// Limits applied on allocation and growth.
    config: ContainerConfig,
}

/// Arena position for `handle`, or `None` for the invalid sentinel.
fn slot(handle: Handle) -> Option<usize> {
    handle.index().checked_sub(1).map(|i| i as usize)
}

fn capacity_exceeded(requested: u64, available: u64) -> FoundryError {
    tracing::warn!(requested, available, "Container capacity exceeded");
    FoundryError::CapacityExceeded {
        requested,
        available,
    }
}

/// Allocate `len` invalid handles, reporting allocator failure instead of
/// aborting.
fn reserve_cells(len: usize) -> Result<Vec<Handle>> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| capacity_exceeded(len as u64, 0))?;
    cells.resize(len, Handle::INVALID);
    Ok(cells)
}

impl Container {
    /// Create an empty container with the given limits.
    ///
    /// The up-front reservation is a hint: if it cannot be satisfied the
    /// container starts empty and grows on demand.
    pub fn new(config: ContainerConfig) -> Self {
        let mut blocks = Vec::new();
        let reserve = config.reserved_blocks();
        if blocks.try_reserve(reserve).is_err() {
            tracing::warn!(reserve, "Initial block reservation failed; starting empty");
        }
        Self {
            blocks: RwLock::new(blocks),
            config,
        }
    }

    /// Limits this container was created with.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Number of blocks allocated so far.
    pub fn block_count(&self) -> usize {
        self.blocks.read().len()
    }

    /// Whether `handle` designates an allocated block.
    pub fn contains(&self, handle: Handle) -> bool {
        slot(handle).is_some_and(|i| i < self.blocks.read().len())
    }

    /// Render the elements of a block for debugging, eight handles per row.
    pub fn dump_block(&self, handle: Handle) -> Option<String> {
        let blocks = self.blocks.read();
        let block = blocks.get(slot(handle)?)?;
        let mut out = format!("{handle} len={}\n", block.len());
        for (row, chunk) in block.chunks(DUMP_ROW).enumerate() {
            let cells: Vec<String> = chunk
                .iter()
                .map(|h| format!("{:>8}", h.to_string()))
                .collect();
            out.push_str(&format!("{:04}: {}\n", row * DUMP_ROW, cells.join(" ")));
        }
        Some(out)
    }

    fn with_block<R>(&self, block: Handle, f: impl FnOnce(&[Handle]) -> R) -> Result<R> {
        let blocks = self.blocks.read();
        slot(block)
            .and_then(|i| blocks.get(i))
            .map(|b| f(b.as_slice()))
            .ok_or(FoundryError::InvalidHandle { handle: block })
    }

    fn with_block_mut<R>(
        &self,
        block: Handle,
        f: impl FnOnce(&mut Vec<Handle>) -> Result<R>,
    ) -> Result<R> {
        let mut blocks = self.blocks.write();
        let entry = slot(block)
            .and_then(|i| blocks.get_mut(i))
            .ok_or(FoundryError::InvalidHandle { handle: block })?;
        f(entry)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(ContainerConfig::default())
    }
}

impl BlockStore for Container {
    fn allocate_block(&self, len: u32) -> Result<Handle> {
        let max_len = self.config.max_block_len;
        if len > max_len {
            return Err(capacity_exceeded(len.into(), max_len.into()));
        }

        let mut blocks = self.blocks.write();
        // `max_blocks` never exceeds `u32::MAX - 1`, so the new index fits.
        let count = blocks.len() as u32;
        if count >= self.config.max_blocks {
            return Err(capacity_exceeded(1, 0));
        }

        let cells = reserve_cells(len as usize)?;
        blocks.push(cells);
        let handle = Handle::new(count + 1);
        tracing::debug!(block = %handle, len, "Allocated block");
        Ok(handle)
    }

    fn block_length(&self, block: Handle) -> Result<u32> {
        self.with_block(block, |b| b.len() as u32)
    }

    fn get_element(&self, block: Handle, index: u32) -> Result<Handle> {
        self.with_block(block, |b| {
            b.get(index as usize)
                .copied()
                .ok_or(FoundryError::IndexOutOfRange {
                    list: block,
                    index,
                    len: b.len() as u32,
                })
        })?
    }

    fn set_element(&self, block: Handle, index: u32, value: Handle) -> Result<()> {
        self.with_block_mut(block, |b| {
            let len = b.len() as u32;
            let Some(cell) = b.get_mut(index as usize) else {
                return Err(FoundryError::IndexOutOfRange {
                    list: block,
                    index,
                    len,
                });
            };
            *cell = value;
            tracing::trace!(block = %block, index, value = %value, "Set element");
            Ok(())
        })
    }

    fn append_element(&self, block: Handle, value: Handle) -> Result<()> {
        let max_len = self.config.max_block_len;
        self.with_block_mut(block, |b| {
            let len = b.len() as u32;
            if len >= max_len {
                return Err(capacity_exceeded(1, 0));
            }
            b.try_reserve(1).map_err(|_| capacity_exceeded(1, 0))?;
            b.push(value);
            tracing::trace!(block = %block, index = len, value = %value, "Appended element");
            Ok(())
        })
    }
}
