use crate::{Handle, Result};

/// Low-level block storage consumed by handle lists.
///
/// A store owns every block. Methods take `&self`; implementations provide
/// their own interior mutability so a single store can be shared while lists
/// are being read and extended.
pub trait BlockStore {
    /// Allocate a block of `len` elements, each set to [`Handle::INVALID`].
    fn allocate_block(&self, len: u32) -> Result<Handle>;

    /// Current number of elements in `block`.
    fn block_length(&self, block: Handle) -> Result<u32>;

    /// Element at `index`; `index` must be below the block length.
    fn get_element(&self, block: Handle, index: u32) -> Result<Handle>;

    /// Overwrite the element at `index` in place.
    fn set_element(&self, block: Handle, index: u32, value: Handle) -> Result<()>;

    /// Grow `block` by one, storing `value` at the new final position.
    fn append_element(&self, block: Handle, value: Handle) -> Result<()>;
}

impl<S: BlockStore + ?Sized> BlockStore for &S {
    fn allocate_block(&self, len: u32) -> Result<Handle> {
        (**self).allocate_block(len)
    }

    fn block_length(&self, block: Handle) -> Result<u32> {
        (**self).block_length(block)
    }

    fn get_element(&self, block: Handle, index: u32) -> Result<Handle> {
        (**self).get_element(block, index)
    }

    fn set_element(&self, block: Handle, index: u32, value: Handle) -> Result<()> {
        (**self).set_element(block, index, value)
    }

    fn append_element(&self, block: Handle, value: Handle) -> Result<()> {
        (**self).append_element(block, value)
    }
}
