//! Capability contract for facades rebuilt from handles.

use crate::{BlockStore, Handle};

/// A strongly typed facade reconstructible from `(store, handle)`.
///
/// Reconstruction must be deterministic and must not change anything the
/// caller can observe. For a handle written from `value.handle()`,
/// `T::construct_from_handle(store, h).handle() == h`.
pub trait PublicType: Sized {
    /// Rebuild the facade that `handle` identifies.
    fn construct_from_handle<S: BlockStore + ?Sized>(store: &S, handle: Handle) -> Self;

    /// The facade's own identity handle.
    fn handle(&self) -> Handle;
}

impl PublicType for Handle {
    fn construct_from_handle<S: BlockStore + ?Sized>(_store: &S, handle: Handle) -> Self {
        handle
    }

    fn handle(&self) -> Handle {
        *self
    }
}
