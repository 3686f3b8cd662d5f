//! Enumeration helpers on bare handles.

use crate::select::Select;
use foundry_api::{BlockStore, Handle};

/// Treat a handle as a list without naming [`HandleList`](crate::HandleList).
pub trait HandleListExt {
    /// Lazily map each element of the list through `accessor`.
    ///
    /// Permissive: an absent store or an invalid handle produces an empty
    /// sequence instead of an error.
    fn as_list_iter<'s, S, T, F>(self, store: Option<&'s S>, accessor: F) -> Select<'s, S, F>
    where
        S: BlockStore + ?Sized,
        F: FnMut(&'s S, Handle) -> T;
}

impl HandleListExt for Handle {
    fn as_list_iter<'s, S, T, F>(self, store: Option<&'s S>, accessor: F) -> Select<'s, S, F>
    where
        S: BlockStore + ?Sized,
        F: FnMut(&'s S, Handle) -> T,
    {
        let store = store.filter(|_| self.is_valid());
        Select::new(store, self, accessor)
    }
}
