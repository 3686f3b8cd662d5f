//! Handle lists.
//!
//! A [`HandleList`] is one handle wide: it names a block inside a
//! [`BlockStore`] and never owns the elements. Copying a list copies the
//! reference, not the contents. An invalid list handle is the permanently
//! empty list.

use crate::select::{Elements, Enumerate, Select};
use foundry_api::{BlockStore, FoundryError, Handle, PublicType, Result};
use serde::{Deserialize, Serialize};

/// Value-type view over a variable-length block of element handles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleList {
    list_handle: Handle,
}

impl HandleList {
    /// The canonical empty list. Requires no allocation.
    pub const EMPTY: Self = Self::invalid();

    /// Wrap an existing block handle.
    #[must_use]
    pub const fn new(list_handle: Handle) -> Self {
        Self { list_handle }
    }

    /// A list over the invalid handle.
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            list_handle: Handle::INVALID,
        }
    }

    /// The block handle this list wraps.
    #[must_use]
    pub const fn list_handle(&self) -> Handle {
        self.list_handle
    }

    /// Whether the wrapped handle is valid. Says nothing about length.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.list_handle.is_valid()
    }

    fn resolved(&self) -> Result<Handle> {
        if self.is_valid() {
            Ok(self.list_handle)
        } else {
            Err(FoundryError::InvalidHandle {
                handle: self.list_handle,
            })
        }
    }

    /// Number of elements. An invalid list reports `0` without touching the
    /// store.
    pub fn size<S: BlockStore + ?Sized>(&self, store: &S) -> Result<u32> {
        if !self.is_valid() {
            return Ok(0);
        }
        store.block_length(self.list_handle)
    }

    /// Whether [`size`](Self::size) is zero.
    pub fn is_empty<S: BlockStore + ?Sized>(&self, store: &S) -> Result<bool> {
        Ok(self.size(store)? == 0)
    }

    /// Element at `index`.
    pub fn get<S: BlockStore + ?Sized>(&self, store: &S, index: u32) -> Result<Handle> {
        store.get_element(self.resolved()?, index)
    }

    /// Overwrite the element at `index`.
    pub fn set<S>(&self, store: &S, index: u32, handle: Handle) -> Result<()>
    where
        S: BlockStore + ?Sized,
    {
        store.set_element(self.resolved()?, index, handle)
    }

    /// Append `handle` as the new last element.
    ///
    /// The invalid list cannot grow; build a list first.
    pub fn append<S: BlockStore + ?Sized>(&self, store: &S, handle: Handle) -> Result<()> {
        store.append_element(self.resolved()?, handle)
    }

    /// Eager snapshot of the current elements.
    pub fn to_vec<S: BlockStore + ?Sized>(&self, store: &S) -> Result<Vec<Handle>> {
        Ok(self.try_elements(store)?.collect())
    }

    /// Lazy iterator over the raw element handles.
    ///
    /// Yields nothing for a handle that does not resolve; use
    /// [`try_elements`](Self::try_elements) to surface that as an error.
    pub fn elements<'s, S: BlockStore + ?Sized>(&self, store: &'s S) -> Elements<'s, S> {
        let identity: fn(&'s S, Handle) -> Handle = |_, handle| handle;
        Select::new(Some(store), self.list_handle, identity)
    }

    /// Like [`elements`](Self::elements), but rejects a valid handle that
    /// does not resolve instead of yielding nothing.
    pub fn try_elements<'s, S>(&self, store: &'s S) -> Result<Elements<'s, S>>
    where
        S: BlockStore + ?Sized,
    {
        self.size(store)?;
        Ok(self.elements(store))
    }

    /// Lazily map each element handle through `func`.
    ///
    /// Yields nothing for a handle that does not resolve; use
    /// [`try_select`](Self::try_select) to surface that as an error.
    pub fn select<'s, S, T, F>(
        self,
        store: &'s S,
        mut func: F,
    ) -> Select<'s, S, impl FnMut(&'s S, Handle) -> T>
    where
        S: BlockStore + ?Sized,
        F: FnMut(Handle) -> T,
    {
        let accessor = move |_: &'s S, handle| func(handle);
        Select::new(Some(store), self.list_handle, accessor)
    }

    /// Like [`select`](Self::select), but rejects a valid handle that does
    /// not resolve.
    pub fn try_select<'s, S, T, F>(
        self,
        store: &'s S,
        func: F,
    ) -> Result<Select<'s, S, impl FnMut(&'s S, Handle) -> T>>
    where
        S: BlockStore + ?Sized,
        F: FnMut(Handle) -> T,
    {
        self.size(store)?;
        Ok(self.select(store, func))
    }

    /// Lazily reconstruct each element as a `T`.
    ///
    /// The invalid list enumerates as empty. A valid handle that does not
    /// resolve fails with [`FoundryError::InvalidHandle`] before anything is
    /// yielded.
    pub fn enumerate<'s, S, T>(&self, store: &'s S) -> Result<Enumerate<'s, S, T>>
    where
        S: BlockStore + ?Sized,
        T: PublicType,
    {
        self.size(store)?;
        let construct: fn(&'s S, Handle) -> T = T::construct_from_handle::<S>;
        Ok(Select::new(Some(store), self.list_handle, construct))
    }

    /// [`enumerate`](Self::enumerate) over a bare list handle.
    pub fn enumerate_handle<'s, S, T>(
        store: &'s S,
        list_handle: Handle,
    ) -> Result<Enumerate<'s, S, T>>
    where
        S: BlockStore + ?Sized,
        T: PublicType,
    {
        Self::new(list_handle).enumerate(store)
    }
}

impl From<Handle> for HandleList {
    fn from(list_handle: Handle) -> Self {
        Self::new(list_handle)
    }
}

// Lists of lists.
impl PublicType for HandleList {
    fn construct_from_handle<S: BlockStore + ?Sized>(_store: &S, handle: Handle) -> Self {
        Self::new(handle)
    }

    fn handle(&self) -> Handle {
        self.list_handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Container;

    #[test]
    fn empty_singleton_is_invalid_and_sized_zero() {
        let container = Container::default();
        assert!(!HandleList::EMPTY.is_valid());
        assert_eq!(HandleList::EMPTY, HandleList::default());
        assert_eq!(HandleList::EMPTY.size(&container), Ok(0));
        assert_eq!(HandleList::EMPTY.is_empty(&container), Ok(true));
        assert_eq!(HandleList::EMPTY.elements(&container).count(), 0);
        assert_eq!(container.block_count(), 0);
    }

    #[test]
    fn invalid_list_rejects_element_access() {
        let container = Container::default();
        let err = FoundryError::InvalidHandle {
            handle: Handle::INVALID,
        };
        assert_eq!(HandleList::EMPTY.get(&container, 0), Err(err.clone()));
        let replaced = HandleList::EMPTY.set(&container, 0, Handle::new(1));
        assert_eq!(replaced, Err(err.clone()));
        let appended = HandleList::EMPTY.append(&container, Handle::new(1));
        assert_eq!(appended, Err(err));
    }

    #[test]
    fn unresolved_valid_handle_is_an_error_not_empty() {
        let container = Container::default();
        let dangling = HandleList::new(Handle::new(42));
        assert!(dangling.is_valid());
        let expected = FoundryError::InvalidHandle {
            handle: Handle::new(42),
        };
        assert_eq!(dangling.size(&container), Err(expected.clone()));
        assert!(dangling.try_elements(&container).is_err());
        assert!(dangling.try_select(&container, Handle::index).is_err());
        assert_eq!(dangling.elements(&container).count(), 0);

        let typed = dangling.enumerate::<_, Handle>(&container);
        assert_eq!(typed.err(), Some(expected.clone()));
        let nested = HandleList::enumerate_handle::<_, HandleList>(&container, Handle::new(42));
        assert_eq!(nested.err(), Some(expected));
    }

    #[test]
    fn invalid_list_enumerates_as_empty() {
        let container = Container::default();
        let typed = HandleList::EMPTY
            .enumerate::<_, Handle>(&container)
            .expect("invalid list is empty");
        assert_eq!(typed.count(), 0);
    }

    #[test]
    fn select_projects_each_handle() {
        let container = Container::default();
        let list = HandleList::new(container.allocate_block(0).expect("allocation"));
        for index in [3, 1, 2] {
            list.append(&container, Handle::new(index)).expect("append");
        }
        let indices: Vec<u32> = list.select(&container, Handle::index).collect();
        assert_eq!(indices, vec![3, 1, 2]);
        assert_eq!(
            list.to_vec(&container),
            Ok(vec![Handle::new(3), Handle::new(1), Handle::new(2)])
        );
    }

    #[test]
    fn serializes_as_bare_handle() {
        let list = HandleList::new(Handle::new(9));
        assert_eq!(serde_json::to_string(&list).expect("serialize"), "9");
    }
}
