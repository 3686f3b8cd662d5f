//! Lazy, pull-based enumeration over a list block.

use foundry_api::{BlockStore, Handle};

/// Iterator over the elements of a list block, mapped through an accessor.
///
/// Every pull re-reads the block's current length and the element under the
/// cursor, so writes and appends made between pulls are observed. A store
/// error on a pull ends the sequence.
pub struct Select<'s, S: ?Sized, F> {
    store: Option<&'s S>,
    list: Handle,
    next: u32,
    accessor: F,
}

/// Raw element handles of a list.
pub type Elements<'s, S> = Select<'s, S, fn(&'s S, Handle) -> Handle>;

/// Elements of a list reconstructed as facades of type `T`.
pub type Enumerate<'s, S, T> = Select<'s, S, fn(&'s S, Handle) -> T>;

impl<'s, S: ?Sized, F> Select<'s, S, F> {
    pub(crate) fn new(store: Option<&'s S>, list: Handle, accessor: F) -> Self {
        Self {
            store,
            list,
            next: 0,
            accessor,
        }
    }

    /// The list block being walked.
    pub fn list_handle(&self) -> Handle {
        self.list
    }

    /// Index of the element the next pull will read.
    pub fn position(&self) -> u32 {
        self.next
    }
}

impl<'s, S, F, T> Iterator for Select<'s, S, F>
where
    S: BlockStore + ?Sized,
    F: FnMut(&'s S, Handle) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let store = self.store?;
        if !self.list.is_valid() {
            return None;
        }
        if self.next >= store.block_length(self.list).ok()? {
            return None;
        }
        let element = store.get_element(self.list, self.next).ok()?;
        self.next += 1;
        Some((self.accessor)(store, element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Container;

    fn index_of(_: &Container, handle: Handle) -> u32 {
        handle.index()
    }

    #[test]
    fn missing_store_or_invalid_list_yields_nothing() {
        let container = Container::default();
        let mut none = Select::new(None::<&Container>, Handle::new(1), index_of);
        assert_eq!(none.next(), None);

        let mut invalid = Select::new(Some(&container), Handle::INVALID, index_of);
        assert_eq!(invalid.next(), None);
    }

    #[test]
    fn cursor_advances_per_pull() {
        let container = Container::default();
        let list = container.allocate_block(2).expect("allocation");
        container.set_element(list, 0, Handle::new(7)).expect("set");

        let mut iter = Select::new(Some(&container), list, index_of);
        assert_eq!(iter.position(), 0);
        assert_eq!(iter.next(), Some(7));
        assert_eq!(iter.position(), 1);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.list_handle(), list);
    }
}
