//! List builders.
//!
//! Each builder allocates one block sized to its input and writes the
//! projected handles in input order. `None` stands for an absent input and
//! yields [`Handle::INVALID`]; `Some(&[])` yields a valid zero-length block.
//! Callers can tell the two apart with `is_valid()` even though both report
//! size `0`.

use foundry_api::{BlockStore, FoundryError, Handle, PublicType, Result};

fn block_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| FoundryError::CapacityExceeded {
        requested: len as u64,
        available: u32::MAX.into(),
    })
}

/// Build a list block from raw handles.
pub fn build<S: BlockStore + ?Sized>(store: &S, values: Option<&[Handle]>) -> Result<Handle> {
    build_with(store, values, |handle| *handle)
}

/// Build a list block from facades, storing each facade's own handle.
pub fn build_public<S, T>(store: &S, items: Option<&[T]>) -> Result<Handle>
where
    S: BlockStore + ?Sized,
    T: PublicType,
{
    build_with(store, items, T::handle)
}

/// Build a list block from arbitrary items through `project`.
pub fn build_with<S, T, F>(store: &S, items: Option<&[T]>, mut project: F) -> Result<Handle>
where
    S: BlockStore + ?Sized,
    F: FnMut(&T) -> Handle,
{
    let Some(items) = items else {
        return Ok(Handle::INVALID);
    };

    let list = store.allocate_block(block_len(items.len())?)?;
    for (index, item) in (0u32..).zip(items) {
        store.set_element(list, index, project(item))?;
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Container, ContainerConfig, HandleList};

    #[test]
    fn absent_and_empty_inputs_differ() {
        let container = Container::default();
        let absent = build(&container, None).expect("build");
        let empty = build(&container, Some(&[])).expect("build");

        assert!(!absent.is_valid());
        assert!(empty.is_valid());
        assert_eq!(HandleList::new(absent).size(&container), Ok(0));
        assert_eq!(HandleList::new(empty).size(&container), Ok(0));
        assert_eq!(container.block_count(), 1);
    }

    #[test]
    fn projection_runs_in_input_order() {
        let container = Container::default();
        let names = ["a", "bb", "ccc"];
        let mut seen = Vec::new();
        let list = build_with(&container, Some(&names[..]), |name| {
            seen.push(*name);
            Handle::new(name.len() as u32)
        })
        .expect("build");

        assert_eq!(seen, names);
        assert_eq!(
            HandleList::new(list).to_vec(&container),
            Ok(vec![Handle::new(1), Handle::new(2), Handle::new(3)])
        );
    }

    #[test]
    fn allocation_failure_is_propagated() {
        let container = Container::new(ContainerConfig::default().with_max_block_len(1));
        let values = [Handle::new(1), Handle::new(2)];
        let err = build(&container, Some(&values)).expect_err("too long");
        assert!(err.is_resource_exhaustion());

        // Absent input never touches the store.
        assert_eq!(build(&container, None), Ok(Handle::INVALID));
    }
}
