//! Set-once factory registration.
//!
//! A [`FactorySlot`] is injected configuration: the host registers at most
//! one factory at startup, and every later registration is refused rather
//! than silently replacing the first.

use crate::Container;
use foundry_api::{FoundryError, Result};
use std::fmt;
use std::sync::OnceLock;

type MakeFn<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Slot holding an optional factory for `T`.
pub struct FactorySlot<T> {
    name: &'static str,
    make: OnceLock<MakeFn<T>>,
}

/// Slot producing the containers a host hands to list operations.
pub type ContainerFactory = FactorySlot<Container>;

impl<T> FactorySlot<T> {
    /// Create an unconfigured slot. Usable in `static` position.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            make: OnceLock::new(),
        }
    }

    /// Slot name, reported in errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a factory has been registered.
    pub fn is_configured(&self) -> bool {
        self.make.get().is_some()
    }

    /// Register the factory. Fails with [`FoundryError::AlreadyConfigured`]
    /// if one is already set; the existing factory stays in place.
    pub fn register<F>(&self, make: F) -> Result<()>
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.make.set(Box::new(make)).map_err(|_rejected| {
            tracing::warn!(slot = self.name, "Factory already registered; registration denied");
            FoundryError::AlreadyConfigured { slot: self.name }
        })?;
        tracing::debug!(slot = self.name, "Registered factory");
        Ok(())
    }

    /// Produce a value from the registered factory, or from `default` when
    /// nothing is registered.
    pub fn create(&self, default: impl FnOnce() -> T) -> T {
        match self.make.get() {
            Some(make) => make(),
            None => default(),
        }
    }
}

impl FactorySlot<Container> {
    /// Produce a container, falling back to [`Container::default`].
    pub fn create_container(&self) -> Container {
        self.create(Container::default)
    }
}

impl Default for FactorySlot<Container> {
    fn default() -> Self {
        Self::new("container")
    }
}

impl<T> fmt::Debug for FactorySlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactorySlot")
            .field("name", &self.name)
            .field("configured", &self.is_configured())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContainerConfig;

    #[test]
    fn falls_back_to_default_until_registered() {
        let slot: FactorySlot<u32> = FactorySlot::new("answer");
        assert!(!slot.is_configured());
        assert_eq!(slot.create(|| 1), 1);

        slot.register(|| 42).expect("first registration");
        assert!(slot.is_configured());
        assert_eq!(slot.create(|| 1), 42);
    }

    #[test]
    fn second_registration_is_denied() {
        let slot: FactorySlot<u32> = FactorySlot::new("answer");
        slot.register(|| 1).expect("first registration");
        assert_eq!(
            slot.register(|| 2),
            Err(FoundryError::AlreadyConfigured { slot: "answer" })
        );
        assert_eq!(slot.create(|| 0), 1);
    }

    #[test]
    fn container_factory_uses_registered_config() {
        let factory = ContainerFactory::default();
        let fallback = factory.create_container();
        assert_eq!(fallback.config(), &ContainerConfig::default());

        let limited = ContainerConfig::default().with_max_blocks(2);
        factory
            .register(move || Container::new(limited.clone()))
            .expect("registration");
        assert_eq!(factory.create_container().config().max_blocks, 2);
        assert_eq!(factory.name(), "container");
    }
}
