#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core components of Foundry handle lists.

mod build;
mod config;
mod container;
mod factory;
mod list;
mod select;
mod util;

pub use build::{build, build_public, build_with};
pub use config::ContainerConfig;
pub use container::Container;
pub use factory::{ContainerFactory, FactorySlot};
pub use list::HandleList;
pub use select::{Elements, Enumerate, Select};
pub use util::HandleListExt;

pub use foundry_api::{BlockStore, FoundryError, Handle, PublicType, Result};
