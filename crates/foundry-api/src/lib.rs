#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Public interfaces for Foundry handle lists.

mod error;
mod handle;
mod public_type;
mod store;

pub use error::{FoundryError, Result};
pub use handle::Handle;
pub use public_type::PublicType;
pub use store::BlockStore;
