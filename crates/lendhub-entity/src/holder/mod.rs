//! Holder domain entities.

pub mod model;

pub use model::{Holder, HolderKind};
