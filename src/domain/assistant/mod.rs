//! Assistant catalog module.

mod catalog;

pub use catalog::{Assistant, AssistantCatalog};
