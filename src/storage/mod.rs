//! Dataset loading and indexing

pub mod store;

pub use store::{DataStore, ENTITY_KEYS};
