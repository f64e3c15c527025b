//! Storage layer.

pub mod store;

pub use store::ActivityStore;
