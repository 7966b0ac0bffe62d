//! Inventory domain module.
//!
//! The shared mutable store under test (racy and synchronized consume
//! paths) plus the recursive availability checker, implemented purely as
//! deterministic domain logic (no IO, no logging, no storage).

pub mod availability;
pub mod store;

pub use availability::Availability;
pub use store::InventoryStore;
