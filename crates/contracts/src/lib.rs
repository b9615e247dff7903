//! Shared contracts of the product configurator.
//!
//! Everything in this crate is platform independent: the wasm frontend uses it
//! for DTOs and for the selection engine, and it is unit-tested natively.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
