//! Data adapters for the off-peak recommendation engine.
//!
//! Responsibilities:
//! - Load destination catalogs and seasonality tables from bundled or
//!   on-disk JSON.
//! - Provide the HTTP adapter that asks a language model for
//!   recommendation explanations.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `offpeak-scorer`).
//! - Keep async IO behind synchronous trait seams defined in `offpeak-core`.
//!
//! Invariants:
//! - Catalogs are immutable after loading.
//! - No global mutable state.

pub mod catalog;
pub mod enrich;

pub use catalog::{CatalogError, Region, StaticCatalog};
