//! Bundled and file-based destination catalogs.
//!
//! A catalog groups destinations into origin regions and carries the
//! seasonality table used to score them. [`StaticCatalog`] implements both
//! [`DestinationCatalog`](offpeak_core::DestinationCatalog) and
//! [`SeasonalitySource`](offpeak_core::SeasonalitySource), so one value backs
//! both seams of the recommendation engine.
//!
//! # Example
//!
//! ```
//! use offpeak_core::DestinationCatalog;
//! use offpeak_data::StaticCatalog;
//!
//! let catalog = StaticCatalog::builtin()?;
//! assert_eq!(catalog.region_for("New York").id, "north-america");
//! assert!(catalog.lookup_destinations("London").any(|d| d.id == "thailand-phuket"));
//! # Ok::<(), offpeak_data::CatalogError>(())
//! ```

mod error;
mod region;
mod store;

pub use error::CatalogError;
pub use region::Region;
pub use store::StaticCatalog;
