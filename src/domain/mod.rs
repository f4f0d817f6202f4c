//! Domain layer - Categories, venue assets, and report assembly.
//!
//! Pure logic with no I/O (hexagonal architecture inner ring). Every
//! type here is an immutable value once built; the use cases only sort,
//! filter, and intersect them.

pub mod allow_list;
pub mod category;
pub mod report;
pub mod venue;

// Re-export core types for convenience
pub use allow_list::AllowList;
pub use category::{sort_by_market_cap, Category, CategoryFilter, CategoryId, CategoryMember, Rejection};
pub use report::{CategoryFailure, CategoryReport, ScanReport};
pub use venue::{extract_assets, Instrument, VenueAssetSet, VenueMarket};
