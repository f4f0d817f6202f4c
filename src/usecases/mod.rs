//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement the
//! scanner's workflows.
//!
//! Use cases:
//! - `VenueCollector`: Tradable asset set across venue markets
//! - `CategoryScanner`: Category selection, reconciliation, and report

pub mod category_scanner;
pub mod venue_collector;

pub use category_scanner::CategoryScanner;
pub use venue_collector::{SourceOutcome, VenueCollection, VenueCollector};
