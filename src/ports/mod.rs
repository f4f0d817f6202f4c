//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use cases require from the
//! outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `CategorySource`: Provider categories and their constituents
//! - `InstrumentSource`: Venue instrument listings per market

pub mod category_source;
pub mod instrument_source;

pub use category_source::CategorySource;
pub use instrument_source::InstrumentSource;
