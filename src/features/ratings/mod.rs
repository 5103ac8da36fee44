//! Rating aggregation over a company's reviews.
//!
//! Pure, synchronous computation over an already-fetched review snapshot:
//! the overall average, review count and per-category summary, optionally
//! restricted to reviews from a given city and/or country. There are no
//! routes here; the freight forwarder endpoints call [`aggregate`] after
//! loading reviews through the store.

pub mod aggregator;
pub mod dtos;

pub use aggregator::{aggregate, LocationFilter};
pub use dtos::{CategoryScoreSummary, RatingSummary};
