//! Modules layer - Infrastructure components
//!
//! Contains the data-access seam the features read their snapshots through.

pub mod store;
