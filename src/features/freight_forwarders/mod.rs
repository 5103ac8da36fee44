//! Freight forwarder (company) read endpoints with aggregated ratings.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/freight-forwarders` | No | Search / list companies with average rating |
//! | GET | `/api/freight-forwarders/{id}` | No | Company detail with category summary, optional `city` / `country` filter |
//! | GET | `/api/search/suggestions` | No | Company name suggestions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FreightForwarderService;
