//! Review read endpoints.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/reviews/questions` | No | Active review questions grouped by category |
//! | GET | `/api/reviews/freight-forwarder/{id}` | No | Reviews of a company, newest first |
//! | GET | `/api/reviews/{id}` | No | Single review with its category scores |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReviewService;
