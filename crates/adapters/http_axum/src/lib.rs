//! # worldstore-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **world document API**:
//!   - `GET  /api/world`: return the current document verbatim
//!   - `POST /api/world`: back up the current document and replace it
//! - Allow cross-origin requests on `/api/*` (any origin; development policy)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `worldstore-app` (for port traits and services) and
//! `worldstore-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
