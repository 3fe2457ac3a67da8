//! # worldstore-domain
//!
//! Pure domain model for the worldstore service.
//!
//! ## Responsibilities
//! - Define the **world document**, an opaque JSON value stored and served
//!   verbatim
//! - Define the **world summary**, a diagnostic projection (object, spawner
//!   and instance counts) used only for logging
//! - Enforce the submission rule: a saved document must be a JSON object
//! - Define the error taxonomy shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod world;
