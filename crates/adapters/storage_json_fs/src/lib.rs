//! # worldstore-adapter-storage-json-fs
//!
//! File-system persistence adapter storing the world document as a
//! pretty-printed JSON file.
//!
//! ## Responsibilities
//! - Implement the `WorldRepository` port defined in `worldstore-app::ports::storage`
//! - Keep a single-generation backup at `<path>.bak`
//! - Replace files atomically (write to `<path>.tmp`, then rename)
//! - Serialise concurrent saves so backup and replace never interleave
//!
//! ## Dependency rule
//! Depends on `worldstore-app` (for port traits) and `worldstore-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod codec;
pub mod error;
pub mod world_repo;

pub use error::StorageError;
pub use world_repo::JsonFileWorldRepository;
