//! # Source Layer
//!
//! This module defines the catalog source abstraction. The [`CatalogSource`]
//! trait allows a reader session to load its library from different backends.
//!
//! ## Design Rationale
//!
//! Loading is abstracted behind a trait to:
//! - Enable **testing** with `StaticSource` (no filesystem or network needed)
//! - Allow **future backends** (bundled catalogs, OPDS, etc.) without
//!   changing the session layer
//! - Keep session logic **decoupled** from transport details
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: reads a JSON catalog file from disk
//! - [`http::HttpSource`]: one blocking GET against an http(s) URL, with
//!   non-success statuses treated as failures
//! - [`memory::StaticSource`]: in-memory library for tests
//!
//! ## Semantics
//!
//! A source is consulted exactly once, when the session opens. There is no
//! retry, no cache, and no refresh: the fetched [`Library`] is immutable for
//! the lifetime of the session. A source failure is the single user-visible
//! error in the system.

use crate::error::Result;
use crate::model::Library;

pub mod fs;
pub mod http;
pub mod memory;

/// Abstract interface for loading a catalog.
pub trait CatalogSource {
    /// Fetch and decode the catalog document.
    fn fetch(&self) -> Result<Library>;

    /// Where this catalog lives, used as the page URL for share links.
    fn location(&self) -> &str;
}
