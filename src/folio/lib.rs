//! # Folio Architecture
//!
//! Folio is a **UI-agnostic reading library**. This is not a CLI application that happens
//! to have some library code—it's a library that happens to have a CLI client.
//!
//! That distinction drives the layering and should guide all development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, prints pages, runs the read loop       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs, page.rs)                        │
//! │  - Owns the loaded library and the selection state          │
//! │  - Pure page composition: state in, ReaderPage out          │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - Abstract CatalogSource trait                             │
//! │  - FileSource / HttpSource (production), StaticSource (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `session.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a TUI, a web frontend, or any other UI.
//!
//! ## Session Semantics
//!
//! The library is fetched exactly once when a [`session::ReaderSession`] opens
//! and is immutable for the lifetime of the session. Likes and submitted
//! comments live only in the session's view state: they are discarded on every
//! chapter switch and on restart. That loss of durability is deliberate.
//!
//! ## Module Overview
//!
//! - [`session`]: The reader controller—entry point for all operations
//! - [`page`]: Pure composition of session state into a renderable page
//! - [`source`]: Catalog source abstraction and implementations
//! - [`model`]: Core data types (`Library`, `Book`, `Chapter`, `Comment`)
//! - [`share`]: Share-link synthesis with URL escaping
//! - [`text`]: HTML-to-text rendering for chapter content
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod model;
pub mod page;
pub mod session;
pub mod share;
pub mod source;
pub mod text;
