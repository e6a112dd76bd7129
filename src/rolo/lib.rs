//! # Rolo Architecture
//!
//! Rolo is a UI-agnostic contact-book library with a CLI client. The
//! layering mirrors that split and should guide all development:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs + print.rs)                   │
//! │  - Clap args, the Command: prompt loop, colored output      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the opened store         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the ContactBook                 │
//! │  - Reported outcomes are values, never errors               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Book + Storage (book.rs, store/)                           │
//! │  - ContactBook: the name-keyed map + pagination cursors     │
//! │  - StorageBackend trait: FileBackend (prod), MemBackend     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! types, and never touches stdout, stderr or `std::process::exit`. The
//! same core could serve a TUI or a web UI unchanged.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`book`]: The in-memory collection and its pagination protocol
//! - [`store`]: Storage abstraction and implementations
//! - [`field`]: Validated value objects (`Name`, `Phone`, `Birthday`)
//! - [`model`]: The contact [`Record`](model::Record)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod model;
pub mod store;
