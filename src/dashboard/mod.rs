//! Mission Control: read-only kanban dashboard.
//!
//! ## Overview
//!
//! Work items live in `.data/items.json` and pipeline definitions in
//! `config/pipelines.yaml`, both written by automation outside this
//! process. The dashboard rereads both files on every request, composes
//! them into one payload, and serves an embedded browser client that polls
//! the payload every 30 seconds and renders one column per stage.
//!
//! ## Module Map
//!
//! ```text
//! ┌──────────┐  GET /api/data  ┌────────────────────────────────────────┐
//! │  Client  │ ──────────────> │  server.rs  (axum Router, ServerConfig)│
//! │ (ui/dist)│ <────────────── │    └─ api.rs  (handlers, AppState)     │
//! └──────────┘  JSON payload   │          │                             │
//!                              │          │ DataStore::load()           │
//!                              │          v                             │
//!                              │  store.rs  (file reads, validation)    │
//!                              └────────────────────────────────────────┘
//! ```
//!
//! ## Supporting Modules
//!
//! | Module     | Responsibility                                        |
//! |------------|-------------------------------------------------------|
//! | `models`   | Shared types: `Item`, `Pipeline`, `MetadataValue`     |
//! | `board`    | Pure derivation: stage columns and summary counts     |
//! | `embedded` | Statically embeds the board UI (`rust-embed`)         |
//!
//! The server holds no mutable state; every request is independent and the
//! files are the single source of truth. Write access, authentication, and
//! push updates are out of scope.

pub mod api;
pub mod board;
pub mod embedded;
pub mod models;
pub mod server;
pub mod store;
