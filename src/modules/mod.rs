//! Feature modules.
//!
//! Each module follows the same structure: `model.rs` (rows and DTOs),
//! `service.rs` (data access), `controller.rs` (HTTP handlers),
//! `router.rs` (route wiring).

pub mod auth;
pub mod classes;
pub mod passes;
pub mod sessions;
pub mod users;
