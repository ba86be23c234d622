//! # Cakeshop Models
//!
//! Domain models and request DTOs for the Cakeshop API.
//!
//! - [`users`]: [`User`], [`Role`], and the ban ledger ([`BanHistory`], [`BanEvent`])
//! - [`auth`]: registration and credential exchange requests
//! - [`profile`]: self-service profile update requests
//! - [`admin`]: ban, unban, and inspection requests
//!
//! Request DTOs implement [`cakeshop_core::ValidateRequest`] so the HTTP
//! layer can reject bad input before any store mutation.

pub mod admin;
pub mod auth;
pub mod profile;
pub mod users;

// Re-export commonly used types at crate root
pub use users::{BanEvent, BanHistory, Role, RoleParseError, User};
