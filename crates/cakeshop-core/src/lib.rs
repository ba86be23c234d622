//! # Cakeshop Core
//!
//! Core types, errors, and utilities for the Cakeshop API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with plain-text HTTP response conversion
//! - [`password`]: bcrypt password hashing and verification
//! - [`validation`]: Field rules for registration and profile updates
//!
//! # Example
//!
//! ```ignore
//! use cakeshop_core::errors::AppError;
//! use cakeshop_core::password::{hash_password, verify_password};
//! use cakeshop_core::validation::validate_registration;
//!
//! validate_registration("a@mail.com", "password1", "cheesecake")?;
//! let digest = hash_password("password1", bcrypt::DEFAULT_COST)?;
//! assert!(verify_password("password1", &digest)?);
//! ```

pub mod errors;
pub mod password;
pub mod validation;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use validation::{ValidateRequest, ValidationError};
