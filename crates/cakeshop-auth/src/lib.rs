//! # Cakeshop Auth
//!
//! Bearer token signing and identity verification.
//!
//! - [`claims`]: the JWT claim set
//! - [`jwt`]: signing and decoding with an HMAC secret
//! - [`verifier`]: [`IdentityVerifier`], which turns an `Authorization`
//!   header value into the email the token was issued for
//!
//! Only the subject claim is consumed downstream. Everything the access
//! pipeline knows about a caller beyond their email comes from the store.
//!
//! # Example
//!
//! ```ignore
//! use cakeshop_auth::{IdentityVerifier, create_access_token};
//! use cakeshop_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("a@mail.com", &config)?;
//!
//! let verifier = IdentityVerifier::new(config);
//! let email = verifier.verify(&format!("Bearer {}", token))?;
//! assert_eq!(email, "a@mail.com");
//! ```

pub mod claims;
pub mod error;
pub mod jwt;
pub mod verifier;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use error::AuthError;
pub use jwt::{create_access_token, verify_token};
pub use verifier::IdentityVerifier;
