//! # Cakeshop Config
//!
//! Configuration types for the Cakeshop API.
//!
//! Every struct can be loaded from the environment with `from_env()` or
//! built directly, which is what tests do. Nothing outside `main` reads
//! the environment.
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`admin`]: the bootstrap administrator account
//! - [`server`]: bind address, bcrypt cost, metrics, shutdown
//! - [`cors`]: allowed origins
//!
//! # Example
//!
//! ```ignore
//! use cakeshop_config::{AdminConfig, CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let admin_config = AdminConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod admin;
pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use admin::AdminConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
