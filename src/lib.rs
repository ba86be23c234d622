//! # Cakeshop API
//!
//! A small account service built with Rust and Axum. Users register, trade
//! their credentials for a bearer token, and use it to reach role-gated
//! resources. Administrators can ban and unban accounts and audit the ban
//! history of any account.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Access pipeline: token → identity → user → ban → role
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Registration and credential exchange
//! │   ├── users/       # Self-service profile endpoints
//! │   └── admin/       # Ban, unban, inspect
//! ├── docs.rs           # OpenAPI document
//! ├── router.rs         # Route table and global layers
//! ├── state.rs          # Shared application state
//! └── validator.rs      # JSON body extractor with field validation
//! ```
//!
//! Each feature module has the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic over the user store
//! - `router.rs`: Axum router configuration
//!
//! ## Access pipeline
//!
//! Every protected route runs [`middleware::access`] first:
//!
//! ```text
//! Authorization header → verify token → load user → banned? → role? → handler
//! ```
//!
//! The handler receives the record loaded from the store on this request,
//! so bans and role changes apply from the very next request.
//!
//! ## Roles
//!
//! | Role | Reaches |
//! |------|---------|
//! | User | `/user/*`, `/cake` |
//! | Admin | everything a User reaches, plus `/admin/*` |
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! CAKE_ADMIN_EMAIL=admin@mail.com
//! CAKE_ADMIN_PASSWORD=adminadmin
//! PORT=8080
//! ```

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use cakeshop_auth;
pub use cakeshop_config;
pub use cakeshop_core;
pub use cakeshop_models;
pub use cakeshop_store;
