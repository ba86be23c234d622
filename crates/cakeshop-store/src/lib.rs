//! # Cakeshop Store
//!
//! The authoritative repository of [`User`](cakeshop_models::User) records.
//!
//! - [`UserStore`]: the repository contract used by handlers and middleware
//! - [`InMemoryUserStore`]: a `HashMap` behind a single `Mutex`
//! - [`seed`]: startup insertion of the configured administrator
//!
//! Records are keyed by email. Callers always receive clones, and every
//! mutation replaces a whole record, so no caller can observe another's
//! partial write.
//!
//! # Example
//!
//! ```ignore
//! use cakeshop_models::User;
//! use cakeshop_store::{InMemoryUserStore, UserStore};
//!
//! let store = InMemoryUserStore::new();
//! store.add("a@mail.com", User::new("a@mail.com", digest, "cheesecake"))?;
//!
//! store.modify("a@mail.com", &mut |user| {
//!     user.favorite_cake = "napoleon".to_string();
//! })?;
//! ```

pub mod error;
pub mod memory;
pub mod seed;

// Re-export commonly used types at crate root
pub use error::StoreError;
pub use memory::InMemoryUserStore;
pub use seed::bootstrap_admin;

use cakeshop_models::User;

/// Keyed repository of user records.
///
/// Implementations must make each call atomic with respect to every other
/// call on the same store.
pub trait UserStore: Send + Sync {
    /// Inserts `user` under `key`. Fails if the key is present.
    fn add(&self, key: &str, user: User) -> Result<(), StoreError>;

    /// Returns a copy of the record stored under `key`.
    fn get(&self, key: &str) -> Result<User, StoreError>;

    /// Replaces the whole record under `key`. Never creates one.
    fn update(&self, key: &str, user: User) -> Result<(), StoreError>;

    /// Applies `change` to the record under `key` and returns the result.
    ///
    /// The read, the change and the write happen under one lock hold, so no
    /// other call can slip a write in between. `change` must not call back
    /// into the store.
    fn modify(&self, key: &str, change: &mut dyn FnMut(&mut User)) -> Result<User, StoreError>;

    /// Removes and returns the record under `key`.
    fn delete(&self, key: &str) -> Result<User, StoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
