pub mod access;

pub use access::{AccessError, CurrentUser, authorize, require_admin, require_user};
