//! Session model and durable persistence.
//!
//! A session is the pair of an opaque bearer token and an informational
//! user identity. [`SessionStore`] keeps both across restarts as two key
//! files in the per-user data directory.

mod model;
mod store;

pub use model::Session;
pub use store::SessionStore;
