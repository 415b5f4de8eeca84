//! Auth module
//!
//! Registration and login rules, independent of the storage mechanism and of
//! whichever entry point (HTTP or CLI) calls them.
//!
//! ## Structure
//! - `service.rs` - `AuthService`, generic over any `CredentialStore`

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, MIN_PASSWORD_LEN, MIN_USERNAME_LEN};
