//! Login handshake against the Redmine instance.
//!
//! The handshake is three dependent exchanges: fetch the login form for a
//! CSRF token and a first session cookie, post the credentials, then read the
//! landing page to recover which user the server thinks we are. See
//! [`Authenticator`] for the flow and [`identity`] for the markup inspection.

pub mod authenticator;
pub mod identity;
#[cfg(test)]
pub mod integration_tests;

pub use authenticator::Authenticator;
