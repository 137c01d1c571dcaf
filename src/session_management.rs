//! Session management core module.
//!
//! A [`SessionContext`](session_context::SessionContext) holds everything the
//! remote application knows about one logical session: the rotating session
//! cookie, the resolved user id and the last credentials used. One context
//! serves exactly one principal; callers that handle several principals at
//! once create one context per unit of work instead of sharing a global.

pub mod session_context;

pub use session_context::SessionContext;
