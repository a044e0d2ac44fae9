//! Request guards.
//!
//! Authorization is extractor-based: a handler opts into a guard by
//! taking it as an argument, and the guard rejects the request before
//! the handler body runs.
//!
//! # Guards
//!
//! - [`auth::AuthUser`]: any valid token
//! - [`auth::RequireSelf`]: valid token whose subject matches the `:id`
//!   path parameter
//! - [`auth::RequireClient`]: valid token with the client flag set
//! - [`auth::RequireInstructor`]: valid token with the instructor flag set
//!
//! The token travels in the `authorization` header as the raw signed
//! string; there is no `Bearer ` prefix.

pub mod auth;
