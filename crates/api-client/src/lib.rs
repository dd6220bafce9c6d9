//! Typed async client for the external ETL status API.
//!
//! The client owns no authentication state of its own: a [`SessionStore`]
//! is injected at construction and consulted on every request, so token
//! lifecycle is fully testable. A 401 from any endpoint clears the session
//! and fires the registered unauthorized hook.

pub mod api;
pub mod client;
pub mod config;
pub mod error_convert;
pub mod session;

pub use client::{ApiClient, RequestSequence};
pub use session::{MemorySession, SessionStore};
