//! Reusable Dioxus components for the dashboard.
//!
//! One component family per directory, styles co-located with the component
//! and loaded through `asset!`.

pub mod components;

pub use components::*;
