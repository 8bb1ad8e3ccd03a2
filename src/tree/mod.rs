//! Feature tree reconstruction
//!
//! This module contains the arena-backed forest and the builder that
//! reassembles parent/child hierarchies from flat record streams.

mod builder;
mod forest;

pub use builder::build_forest;
pub use forest::{Forest, NodeId, Walk};
