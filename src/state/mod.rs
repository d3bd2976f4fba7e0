//! State management module
//!
//! This module handles all application state, including:
//! - Dataset loading and id-keyed lookup maps (catalog.rs)
//! - Shared data structures (data.rs)
//! - Selection state and the filter/sort engine (filter.rs)

pub mod catalog;
pub mod data;
pub mod filter;
