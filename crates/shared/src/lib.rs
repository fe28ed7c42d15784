//! Shared utilities and common types for the Zadaci backend.
//!
//! This crate provides common functionality used across all other crates:
//! - List-query parameters (filter / sort / pagination)
//! - Common validation logic

pub mod load_params;
pub mod validation;
