//! Domain layer for the Zadaci backend.
//!
//! This crate contains:
//! - Domain models (Partner, Uloga, Osoba, Zadatak, LogEntry)
//! - Request payloads with validation rules
//! - Per-resource sort-key definitions

pub mod models;
