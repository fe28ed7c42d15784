//! HTTP route handlers.

pub mod autocomplete;
pub mod health;
pub mod logging;
pub mod osoba;
pub mod partner;
pub mod spreadsheet;
pub mod uloga;
pub mod zadatak;
