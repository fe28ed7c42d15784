//! Repository implementations.
//!
//! Every repository is a cheap clone around the shared [`sqlx::PgPool`]
//! and is constructed per handler call. Mutating methods run the entity
//! change and its audit log entry in one transaction: the commit covers
//! both or neither.

pub mod log_entry;
pub mod osoba;
pub mod partner;
pub mod uloga;
pub mod zadatak;

pub use log_entry::LogEntryRepository;
pub use osoba::OsobaRepository;
pub use partner::PartnerRepository;
pub use uloga::UlogaRepository;
pub use zadatak::ZadatakRepository;

/// OFFSET/LIMIT operands must be non-negative in Postgres; negative
/// request values degrade to an empty page rather than an error.
pub(crate) fn page_bounds(start_index: i64, rows: i64) -> (i64, i64) {
    (start_index.max(0), rows.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bounds_passthrough() {
        assert_eq!(page_bounds(0, 10), (0, 10));
        assert_eq!(page_bounds(40, 20), (40, 20));
    }

    #[test]
    fn test_page_bounds_negative_degrades() {
        assert_eq!(page_bounds(-5, 10), (0, 10));
        assert_eq!(page_bounds(0, -1), (0, 0));
    }
}
