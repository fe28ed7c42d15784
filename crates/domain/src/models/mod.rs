//! Domain models for the Zadaci backend.

pub mod autocomplete;
pub mod log_entry;
pub mod osoba;
pub mod partner;
pub mod uloga;
pub mod zadatak;

pub use autocomplete::AutocompleteItem;
pub use log_entry::{LogEntry, NewLogEntry};
pub use osoba::{Osoba, OsobaPayload, OsobaSortKey};
pub use partner::{Partner, PartnerPayload, PartnerSortKey};
pub use uloga::{Uloga, UlogaPayload, UlogaSortKey};
pub use zadatak::{Zadatak, ZadatakPayload, ZadatakSortKey};
