//! Person ("osoba") domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Person view model.
///
/// Flattens the optional role relation into `NazivUloge` for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Osoba {
    pub id_osobe: i64,
    pub ime: String,
    pub prezime: String,
    pub email: Option<String>,
    pub id_uloge: Option<i64>,
    pub naziv_uloge: Option<String>,
}

impl Osoba {
    /// Display name used by the autocomplete surface.
    pub fn puno_ime(&self) -> String {
        format!("{} {}", self.ime, self.prezime)
    }
}

/// Create/update payload for a person.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct OsobaPayload {
    #[serde(default)]
    pub id_osobe: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub ime: String,

    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub prezime: String,

    #[serde(default)]
    #[validate(email(message = "Invalid e-mail address"))]
    pub email: Option<String>,

    #[serde(default)]
    pub id_uloge: Option<i64>,
}

/// Sortable person columns. `NazivUloge` sorts on the denormalized
/// role name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsobaSortKey {
    IdOsobe,
    Ime,
    Prezime,
    Email,
    NazivUloge,
}

impl OsobaSortKey {
    /// Case-insensitive lookup of a sort column name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "idosobe" => Some(Self::IdOsobe),
            "ime" => Some(Self::Ime),
            "prezime" => Some(Self::Prezime),
            "email" => Some(Self::Email),
            "nazivuloge" => Some(Self::NazivUloge),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osoba_wire_names() {
        let osoba = Osoba {
            id_osobe: 11,
            ime: "Ana".to_string(),
            prezime: "Anić".to_string(),
            email: Some("ana@example.com".to_string()),
            id_uloge: Some(2),
            naziv_uloge: Some("Voditelj".to_string()),
        };
        let json = serde_json::to_value(&osoba).unwrap();
        assert_eq!(json["IdOsobe"], 11);
        assert_eq!(json["Ime"], "Ana");
        assert_eq!(json["Prezime"], "Anić");
        assert_eq!(json["NazivUloge"], "Voditelj");
    }

    #[test]
    fn test_puno_ime() {
        let osoba = Osoba {
            id_osobe: 1,
            ime: "Ivo".to_string(),
            prezime: "Ivić".to_string(),
            email: None,
            id_uloge: None,
            naziv_uloge: None,
        };
        assert_eq!(osoba.puno_ime(), "Ivo Ivić");
    }

    #[test]
    fn test_payload_requires_both_names() {
        let payload: OsobaPayload =
            serde_json::from_str(r#"{"Ime":"Ana","Prezime":""}"#).unwrap();
        assert!(payload.validate().is_err());

        let payload: OsobaPayload =
            serde_json::from_str(r#"{"Ime":"Ana","Prezime":"Anić"}"#).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_sort_key_covers_denormalized_role() {
        assert_eq!(
            OsobaSortKey::parse("NazivUloge"),
            Some(OsobaSortKey::NazivUloge)
        );
        // Raw storage-layer names are not exposed as sort keys.
        assert_eq!(OsobaSortKey::parse("id_uloge"), None);
    }
}
