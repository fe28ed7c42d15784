//! Business partner domain models.

use serde::{Deserialize, Serialize};
use shared::validation::validate_oib;
use validator::Validate;

/// Business partner view model.
///
/// Serialized with the PascalCase wire names the clients expect
/// (`IdPartnera`, `Naziv`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Partner {
    pub id_partnera: i64,
    pub naziv: String,
    pub oib: String,
    pub adresa: Option<String>,
    pub email: Option<String>,
}

/// Create/update payload for a partner.
///
/// The embedded id is ignored on create; on update it must match the
/// path id.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct PartnerPayload {
    #[serde(default)]
    pub id_partnera: Option<i64>,

    #[validate(length(min = 1, max = 200, message = "Partner name is required"))]
    pub naziv: String,

    #[validate(custom(function = "validate_oib"))]
    pub oib: String,

    #[serde(default)]
    pub adresa: Option<String>,

    #[serde(default)]
    #[validate(email(message = "Invalid e-mail address"))]
    pub email: Option<String>,
}

/// Sortable partner columns, keyed by the lowercased view-model
/// property name. An unrecognized name parses to `None` and the list
/// is returned in natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerSortKey {
    IdPartnera,
    Naziv,
    Oib,
    Adresa,
    Email,
}

impl PartnerSortKey {
    /// Case-insensitive lookup of a sort column name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "idpartnera" => Some(Self::IdPartnera),
            "naziv" => Some(Self::Naziv),
            "oib" => Some(Self::Oib),
            "adresa" => Some(Self::Adresa),
            "email" => Some(Self::Email),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_wire_names() {
        let partner = Partner {
            id_partnera: 7,
            naziv: "Mreža d.o.o.".to_string(),
            oib: "12345678903".to_string(),
            adresa: Some("Unska 3".to_string()),
            email: None,
        };
        let json = serde_json::to_value(&partner).unwrap();
        assert_eq!(json["IdPartnera"], 7);
        assert_eq!(json["Naziv"], "Mreža d.o.o.");
        assert_eq!(json["Oib"], "12345678903");
        assert_eq!(json["Adresa"], "Unska 3");
        assert!(json["Email"].is_null());
    }

    #[test]
    fn test_payload_id_is_optional() {
        let payload: PartnerPayload =
            serde_json::from_str(r#"{"Naziv":"Partner","Oib":"12345678903"}"#).unwrap();
        assert_eq!(payload.id_partnera, None);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_payload_rejects_empty_name() {
        let payload: PartnerPayload =
            serde_json::from_str(r#"{"Naziv":"","Oib":"12345678903"}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_payload_rejects_bad_oib() {
        let payload: PartnerPayload =
            serde_json::from_str(r#"{"Naziv":"Partner","Oib":"123"}"#).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_payload_rejects_bad_email() {
        let payload: PartnerPayload = serde_json::from_str(
            r#"{"Naziv":"Partner","Oib":"12345678903","Email":"not-an-email"}"#,
        )
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_sort_key_parse_case_insensitive() {
        assert_eq!(PartnerSortKey::parse("NAZIV"), Some(PartnerSortKey::Naziv));
        assert_eq!(
            PartnerSortKey::parse("IdPartnera"),
            Some(PartnerSortKey::IdPartnera)
        );
        assert_eq!(PartnerSortKey::parse("oib"), Some(PartnerSortKey::Oib));
    }

    #[test]
    fn test_sort_key_parse_unknown_is_none() {
        assert_eq!(PartnerSortKey::parse("naziv_partnera"), None);
        assert_eq!(PartnerSortKey::parse(""), None);
    }
}
