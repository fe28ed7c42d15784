//! Autocomplete support types.

use serde::{Deserialize, Serialize};

/// One autocomplete suggestion: the record's id plus a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutocompleteItem {
    pub id: i64,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let item = AutocompleteItem {
            id: 3,
            label: "Pero Perić".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["Id"], 3);
        assert_eq!(json["Label"], "Pero Perić");
    }
}
