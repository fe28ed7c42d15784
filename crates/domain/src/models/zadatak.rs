//! Task ("zadatak") domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::validation::validate_plan_interval;
use validator::{Validate, ValidationError};

/// Task view model.
///
/// Flattens the optional assignee relation into `Nositelj` (the
/// person's full name) for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Zadatak {
    pub id_zadatka: i64,
    pub naslov: String,
    pub opis: Option<String>,
    pub plan_pocetak: NaiveDate,
    pub plan_kraj: NaiveDate,
    pub prioritet: i32,
    pub id_osobe: Option<i64>,
    pub nositelj: Option<String>,
}

/// Create/update payload for a task.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
#[validate(schema(function = "validate_plan", skip_on_field_errors = true))]
pub struct ZadatakPayload {
    #[serde(default)]
    pub id_zadatka: Option<i64>,

    #[validate(length(min = 1, max = 200, message = "Task title is required"))]
    pub naslov: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Description is too long"))]
    pub opis: Option<String>,

    pub plan_pocetak: NaiveDate,

    pub plan_kraj: NaiveDate,

    #[validate(range(min = 1, max = 5, message = "Priority must be between 1 and 5"))]
    pub prioritet: i32,

    #[serde(default)]
    pub id_osobe: Option<i64>,
}

fn validate_plan(payload: &ZadatakPayload) -> Result<(), ValidationError> {
    validate_plan_interval(payload.plan_pocetak, payload.plan_kraj)
}

/// Sortable task columns. `Nositelj` sorts on the denormalized
/// assignee name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZadatakSortKey {
    IdZadatka,
    Naslov,
    PlanPocetak,
    PlanKraj,
    Prioritet,
    Nositelj,
}

impl ZadatakSortKey {
    /// Case-insensitive lookup of a sort column name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "idzadatka" => Some(Self::IdZadatka),
            "naslov" => Some(Self::Naslov),
            "planpocetak" => Some(Self::PlanPocetak),
            "plankraj" => Some(Self::PlanKraj),
            "prioritet" => Some(Self::Prioritet),
            "nositelj" => Some(Self::Nositelj),
            _ => None,
        }
    }
}
