use serde::{Deserialize, Serialize};

/// A full employee record as persisted in the directory file.
///
/// Every field is always present on a persisted record; defaults are filled
/// in at creation time, never at read time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub department: String,
    pub time_at_company: String,
    pub date_of_creation: String,
    pub email: String,
    pub location: String,
    pub manager: String,
    pub status: String,
    pub salary_band: String,
    pub skills: Vec<String>,
}

/// Creation payload. Nothing is required: missing fields become empty
/// strings, validation is the form layer's problem.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub department: String,
    pub email: String,
    pub location: String,
    pub manager: String,
    pub salary_band: String,
    pub time_at_company: Option<String>,
}

/// Partial update payload for PATCH. Only keys that are present overwrite
/// the stored record. `employeeId` and `dateOfCreation` are immutable after
/// creation and deliberately have no slot here; unknown keys are ignored.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub manager: Option<String>,
    pub status: Option<String>,
    pub salary_band: Option<String>,
    pub time_at_company: Option<String>,
    pub skills: Option<Vec<String>>,
}
