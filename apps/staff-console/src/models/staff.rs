use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::lenient::{f64_lenient, i64_lenient, null_as_default};

/// Unrecognised values are kept verbatim in `Other` so one new server-side
/// value does not fail a whole list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Intern,
    #[serde(untagged)]
    Other(String),
}

impl EmploymentType {
    pub fn as_str(&self) -> &str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
            EmploymentType::Intern => "intern",
            EmploymentType::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[serde(untagged)]
    Unlisted(String),
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::Unlisted(raw) => raw.as_str(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffStatus {
    #[default]
    Active,
    Inactive,
    OnLeave,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StaffStatus::Active => "active",
            StaffStatus::Inactive => "inactive",
            StaffStatus::OnLeave => "on-leave",
            StaffStatus::Other(raw) => raw.as_str(),
        })
    }
}

/// The signed-in staff member's own record (`GET /staff/me`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub id: i64,
    pub company_id: i64,
    pub company_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<String>,
    pub employee_code: String,
    pub department: String,
    pub designation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employment_type: EmploymentType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_of_joining: String,
    #[serde(deserialize_with = "i64_lenient")]
    pub experience_years: i64,
    #[serde(deserialize_with = "f64_lenient")]
    pub salary: f64,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: StaffStatus,
    pub notes: Option<String>,
    pub created_at: String,
}

impl StaffProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
