use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::lenient::{f64_lenient, i64_lenient, null_as_default};
use crate::models::staff::EmploymentType;

pub const DEFAULT_CURRENCY: &str = "INR";
pub const DEFAULT_MATCH_THRESHOLD: f64 = 70.0;
pub const DEFAULT_MCQ_QUESTION_COUNT: i64 = 10;
pub const DEFAULT_MCQ_PASS_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    #[default]
    Onsite,
    Hybrid,
    Remote,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LocationType::Onsite => "onsite",
            LocationType::Hybrid => "hybrid",
            LocationType::Remote => "remote",
            LocationType::Other(raw) => raw.as_str(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacancyStatus {
    Draft,
    #[default]
    Open,
    Closed,
    Filled,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for VacancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VacancyStatus::Draft => "draft",
            VacancyStatus::Open => "open",
            VacancyStatus::Closed => "closed",
            VacancyStatus::Filled => "filled",
            VacancyStatus::Other(raw) => raw.as_str(),
        })
    }
}

/// A job opening as stored by the server. Read-only on the client: edits are
/// sent as a full [`VacancyPayload`] and the server returns the new record.
///
/// Text and enum columns the edit form falls back on may arrive as `null`;
/// they read as empty text or the enum default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub id: i64,
    pub company_id: i64,
    pub created_by_staff_id: i64,
    pub company_name: String,
    pub created_by_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employment_type: EmploymentType,
    #[serde(deserialize_with = "i64_lenient")]
    pub openings: i64,
    #[serde(deserialize_with = "f64_lenient")]
    pub experience_min: f64,
    #[serde(deserialize_with = "f64_lenient")]
    pub experience_max: f64,
    #[serde(deserialize_with = "f64_lenient")]
    pub salary_min: f64,
    #[serde(deserialize_with = "f64_lenient")]
    pub salary_max: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_type: LocationType,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub application_deadline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub responsibilities: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: String,
    pub skills: Option<String>,
    #[serde(deserialize_with = "f64_lenient")]
    pub match_threshold: f64,
    #[serde(deserialize_with = "i64_lenient")]
    pub mcq_question_count: i64,
    #[serde(deserialize_with = "f64_lenient")]
    pub mcq_pass_threshold: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: VacancyStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Body for creating or updating a vacancy. Always sent whole.
///
/// Missing keys in a partial JSON document take the blank-form defaults, which
/// lets a caller overlay a handful of fields onto either a fresh form or an
/// existing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VacancyPayload {
    pub job_title: String,
    pub department: String,
    pub designation: String,
    pub employment_type: EmploymentType,
    pub openings: i64,
    pub experience_min: f64,
    pub experience_max: f64,
    pub salary_min: f64,
    pub salary_max: f64,
    pub currency: String,
    pub location_type: LocationType,
    pub city: String,
    pub state: String,
    pub country: String,
    pub application_deadline: String,
    pub description: String,
    pub responsibilities: String,
    pub requirements: String,
    pub skills: String,
    pub match_threshold: f64,
    pub mcq_question_count: i64,
    pub mcq_pass_threshold: f64,
    pub status: VacancyStatus,
}

impl Default for VacancyPayload {
    fn default() -> Self {
        Self {
            job_title: String::new(),
            department: String::new(),
            designation: String::new(),
            employment_type: EmploymentType::FullTime,
            openings: 1,
            experience_min: 0.0,
            experience_max: 0.0,
            salary_min: 0.0,
            salary_max: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            location_type: LocationType::Onsite,
            city: String::new(),
            state: String::new(),
            country: String::new(),
            application_deadline: String::new(),
            description: String::new(),
            responsibilities: String::new(),
            requirements: String::new(),
            skills: String::new(),
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            mcq_question_count: DEFAULT_MCQ_QUESTION_COUNT,
            mcq_pass_threshold: DEFAULT_MCQ_PASS_THRESHOLD,
            status: VacancyStatus::Open,
        }
    }
}

/// `value`, or the form default when it renders as empty text.
fn or_form_default<T: Clone + Default + fmt::Display>(value: &T) -> T {
    if value.to_string().is_empty() {
        T::default()
    } else {
        value.clone()
    }
}

impl From<&VacancyRecord> for VacancyPayload {
    /// Pre-fills an edit form from an existing record. Nullable text columns
    /// become empty strings; blank currency, employment type, location and
    /// status take the blank-form defaults; numbers are carried over as-is.
    fn from(record: &VacancyRecord) -> Self {
        let currency = if record.currency.is_empty() {
            DEFAULT_CURRENCY.to_string()
        } else {
            record.currency.clone()
        };

        Self {
            job_title: record.job_title.clone(),
            department: record.department.clone(),
            designation: record.designation.clone().unwrap_or_default(),
            employment_type: or_form_default(&record.employment_type),
            openings: record.openings,
            experience_min: record.experience_min,
            experience_max: record.experience_max,
            salary_min: record.salary_min,
            salary_max: record.salary_max,
            currency,
            location_type: or_form_default(&record.location_type),
            city: record.city.clone().unwrap_or_default(),
            state: record.state.clone().unwrap_or_default(),
            country: record.country.clone().unwrap_or_default(),
            application_deadline: record.application_deadline.clone().unwrap_or_default(),
            description: record.description.clone(),
            responsibilities: record.responsibilities.clone().unwrap_or_default(),
            requirements: record.requirements.clone(),
            skills: record.skills.clone().unwrap_or_default(),
            match_threshold: record.match_threshold,
            mcq_question_count: record.mcq_question_count,
            mcq_pass_threshold: record.mcq_pass_threshold,
            status: or_form_default(&record.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::vacancy_json;
    use serde_json::json;

    #[test]
    fn test_default_payload_matches_blank_form() {
        let payload = VacancyPayload::default();
        assert_eq!(payload.openings, 1);
        assert_eq!(payload.currency, "INR");
        assert_eq!(payload.location_type, LocationType::Onsite);
        assert_eq!(payload.employment_type, EmploymentType::FullTime);
        assert_eq!(payload.match_threshold, 70.0);
        assert_eq!(payload.mcq_question_count, 10);
        assert_eq!(payload.mcq_pass_threshold, 70.0);
        assert_eq!(payload.status, VacancyStatus::Open);
    }

    #[test]
    fn test_partial_payload_json_fills_defaults() {
        let payload: VacancyPayload = serde_json::from_value(json!({
            "job_title": "Backend Engineer",
            "location_type": "remote"
        }))
        .unwrap();
        assert_eq!(payload.job_title, "Backend Engineer");
        assert_eq!(payload.location_type, LocationType::Remote);
        assert_eq!(payload.openings, 1);
        assert_eq!(payload.currency, "INR");
    }

    #[test]
    fn test_record_with_decimal_strings_deserializes() {
        let record: VacancyRecord = serde_json::from_value(vacancy_json(4, "Data Analyst")).unwrap();
        assert_eq!(record.salary_max, 1_200_000.0);
        assert_eq!(record.match_threshold, 65.0);
        assert_eq!(record.status, VacancyStatus::Open);
    }

    #[test]
    fn test_payload_from_record_maps_nullable_fields_to_empty() {
        let record: VacancyRecord = serde_json::from_value(vacancy_json(4, "Data Analyst")).unwrap();
        let payload = VacancyPayload::from(&record);
        assert_eq!(payload.job_title, "Data Analyst");
        assert_eq!(payload.designation, "");
        assert_eq!(payload.skills, "SQL, Python");
        assert_eq!(payload.application_deadline, "");
        assert_eq!(payload.match_threshold, 65.0);
        assert_eq!(payload.mcq_question_count, 0);
    }

    #[test]
    fn test_record_with_nulls_and_unknown_status_deserializes() {
        let mut raw = vacancy_json(5, "Archivist");
        raw["status"] = json!("archived");
        raw["currency"] = json!(null);
        raw["location_type"] = json!(null);
        raw["description"] = json!(null);
        raw["employment_type"] = json!("");

        let record: VacancyRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.status, VacancyStatus::Other("archived".to_string()));
        assert_eq!(record.currency, "");
        assert_eq!(record.location_type, LocationType::Onsite);
        assert_eq!(record.description, "");

        let payload = VacancyPayload::from(&record);
        assert_eq!(payload.currency, "INR");
        assert_eq!(payload.employment_type, EmploymentType::FullTime);
        assert_eq!(payload.status, VacancyStatus::Other("archived".to_string()));
        assert_eq!(serde_json::to_value(&payload).unwrap()["status"], "archived");
    }

    #[test]
    fn test_payload_serializes_kebab_and_lowercase_enums() {
        let payload = VacancyPayload {
            employment_type: EmploymentType::PartTime,
            status: VacancyStatus::Draft,
            ..VacancyPayload::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["employment_type"], "part-time");
        assert_eq!(value["status"], "draft");
        assert_eq!(value["location_type"], "onsite");
    }
}
