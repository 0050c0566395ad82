//! Records used only by the legacy company-administration views.

use serde::{Deserialize, Serialize};

use crate::models::lenient::{f64_lenient, i64_lenient, null_as_default};
use crate::models::staff::{EmploymentType, StaffStatus};

const DEFAULT_COMPANY_SIZE: &str = "1-10";
const DEFAULT_COMPANY_STATUS: &str = "active";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub id: i64,
    pub name: String,
    pub legal_name: Option<String>,
    pub registration_number: String,
    pub tax_id: Option<String>,
    pub industry: String,
    pub website: Option<String>,
    pub email: String,
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub founded_date: Option<String>,
    #[serde(deserialize_with = "i64_lenient")]
    pub employee_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_size: String,
    pub description: Option<String>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub contact_person_name: String,
    pub contact_person_designation: Option<String>,
    pub contact_person_email: String,
    pub contact_person_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyRegistrationPayload {
    pub name: String,
    pub legal_name: String,
    pub registration_number: String,
    pub tax_id: String,
    pub industry: String,
    pub website: String,
    pub email: String,
    pub phone: String,
    pub alternate_phone: String,
    pub founded_date: String,
    pub employee_count: i64,
    pub company_size: String,
    pub description: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub contact_person_name: String,
    pub contact_person_designation: String,
    pub contact_person_email: String,
    pub contact_person_phone: String,
    pub status: String,
    pub login_password: String,
}

impl Default for CompanyRegistrationPayload {
    fn default() -> Self {
        Self {
            name: String::new(),
            legal_name: String::new(),
            registration_number: String::new(),
            tax_id: String::new(),
            industry: String::new(),
            website: String::new(),
            email: String::new(),
            phone: String::new(),
            alternate_phone: String::new(),
            founded_date: String::new(),
            employee_count: 0,
            company_size: DEFAULT_COMPANY_SIZE.to_string(),
            description: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: String::new(),
            contact_person_name: String::new(),
            contact_person_designation: String::new(),
            contact_person_email: String::new(),
            contact_person_phone: String::new(),
            status: DEFAULT_COMPANY_STATUS.to_string(),
            login_password: String::new(),
        }
    }
}

fn text_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

impl From<&CompanyProfile> for CompanyRegistrationPayload {
    /// Pre-fills an edit form from an existing company. The password is left
    /// blank so an edit only changes it when one is given.
    fn from(company: &CompanyProfile) -> Self {
        Self {
            name: company.name.clone(),
            legal_name: company.legal_name.clone().unwrap_or_default(),
            registration_number: company.registration_number.clone(),
            tax_id: company.tax_id.clone().unwrap_or_default(),
            industry: company.industry.clone(),
            website: company.website.clone().unwrap_or_default(),
            email: company.email.clone(),
            phone: company.phone.clone(),
            alternate_phone: company.alternate_phone.clone().unwrap_or_default(),
            founded_date: company.founded_date.clone().unwrap_or_default(),
            employee_count: company.employee_count,
            company_size: text_or(&company.company_size, DEFAULT_COMPANY_SIZE),
            description: company.description.clone().unwrap_or_default(),
            address_line1: company.address_line1.clone(),
            address_line2: company.address_line2.clone().unwrap_or_default(),
            city: company.city.clone(),
            state: company.state.clone(),
            postal_code: company.postal_code.clone(),
            country: company.country.clone(),
            contact_person_name: company.contact_person_name.clone(),
            contact_person_designation: company
                .contact_person_designation
                .clone()
                .unwrap_or_default(),
            contact_person_email: company.contact_person_email.clone(),
            contact_person_phone: company.contact_person_phone.clone(),
            status: text_or(&company.status, DEFAULT_COMPANY_STATUS),
            login_password: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyStaffRecord {
    pub id: i64,
    pub company_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub employee_code: String,
    pub department: String,
    pub designation: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employment_type: EmploymentType,
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

/// `gender` is free text here because the form allows an empty selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyStaffPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub alternate_phone: String,
    pub gender: String,
    pub date_of_birth: String,
    pub employee_code: String,
    pub department: String,
    pub designation: String,
    pub employment_type: EmploymentType,
    pub date_of_joining: String,
    pub experience_years: i64,
    pub salary: f64,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub status: StaffStatus,
    pub notes: String,
    pub login_password: String,
}

impl From<&CompanyStaffRecord> for CompanyStaffPayload {
    /// Pre-fills an edit form from an existing staff record, password blank.
    fn from(record: &CompanyStaffRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            alternate_phone: record.alternate_phone.clone().unwrap_or_default(),
            gender: record.gender.clone().unwrap_or_default(),
            date_of_birth: record.date_of_birth.clone().unwrap_or_default(),
            employee_code: record.employee_code.clone(),
            department: record.department.clone(),
            designation: record.designation.clone(),
            employment_type: record.employment_type.clone(),
            date_of_joining: record.date_of_joining.clone(),
            experience_years: record.experience_years,
            salary: record.salary,
            address_line1: record.address_line1.clone(),
            address_line2: record.address_line2.clone().unwrap_or_default(),
            city: record.city.clone(),
            state: record.state.clone(),
            postal_code: record.postal_code.clone(),
            country: record.country.clone(),
            emergency_contact_name: record.emergency_contact_name.clone(),
            emergency_contact_phone: record.emergency_contact_phone.clone(),
            status: record.status.clone(),
            notes: record.notes.clone().unwrap_or_default(),
            login_password: String::new(),
        }
    }
}
