pub mod application;
pub mod auth;
pub mod company;
pub mod entity;
pub mod lenient;
pub mod staff;
pub mod vacancy;

pub use application::{ApplicationRecord, ApplicationReport, OverrideHistoryItem};
pub use auth::{AuthUser, LoginRequest, LoginResponse, Session};
pub use company::{
    CompanyProfile, CompanyRegistrationPayload, CompanyStaffPayload, CompanyStaffRecord,
};
pub use entity::{EntityKind, EntityPayload, EntityRecord};
pub use staff::StaffProfile;
pub use vacancy::{VacancyPayload, VacancyRecord};

#[cfg(test)]
pub mod fixtures;
