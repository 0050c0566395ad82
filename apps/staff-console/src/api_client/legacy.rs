//! Company-administration and generic-entity endpoints.
//!
//! These predate the staff panel and are only reachable through the hidden
//! `legacy` command group. Updates go out as `POST`, which is what the server
//! routes accept for these paths.

use super::{to_body, ApiClient, ApiError, RequestDescriptor};
use crate::models::{
    CompanyProfile, CompanyRegistrationPayload, CompanyStaffPayload, CompanyStaffRecord,
    EntityKind, EntityPayload, EntityRecord,
};

/// GET /company
pub async fn companies(api: &ApiClient) -> Result<Vec<CompanyProfile>, ApiError> {
    api.request(RequestDescriptor::get("/company").authenticated())
        .await
}

/// POST /company/register
pub async fn register_company(
    api: &ApiClient,
    payload: &CompanyRegistrationPayload,
) -> Result<CompanyProfile, ApiError> {
    api.request(RequestDescriptor::post("/company/register", to_body(payload)?).authenticated())
        .await
}

/// POST /company/{id}
pub async fn update_company(
    api: &ApiClient,
    id: i64,
    payload: &CompanyRegistrationPayload,
) -> Result<CompanyProfile, ApiError> {
    api.request(RequestDescriptor::post(format!("/company/{id}"), to_body(payload)?).authenticated())
        .await
}

/// GET /company/staff
pub async fn company_staff(api: &ApiClient) -> Result<Vec<CompanyStaffRecord>, ApiError> {
    api.request(RequestDescriptor::get("/company/staff").authenticated())
        .await
}

/// POST /company/staff
pub async fn create_company_staff(
    api: &ApiClient,
    payload: &CompanyStaffPayload,
) -> Result<CompanyStaffRecord, ApiError> {
    api.request(RequestDescriptor::post("/company/staff", to_body(payload)?).authenticated())
        .await
}

/// POST /company/staff/{id}
pub async fn update_company_staff(
    api: &ApiClient,
    id: i64,
    payload: &CompanyStaffPayload,
) -> Result<CompanyStaffRecord, ApiError> {
    api.request(
        RequestDescriptor::post(format!("/company/staff/{id}"), to_body(payload)?)
            .authenticated(),
    )
    .await
}

/// GET /{staff|candidate}
pub async fn entities(api: &ApiClient, kind: EntityKind) -> Result<Vec<EntityRecord>, ApiError> {
    api.request(RequestDescriptor::get(format!("/{}", kind.path_segment())).authenticated())
        .await
}

/// POST /{staff|candidate}
pub async fn create_entity(
    api: &ApiClient,
    kind: EntityKind,
    payload: &EntityPayload,
) -> Result<EntityRecord, ApiError> {
    api.request(
        RequestDescriptor::post(format!("/{}", kind.path_segment()), to_body(payload)?)
            .authenticated(),
    )
    .await
}
