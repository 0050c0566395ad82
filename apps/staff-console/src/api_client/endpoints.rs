//! Named wrappers for the staff endpoints. Each one only fixes path, method
//! and auth requirement; transport and error handling live in [`ApiClient`].

use bytes::Bytes;

use super::{to_body, ApiClient, ApiError, RequestDescriptor};
use crate::models::{
    ApplicationRecord, ApplicationReport, LoginRequest, LoginResponse, StaffProfile,
    VacancyPayload, VacancyRecord,
};

/// POST /auth/staff/login
pub async fn login_staff(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let body = to_body(&LoginRequest { email, password })?;
    api.request(RequestDescriptor::post("/auth/staff/login", body))
        .await
}

/// GET /staff/me
pub async fn staff_profile(api: &ApiClient) -> Result<StaffProfile, ApiError> {
    api.request(RequestDescriptor::get("/staff/me").authenticated())
        .await
}

/// GET /staff/vacancies
pub async fn staff_vacancies(api: &ApiClient) -> Result<Vec<VacancyRecord>, ApiError> {
    api.request(RequestDescriptor::get("/staff/vacancies").authenticated())
        .await
}

/// POST /staff/vacancies
pub async fn create_staff_vacancy(
    api: &ApiClient,
    payload: &VacancyPayload,
) -> Result<VacancyRecord, ApiError> {
    api.request(RequestDescriptor::post("/staff/vacancies", to_body(payload)?).authenticated())
        .await
}

/// PUT /staff/vacancies/{id}
pub async fn update_staff_vacancy(
    api: &ApiClient,
    id: i64,
    payload: &VacancyPayload,
) -> Result<VacancyRecord, ApiError> {
    api.request(
        RequestDescriptor::put(format!("/staff/vacancies/{id}"), to_body(payload)?)
            .authenticated(),
    )
    .await
}

/// GET /staff/applications
pub async fn staff_applications(api: &ApiClient) -> Result<Vec<ApplicationRecord>, ApiError> {
    api.request(RequestDescriptor::get("/staff/applications").authenticated())
        .await
}

/// GET /staff/applications/{id}/report
pub async fn staff_application_report(
    api: &ApiClient,
    application_id: i64,
) -> Result<ApplicationReport, ApiError> {
    api.request(
        RequestDescriptor::get(format!("/staff/applications/{application_id}/report"))
            .authenticated(),
    )
    .await
}

/// Direct link to the PDF report.
///
/// The server authenticates this endpoint through a `token` query parameter
/// instead of a header, so the returned URL carries the caller's credential.
/// Treat it as a secret. With no session the parameter is empty.
pub fn staff_application_report_pdf_url(api: &ApiClient, application_id: i64) -> String {
    let token = api.session().token().unwrap_or_default();
    format!(
        "{}/staff/applications/{application_id}/report.pdf?token={}",
        api.base_url(),
        urlencoding::encode(&token)
    )
}

/// Fetches the PDF report bytes through the same token-bearing URL.
pub async fn download_staff_application_report_pdf(
    api: &ApiClient,
    application_id: i64,
) -> Result<Bytes, ApiError> {
    let url = staff_application_report_pdf_url(api, application_id);
    api.fetch_bytes(&url).await
}
