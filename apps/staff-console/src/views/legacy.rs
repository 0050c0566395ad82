//! Company-administration pages kept for compatibility. Not part of the staff
//! navigation; reachable only from the hidden `legacy` command group.

use serde_json::Value;
use tracing::info;

use crate::api_client::legacy;
use crate::errors::AppError;
use crate::models::{
    CompanyProfile, CompanyRegistrationPayload, CompanyStaffPayload, CompanyStaffRecord,
    EntityKind, EntityPayload, EntityRecord,
};
use crate::state::AppState;
use crate::views::{apply_overlay, format_timestamp, render_table, ViewOutcome};

pub async fn list_companies(state: &AppState) -> ViewOutcome {
    match legacy::companies(&state.api).await {
        Ok(rows) => ViewOutcome::Page(render_companies(&rows)),
        Err(e) => ViewOutcome::from_error(e, "Unable to load companies"),
    }
}

/// Registers a company from the blank form with `fields` filled in, or
/// updates company `editing` with `fields` applied over its current values.
pub async fn save_company(state: &AppState, editing: Option<i64>, fields: &Value) -> ViewOutcome {
    let result = match editing {
        Some(id) => update_company(state, id, fields).await,
        None => register_company(state, fields).await,
    };

    match result {
        Ok(notice) => ViewOutcome::Page(notice.to_string()),
        Err(e) => ViewOutcome::from_error(e, "Unable to save company"),
    }
}

async fn register_company(state: &AppState, fields: &Value) -> Result<&'static str, AppError> {
    let payload: CompanyRegistrationPayload =
        apply_overlay(&CompanyRegistrationPayload::default(), fields)?;
    legacy::register_company(&state.api, &payload).await?;
    Ok("Company registered successfully.")
}

async fn update_company(state: &AppState, id: i64, fields: &Value) -> Result<&'static str, AppError> {
    let companies = legacy::companies(&state.api).await?;
    let existing = companies
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))?;

    let payload: CompanyRegistrationPayload =
        apply_overlay(&CompanyRegistrationPayload::from(existing), fields)?;
    legacy::update_company(&state.api, id, &payload).await?;
    info!("Updated company id={id}");
    Ok("Company updated successfully.")
}

pub async fn list_company_staff(state: &AppState) -> ViewOutcome {
    match legacy::company_staff(&state.api).await {
        Ok(rows) => ViewOutcome::Page(render_company_staff(&rows)),
        Err(e) => ViewOutcome::from_error(e, "Unable to load staff"),
    }
}

/// Creating staff requires a login password; a password given on update
/// replaces the existing one. Either way it must match `confirm_password`.
/// Updates start from the current record, so unset fields keep their values.
pub async fn save_company_staff(
    state: &AppState,
    editing: Option<i64>,
    fields: &Value,
    confirm_password: Option<&str>,
) -> ViewOutcome {
    match save_staff(state, editing, fields, confirm_password).await {
        Ok(notice) => ViewOutcome::Page(notice.to_string()),
        Err(e) => ViewOutcome::from_error(e, "Unable to save staff"),
    }
}

async fn save_staff(
    state: &AppState,
    editing: Option<i64>,
    fields: &Value,
    confirm_password: Option<&str>,
) -> Result<&'static str, AppError> {
    let Some(id) = editing else {
        let payload = staff_payload(&CompanyStaffPayload::default(), true, fields, confirm_password)?;
        legacy::create_company_staff(&state.api, &payload).await?;
        return Ok("Staff created successfully.");
    };

    // Check the form before fetching anything.
    staff_payload(&CompanyStaffPayload::default(), false, fields, confirm_password)?;

    let staff = legacy::company_staff(&state.api).await?;
    let existing = staff
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Staff {id} not found")))?;

    let payload = staff_payload(
        &CompanyStaffPayload::from(existing),
        false,
        fields,
        confirm_password,
    )?;
    legacy::update_company_staff(&state.api, id, &payload).await?;
    info!("Updated company staff id={id}");
    Ok("Staff updated successfully.")
}

fn staff_payload(
    base: &CompanyStaffPayload,
    creating: bool,
    fields: &Value,
    confirm_password: Option<&str>,
) -> Result<CompanyStaffPayload, AppError> {
    let payload: CompanyStaffPayload = apply_overlay(base, fields)?;

    if creating && payload.login_password.is_empty() {
        return Err(AppError::Validation(
            "Login password is required for new staff".to_string(),
        ));
    }
    if !payload.login_password.is_empty()
        && Some(payload.login_password.as_str()) != confirm_password
    {
        return Err(AppError::Validation(
            "Password and confirm password do not match".to_string(),
        ));
    }
    Ok(payload)
}

pub async fn list_entities(state: &AppState, kind: EntityKind) -> ViewOutcome {
    match legacy::entities(&state.api, kind).await {
        Ok(rows) => ViewOutcome::Page(render_entities(&rows)),
        Err(e) => ViewOutcome::from_error(e, "Unable to load data"),
    }
}

pub async fn create_entity(state: &AppState, kind: EntityKind, fields: &Value) -> ViewOutcome {
    let payload: EntityPayload = match apply_overlay(&EntityPayload::default(), fields) {
        Ok(payload) => payload,
        Err(e) => return ViewOutcome::from_error(e, "Unable to save data"),
    };

    match legacy::create_entity(&state.api, kind, &payload).await {
        Ok(created) => ViewOutcome::Page(format!("Created {kind} #{}.", created.id)),
        Err(e) => ViewOutcome::from_error(e, "Unable to save data"),
    }
}

fn render_companies(rows: &[CompanyProfile]) -> String {
    if rows.is_empty() {
        return "No companies found.".to_string();
    }
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                c.industry.clone(),
                c.email.clone(),
                c.city.clone(),
                c.status.clone(),
            ]
        })
        .collect();
    render_table(&["ID", "Name", "Industry", "Email", "City", "Status"], &rows)
}

fn render_company_staff(rows: &[CompanyStaffRecord]) -> String {
    if rows.is_empty() {
        return "No staff found.".to_string();
    }
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                format!("{} {}", s.first_name, s.last_name),
                s.employee_code.clone(),
                s.department.clone(),
                s.designation.clone(),
                s.status.to_string(),
            ]
        })
        .collect();
    render_table(
        &["ID", "Name", "Code", "Department", "Designation", "Status"],
        &rows,
    )
}

fn render_entities(rows: &[EntityRecord]) -> String {
    if rows.is_empty() {
        return "No records found.".to_string();
    }
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.name.clone(),
                e.email.clone(),
                e.phone.clone(),
                e.status.clone(),
                format_timestamp(&e.created_at),
            ]
        })
        .collect();
    render_table(&["ID", "Name", "Email", "Phone", "Status", "Created"], &rows)
}
