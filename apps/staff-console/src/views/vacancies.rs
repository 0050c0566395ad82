use serde_json::Value;
use tracing::info;

use crate::api_client::endpoints;
use crate::errors::AppError;
use crate::models::{VacancyPayload, VacancyRecord};
use crate::state::AppState;
use crate::views::{apply_overlay, render_table, ViewOutcome};

const LOAD_FAILED: &str = "Unable to load vacancies";
const SAVE_FAILED: &str = "Unable to save vacancy";

pub async fn list_vacancies(state: &AppState) -> ViewOutcome {
    match endpoints::staff_vacancies(&state.api).await {
        Ok(vacancies) => ViewOutcome::Page(render_vacancies(&vacancies)),
        Err(e) => ViewOutcome::from_error(e, LOAD_FAILED),
    }
}

/// Creates a vacancy from the blank form with `fields` filled in, or updates
/// vacancy `editing` with `fields` applied over its current values. The list
/// is reloaded afterwards.
pub async fn save_vacancy(state: &AppState, editing: Option<i64>, fields: &Value) -> ViewOutcome {
    let result = match editing {
        Some(id) => update(state, id, fields).await,
        None => create(state, fields).await,
    };

    let notice = match result {
        Ok(notice) => notice,
        Err(e) => return ViewOutcome::from_error(e, SAVE_FAILED),
    };

    match endpoints::staff_vacancies(&state.api).await {
        Ok(vacancies) => ViewOutcome::Page(format!("{notice}\n\n{}", render_vacancies(&vacancies))),
        Err(e) => ViewOutcome::from_error(e, LOAD_FAILED),
    }
}

async fn create(state: &AppState, fields: &Value) -> Result<String, AppError> {
    let payload: VacancyPayload = apply_overlay(&VacancyPayload::default(), fields)?;
    validate(&payload)?;

    let created = endpoints::create_staff_vacancy(&state.api, &payload).await?;
    info!("Created vacancy id={}", created.id);
    Ok("Vacancy created successfully.".to_string())
}

async fn update(state: &AppState, id: i64, fields: &Value) -> Result<String, AppError> {
    let vacancies = endpoints::staff_vacancies(&state.api).await?;
    let existing = vacancies
        .iter()
        .find(|v| v.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Vacancy {id} not found")))?;

    let payload: VacancyPayload = apply_overlay(&VacancyPayload::from(existing), fields)?;
    validate(&payload)?;

    endpoints::update_staff_vacancy(&state.api, id, &payload).await?;
    info!("Updated vacancy id={id}");
    Ok("Vacancy updated successfully.".to_string())
}

/// Required fields of the vacancy form.
pub fn validate(payload: &VacancyPayload) -> Result<(), AppError> {
    let required = [
        ("job_title", &payload.job_title),
        ("department", &payload.department),
        ("description", &payload.description),
        ("requirements", &payload.requirements),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required field(s): {}",
            missing.join(", ")
        )));
    }
    if payload.openings < 1 {
        return Err(AppError::Validation("Openings must be at least 1".to_string()));
    }
    Ok(())
}

pub fn render_vacancies(vacancies: &[VacancyRecord]) -> String {
    if vacancies.is_empty() {
        return "No vacancies found.".to_string();
    }

    let rows: Vec<Vec<String>> = vacancies
        .iter()
        .map(|v| {
            vec![
                v.id.to_string(),
                v.job_title.clone(),
                v.department.clone(),
                v.employment_type.to_string(),
                v.openings.to_string(),
                format!("{:.0}%", v.match_threshold),
                v.status.to_string(),
                v.application_deadline
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .unwrap_or("-")
                    .to_string(),
            ]
        })
        .collect();

    render_table(
        &[
            "ID",
            "Title",
            "Department",
            "Type",
            "Openings",
            "Match %",
            "Status",
            "Deadline",
        ],
        &rows,
    )
}
