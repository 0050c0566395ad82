//! Pages of the staff console. Each view performs one request-then-render
//! cycle and reports the outcome as a value; failures are shown inline and
//! never abort the process.

use chrono::{DateTime, Local};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::routes::{self, Route};
use crate::state::AppState;

pub mod applications;
pub mod legacy;
pub mod profile;
pub mod sign_in;
pub mod vacancies;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutcome {
    /// Rendered page content.
    Page(String),
    /// The action succeeded and the console moves to `to`.
    Navigate { to: Route, notice: Option<String> },
    /// Inline error for the action that was attempted.
    Error(String),
}

impl ViewOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, ViewOutcome::Error(_))
    }

    pub fn from_error(err: impl Into<AppError>, fallback: &str) -> Self {
        ViewOutcome::Error(error_message(&err.into(), fallback))
    }
}

/// Navigates to a console path through the route guard and renders the page
/// it lands on.
pub async fn open(state: &AppState, path: &str) -> ViewOutcome {
    match routes::resolve(Route::parse(path), &state.session) {
        Route::SignIn => ViewOutcome::Page(
            "Sign In\n\nRun `staff-console login --email <email>` to sign in.".to_string(),
        ),
        Route::StaffProfile | Route::Index => profile::show_profile(state).await,
        Route::StaffVacancies => vacancies::list_vacancies(state).await,
        Route::StaffApplications => applications::list_applications(state, None).await,
        Route::NotFound => ViewOutcome::Error(format!("Page not found: {}", path.trim())),
    }
}

/// Message to show for a failed action; `fallback` covers errors that carry
/// no text of their own.
pub fn error_message(err: &AppError, fallback: &str) -> String {
    let message = err.user_message();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Applies the top-level keys of `patch` on top of `base`, the way a form
/// pre-filled from `base` would be edited field by field.
pub fn apply_overlay<T>(base: &T, patch: &Value) -> Result<T, AppError>
where
    T: Serialize + DeserializeOwned,
{
    let fields = match patch {
        Value::Object(fields) => fields,
        Value::Null => return serde_json::from_value(to_form(base)?).map_err(invalid_form),
        _ => {
            return Err(AppError::Validation(
                "Form input must be a JSON object".to_string(),
            ))
        }
    };

    let mut form = to_form(base)?;
    if let Value::Object(current) = &mut form {
        for (key, value) in fields {
            current.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(form).map_err(invalid_form)
}

fn to_form<T: Serialize>(base: &T) -> Result<Value, AppError> {
    serde_json::to_value(base).map_err(invalid_form)
}

fn invalid_form(e: serde_json::Error) -> AppError {
    AppError::Validation(format!("Invalid form value: {e}"))
}

/// Renders a server timestamp in local time, or returns it unchanged if it is
/// not RFC 3339.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Left-aligned plain-text table with a header rule.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(headers.to_vec()));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&line(rule.iter().map(String::as_str).collect()));
    for row in rows {
        out.push('\n');
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}

/// `Label: value` lines with labels padded to a common width.
pub fn render_details(pairs: &[(&str, String)]) -> String {
    let width = pairs.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0) + 1;
    pairs
        .iter()
        .map(|(label, value)| format!("{:<width$} {value}", format!("{label}:")))
        .collect::<Vec<_>>()
        .join("\n")
}
