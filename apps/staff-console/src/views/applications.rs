use std::path::Path;

use tracing::{info, warn};

use crate::api_client::endpoints;
use crate::errors::AppError;
use crate::models::{ApplicationRecord, OverrideHistoryItem};
use crate::state::AppState;
use crate::views::{format_timestamp, render_table, ViewOutcome};

const DEFAULT_PRACTICAL_PASS_THRESHOLD: f64 = 70.0;

pub async fn list_applications(state: &AppState, search: Option<&str>) -> ViewOutcome {
    let rows = match endpoints::staff_applications(&state.api).await {
        Ok(rows) => rows,
        Err(e) => return ViewOutcome::from_error(e, "Unable to load applications"),
    };

    let filtered = filter_applications(&rows, search.unwrap_or_default());
    ViewOutcome::Page(render_applications(&filtered, state.config.api_origin()))
}

/// Case-insensitive substring match over job title, candidate name, candidate
/// email and status. A blank term keeps every row.
pub fn filter_applications<'a>(
    rows: &'a [ApplicationRecord],
    term: &str,
) -> Vec<&'a ApplicationRecord> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return rows.iter().collect();
    }

    rows.iter()
        .filter(|r| {
            let status = r.status.to_string();
            [
                r.job_title.as_str(),
                r.candidate_name.as_str(),
                r.candidate_email.as_str(),
                status.as_str(),
            ]
            .join(" ")
            .to_lowercase()
            .contains(&term)
        })
        .collect()
}

pub fn match_summary(app: &ApplicationRecord) -> String {
    format!("{:.2}% / {:.0}%", app.match_percentage, app.match_threshold)
}

pub fn mcq_summary(app: &ApplicationRecord) -> String {
    if !app.mcq_is_required() {
        return "Not required".to_string();
    }
    format!(
        "{} ({}/{}, {:.2}% / {:.0}%)",
        app.mcq_status,
        app.mcq_correct_answers,
        app.mcq_total_questions,
        app.mcq_score_percentage,
        app.mcq_pass_threshold
    )
}

/// A missing or zero pass threshold shows as the default of 70.
pub fn practical_summary(app: &ApplicationRecord) -> String {
    match &app.practical_status {
        Some(status) => format!(
            "{status} ({:.2}% / {:.0}%)",
            app.practical_score_percentage.unwrap_or(0.0),
            app.practical_pass_threshold
                .filter(|t| *t != 0.0)
                .unwrap_or(DEFAULT_PRACTICAL_PASS_THRESHOLD)
        ),
        None => app.practical_round_status.to_string(),
    }
}

fn screening_summary(app: &ApplicationRecord) -> String {
    match app.screening_notes.as_deref() {
        Some(notes) if !notes.is_empty() => format!("{} ({notes})", app.screening_result),
        _ => app.screening_result.to_string(),
    }
}

pub fn render_applications(rows: &[&ApplicationRecord], api_origin: &str) -> String {
    if rows.is_empty() {
        return "No applications found.".to_string();
    }

    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.job_title.clone(),
                format!("{} <{}>", r.candidate_name, r.candidate_email),
                format_timestamp(&r.applied_at),
                format!("{api_origin}{}", r.resume_path),
                match_summary(r),
                screening_summary(r),
                mcq_summary(r),
                practical_summary(r),
                r.status.to_string(),
            ]
        })
        .collect();

    render_table(
        &[
            "ID",
            "Job",
            "Candidate",
            "Applied On",
            "Resume",
            "Match",
            "Screening",
            "MCQ",
            "Practical",
            "Status",
        ],
        &table_rows,
    )
}

/// Audit trail of manual status overrides for one application.
pub async fn override_history(state: &AppState, application_id: i64) -> ViewOutcome {
    match endpoints::staff_application_report(&state.api, application_id).await {
        Ok(report) => ViewOutcome::Page(format!(
            "Override History\nApplication ID: {application_id}\n\n{}",
            render_override_history(&report.override_history)
        )),
        Err(e) => ViewOutcome::from_error(e, "Unable to load report details"),
    }
}

pub fn render_override_history(items: &[OverrideHistoryItem]) -> String {
    if items.is_empty() {
        return "No override history.".to_string();
    }

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                format_timestamp(&item.created_at),
                format!("{} <{}>", item.admin_name, item.admin_email),
                format!(
                    "{} to {}",
                    item.previous_status
                        .as_deref()
                        .filter(|s| !s.is_empty())
                        .unwrap_or("-"),
                    item.new_status
                ),
                item.override_category
                    .clone()
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| "other".to_string()),
                item.override_note.clone(),
            ]
        })
        .collect();

    render_table(&["When", "Admin", "Change", "Category", "Reason"], &rows)
}

/// Prints the PDF link, or downloads the PDF to `output` when given.
pub async fn report_pdf(state: &AppState, application_id: i64, output: Option<&Path>) -> ViewOutcome {
    let Some(output) = output else {
        let url = endpoints::staff_application_report_pdf_url(&state.api, application_id);
        warn!("Printing a report link that embeds the session token");
        return ViewOutcome::Page(format!(
            "{url}\n\nThis link contains your session token. Do not share it."
        ));
    };

    match save_pdf(state, application_id, output).await {
        Ok(size) => ViewOutcome::Page(format!(
            "Saved report for application {application_id} to {} ({size} bytes).",
            output.display()
        )),
        Err(e) => ViewOutcome::from_error(e, "Unable to download report"),
    }
}

async fn save_pdf(state: &AppState, application_id: i64, output: &Path) -> Result<usize, AppError> {
    let bytes =
        endpoints::download_staff_application_report_pdf(&state.api, application_id).await?;
    tokio::fs::write(output, &bytes)
        .await
        .map_err(|e| AppError::Input(format!("{}: {e}", output.display())))?;
    info!("Wrote {} bytes to {}", bytes.len(), output.display());
    Ok(bytes.len())
}
