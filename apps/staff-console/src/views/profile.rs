use crate::api_client::endpoints;
use crate::models::StaffProfile;
use crate::state::AppState;
use crate::views::{render_details, ViewOutcome};

pub async fn show_profile(state: &AppState) -> ViewOutcome {
    match endpoints::staff_profile(&state.api).await {
        Ok(profile) => ViewOutcome::Page(render_profile(&profile)),
        Err(e) => ViewOutcome::from_error(e, "Unable to load staff profile"),
    }
}

pub fn render_profile(profile: &StaffProfile) -> String {
    let details = render_details(&[
        ("Name", profile.full_name()),
        ("Company", profile.company_name.clone()),
        ("Employee Code", profile.employee_code.clone()),
        ("Department", profile.department.clone()),
        ("Designation", profile.designation.clone()),
        ("Employment Type", profile.employment_type.to_string()),
        ("Email", profile.email.clone()),
        ("Phone", profile.phone.clone()),
        ("Alt. Phone", or_dash(profile.alternate_phone.as_deref())),
        ("Date of Joining", or_dash(Some(profile.date_of_joining.as_str()))),
        ("Experience (Years)", profile.experience_years.to_string()),
        ("Status", profile.status.to_string()),
        ("Emergency Contact", profile.emergency_contact_name.clone()),
        ("Emergency Phone", profile.emergency_contact_phone.clone()),
        ("Notes", or_dash(profile.notes.as_deref())),
    ]);
    format!("Staff Profile\n\n{details}")
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
