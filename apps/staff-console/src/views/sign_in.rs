use tracing::info;

use crate::api_client::endpoints;
use crate::errors::AppError;
use crate::routes::Route;
use crate::state::AppState;
use crate::views::ViewOutcome;

const SIGN_IN_FAILED: &str = "Sign in failed";

/// Exchanges credentials for a session, stores it and moves to the profile page.
pub async fn sign_in(state: &AppState, email: &str, password: &str) -> ViewOutcome {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return ViewOutcome::from_error(
            AppError::Validation("Email and password are required".to_string()),
            SIGN_IN_FAILED,
        );
    }

    let session = match endpoints::login_staff(&state.api, email, password).await {
        Ok(session) => session,
        Err(e) => return ViewOutcome::from_error(e, SIGN_IN_FAILED),
    };

    if let Err(e) = state.session.save(&session) {
        return ViewOutcome::from_error(e, SIGN_IN_FAILED);
    }

    info!("Signed in as user id={}", session.user.id);
    ViewOutcome::Navigate {
        to: Route::StaffProfile,
        notice: Some(format!("Signed in as {}.", display_name(&session.user.full_name))),
    }
}

/// Drops the stored session and returns to the sign-in page.
pub fn sign_out(state: &AppState) -> ViewOutcome {
    match state.session.clear() {
        Ok(()) => ViewOutcome::Navigate {
            to: Route::SignIn,
            notice: Some("Signed out.".to_string()),
        },
        Err(e) => ViewOutcome::from_error(e, "Sign out failed"),
    }
}

/// Header summary of the signed-in user.
pub fn who_am_i(state: &AppState) -> ViewOutcome {
    match state.session.load() {
        Some(session) => ViewOutcome::Page(format!(
            "{}\n{}",
            display_name(&session.user.full_name),
            if session.user.email.is_empty() {
                "-"
            } else {
                session.user.email.as_str()
            }
        )),
        None => ViewOutcome::Navigate {
            to: Route::SignIn,
            notice: Some("Not signed in.".to_string()),
        },
    }
}

fn display_name(full_name: &str) -> &str {
    if full_name.trim().is_empty() {
        "Staff User"
    } else {
        full_name
    }
}
