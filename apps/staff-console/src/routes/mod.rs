//! Route table and the guard in front of the staff section.

use std::fmt;

use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
    /// `/`, which immediately forwards to the profile page.
    Index,
    StaffProfile,
    StaffVacancies,
    StaffApplications,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "/signin" => Route::SignIn,
            "/" | "" => Route::Index,
            "/staff-profile" => Route::StaffProfile,
            "/staff-vacancies" => Route::StaffVacancies,
            "/staff-applications" => Route::StaffApplications,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/signin",
            Route::Index => "/",
            Route::StaffProfile => "/staff-profile",
            Route::StaffVacancies => "/staff-vacancies",
            Route::StaffApplications => "/staff-applications",
            Route::NotFound => "*",
        }
    }

    /// Everything under the staff layout needs a session; sign-in and the
    /// not-found page do not.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::SignIn | Route::NotFound)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Result of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    /// Replaces the attempted navigation; the original target is not kept.
    Redirect(Route),
}

/// Decides what a navigation to `route` actually shows.
///
/// Pure and synchronous: reads the session store, never the network.
pub fn guard(route: Route, session: &SessionStore) -> Navigation {
    if route.is_protected() && !session.is_authenticated() {
        return Navigation::Redirect(Route::SignIn);
    }

    match route {
        Route::Index => Navigation::Redirect(Route::StaffProfile),
        other => Navigation::Render(other),
    }
}

/// Follows redirects until a route renders.
pub fn resolve(route: Route, session: &SessionStore) -> Route {
    let mut current = route;
    // Every redirect lands on a non-Index route, so two hops always suffice.
    for _ in 0..3 {
        match guard(current, session) {
            Navigation::Render(rendered) => return rendered,
            Navigation::Redirect(next) => current = next,
        }
    }
    current
}
