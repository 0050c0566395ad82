use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::EntityKind;
use crate::routes::{self, Navigation, Route};
use crate::state::AppState;
use crate::views::{self, applications, legacy, profile, sign_in, vacancies, ViewOutcome};

/// Terminal console for company staff: profile, vacancies and applications.
#[derive(Parser, Debug)]
#[command(name = "staff-console", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in with staff credentials and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "STAFF_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Navigate to a console path such as /staff-vacancies
    Open { path: String },
    /// Show the staff profile
    Profile,
    #[command(subcommand)]
    Vacancies(VacancyCommand),
    #[command(subcommand)]
    Applications(ApplicationCommand),
    #[command(subcommand, hide = true)]
    Legacy(LegacyCommand),
}

/// Manage job vacancies
#[derive(Subcommand, Debug)]
pub enum VacancyCommand {
    List,
    /// Create a vacancy; unset fields keep the form defaults
    Create(FormArgs),
    /// Update a vacancy; unset fields keep their current values
    Update {
        id: i64,
        #[command(flatten)]
        form: FormArgs,
    },
}

/// Review candidate applications
#[derive(Subcommand, Debug)]
pub enum ApplicationCommand {
    List {
        /// Matches job title, candidate name, candidate email or status
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the manual override history of an application
    History { id: i64 },
    /// Print the report PDF link, or download it with --output
    ReportPdf {
        id: i64,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum LegacyCommand {
    Companies,
    RegisterCompany(FormArgs),
    UpdateCompany {
        id: i64,
        #[command(flatten)]
        form: FormArgs,
    },
    Staff,
    CreateStaff {
        #[command(flatten)]
        form: FormArgs,
        #[arg(long, env = "STAFF_CONFIRM_PASSWORD", hide_env_values = true)]
        confirm_password: Option<String>,
    },
    UpdateStaff {
        id: i64,
        #[command(flatten)]
        form: FormArgs,
        #[arg(long, env = "STAFF_CONFIRM_PASSWORD", hide_env_values = true)]
        confirm_password: Option<String>,
    },
    Entities { kind: EntityKind },
    CreateEntity {
        kind: EntityKind,
        #[command(flatten)]
        form: FormArgs,
    },
}

/// Form input: an optional JSON object file, then `--set key=value` edits.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// JSON file with an object of form fields
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Set one field; the value is read as JSON and falls back to a plain string
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, Value)>,
}

impl FormArgs {
    pub fn fields(&self) -> Result<Value, AppError> {
        let mut fields = match &self.file {
            Some(path) => read_form_file(path)?,
            None => Map::new(),
        };
        for (key, value) in &self.set {
            fields.insert(key.clone(), value.clone());
        }
        Ok(Value::Object(fields))
    }
}

fn read_form_file(path: &Path) -> Result<Map<String, Value>, AppError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Input(format!("{}: {e}", path.display())))?;
    match serde_json::from_str(&raw) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(AppError::Input(format!(
            "{}: expected a JSON object",
            path.display()
        ))),
        Err(e) => Err(AppError::Input(format!("{}: {e}", path.display()))),
    }
}

pub fn parse_assignment(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    let value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

impl Command {
    /// Console page a command belongs to, if it is behind the guard.
    pub fn route(&self) -> Option<Route> {
        match self {
            Command::Profile => Some(Route::StaffProfile),
            Command::Vacancies(_) => Some(Route::StaffVacancies),
            Command::Applications(_) => Some(Route::StaffApplications),
            _ => None,
        }
    }

    pub async fn execute(self, state: &AppState) -> ViewOutcome {
        if let Some(route) = self.route() {
            if let Navigation::Redirect(to) = routes::guard(route, &state.session) {
                return ViewOutcome::Navigate {
                    to,
                    notice: Some("Sign in to continue.".to_string()),
                };
            }
        }

        match self {
            Command::Login { email, password } => sign_in::sign_in(state, &email, &password).await,
            Command::Logout => sign_in::sign_out(state),
            Command::Whoami => sign_in::who_am_i(state),
            Command::Open { path } => views::open(state, &path).await,
            Command::Profile => profile::show_profile(state).await,
            Command::Vacancies(cmd) => cmd.execute(state).await,
            Command::Applications(cmd) => cmd.execute(state).await,
            Command::Legacy(cmd) => cmd.execute(state).await,
        }
    }
}

impl VacancyCommand {
    async fn execute(self, state: &AppState) -> ViewOutcome {
        let (editing, form) = match self {
            VacancyCommand::List => return vacancies::list_vacancies(state).await,
            VacancyCommand::Create(form) => (None, form),
            VacancyCommand::Update { id, form } => (Some(id), form),
        };
        match form.fields() {
            Ok(fields) => vacancies::save_vacancy(state, editing, &fields).await,
            Err(e) => ViewOutcome::from_error(e, "Unable to save vacancy"),
        }
    }
}

impl ApplicationCommand {
    async fn execute(self, state: &AppState) -> ViewOutcome {
        match self {
            ApplicationCommand::List { search } => {
                applications::list_applications(state, search.as_deref()).await
            }
            ApplicationCommand::History { id } => applications::override_history(state, id).await,
            ApplicationCommand::ReportPdf { id, output } => {
                applications::report_pdf(state, id, output.as_deref()).await
            }
        }
    }
}

impl LegacyCommand {
    async fn execute(self, state: &AppState) -> ViewOutcome {
        match self {
            LegacyCommand::Companies => legacy::list_companies(state).await,
            LegacyCommand::RegisterCompany(form) => match form.fields() {
                Ok(fields) => legacy::save_company(state, None, &fields).await,
                Err(e) => ViewOutcome::from_error(e, "Unable to save company"),
            },
            LegacyCommand::UpdateCompany { id, form } => match form.fields() {
                Ok(fields) => legacy::save_company(state, Some(id), &fields).await,
                Err(e) => ViewOutcome::from_error(e, "Unable to save company"),
            },
            LegacyCommand::Staff => legacy::list_company_staff(state).await,
            LegacyCommand::CreateStaff {
                form,
                confirm_password,
            } => match form.fields() {
                Ok(fields) => {
                    legacy::save_company_staff(state, None, &fields, confirm_password.as_deref())
                        .await
                }
                Err(e) => ViewOutcome::from_error(e, "Unable to save staff"),
            },
            LegacyCommand::UpdateStaff {
                id,
                form,
                confirm_password,
            } => match form.fields() {
                Ok(fields) => {
                    legacy::save_company_staff(
                        state,
                        Some(id),
                        &fields,
                        confirm_password.as_deref(),
                    )
                    .await
                }
                Err(e) => ViewOutcome::from_error(e, "Unable to save staff"),
            },
            LegacyCommand::Entities { kind } => legacy::list_entities(state, kind).await,
            LegacyCommand::CreateEntity { kind, form } => match form.fields() {
                Ok(fields) => legacy::create_entity(state, kind, &fields).await,
                Err(e) => ViewOutcome::from_error(e, "Unable to save data"),
            },
        }
    }
}
