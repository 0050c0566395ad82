use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::lenient::{f64_lenient, i64_lenient, option_f64_lenient};

// Every stage enum keeps values it does not recognise in `Other`, verbatim.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningResult {
    Passed,
    Rejected,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum McqStatus {
    NotRequired,
    Pending,
    Passed,
    Failed,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticalRoundStatus {
    NotEligible,
    Eligible,
    Completed,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticalStatus {
    NotStarted,
    InProgress,
    Passed,
    Failed,
    Timeout,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    UnderReview,
    Shortlisted,
    Rejected,
    Hired,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for ScreeningResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScreeningResult::Passed => "passed",
            ScreeningResult::Rejected => "rejected",
            ScreeningResult::Other(raw) => raw.as_str(),
        })
    }
}

impl fmt::Display for McqStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            McqStatus::NotRequired => "not_required",
            McqStatus::Pending => "pending",
            McqStatus::Passed => "passed",
            McqStatus::Failed => "failed",
            McqStatus::Other(raw) => raw.as_str(),
        })
    }
}

impl fmt::Display for PracticalRoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PracticalRoundStatus::NotEligible => "not_eligible",
            PracticalRoundStatus::Eligible => "eligible",
            PracticalRoundStatus::Completed => "completed",
            PracticalRoundStatus::Other(raw) => raw.as_str(),
        })
    }
}

impl fmt::Display for PracticalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PracticalStatus::NotStarted => "not_started",
            PracticalStatus::InProgress => "in_progress",
            PracticalStatus::Passed => "passed",
            PracticalStatus::Failed => "failed",
            PracticalStatus::Timeout => "timeout",
            PracticalStatus::Other(raw) => raw.as_str(),
        })
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
            ApplicationStatus::Other(raw) => raw.as_str(),
        })
    }
}

/// A candidate's application against one of the caller's vacancies, with the
/// results the server computed for each hiring stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: i64,
    pub vacancy_id: i64,
    pub company_id: i64,
    pub candidate_id: i64,
    pub resume_path: String,
    pub cover_letter: Option<String>,
    #[serde(deserialize_with = "f64_lenient")]
    pub match_percentage: f64,
    #[serde(deserialize_with = "f64_lenient")]
    pub match_threshold: f64,
    pub screening_result: ScreeningResult,
    pub screening_notes: Option<String>,
    /// 0 or 1 on the wire.
    #[serde(deserialize_with = "i64_lenient")]
    pub mcq_required: i64,
    #[serde(deserialize_with = "i64_lenient")]
    pub mcq_total_questions: i64,
    #[serde(deserialize_with = "i64_lenient")]
    pub mcq_correct_answers: i64,
    #[serde(deserialize_with = "f64_lenient")]
    pub mcq_score_percentage: f64,
    #[serde(deserialize_with = "f64_lenient")]
    pub mcq_pass_threshold: f64,
    pub mcq_status: McqStatus,
    pub practical_round_status: PracticalRoundStatus,
    #[serde(default)]
    pub practical_status: Option<PracticalStatus>,
    #[serde(default, deserialize_with = "option_f64_lenient")]
    pub practical_score_percentage: Option<f64>,
    #[serde(default, deserialize_with = "option_f64_lenient")]
    pub practical_pass_threshold: Option<f64>,
    #[serde(default)]
    pub practical_report_notes: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: String,
    pub job_title: String,
    pub department: String,
    pub employment_type: String,
    pub company_name: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub candidate_phone: String,
}

impl ApplicationRecord {
    pub fn mcq_is_required(&self) -> bool {
        self.mcq_required != 0
    }
}

/// One manual status change applied by an administrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideHistoryItem {
    pub id: i64,
    pub previous_status: Option<String>,
    pub new_status: String,
    #[serde(default)]
    pub override_category: Option<String>,
    pub override_note: String,
    pub created_at: String,
    pub admin_name: String,
    pub admin_email: String,
}

/// Detailed report for one application (`GET /staff/applications/{id}/report`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationReport {
    pub application: ApplicationRecord,
    /// Question payloads are server-defined and shown as-is.
    #[serde(default)]
    pub mcq_questions: Vec<serde_json::Map<String, Value>>,
    #[serde(default)]
    pub override_history: Vec<OverrideHistoryItem>,
}
