use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Collections served by the generic entity endpoints (`/staff`, `/candidate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Staff,
    Candidate,
}

impl EntityKind {
    pub fn path_segment(&self) -> &'static str {
        match self {
            EntityKind::Staff => "staff",
            EntityKind::Candidate => "candidate",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staff" => Ok(EntityKind::Staff),
            "candidate" => Ok(EntityKind::Candidate),
            other => Err(format!("unknown entity kind '{other}' (expected staff or candidate)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub created_at: String,
}

/// An [`EntityRecord`] without the server-assigned fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
}
