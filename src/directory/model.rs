//! Employee directory data model.
//!
//! Field names serialize in camelCase so a persisted blob keeps the shape
//! `{ "employees": [...], "ui": { "searchTerm", "currentPage", "viewMode" } }`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mvi::StoreState;

/// Returned when a textual value names no known enumeration variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Opaque unique employee identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier for a record about to be added.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Analytics,
    Tech,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Tech => "Tech",
        }
    }

    pub fn all() -> &'static [Department] {
        &[Self::Analytics, Self::Tech]
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Department {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                kind: "department",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Medior => "Medior",
            Self::Senior => "Senior",
        }
    }

    pub fn all() -> &'static [Position] {
        &[Self::Junior, Self::Medior, Self::Senior]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Position {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant {
                kind: "position",
                value: s.to_string(),
            })
    }
}

/// One row in the directory.
///
/// Dates are kept as DD/MM/YYYY text; validating them is the job of the
/// form layer, not of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Layout used by the list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    #[serde(alias = "grid")]
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "list" | "grid" => Ok(Self::List),
            _ => Err(UnknownVariant {
                kind: "view mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Transient view-level state, independent of any employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Free-text filter; empty means no filter.
    pub search_term: String,
    /// 1-based. Not clamped here; the listing projection clamps.
    pub current_page: u32,
    pub view_mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: 1,
            view_mode: ViewMode::Table,
        }
    }
}

impl StoreState for ViewState {}

impl StoreState for Vec<Employee> {}

/// Root aggregate and the only unit of truth.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationState {
    pub employees: Vec<Employee>,
    pub ui: ViewState,
}

impl StoreState for ApplicationState {}

impl ApplicationState {
    pub fn find_employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }
}
