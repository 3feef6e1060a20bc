//! Action vocabulary for the employee directory store.

use serde::{Deserialize, Serialize};

use super::model::{Employee, EmployeeId, ViewMode};
use crate::mvi::Action;

/// Every kind the directory reducers understand.
///
/// The `as_str()` value is the wire name used in serialized actions; once
/// published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    AddEmployee,
    UpdateEmployee,
    DeleteEmployee,
    SetSearchTerm,
    SetCurrentPage,
    SetViewMode,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddEmployee => "ADD_EMPLOYEE",
            Self::UpdateEmployee => "UPDATE_EMPLOYEE",
            Self::DeleteEmployee => "DELETE_EMPLOYEE",
            Self::SetSearchTerm => "SET_SEARCH_TERM",
            Self::SetCurrentPage => "SET_CURRENT_PAGE",
            Self::SetViewMode => "SET_VIEW_MODE",
        }
    }

    pub fn all() -> &'static [ActionKind] {
        &[
            Self::AddEmployee,
            Self::UpdateEmployee,
            Self::DeleteEmployee,
            Self::SetSearchTerm,
            Self::SetCurrentPage,
            Self::SetViewMode,
        ]
    }

    /// Parse from wire name. Unknown names return `None` (forward compat).
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == s)
    }
}

/// An immutable `{ kind, payload }` record.
///
/// Serialized actions that carry a kind outside the vocabulary deserialize
/// to [`DirectoryAction::Unknown`], which every reducer ignores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    try_from = "RawAction"
)]
pub enum DirectoryAction {
    AddEmployee(Employee),
    /// Replaces the record with the same id wholesale.
    UpdateEmployee(Employee),
    /// Payload is the bare id, not a record.
    DeleteEmployee(EmployeeId),
    SetSearchTerm(String),
    SetCurrentPage(u32),
    SetViewMode(ViewMode),
    Unknown,
}

/// Wire shape before the kind is resolved against the vocabulary.
#[derive(Deserialize)]
struct RawAction {
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

impl TryFrom<RawAction> for DirectoryAction {
    type Error = serde_json::Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let Some(kind) = ActionKind::parse(&raw.kind) else {
            return Ok(Self::Unknown);
        };
        let payload = raw.payload;
        Ok(match kind {
            ActionKind::AddEmployee => Self::AddEmployee(serde_json::from_value(payload)?),
            ActionKind::UpdateEmployee => Self::UpdateEmployee(serde_json::from_value(payload)?),
            ActionKind::DeleteEmployee => Self::DeleteEmployee(serde_json::from_value(payload)?),
            ActionKind::SetSearchTerm => Self::SetSearchTerm(serde_json::from_value(payload)?),
            ActionKind::SetCurrentPage => Self::SetCurrentPage(serde_json::from_value(payload)?),
            ActionKind::SetViewMode => Self::SetViewMode(serde_json::from_value(payload)?),
        })
    }
}

impl DirectoryAction {
    /// `None` for [`DirectoryAction::Unknown`].
    pub fn kind(&self) -> Option<ActionKind> {
        match self {
            Self::AddEmployee(_) => Some(ActionKind::AddEmployee),
            Self::UpdateEmployee(_) => Some(ActionKind::UpdateEmployee),
            Self::DeleteEmployee(_) => Some(ActionKind::DeleteEmployee),
            Self::SetSearchTerm(_) => Some(ActionKind::SetSearchTerm),
            Self::SetCurrentPage(_) => Some(ActionKind::SetCurrentPage),
            Self::SetViewMode(_) => Some(ActionKind::SetViewMode),
            Self::Unknown => None,
        }
    }
}

impl Action for DirectoryAction {
    fn kind_name(&self) -> &'static str {
        self.kind().map(|k| k.as_str()).unwrap_or("UNKNOWN")
    }
}

pub fn add_employee(employee: Employee) -> DirectoryAction {
    DirectoryAction::AddEmployee(employee)
}

pub fn update_employee(employee: Employee) -> DirectoryAction {
    DirectoryAction::UpdateEmployee(employee)
}

pub fn delete_employee(id: impl Into<EmployeeId>) -> DirectoryAction {
    DirectoryAction::DeleteEmployee(id.into())
}

pub fn set_search_term(term: impl Into<String>) -> DirectoryAction {
    DirectoryAction::SetSearchTerm(term.into())
}

pub fn set_current_page(page: u32) -> DirectoryAction {
    DirectoryAction::SetCurrentPage(page)
}

pub fn set_view_mode(mode: ViewMode) -> DirectoryAction {
    DirectoryAction::SetViewMode(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_names_round_trip_through_parse() {
        for kind in ActionKind::all() {
            assert_eq!(ActionKind::parse(kind.as_str()), Some(*kind));
        }
        assert_eq!(ActionKind::parse("RESET_EVERYTHING"), None);
    }

    #[test]
    fn constructors_tag_the_payload() {
        assert_eq!(
            delete_employee("1"),
            DirectoryAction::DeleteEmployee(EmployeeId::new("1"))
        );
        assert_eq!(set_current_page(2).kind(), Some(ActionKind::SetCurrentPage));
        assert_eq!(set_search_term("John").kind_name(), "SET_SEARCH_TERM");
        assert_eq!(set_view_mode(ViewMode::List).kind_name(), "SET_VIEW_MODE");
    }

    #[test]
    fn serialized_form_is_kind_and_payload() {
        let value = serde_json::to_value(set_search_term("jane")).unwrap();
        assert_eq!(value, json!({ "kind": "SET_SEARCH_TERM", "payload": "jane" }));

        let value = serde_json::to_value(delete_employee("emp-3")).unwrap();
        assert_eq!(value, json!({ "kind": "DELETE_EMPLOYEE", "payload": "emp-3" }));
    }

    #[test]
    fn unrecognized_kind_deserializes_to_unknown() {
        let action: DirectoryAction =
            serde_json::from_value(json!({ "kind": "TOGGLE_THEME", "payload": "dark" })).unwrap();
        assert_eq!(action, DirectoryAction::Unknown);
        assert_eq!(action.kind(), None);
        assert_eq!(action.kind_name(), "UNKNOWN");
    }

    #[test]
    fn known_kind_with_wrong_payload_is_rejected() {
        let result: Result<DirectoryAction, _> =
            serde_json::from_value(json!({ "kind": "SET_CURRENT_PAGE", "payload": "two" }));
        assert!(result.is_err());
    }

    #[test]
    fn known_kind_deserializes_with_payload() {
        let action: DirectoryAction =
            serde_json::from_value(json!({ "kind": "SET_VIEW_MODE", "payload": "list" })).unwrap();
        assert_eq!(action, set_view_mode(ViewMode::List));
    }
}
