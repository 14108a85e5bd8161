//! Board domain models.

use serde::{Deserialize, Serialize};

/// A single card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
}

/// A column of tasks, displayed in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub text: String,
    pub tasks: Vec<Task>,
}

/// The whole board state tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub lists: Vec<List>,
}

impl AppState {
    /// The starter board: three lists with one task each.
    pub fn sample() -> Self {
        let list = |id: &str, text: &str, task_id: &str, task_text: &str| List {
            id: id.to_string(),
            text: text.to_string(),
            tasks: vec![Task {
                id: task_id.to_string(),
                text: task_text.to_string(),
            }],
        };

        Self {
            lists: vec![
                list("0", "To do", "c0", "Generate app scaffold"),
                list("1", "In Progress", "c1", "Learn Typescript"),
                list("2", "Done", "c2", "Begin to use static typing"),
            ],
        }
    }

    /// Total number of tasks across all lists.
    pub fn task_count(&self) -> usize {
        self.lists.iter().map(|l| l.tasks.len()).sum()
    }
}

/// Anything addressable by an opaque id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for List {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Board actions.
///
/// Wire form is `{"type": "ADD_LIST", "payload": "text"}` or
/// `{"type": "ADD_TASK", "payload": {"text": "..", "listId": ".."}}`.
/// Any other `type` decodes to [`Action::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawAction")]
pub enum Action {
    AddList(String),
    AddTask { text: String, list_id: String },
    Unknown(String),
}

impl Action {
    /// The wire name of this action kind.
    pub fn kind(&self) -> &str {
        match self {
            Self::AddList(_) => "ADD_LIST",
            Self::AddTask { .. } => "ADD_TASK",
            Self::Unknown(kind) => kind.as_str(),
        }
    }
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

#[derive(Deserialize)]
struct AddTaskPayload {
    text: String,
    #[serde(rename = "listId")]
    list_id: String,
}

impl TryFrom<RawAction> for Action {
    type Error = serde_json::Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        match raw.kind.as_str() {
            "ADD_LIST" => Ok(Self::AddList(serde_json::from_value(raw.payload)?)),
            "ADD_TASK" => {
                let payload: AddTaskPayload = serde_json::from_value(raw.payload)?;
                Ok(Self::AddTask {
                    text: payload.text,
                    list_id: payload.list_id,
                })
            }
            _ => Ok(Self::Unknown(raw.kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_board() {
        let state = AppState::sample();
        assert_eq!(state.lists.len(), 3);
        assert_eq!(state.task_count(), 3);
        assert_eq!(state.lists[1].text, "In Progress");
        assert_eq!(state.lists[2].tasks[0].id, "c2");
    }

    #[test]
    fn test_state_json_shape() {
        let json = serde_json::to_value(AppState::sample()).unwrap();
        assert_eq!(json["lists"][0]["id"], "0");
        assert_eq!(json["lists"][0]["tasks"][0]["text"], "Generate app scaffold");
    }

    #[test]
    fn test_decode_add_list() {
        let action: Action =
            serde_json::from_str(r#"{"type":"ADD_LIST","payload":"Backlog"}"#).unwrap();
        assert_eq!(action, Action::AddList("Backlog".to_string()));
    }

    #[test]
    fn test_decode_add_task() {
        let action: Action = serde_json::from_str(
            r#"{"type":"ADD_TASK","payload":{"text":"write spec","listId":"0"}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::AddTask {
                text: "write spec".to_string(),
                list_id: "0".to_string(),
            }
        );
        assert_eq!(action.kind(), "ADD_TASK");
    }

    #[test]
    fn test_decode_unknown_kind() {
        let action: Action =
            serde_json::from_str(r#"{"type":"MOVE_TASK","payload":{"from":1,"to":2}}"#).unwrap();
        assert_eq!(action, Action::Unknown("MOVE_TASK".to_string()));

        let bare: Action = serde_json::from_str(r#"{"type":"RESET"}"#).unwrap();
        assert_eq!(bare.kind(), "RESET");
    }

    #[test]
    fn test_decode_malformed_payload() {
        let result: Result<Action, _> =
            serde_json::from_str(r#"{"type":"ADD_TASK","payload":"just text"}"#);
        assert!(result.is_err());
    }
}
