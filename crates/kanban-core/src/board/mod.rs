//! Board reducer.
//!
//! `reduce` is the only way the board state changes. It is total: an
//! unknown action or an `ADD_TASK` aimed at a missing list yields the
//! input state unchanged.

pub mod model;

pub use model::{Action, AppState, Identified, List, Task};

use crate::error::{BoardError, BoardResult};
use uuid::Uuid;

/// Source of fresh ids for new lists and tasks.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<F: FnMut() -> String> IdSource for F {
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Apply an action using random UUID ids.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    reduce_with(state, action, &mut UuidIds)
}

/// Apply an action, drawing new ids from `ids`.
pub fn reduce_with(state: &AppState, action: &Action, ids: &mut impl IdSource) -> AppState {
    match action {
        Action::AddList(text) => {
            let mut next = state.clone();
            let id = fresh_id(&state.lists, ids);
            next.lists.push(List {
                id,
                text: text.clone(),
                tasks: Vec::new(),
            });
            next
        }
        Action::AddTask { text, list_id } => {
            let Some(index) = find_item_index_by_id(&state.lists, list_id) else {
                return state.clone();
            };

            let mut next = state.clone();
            let list = &mut next.lists[index];
            let id = fresh_id(&list.tasks, ids);
            list.tasks.push(Task {
                id,
                text: text.clone(),
            });
            next
        }
        Action::Unknown(_) => state.clone(),
    }
}

/// Index of the first item with the given id.
pub fn find_item_index_by_id<T: Identified>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Look up a list, surfacing a miss as an error.
pub fn find_list<'a>(state: &'a AppState, list_id: &str) -> BoardResult<&'a List> {
    find_item_index_by_id(&state.lists, list_id)
        .map(|i| &state.lists[i])
        .ok_or_else(|| BoardError::ListNotFound(list_id.to_string()))
}

/// Decode a JSON array of actions.
pub fn parse_actions(text: &str) -> BoardResult<Vec<Action>> {
    Ok(serde_json::from_str(text)?)
}

/// Trim user-entered text, rejecting blanks.
pub fn validate_text(text: &str) -> BoardResult<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BoardError::validation("text must not be empty"));
    }
    Ok(trimmed.to_string())
}

// Re-draws with a numeric suffix so a repeating source still yields unique ids.
fn fresh_id<T: Identified>(items: &[T], ids: &mut impl IdSource) -> String {
    let base = ids.next_id();
    let mut candidate = base.clone();
    let mut n = 1;
    while find_item_index_by_id(items, &candidate).is_some() {
        candidate = format!("{}-{}", base, n);
        n += 1;
    }
    candidate
}
