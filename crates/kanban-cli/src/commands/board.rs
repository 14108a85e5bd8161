//! Terminal board command.

use anyhow::{Context, Result};
use clap::Args;
use kanban_core::config::KanbanConfig;
use kanban_core::board;
use kanban_core::{reduce, Action, AppState};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output;

#[derive(Args)]
pub struct BoardArgs {
    /// JSON file holding an array of actions to apply to the seed board
    #[arg(long)]
    pub actions: Option<PathBuf>,

    /// Print the resulting state as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: BoardArgs, config: &KanbanConfig) -> Result<()> {
    let mut state = config.board.seed.initial_state();

    if let Some(path) = &args.actions {
        let actions = load_actions(path)?;
        debug!(count = actions.len(), path = %path.display(), "Replaying actions");
        state = replay(state, &actions);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        output::print_board(&config.board.title, &state);
    }

    Ok(())
}

/// Read a JSON array of actions.
fn load_actions(path: &Path) -> Result<Vec<Action>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read actions from {}", path.display()))?;
    board::parse_actions(&text)
        .with_context(|| format!("Invalid actions file {}", path.display()))
}

/// Fold actions through the reducer in order.
fn replay(initial: AppState, actions: &[Action]) -> AppState {
    actions
        .iter()
        .fold(initial, |state, action| reduce(&state, action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_scenario() {
        let actions = vec![
            Action::AddList("Backlog".to_string()),
            Action::AddTask {
                text: "write spec".to_string(),
                list_id: "0".to_string(),
            },
            Action::AddTask {
                text: "ignored".to_string(),
                list_id: "nonexistent".to_string(),
            },
        ];

        let state = replay(AppState::sample(), &actions);
        assert_eq!(state.lists.len(), 4);
        assert_eq!(state.lists[0].tasks.len(), 2);
        assert_eq!(state.task_count(), 4);
    }

    #[test]
    fn test_load_actions_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actions.json");
        std::fs::write(
            &path,
            r#"[
                {"type": "ADD_LIST", "payload": "Later"},
                {"type": "ADD_TASK", "payload": {"text": "Plan", "listId": "1"}},
                {"type": "RENAME_LIST", "payload": {"listId": "1", "text": "Doing"}}
            ]"#,
        )
        .unwrap();

        let actions = load_actions(&path).unwrap();
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[2], Action::Unknown("RENAME_LIST".to_string()));

        let state = replay(AppState::sample(), &actions);
        assert_eq!(state.lists[3].text, "Later");
        assert_eq!(state.lists[1].text, "In Progress");
        assert_eq!(state.lists[1].tasks[1].text, "Plan");
    }

    #[test]
    fn test_load_actions_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_actions(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
