use std::path::PathBuf;
use std::thread::JoinHandle;

use common::games::SessionRng;
use common::games::tictactoe::{GameStore, PlayerCommand, SessionRunnerSettings, TicTacToeSession, run_session};
use common::{log, log_error};
use tokio::sync::mpsc;

use crate::state::SharedState;

use super::LocalBroadcaster;

pub struct LocalGameSettings {
    pub storage_dir: PathBuf,
    pub runner: SessionRunnerSettings,
    pub seed: Option<u64>,
}

/// Restores the stored session and serves commands until the UI drops its sender.
pub async fn local_game_task(
    shared_state: SharedState,
    settings: LocalGameSettings,
    command_rx: mpsc::UnboundedReceiver<PlayerCommand>,
) {
    let store = GameStore::in_directory(&settings.storage_dir);
    let persisted = store.load();

    let rng = match settings.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Session restored from {} (seed {})",
        settings.storage_dir.display(),
        rng.seed()
    );

    let session = TicTacToeSession::restore(persisted, rng);
    let broadcaster = LocalBroadcaster::new(shared_state);
    run_session(session, store, settings.runner, command_rx, broadcaster).await;
}

/// Runs `local_game_task` on its own tokio runtime so the UI thread stays free for eframe.
pub fn spawn_local_game(
    shared_state: SharedState,
    settings: LocalGameSettings,
    command_rx: mpsc::UnboundedReceiver<PlayerCommand>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log_error!("Failed to start game runtime: {}", e);
                return;
            }
        };
        rt.block_on(local_game_task(shared_state, settings, command_rx));
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{GameMode, Mark, SessionPhase};
    use std::time::Duration;

    fn get_temp_dir() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_state_{}", random_number))
    }

    async fn wait_for(shared_state: &SharedState, predicate: impl Fn(&common::games::tictactoe::SessionSnapshot) -> bool) -> bool {
        for _ in 0..200 {
            if shared_state.get_snapshot().is_some_and(|snapshot| predicate(&snapshot)) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }

    #[tokio::test]
    async fn test_board_survives_restart() {
        let storage_dir = get_temp_dir();
        let settings = || LocalGameSettings {
            storage_dir: storage_dir.clone(),
            runner: SessionRunnerSettings { computer_delay: Duration::from_millis(10) },
            seed: Some(5),
        };

        let shared_state = SharedState::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(local_game_task(shared_state.clone(), settings(), command_rx));
        command_tx.send(PlayerCommand::SelectMode(GameMode::HumanVsHuman)).unwrap();
        command_tx.send(PlayerCommand::PlaceMark(4)).unwrap();
        assert!(wait_for(&shared_state, |s| s.board.get(4) == Some(Mark::X)).await);
        drop(command_tx);
        task.await.unwrap();

        let restarted = SharedState::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(local_game_task(restarted.clone(), settings(), command_rx));
        assert!(wait_for(&restarted, |s| s.phase == SessionPhase::Menu).await);
        let snapshot = restarted.get_snapshot().unwrap();
        assert_eq!(snapshot.board.get(4), Some(Mark::X));
        assert_eq!(snapshot.current_mark, Mark::O);
        drop(command_tx);
        task.await.unwrap();

        let _ = std::fs::remove_dir_all(&storage_dir);
    }
}
