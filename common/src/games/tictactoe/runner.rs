use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::{ConfigContentProvider, ConfigSerializer};
use crate::games::SessionBroadcaster;
use crate::{log, log_debug, log_error};
use super::board::Board;
use super::score::Score;
use super::session::{SessionAction, TicTacToeSession, TurnTicket};
use super::storage::GameStore;
use super::types::{Difficulty, GameMode};

pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(500);

/// Input the player can send. Computer moves only come from the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    SelectMode(GameMode),
    SelectDifficulty(Difficulty),
    PlaceMark(usize),
    Reset,
    BackToMenu,
}

impl From<PlayerCommand> for SessionAction {
    fn from(command: PlayerCommand) -> Self {
        match command {
            PlayerCommand::SelectMode(mode) => SessionAction::SelectMode(mode),
            PlayerCommand::SelectDifficulty(difficulty) => SessionAction::SelectDifficulty(difficulty),
            PlayerCommand::PlaceMark(index) => SessionAction::PlaceMark(index),
            PlayerCommand::Reset => SessionAction::Reset,
            PlayerCommand::BackToMenu => SessionAction::BackToMenu,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionRunnerSettings {
    pub computer_delay: Duration,
}

impl Default for SessionRunnerSettings {
    fn default() -> Self {
        Self {
            computer_delay: DEFAULT_COMPUTER_DELAY,
        }
    }
}

/// Delivers each pending computer turn back to the runner after the delay.
struct ComputerTurnScheduler {
    delay: Duration,
    ticket_tx: mpsc::UnboundedSender<TurnTicket>,
    pending: Option<CancellationToken>,
}

impl ComputerTurnScheduler {
    fn new(delay: Duration, ticket_tx: mpsc::UnboundedSender<TurnTicket>) -> Self {
        Self {
            delay,
            ticket_tx,
            pending: None,
        }
    }

    fn schedule(&mut self, ticket: TurnTicket) {
        self.cancel();

        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();
        let ticket_tx = self.ticket_tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = ticket_tx.send(ticket);
                }
            }
        });

        self.pending = Some(cancel);
    }

    fn cancel(&mut self) {
        if let Some(cancel) = self.pending.take() {
            cancel.cancel();
        }
    }
}

impl Drop for ComputerTurnScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Owns the session until `command_rx` closes. Every applied action is persisted
/// when it changed board or score, then broadcast.
pub async fn run_session<TProvider, TSerializer, TBroadcaster>(
    mut session: TicTacToeSession,
    store: GameStore<TProvider, TSerializer>,
    settings: SessionRunnerSettings,
    mut command_rx: mpsc::UnboundedReceiver<PlayerCommand>,
    broadcaster: TBroadcaster,
) where
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Board> + ConfigSerializer<Score>,
    TBroadcaster: SessionBroadcaster,
{
    let (ticket_tx, mut ticket_rx) = mpsc::unbounded_channel();
    let mut scheduler = ComputerTurnScheduler::new(settings.computer_delay, ticket_tx);

    broadcaster.broadcast_state(session.snapshot()).await;

    loop {
        let action = tokio::select! {
            command = command_rx.recv() => match command {
                Some(command) => SessionAction::from(command),
                None => break,
            },
            Some(ticket) = ticket_rx.recv() => SessionAction::ComputerMove(ticket),
        };

        if apply_action(&mut session, &store, &mut scheduler, action) {
            broadcaster.broadcast_state(session.snapshot()).await;
        }
    }

    scheduler.cancel();
    log!("Session closed, score {:?}", session.score());
}

fn apply_action<TProvider, TSerializer>(
    session: &mut TicTacToeSession,
    store: &GameStore<TProvider, TSerializer>,
    scheduler: &mut ComputerTurnScheduler,
    action: SessionAction,
) -> bool
where
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Board> + ConfigSerializer<Score>,
{
    let outcome = match session.update(action) {
        Ok(outcome) => outcome,
        Err(e) => {
            log_debug!("Rejected {:?}: {}", action, e);
            return false;
        }
    };

    if outcome.cancelled_turn {
        log_debug!("Pending computer turn cancelled");
        scheduler.cancel();
    }

    if let Some(ticket) = outcome.computer_turn {
        scheduler.schedule(ticket);
    }

    if let Some(result) = outcome.finished {
        log!("Game finished: {:?}", result);
    }

    if outcome.changed
        && let Err(e) = store.save(&session.persisted_state())
    {
        log_error!("Failed to save game state: {}", e);
    }

    true
}
