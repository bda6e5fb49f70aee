mod board;
mod bot_controller;
mod error;
mod game_state;
mod runner;
mod score;
mod session;
mod storage;
mod types;
mod win_detector;

pub use board::{Board, BOARD_SIDE, CELL_COUNT, get_available_moves};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use error::SessionError;
pub use game_state::TicTacToeGameState;
pub use runner::{DEFAULT_COMPUTER_DELAY, PlayerCommand, SessionRunnerSettings, run_session};
pub use score::Score;
pub use session::{
    COMPUTER_MARK, HUMAN_MARK, PersistedState, SessionAction, SessionPhase, SessionSnapshot,
    TicTacToeSession, TurnTicket, UpdateOutcome,
};
pub use storage::{BOARD_ENTRY_FILE, GameStore, SCORE_ENTRY_FILE};
pub use types::{Difficulty, GameMode, GameStatus, Mark, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate, is_draw};
