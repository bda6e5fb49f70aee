use super::board::{Board, CELL_COUNT};
use super::error::SessionError;
use super::types::{GameStatus, Mark, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// One round on one board: whose turn it is and whether the round has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Resumes from a stored board; turn and status are derived from its contents.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            current_mark: board.next_mark(),
            status: evaluate(&board),
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, SessionError> {
        if self.status.is_over() {
            return Err(SessionError::GameOver);
        }

        if index >= CELL_COUNT {
            return Err(SessionError::InvalidCell(index));
        }

        if !self.board.is_empty_cell(index) {
            return Err(SessionError::CellOccupied(index));
        }

        self.board.place(index, self.current_mark);
        self.last_move = Some(index);
        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if matches!(self.status, GameStatus::XWon | GameStatus::OWon) {
            check_win_with_line(&self.board)
        } else {
            None
        }
    }
}
