use thiserror::Error;

/// Reasons an action is rejected. The session is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No game is active")]
    NoActiveGame,

    #[error("Difficulty only applies to games against the computer")]
    DifficultyUnavailable,

    #[error("Cell {0} is out of bounds")]
    InvalidCell(usize),

    #[error("Cell {0} is already marked")]
    CellOccupied(usize),

    #[error("Game is already over")]
    GameOver,

    #[error("Computer is still thinking")]
    ComputerThinking,

    #[error("Computer turn no longer matches the board")]
    StaleTurn,

    #[error("No legal move left")]
    NoLegalMove,
}
