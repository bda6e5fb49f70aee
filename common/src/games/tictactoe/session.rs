use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::SessionError;
use super::game_state::TicTacToeGameState;
use super::score::Score;
use super::types::{Difficulty, GameMode, GameStatus, Mark, WinningLine};

/// The human always plays X and moves first.
pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No mode chosen yet.
    Menu,
    /// Playing the computer but no difficulty chosen; the board is not playable.
    ModeSelected,
    InProgress,
    GameOver,
}

/// Identifies one pending computer turn on one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnTicket {
    generation: u64,
    ply: usize,
}

impl TurnTicket {
    pub fn ply(&self) -> usize {
        self.ply
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    SelectMode(GameMode),
    SelectDifficulty(Difficulty),
    PlaceMark(usize),
    ComputerMove(TurnTicket),
    Reset,
    BackToMenu,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Board or score mutated.
    pub changed: bool,
    /// A computer turn became pending and should be played after the presentation delay.
    pub computer_turn: Option<TurnTicket>,
    /// A previously pending computer turn was dropped.
    pub cancelled_turn: bool,
    /// The round ended with this result.
    pub finished: Option<GameStatus>,
}

/// What survives a restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub board: Board,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub mode: Option<GameMode>,
    pub difficulty: Option<Difficulty>,
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub score: Score,
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<usize>,
    pub computer_thinking: bool,
}

impl SessionSnapshot {
    pub fn accepts_board_input(&self) -> bool {
        self.phase == SessionPhase::InProgress && !self.computer_thinking
    }
}

pub struct TicTacToeSession {
    game_state: TicTacToeGameState,
    mode: Option<GameMode>,
    difficulty: Option<Difficulty>,
    score: Score,
    generation: u64,
    pending_turn: Option<TurnTicket>,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(rng: SessionRng) -> Self {
        Self::restore(PersistedState::default(), rng)
    }

    /// Starts at the menu showing the stored board and score.
    pub fn restore(persisted: PersistedState, rng: SessionRng) -> Self {
        Self {
            game_state: TicTacToeGameState::from_board(persisted.board),
            mode: None,
            difficulty: None,
            score: persisted.score,
            generation: 0,
            pending_turn: None,
            rng,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.mode, self.difficulty) {
            (None, _) => SessionPhase::Menu,
            (Some(GameMode::HumanVsComputer), None) => SessionPhase::ModeSelected,
            _ if self.game_state.status.is_over() => SessionPhase::GameOver,
            _ => SessionPhase::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.game_state.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn pending_turn(&self) -> Option<TurnTicket> {
        self.pending_turn
    }

    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            board: self.game_state.board,
            score: self.score,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            mode: self.mode,
            difficulty: self.difficulty,
            board: self.game_state.board,
            current_mark: self.game_state.current_mark,
            status: self.game_state.status,
            score: self.score,
            winning_line: self.game_state.winning_line(),
            last_move: self.game_state.last_move,
            computer_thinking: self.pending_turn.is_some(),
        }
    }

    pub fn update(&mut self, action: SessionAction) -> Result<UpdateOutcome, SessionError> {
        match action {
            SessionAction::SelectMode(mode) => Ok(self.select_mode(mode)),
            SessionAction::SelectDifficulty(difficulty) => self.select_difficulty(difficulty),
            SessionAction::PlaceMark(index) => self.place_player_mark(index),
            SessionAction::ComputerMove(ticket) => self.play_computer_turn(ticket),
            SessionAction::Reset => self.reset(),
            SessionAction::BackToMenu => Ok(self.back_to_menu()),
        }
    }

    fn select_mode(&mut self, mode: GameMode) -> UpdateOutcome {
        self.mode = Some(mode);
        self.difficulty = None;
        self.start_new_board()
    }

    fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<UpdateOutcome, SessionError> {
        match self.mode {
            None => return Err(SessionError::NoActiveGame),
            Some(GameMode::HumanVsHuman) => return Err(SessionError::DifficultyUnavailable),
            Some(GameMode::HumanVsComputer) => {}
        }
        self.difficulty = Some(difficulty);
        self.score = Score::default();
        Ok(self.start_new_board())
    }

    fn reset(&mut self) -> Result<UpdateOutcome, SessionError> {
        if self.mode.is_none() {
            return Err(SessionError::NoActiveGame);
        }
        Ok(self.start_new_board())
    }

    fn back_to_menu(&mut self) -> UpdateOutcome {
        self.mode = None;
        self.difficulty = None;
        self.start_new_board()
    }

    fn start_new_board(&mut self) -> UpdateOutcome {
        let cancelled_turn = self.pending_turn.take().is_some();
        self.generation += 1;
        self.game_state = TicTacToeGameState::new();
        UpdateOutcome {
            changed: true,
            cancelled_turn,
            ..UpdateOutcome::default()
        }
    }

    fn is_computer_turn(&self) -> bool {
        self.mode == Some(GameMode::HumanVsComputer)
            && self.game_state.current_mark == COMPUTER_MARK
    }

    fn place_player_mark(&mut self, index: usize) -> Result<UpdateOutcome, SessionError> {
        if matches!(self.phase(), SessionPhase::Menu | SessionPhase::ModeSelected) {
            return Err(SessionError::NoActiveGame);
        }
        if self.game_state.status.is_over() {
            return Err(SessionError::GameOver);
        }
        if self.pending_turn.is_some() || self.is_computer_turn() {
            return Err(SessionError::ComputerThinking);
        }

        let status = self.game_state.place_mark(index)?;
        let mut outcome = self.finish_move(status);

        if !status.is_over() && self.is_computer_turn() {
            let ticket = TurnTicket {
                generation: self.generation,
                ply: self.game_state.board.count(Mark::X) + self.game_state.board.count(Mark::O),
            };
            self.pending_turn = Some(ticket);
            outcome.computer_turn = Some(ticket);
        }

        Ok(outcome)
    }

    fn play_computer_turn(&mut self, ticket: TurnTicket) -> Result<UpdateOutcome, SessionError> {
        if self.pending_turn != Some(ticket) {
            return Err(SessionError::StaleTurn);
        }
        self.pending_turn = None;

        let difficulty = self.difficulty.ok_or(SessionError::NoActiveGame)?;
        let input = BotInput::new(self.game_state.board, COMPUTER_MARK);
        let index = calculate_move(difficulty, &input, &mut self.rng)
            .ok_or(SessionError::NoLegalMove)?;

        let status = self.game_state.place_mark(index)?;
        Ok(self.finish_move(status))
    }

    fn finish_move(&mut self, status: GameStatus) -> UpdateOutcome {
        let finished = status.is_over().then_some(status);
        if let Some(result) = finished {
            self.score.record(result);
        }
        UpdateOutcome {
            changed: true,
            finished,
            ..UpdateOutcome::default()
        }
    }
}
