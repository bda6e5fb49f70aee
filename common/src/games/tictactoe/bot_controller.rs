use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::types::{Difficulty, Mark};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }
}

/// Picks the cell the computer plays. `None` when the board has no empty cell.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    if input.bot_mark == Mark::Empty {
        return None;
    }
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Medium => calculate_greedy_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&get_available_moves(board))
}

// Offense only: an opponent's immediate win is not blocked.
fn calculate_greedy_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    let mut board = input.board;

    find_winning_move(&mut board, input.bot_mark, &available_moves)
        .or_else(|| rng.choose(&available_moves))
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board.place(index, mark);
        let winner = check_win(board);
        board.clear(index);

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;
    let mut board = input.board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(&board) {
        board.place(index, bot_mark);
        let score = minimax(&mut board, opponent_mark, bot_mark);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Scores the position with `to_move` about to play, from `bot_mark`'s point of view.
fn minimax(board: &mut Board, to_move: Mark, bot_mark: Mark) -> i32 {
    match check_win(board) {
        Some(winner) if winner == bot_mark => return WIN_SCORE,
        Some(_) => return LOSS_SCORE,
        None => {}
    }

    let moves = get_available_moves(board);
    if moves.is_empty() {
        return DRAW_SCORE;
    }

    let Some(next_to_move) = to_move.opponent() else {
        return DRAW_SCORE;
    };
    let is_maximizing = to_move == bot_mark;
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in moves {
        board.place(index, to_move);
        let eval = minimax(board, next_to_move, bot_mark);
        board.clear(index);

        best = if is_maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}
