use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::Mark;
use super::win_detector::WINNING_LINES;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// 3x3 grid stored row-major: index = row * 3 + column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Mark>", into = "Vec<Mark>")]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        get_available_moves(self)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// The mark that moves next if play alternated starting with X.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

impl TryFrom<Vec<Mark>> for Board {
    type Error = String;

    fn try_from(cells: Vec<Mark>) -> Result<Self, Self::Error> {
        let len = cells.len();
        let cells: [Mark; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| format!("Board must have {} cells, got {}", CELL_COUNT, len))?;
        Ok(Self { cells })
    }
}

impl From<Board> for Vec<Mark> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}

impl Validate for Board {
    fn validate(&self) -> Result<(), String> {
        let x_count = self.count(Mark::X);
        let o_count = self.count(Mark::O);
        if x_count != o_count && x_count != o_count + 1 {
            return Err(format!(
                "Mark counts are not reachable by alternating turns from X (X: {}, O: {})",
                x_count, o_count
            ));
        }

        let owns_line = |mark: Mark| {
            WINNING_LINES
                .iter()
                .any(|line| line.iter().all(|&index| self.cells[index] == mark))
        };
        let x_won = owns_line(Mark::X);
        let o_won = owns_line(Mark::O);
        if x_won && o_won {
            return Err("Both marks own a winning line".to_string());
        }
        // The winner made the last move.
        if x_won && x_count != o_count + 1 {
            return Err(format!("O moved after X had won (X: {}, O: {})", x_count, o_count));
        }
        if o_won && x_count != o_count {
            return Err(format!("X moved after O had won (X: {}, O: {})", x_count, o_count));
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

/// Row-major layout of `X`, `O` and `_`; whitespace is ignored.
#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let cells: Vec<Mark> = layout
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        })
        .collect();
    Board::try_from(cells).expect("test layout must have 9 cells")
}
