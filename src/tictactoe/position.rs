//! Position representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::{self, CELL_COUNT, FULL_BOARD, cell_mask};

/// A mark placed by one of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opponent's mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Parse a cell character. Only `.`, `X` and `O` are cell characters.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }
}

/// Immutable board position encoded as two disjoint 9-bit cell sets.
///
/// Whose turn it is is derived from the mark counts: X moves first and is
/// to move whenever it has no more marks than O. Positions are `Copy` and
/// every operation that changes the board returns a new value.
///
/// The text form is three rows of `.`, `X` and `O` separated by newlines:
///
/// ```
/// use tictactoe::tictactoe::{Cell, Position};
///
/// let position: Position = "XO.|.X.|..O".parse().unwrap();
/// assert_eq!(position.cell(4), Cell::X);
/// assert_eq!(position.to_string(), "XO.\n.X.\n..O");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Position {
    x: u16,
    o: u16,
}

impl Position {
    /// The position with every cell empty
    pub const EMPTY: Position = Position { x: 0, o: 0 };

    /// Create the empty position
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Get the content of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    pub fn cell(&self, index: usize) -> Cell {
        assert!(index < CELL_COUNT, "cell index {index} out of range");
        let mask = cell_mask(index);
        if self.x & mask != 0 {
            Cell::X
        } else if self.o & mask != 0 {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    /// Check if a cell is empty
    pub fn is_empty(&self, index: usize) -> bool {
        self.cell(index) == Cell::Empty
    }

    /// Place `mark` on an empty cell and return the resulting position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the cell is already marked.
    /// Only the empty position and this method produce positions, so a
    /// violation here is a bug in the caller.
    #[must_use = "with_mark returns a new position; the original is unchanged"]
    pub fn with_mark(&self, index: usize, mark: Mark) -> Position {
        assert!(
            self.is_empty(index),
            "cell {index} is already occupied in\n{self}"
        );
        let mask = cell_mask(index);
        match mark {
            Mark::X => Position {
                x: self.x | mask,
                o: self.o,
            },
            Mark::O => Position {
                x: self.x,
                o: self.o | mask,
            },
        }
    }

    /// Place the mark of the side to move on an empty cell.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Position::with_mark`].
    #[must_use = "play returns a new position; the original is unchanged"]
    pub fn play(&self, index: usize) -> Position {
        self.with_mark(index, self.to_move())
    }

    /// Number of marks of the given side
    pub fn count(&self, mark: Mark) -> u32 {
        self.cells_of(mark).count_ones()
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> u32 {
        self.occupied().count_ones()
    }

    /// True when X, the first player, is to move
    pub fn is_first_player_to_move(&self) -> bool {
        self.count(Mark::X) <= self.count(Mark::O)
    }

    /// The mark of the side to move
    pub fn to_move(&self) -> Mark {
        if self.is_first_player_to_move() {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Check if a side fully owns one of the winning lines
    pub fn has_won(&self, mark: Mark) -> bool {
        lines::covers_line(self.cells_of(mark))
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Mark> {
        if self.has_won(Mark::X) {
            Some(Mark::X)
        } else if self.has_won(Mark::O) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Check if every cell is marked.
    ///
    /// A full board can still hold a line completed by the ninth mark, so
    /// callers telling a draw from a win check [`Position::winner`] first.
    pub fn is_draw(&self) -> bool {
        self.occupied() == FULL_BOARD
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.is_draw() || self.winner().is_some()
    }

    /// Indices of the empty cells in ascending order
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + use<> {
        let free = !self.occupied() & FULL_BOARD;
        (0..CELL_COUNT).filter(move |&index| free & cell_mask(index) != 0)
    }

    /// Legal moves: the empty cells, or nothing once the game is over
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_cells().collect()
    }

    pub(crate) fn cells_of(&self, mark: Mark) -> u16 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn occupied(&self) -> u16 {
        self.x | self.o
    }

    /// Parse the text form, ignoring every character that is not a cell
    /// character.
    ///
    /// Cells are assigned in order of appearance, so separators like `|` or
    /// newlines may be inserted anywhere. Cells beyond the recognized
    /// characters stay empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TooManyCells`] if more than nine cell
    /// characters are present.
    pub fn from_text(text: &str) -> Result<Self, crate::Error> {
        let cells: Vec<Cell> = text.chars().filter_map(Cell::from_char).collect();
        if cells.len() > CELL_COUNT {
            return Err(crate::Error::TooManyCells {
                got: cells.len(),
                context: text.to_string(),
            });
        }

        let position = cells
            .into_iter()
            .enumerate()
            .fold(Position::EMPTY, |position, (index, cell)| {
                match cell.to_mark() {
                    Some(mark) => position.with_mark(index, mark),
                    None => position,
                }
            });
        Ok(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..CELL_COUNT {
            write!(f, "{}", self.cell(index).to_char())?;
            if index % 3 == 2 && index < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Position {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_text(s)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.to_string()
    }
}

impl TryFrom<String> for Position {
    type Error = crate::Error;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Position::from_text(&text)
    }
}
