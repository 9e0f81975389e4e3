//! Winning line masks for the 3x3 board

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Bitmask with one bit set for every cell of the board
pub const FULL_BOARD: u16 = (1 << CELL_COUNT) - 1;

/// Row-major cell index for column `x` and row `y`.
///
/// # Panics
///
/// Panics if `x` or `y` is not in `0..3`.
pub const fn index(x: usize, y: usize) -> usize {
    assert!(x < 3 && y < 3, "coordinates must be in 0..3");
    x + y * 3
}

/// Single-bit mask for a cell index
pub(crate) const fn cell_mask(index: usize) -> u16 {
    1 << index
}

/// The 8 winning triples as cell bitmasks: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [u16; 8] = build_lines();

const fn line(cells: [(usize, usize); 3]) -> u16 {
    cell_mask(index(cells[0].0, cells[0].1))
        | cell_mask(index(cells[1].0, cells[1].1))
        | cell_mask(index(cells[2].0, cells[2].1))
}

const fn build_lines() -> [u16; 8] {
    let mut lines = [0u16; 8];
    let mut i = 0;
    while i < 3 {
        lines[i] = line([(0, i), (1, i), (2, i)]);
        lines[3 + i] = line([(i, 0), (i, 1), (i, 2)]);
        i += 1;
    }
    lines[6] = line([(0, 0), (1, 1), (2, 2)]);
    lines[7] = line([(0, 2), (1, 1), (2, 0)]);
    lines
}

/// Check whether a set of cells fully covers at least one winning line
pub fn covers_line(cells: u16) -> bool {
    WINNING_LINES.iter().any(|&line| cells & line == line)
}

/// All winning lines fully covered by a set of cells
pub fn covered_lines(cells: u16) -> impl Iterator<Item = u16> {
    WINNING_LINES
        .into_iter()
        .filter(move |&line| cells & line == line)
}
