//! Pieces module - tetromino shape matrices and the active piece value
//!
//! Every kind maps to a fixed NxN boolean matrix (I: 4x4, O: 2x2, the
//! rest 3x3). Rotation is a plain 90-degree matrix rotation (transpose
//! then row reversal) that produces a new matrix; validation against the
//! board is the caller's job, and a colliding rotation is rejected
//! wholesale with no kick attempts.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest shape matrix side (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// NxN boolean shape matrix, stored in a fixed 4x4 with an explicit
/// side length so it stays Copy and allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len() as u8;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self { size, cells }
    }

    /// Side length of the matrix (2, 3, or 4)
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at column `x`, row `y` is filled
    pub fn filled(&self, x: u8, y: u8) -> bool {
        x < self.size && y < self.size && self.cells[y as usize][x as usize]
    }

    /// 90-degree clockwise rotation: transpose followed by row reversal.
    /// Returns a fresh matrix; self is untouched. Applying this four
    /// times yields the original matrix; the O matrix is invariant after
    /// a single application.
    pub fn rotated(&self) -> Self {
        let n = self.size as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in cells.iter_mut().enumerate().take(n) {
            for (x, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[n - 1 - x][y];
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Iterate the filled cells as (x, y) offsets within the matrix
    pub fn iter_filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.cells[y][x].then_some((x as i8, y as i8)))
        })
    }
}

/// Get the spawn-orientation shape matrix for a piece kind
pub fn get_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        // Horizontal bar on row 1 of a 4x4
        PieceKind::I => ShapeMatrix::from_rows(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]),
        PieceKind::O => ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => ShapeMatrix::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::S => ShapeMatrix::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
        PieceKind::Z => ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
        PieceKind::J => ShapeMatrix::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::L => ShapeMatrix::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
    }
}

/// Active falling piece: kind, current rotation matrix, and the board
/// coordinate of the matrix's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: ShapeMatrix,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the centered top spawn coordinate:
    /// x = width/2 - shape_size/2, y = 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = get_shape(kind);
        let x = (BOARD_WIDTH / 2) as i8 - (shape.size() / 2) as i8;
        Self {
            kind,
            shape,
            x,
            y: 0,
        }
    }

    /// Candidate translated by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate with the shape rotated 90 degrees clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Iterate the occupied cells in absolute board coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .iter_filled()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
