//! Snapshot module - the read-only view handed to a rendering layer
//!
//! The engine produces state transitions; presentation is somebody
//! else's problem. A snapshot carries everything a view needs (grid,
//! active piece cells, preview, counters, phase) and serializes with
//! serde so it can cross any boundary the consumer likes.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::core::pieces::Piece;
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Active piece as seen by a renderer: kind, anchor, and the four
/// occupied cells in absolute board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub cells: [(i8, i8); 4],
}

impl From<&Piece> for PieceView {
    fn from(piece: &Piece) -> Self {
        let cells: ArrayVec<(i8, i8), 4> = piece.cells().collect();
        Self {
            kind: piece.kind,
            x: piece.x,
            y: piece.y,
            cells: cells.into_inner().unwrap_or([(0, 0); 4]),
        }
    }
}

/// Read-only session view for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Grid of color ids, 0 = empty, row-major top to bottom
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<PieceView>,
    /// Preview of the piece that spawns after the active one locks
    pub next: PieceKind,
    pub score: u64,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub time_remaining_sec: Option<u32>,
    pub phase: Phase,
}

impl SessionSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: 0,
            time_remaining_sec: None,
            phase: Phase::Selecting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_view_cells() {
        let piece = Piece::spawn(PieceKind::O);
        let view = PieceView::from(&piece);
        assert_eq!(view.kind, PieceKind::O);
        assert_eq!(view.cells, [(4, 0), (5, 0), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_default_snapshot_not_playable() {
        let snapshot = SessionSnapshot::default();
        assert_eq!(snapshot.phase, Phase::Selecting);
        assert!(!snapshot.playable());
    }
}
