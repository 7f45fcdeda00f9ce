//! Core types shared across the engine
//! This module contains pure data types with no external dependencies
//! beyond the serde derives on boundary-crossing enums.

use serde::{Deserialize, Serialize};

/// Board dimensions (mode-independent)
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Line clear scoring, indexed by lines cleared at once (0-4)
pub const LINE_SCORES: [u64; 5] = [0, 40, 100, 300, 1200];

/// Lines required per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Drop speed curve: each level shaves this many ms off the mode's base interval
pub const LEVEL_SPEEDUP_MS: u32 = 50;

/// Drop interval never goes below this
pub const MIN_DROP_INTERVAL_MS: u32 = 50;

/// Countdown ticker period (Speed mode)
pub const COUNTDOWN_INTERVAL_MS: u32 = 1000;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Color id used in snapshot grids (1-7; 0 means empty)
    pub fn color_id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Session lifecycle phase. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Selecting,
    Running,
    Paused,
    Won,
    Lost,
}

impl Phase {
    /// Won and Lost are terminal: the session is frozen and a fresh one
    /// must be created to play again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Selecting => "selecting",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Won => "won",
            Phase::Lost => "lost",
        }
    }
}

/// Externally-sourced discrete player intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    TogglePause,
}

impl Intent {
    /// Parse intent from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "rotate" => Some(Intent::Rotate),
            "togglepause" => Some(Intent::TogglePause),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
            Intent::TogglePause => "togglePause",
        }
    }
}

/// Commands applied by the session state machine. Player intents map to
/// the first five; the clock emits the synthetic Drop and CountdownTick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    TogglePause,
    Drop,
    CountdownTick,
}
