//! blockfall - a deterministic falling-block puzzle engine.
//!
//! The engine is a pure simulation core meant to sit behind a rendering
//! layer: it consumes discrete commands (player intents and clock ticks),
//! owns all session state in a single [`Session`] value, and exposes a
//! read-only [`SessionSnapshot`] for whatever wants to draw it. There is
//! no rendering, no I/O, and no ambient global state in here.
//!
//! Typical flow:
//!
//! ```
//! use blockfall::{Intent, ModeConfig, Phase, Session};
//!
//! let mut session = Session::new(ModeConfig::challenge(50), 12345)?;
//! session.start();
//! assert_eq!(session.phase(), Phase::Running);
//!
//! session.handle(Intent::MoveLeft);
//! session.tick(16); // elapsed milliseconds from the host's frame clock
//!
//! let view = session.snapshot();
//! assert_eq!(view.lines, 0);
//! # Ok::<(), blockfall::ConfigError>(())
//! ```

pub mod core;
pub mod input;
pub mod types;

pub use crate::core::{
    ConfigError, ModeConfig, ModeKind, Piece, PieceFactory, PieceView, Session, SessionSnapshot,
};
pub use crate::input::map_intent;
pub use crate::types::{Cell, Command, Intent, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
