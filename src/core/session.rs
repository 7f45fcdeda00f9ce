//! Session module - the owning state machine for one game
//!
//! A `Session` is the single mutator of all game state. Commands arrive
//! one at a time (player intents through the input mapper, synthetic
//! drop/countdown commands from the clock) and are applied synchronously;
//! every transform is validated by the board's collision predicate before
//! it commits. On lock the session runs the clear -> score -> mode-policy
//! pipeline and either spawns the next piece or reaches a terminal phase.

use std::mem;

use tracing::{debug, info};

use crate::core::board::Board;
use crate::core::clock::SessionClock;
use crate::core::factory::PieceFactory;
use crate::core::mode::{ConfigError, ModeConfig, ModeKind};
use crate::core::pieces::Piece;
use crate::core::scoring;
use crate::core::snapshot::{PieceView, SessionSnapshot};
use crate::input::map_intent;
use crate::types::{Command, Intent, Phase, PieceKind};

/// One game from mode confirmation to a terminal phase. Created per
/// play; once Won or Lost it freezes, and another round needs a fresh
/// session.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    factory: PieceFactory,
    mode: ModeConfig,
    clock: SessionClock,
    active: Option<Piece>,
    next: Piece,
    score: u64,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    time_remaining_sec: Option<u32>,
    phase: Phase,
}

impl Session {
    /// Confirm a mode and create a session in the Selecting phase.
    /// Config problems fail here, before any session state exists.
    pub fn new(mode: ModeConfig, seed: u32) -> Result<Self, ConfigError> {
        Self::with_factory(mode, PieceFactory::uniform(seed))
    }

    /// Like `new` but with a caller-supplied piece factory (scripted
    /// sequences for tests, or an alternative randomizer).
    pub fn with_factory(mode: ModeConfig, mut factory: PieceFactory) -> Result<Self, ConfigError> {
        mode.validate()?;
        let next = factory.next();
        Ok(Self {
            board: Board::new(),
            factory,
            drop_interval_ms: scoring::drop_interval_ms(1, mode.initial_drop_interval_ms),
            time_remaining_sec: mode.time_limit_sec,
            mode,
            clock: SessionClock::new(),
            active: None,
            next,
            score: 0,
            level: 1,
            lines: 0,
            phase: Phase::Selecting,
        })
    }

    /// Selecting -> Running: spawn the first piece and begin play
    pub fn start(&mut self) {
        if self.phase != Phase::Selecting {
            return;
        }
        let piece = mem::replace(&mut self.next, self.factory.next());
        self.active = Some(piece);
        self.phase = Phase::Running;
        info!(
            mode = self.mode.kind.name(),
            drop_interval_ms = self.drop_interval_ms,
            "session started"
        );
    }

    /// Advance the drop and countdown tickers by real elapsed time.
    /// Does nothing unless Running, so pausing suspends tick delivery
    /// without touching the accumulators.
    pub fn tick(&mut self, delta_ms: u32) {
        if self.phase != Phase::Running {
            return;
        }
        let batch = self.clock.advance(
            delta_ms,
            self.drop_interval_ms,
            self.time_remaining_sec.is_some(),
        );
        for _ in 0..batch.drops {
            if self.phase != Phase::Running {
                return;
            }
            self.apply(Command::Drop);
        }
        for _ in 0..batch.seconds {
            if self.phase != Phase::Running {
                return;
            }
            self.apply(Command::CountdownTick);
        }
    }

    /// Apply one external intent, subject to phase gating
    pub fn handle(&mut self, intent: Intent) {
        if let Some(command) = map_intent(intent, self.phase) {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => {
                self.try_move(-1, 0);
            }
            Command::MoveRight => {
                self.try_move(1, 0);
            }
            // A blocked soft drop is a no-op; only gravity locks
            Command::SoftDrop => {
                self.try_move(0, 1);
            }
            Command::Rotate => {
                self.try_rotate();
            }
            Command::TogglePause => self.toggle_pause(),
            Command::Drop => self.gravity_step(),
            Command::CountdownTick => self.countdown_step(),
        }
    }

    /// Replace the active piece with a translated candidate if the
    /// candidate is collision-free. Blocked moves leave state untouched.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let candidate = active.translated(dx, dy);
        if self.board.collides(&candidate, 0, 0) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Naive rotation: rotate the current matrix, reject wholesale on
    /// collision. No kick attempts.
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let candidate = active.rotated();
        if self.board.collides(&candidate, 0, 0) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// One synthetic downward step from the drop ticker. A blocked step
    /// means the piece has landed and locks.
    fn gravity_step(&mut self) {
        if !self.try_move(0, 1) {
            self.lock_active();
        }
    }

    /// One countdown second elapsed (Speed mode deadline)
    fn countdown_step(&mut self) {
        let Some(remaining) = self.time_remaining_sec.as_mut() else {
            return;
        };
        *remaining = remaining.saturating_sub(1);
        if *remaining == 0 {
            self.phase = Phase::Lost;
            info!(score = self.score, lines = self.lines, "time expired, session lost");
        }
    }

    /// Lock the active piece, then clear -> score -> mode policy.
    /// Terminal conditions are evaluated here on every lock.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.lock(&piece);

        let cleared = self.board.clear_full_rows().len();
        let points = scoring::line_points(cleared, self.level, self.mode.speed_multiplier);
        self.score += points;
        self.lines += cleared as u32;
        if cleared > 0 {
            debug!(
                lines = cleared,
                points,
                total_lines = self.lines,
                "rows cleared"
            );
        }

        let level = scoring::level_for_lines(self.lines);
        if level > self.level {
            self.level = level;
            self.drop_interval_ms =
                scoring::drop_interval_ms(level, self.mode.initial_drop_interval_ms);
            debug!(
                level,
                drop_interval_ms = self.drop_interval_ms,
                "level up"
            );
        }

        // Challenge win is checked before the next spawn: reaching the
        // target on this lock wins even if the spawn would be blocked.
        if self.mode.kind == ModeKind::Challenge {
            if let Some(target) = self.mode.target_lines {
                if self.lines >= target {
                    self.phase = Phase::Won;
                    info!(score = self.score, lines = self.lines, "target reached, session won");
                    return;
                }
            }
        }

        let piece = mem::replace(&mut self.next, self.factory.next());
        let blocked = self.board.collides(&piece, 0, 0);
        self.active = Some(piece);
        if blocked {
            self.phase = Phase::Lost;
            info!(score = self.score, lines = self.lines, "spawn blocked, session lost");
        }
    }

    fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                debug!("session paused");
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                debug!("session resumed");
            }
            _ => {}
        }
    }

    /// Fill a caller-owned snapshot without allocating
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.as_ref().map(PieceView::from);
        out.next = self.next.kind;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.time_remaining_sec = self.time_remaining_sec;
        out.phase = self.phase;
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn time_remaining_sec(&self) -> Option<u32> {
        self.time_remaining_sec
    }

    pub fn mode(&self) -> &ModeConfig {
        &self.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next.kind
    }

    /// Test support: scenario suites pre-fill rows through this.
    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
