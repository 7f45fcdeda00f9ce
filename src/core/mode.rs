//! Mode module - the three rulesets and their configuration
//!
//! A `ModeConfig` is chosen once, validated up front, and never mutated
//! afterwards. Win/loss policy lives in the session state machine; this
//! module owns the configuration surface and its failure class.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named ruleset determining speed scaling and win/loss conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeKind {
    /// Endless play, lost on a blocked spawn
    Classic,
    /// Race the countdown, faster scoring multiplier
    Speed,
    /// Reach a target line count to win
    Challenge,
}

impl ModeKind {
    pub const ALL: [ModeKind; 3] = [ModeKind::Classic, ModeKind::Speed, ModeKind::Challenge];

    pub fn name(self) -> &'static str {
        match self {
            ModeKind::Classic => "classic",
            ModeKind::Speed => "speed",
            ModeKind::Challenge => "challenge",
        }
    }
}

/// Configuration rejected at session creation, before any session exists
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("challenge mode requires a target of at least 1 line, got {got:?}")]
    InvalidTargetLines { got: Option<u32> },
    #[error("speed mode requires a time limit of at least 1 second, got {got:?}")]
    InvalidTimeLimit { got: Option<u32> },
    #[error("initial drop interval must be at least 1 ms")]
    InvalidDropInterval,
    #[error("speed multiplier must be positive, got {got}")]
    InvalidSpeedMultiplier { got: f64 },
}

/// Immutable per-session ruleset parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
    pub kind: ModeKind,
    /// Drop interval at level 1
    pub initial_drop_interval_ms: u32,
    /// Scoring multiplier applied after the level multiplier
    pub speed_multiplier: f64,
    /// Session deadline (Speed only)
    pub time_limit_sec: Option<u32>,
    /// Cumulative lines needed to win (Challenge only)
    pub target_lines: Option<u32>,
}

impl ModeConfig {
    /// Classic: relaxed base speed, plain scoring, play until topped out
    pub fn classic() -> Self {
        Self {
            kind: ModeKind::Classic,
            initial_drop_interval_ms: 800,
            speed_multiplier: 1.0,
            time_limit_sec: None,
            target_lines: None,
        }
    }

    /// Speed: fast base interval, boosted scoring, fixed deadline
    pub fn speed(time_limit_sec: u32) -> Self {
        Self {
            kind: ModeKind::Speed,
            initial_drop_interval_ms: 500,
            speed_multiplier: 2.0,
            time_limit_sec: Some(time_limit_sec),
            target_lines: None,
        }
    }

    /// Challenge: moderate speed-up, win at the target line count
    pub fn challenge(target_lines: u32) -> Self {
        Self {
            kind: ModeKind::Challenge,
            initial_drop_interval_ms: 650,
            speed_multiplier: 1.5,
            time_limit_sec: None,
            target_lines: Some(target_lines),
        }
    }

    /// Override the level-1 drop interval
    pub fn with_drop_interval_ms(mut self, ms: u32) -> Self {
        self.initial_drop_interval_ms = ms;
        self
    }

    /// Override the scoring multiplier
    pub fn with_speed_multiplier(mut self, multiplier: f64) -> Self {
        self.speed_multiplier = multiplier;
        self
    }

    /// Fail-fast validation, run at session creation. A bad mode config
    /// must never surface mid-game as an unreachable win/loss condition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_drop_interval_ms == 0 {
            return Err(ConfigError::InvalidDropInterval);
        }
        if !(self.speed_multiplier > 0.0) {
            return Err(ConfigError::InvalidSpeedMultiplier {
                got: self.speed_multiplier,
            });
        }
        match self.kind {
            ModeKind::Classic => {}
            ModeKind::Speed => {
                if !matches!(self.time_limit_sec, Some(s) if s >= 1) {
                    return Err(ConfigError::InvalidTimeLimit {
                        got: self.time_limit_sec,
                    });
                }
            }
            ModeKind::Challenge => {
                if !matches!(self.target_lines, Some(n) if n >= 1) {
                    return Err(ConfigError::InvalidTargetLines {
                        got: self.target_lines,
                    });
                }
            }
        }
        Ok(())
    }
}
