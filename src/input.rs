//! Input mapping from external intents to session commands.
//!
//! The mapper is deliberately thin: it knows nothing about keyboards or
//! UI widgets, only the five discrete intents a shell can deliver and
//! the phase gate that decides whether each one is heard. Toggle-pause
//! is accepted while Paused (to resume); everything else requires a
//! Running session. Nothing is heard in Selecting or a terminal phase.

use crate::types::{Command, Intent, Phase};

/// Map an intent to the command the session should apply, or None if
/// the current phase ignores it.
pub fn map_intent(intent: Intent, phase: Phase) -> Option<Command> {
    match intent {
        Intent::TogglePause => match phase {
            Phase::Running | Phase::Paused => Some(Command::TogglePause),
            _ => None,
        },
        _ if phase != Phase::Running => None,
        Intent::MoveLeft => Some(Command::MoveLeft),
        Intent::MoveRight => Some(Command::MoveRight),
        Intent::SoftDrop => Some(Command::SoftDrop),
        Intent::Rotate => Some(Command::Rotate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_INTENTS: [Intent; 5] = [
        Intent::MoveLeft,
        Intent::MoveRight,
        Intent::SoftDrop,
        Intent::Rotate,
        Intent::TogglePause,
    ];

    #[test]
    fn test_running_accepts_everything() {
        assert_eq!(
            map_intent(Intent::MoveLeft, Phase::Running),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map_intent(Intent::MoveRight, Phase::Running),
            Some(Command::MoveRight)
        );
        assert_eq!(
            map_intent(Intent::SoftDrop, Phase::Running),
            Some(Command::SoftDrop)
        );
        assert_eq!(
            map_intent(Intent::Rotate, Phase::Running),
            Some(Command::Rotate)
        );
        assert_eq!(
            map_intent(Intent::TogglePause, Phase::Running),
            Some(Command::TogglePause)
        );
    }

    #[test]
    fn test_paused_accepts_only_toggle_pause() {
        assert_eq!(
            map_intent(Intent::TogglePause, Phase::Paused),
            Some(Command::TogglePause)
        );
        for intent in [
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::SoftDrop,
            Intent::Rotate,
        ] {
            assert_eq!(map_intent(intent, Phase::Paused), None);
        }
    }

    #[test]
    fn test_terminal_and_selecting_ignore_everything() {
        for phase in [Phase::Selecting, Phase::Won, Phase::Lost] {
            for intent in ALL_INTENTS {
                assert_eq!(map_intent(intent, phase), None);
            }
        }
    }
}
