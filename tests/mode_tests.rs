//! Mode configuration tests - validation happens before a session exists

use blockfall::core::{ConfigError, ModeConfig, ModeKind};
use blockfall::{Phase, Session};

#[test]
fn test_builtin_mode_parameters() {
    let classic = ModeConfig::classic();
    assert_eq!(classic.kind, ModeKind::Classic);
    assert_eq!(classic.time_limit_sec, None);
    assert_eq!(classic.target_lines, None);

    let speed = ModeConfig::speed(180);
    assert_eq!(speed.kind, ModeKind::Speed);
    assert_eq!(speed.time_limit_sec, Some(180));
    assert!(speed.speed_multiplier > ModeConfig::classic().speed_multiplier);

    let challenge = ModeConfig::challenge(50);
    assert_eq!(challenge.kind, ModeKind::Challenge);
    assert_eq!(challenge.target_lines, Some(50));
}

#[test]
fn test_builder_overrides() {
    let config = ModeConfig::classic()
        .with_drop_interval_ms(1200)
        .with_speed_multiplier(3.0);
    assert_eq!(config.initial_drop_interval_ms, 1200);
    assert_eq!(config.speed_multiplier, 3.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_select_mode_rejects_bad_challenge_target() {
    let err = Session::new(ModeConfig::challenge(0), 1).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTargetLines { .. }));
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_select_mode_rejects_bad_speed_limit() {
    let err = Session::new(ModeConfig::speed(0), 1).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeLimit { .. }));
}

#[test]
fn test_select_mode_rejects_degenerate_timing() {
    let err = Session::new(ModeConfig::classic().with_drop_interval_ms(0), 1).unwrap_err();
    assert_eq!(err, ConfigError::InvalidDropInterval);

    let err = Session::new(ModeConfig::classic().with_speed_multiplier(-1.0), 1).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSpeedMultiplier { .. }));
}

#[test]
fn test_config_is_immutable_across_session() {
    let config = ModeConfig::speed(120);
    let mut session = Session::new(config.clone(), 7).unwrap();
    session.start();
    session.tick(5_000);
    assert_eq!(session.mode(), &config);
}

#[test]
fn test_valid_config_reaches_running() {
    let mut session = Session::new(ModeConfig::challenge(1), 99).unwrap();
    assert_eq!(session.phase(), Phase::Selecting);
    session.start();
    assert_eq!(session.phase(), Phase::Running);
}

#[test]
fn test_config_serde_round_trip() {
    let config = ModeConfig::challenge(25).with_drop_interval_ms(900);
    let json = serde_json::to_string(&config).unwrap();
    let back: ModeConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
