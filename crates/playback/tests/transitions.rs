//! Property tests for the pure transition function.
//!
//! These exercise `apply` directly: no collaborators, no async.

#![allow(clippy::arithmetic_side_effects)]

use playback::{apply, ControlEvent, EngineCommand, PlaybackStatus, PlayerState};
use proptest::prelude::*;

fn any_status() -> impl Strategy<Value = PlaybackStatus> {
    prop_oneof![
        Just(PlaybackStatus::Stopped),
        Just(PlaybackStatus::Playing),
        Just(PlaybackStatus::Paused),
    ]
}

fn any_event() -> impl Strategy<Value = ControlEvent> {
    prop_oneof![
        Just(ControlEvent::Stop),
        Just(ControlEvent::PlayOrResume),
        Just(ControlEvent::Pause),
        Just(ControlEvent::SkipNext),
        Just(ControlEvent::SkipPrev),
        Just(ControlEvent::ClickNext),
        Just(ControlEvent::LongPressNext),
        Just(ControlEvent::ClickPrev),
        Just(ControlEvent::ClickPlayPause),
        Just(ControlEvent::TrackFinished),
        (0usize..16).prop_map(ControlEvent::Select),
    ]
}

/// Playing state over `len` tracks with the cursor at `cursor % len`.
fn playing_at(len: usize, cursor: usize) -> PlayerState {
    let state = PlayerState::new(len);
    state
        .selecting(cursor % len)
        .unwrap_or(state)
        .with_status(PlaybackStatus::Playing)
}

proptest! {
    #[test]
    fn next_n_times_returns_to_start(len in 1usize..64) {
        let mut state = playing_at(len, 0);
        for _ in 0..len {
            state = apply(state, ControlEvent::ClickNext, true).0;
        }
        prop_assert_eq!(state.cursor(), 0);
        prop_assert_eq!(state.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn prev_from_first_lands_on_last(len in 1usize..64) {
        let (state, commands) = apply(playing_at(len, 0), ControlEvent::ClickPrev, true);
        prop_assert_eq!(state.cursor(), len - 1);
        prop_assert_eq!(
            commands.as_slice(),
            [EngineCommand::Stop, EngineCommand::Begin { index: len - 1 }]
        );
    }

    #[test]
    fn next_then_prev_is_identity(len in 1usize..64, cursor in 0usize..64) {
        let start = playing_at(len, cursor);
        let (after_next, _) = apply(start, ControlEvent::SkipNext, true);
        let (back, _) = apply(after_next, ControlEvent::SkipPrev, true);
        prop_assert_eq!(back, start);
    }

    #[test]
    fn next_while_stopped_keeps_cursor(len in 1usize..64, cursor in 0usize..64) {
        let start = playing_at(len, cursor).with_status(PlaybackStatus::Stopped);
        let (state, commands) = apply(start, ControlEvent::ClickNext, true);
        prop_assert_eq!(state.cursor(), start.cursor());
        prop_assert_eq!(state.status(), PlaybackStatus::Playing);
        prop_assert_eq!(commands.as_slice(), [EngineCommand::Begin { index: start.cursor() }]);
    }

    #[test]
    fn double_pause_restores_playing(len in 1usize..64, cursor in 0usize..64) {
        let start = playing_at(len, cursor);
        let (once, _) = apply(start, ControlEvent::Pause, true);
        let (twice, _) = apply(once, ControlEvent::Pause, true);
        prop_assert_eq!(once.status(), PlaybackStatus::Paused);
        prop_assert_eq!(twice, start);
    }

    #[test]
    fn pause_when_stopped_is_noop(len in 0usize..64, connected in any::<bool>()) {
        let start = PlayerState::new(len);
        let (state, commands) = apply(start, ControlEvent::Pause, connected);
        prop_assert_eq!(state, start);
        prop_assert!(commands.is_empty());
    }

    #[test]
    fn empty_playlist_never_commands_engine(
        status in any_status(),
        event in any_event(),
        connected in any::<bool>(),
    ) {
        let start = PlayerState::new(0).with_status(status);
        let (_, commands) = apply(start, event, connected);
        prop_assert!(commands
            .iter()
            .all(|c| matches!(c, EngineCommand::Stop)));
    }

    #[test]
    fn no_begin_or_pause_without_link(
        len in 1usize..16,
        cursor in 0usize..16,
        status in any_status(),
        event in any_event(),
    ) {
        let start = playing_at(len, cursor).with_status(status);
        let (_, commands) = apply(start, event, false);
        prop_assert!(commands
            .iter()
            .all(|c| matches!(c, EngineCommand::Stop)));
    }

    #[test]
    fn cursor_always_in_range(
        len in 1usize..16,
        events in proptest::collection::vec(any_event(), 0..64),
    ) {
        let mut state = PlayerState::new(len);
        for event in events {
            state = apply(state, event, true).0;
            prop_assert!(state.cursor() < len);
        }
    }

    #[test]
    fn stop_twice_emits_one_engine_stop(len in 1usize..16, status in any_status()) {
        let start = playing_at(len, 0).with_status(status);
        let (once, first) = apply(start, ControlEvent::Stop, true);
        let (_, second) = apply(once, ControlEvent::Stop, true);
        prop_assert_eq!(once.status(), PlaybackStatus::Stopped);
        prop_assert!(second.is_empty());
        prop_assert_eq!(first.len(), usize::from(status != PlaybackStatus::Stopped));
    }
}
