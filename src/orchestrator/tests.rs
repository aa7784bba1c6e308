// src/orchestrator/tests.rs

use super::*;
use crate::backends::mock::{MockScreen, RecordingSink};
use crate::geometry::GeomValue;
use crate::msg_level::LogLevel;
use crate::properties::MapPropertyStore;

// --- Test Helpers ---

fn store(entries: &[(&str, &str)]) -> MapPropertyStore {
    let mut store = MapPropertyStore::new();
    for (name, value) in entries {
        store.set(name, *value);
    }
    store
}

fn with_video(mut store: MapPropertyStore, width: i64, height: i64) -> MapPropertyStore {
    store.set(VIDEO_WIDTH_PROPERTY, width);
    store.set(VIDEO_HEIGHT_PROPERTY, height);
    store
}

/// Runs the given events against a fresh orchestrator and returns what the sink saw.
fn run(properties: &MapPropertyStore, screen: &MockScreen, events: &[SizingEvent]) -> Vec<WindowAction> {
    let mut sink = RecordingSink::new();
    {
        let mut orchestrator =
            SizingOrchestrator::new(properties, screen, &mut sink, Config::default());
        for event in events {
            orchestrator
                .handle_event(*event)
                .expect("recording sink never fails");
        }
    }
    sink.take_actions()
}

const RECONFIGURED: SizingEvent = SizingEvent::VideoReconfigured { new_file: true };

fn resize(width: i64, height: i64) -> WindowAction {
    WindowAction::Resize { width, height }
}

// --- Ready ---

#[test_log::test]
fn ready_emits_move_and_resize_for_full_geometry() {
    let properties = store(&[(GEOMETRY_PROPERTY, "800x600+10+20")]);
    let screen = MockScreen::new(1920, 1080);
    let actions = run(&properties, &screen, &[SizingEvent::Ready]);
    assert_eq!(
        actions,
        vec![
            WindowAction::Move {
                flip_x: false,
                flip_y: false,
                x: GeomValue::Pixels(10),
                y: GeomValue::Pixels(20),
            },
            resize(800, 600),
            WindowAction::RequestLogMessages(LogLevel::Error),
        ]
    );
}

#[test_log::test]
fn ready_with_position_only_does_not_resize() {
    let properties = store(&[(GEOMETRY_PROPERTY, "-0-0")]);
    let screen = MockScreen::new(1920, 1080);
    let actions = run(&properties, &screen, &[SizingEvent::Ready]);
    assert_eq!(
        actions[0],
        WindowAction::Move {
            flip_x: true,
            flip_y: true,
            x: GeomValue::Pixels(0),
            y: GeomValue::Pixels(0),
        }
    );
    assert!(!actions.iter().any(|a| matches!(a, WindowAction::Resize { .. })));
}

#[test_log::test]
fn ready_with_percentage_size_uses_current_screen() {
    let properties = store(&[(GEOMETRY_PROPERTY, "50%x")]);
    let screen = MockScreen::new(1920, 1080);
    let actions = run(&properties, &screen, &[SizingEvent::Ready]);
    assert_eq!(actions[0], resize(960, 540));

    screen.extent.set(Some(ScreenExtent {
        width: 1280,
        height: 1024,
    }));
    let actions = run(&properties, &screen, &[SizingEvent::Ready]);
    assert_eq!(actions[0], resize(640, 512));
    assert_eq!(screen.queries.get(), 2);
}

#[test_log::test]
fn ready_with_malformed_geometry_emits_no_window_actions() {
    let properties = store(&[(GEOMETRY_PROPERTY, "huge+++1")]);
    let screen = MockScreen::new(1920, 1080);
    let actions = run(&properties, &screen, &[SizingEvent::Ready]);
    assert_eq!(actions, vec![WindowAction::RequestLogMessages(LogLevel::Error)]);
}

#[test_log::test]
fn ready_with_unavailable_screen_still_applies_pixel_sizes() {
    let screen = MockScreen::unavailable();

    let properties = store(&[(GEOMETRY_PROPERTY, "800x600")]);
    assert_eq!(run(&properties, &screen, &[SizingEvent::Ready])[0], resize(800, 600));

    let properties = store(&[(GEOMETRY_PROPERTY, "50%x50%")]);
    let actions = run(&properties, &screen, &[SizingEvent::Ready]);
    assert!(!actions.iter().any(|a| matches!(a, WindowAction::Resize { .. })));
}

#[test_log::test]
fn ready_enters_fullscreen_only_for_trigger_value() {
    let screen = MockScreen::new(1920, 1080);

    let properties = store(&[(FULLSCREEN_PROPERTY, "yes")]);
    let actions = run(&properties, &screen, &[SizingEvent::Ready]);
    assert!(actions.contains(&WindowAction::EnterFullscreen));

    let properties = store(&[(FULLSCREEN_PROPERTY, "no")]);
    let actions = run(&properties, &screen, &[SizingEvent::Ready]);
    assert!(!actions.contains(&WindowAction::EnterFullscreen));
}

#[test_log::test]
fn ready_requests_log_level_from_msg_level() {
    let properties = store(&[(MSG_LEVEL_PROPERTY, "all=v,ffmpeg=debug")]);
    let screen = MockScreen::new(1920, 1080);
    let mut sink = RecordingSink::new();
    let mut orchestrator = SizingOrchestrator::new(&properties, &screen, &mut sink, Config::default());

    orchestrator.handle_event(SizingEvent::Ready).unwrap();
    assert_eq!(orchestrator.log_levels().entries().len(), 1);
    assert_eq!(orchestrator.log_levels().min_level(), LogLevel::Debug);

    // Rebuilt, not appended, on the next Ready.
    orchestrator.handle_event(SizingEvent::Ready).unwrap();
    assert_eq!(orchestrator.log_levels().entries().len(), 1);

    drop(orchestrator);
    assert_eq!(
        sink.actions(),
        &[
            WindowAction::RequestLogMessages(LogLevel::Debug),
            WindowAction::RequestLogMessages(LogLevel::Debug),
        ]
    );
}

#[test_log::test]
fn ready_uses_configured_default_msg_level() {
    let properties = MapPropertyStore::new();
    let screen = MockScreen::new(1920, 1080);
    let mut sink = RecordingSink::new();
    let mut config = Config::default();
    config.logging.default_msg_level = LogLevel::Warn;
    {
        let mut orchestrator = SizingOrchestrator::new(&properties, &screen, &mut sink, config);
        orchestrator.handle_event(SizingEvent::Ready).unwrap();
    }
    assert_eq!(sink.actions(), &[WindowAction::RequestLogMessages(LogLevel::Warn)]);
}

// --- VideoReconfigured ---

#[test_log::test]
fn reconfigure_applies_window_scale() {
    let properties = with_video(store(&[(WINDOW_SCALE_PROPERTY, "2.0")]), 640, 480);
    let screen = MockScreen::new(1920, 1080);
    assert_eq!(run(&properties, &screen, &[RECONFIGURED]), vec![resize(1280, 960)]);
}

#[test_log::test]
fn reconfigure_autofit_overrides_window_scale() {
    let properties = with_video(
        store(&[(WINDOW_SCALE_PROPERTY, "3"), (AUTOFIT_PROPERTY, "1280x720")]),
        640,
        480,
    );
    let screen = MockScreen::new(1920, 1080);
    assert_eq!(run(&properties, &screen, &[RECONFIGURED]), vec![resize(960, 720)]);
}

#[test_log::test]
fn reconfigure_autofit_with_bounds() {
    let properties = with_video(
        store(&[
            (AUTOFIT_PROPERTY, "100%x100%"),
            (AUTOFIT_LARGER_PROPERTY, "50%x50%"),
            (AUTOFIT_SMALLER_PROPERTY, "320x240"),
        ]),
        1920,
        1080,
    );
    let screen = MockScreen::new(1920, 1080);
    assert_eq!(run(&properties, &screen, &[RECONFIGURED]), vec![resize(960, 540)]);
}

#[test_log::test]
fn reconfigure_without_directives_emits_nothing() {
    let properties = with_video(MapPropertyStore::new(), 640, 480);
    let screen = MockScreen::new(1920, 1080);
    assert!(run(&properties, &screen, &[RECONFIGURED]).is_empty());
    assert_eq!(screen.queries.get(), 0);
}

#[test_log::test]
fn reconfigure_with_unknown_video_emits_nothing() {
    let properties = store(&[(WINDOW_SCALE_PROPERTY, "2"), (AUTOFIT_PROPERTY, "800x600")]);
    let screen = MockScreen::new(1920, 1080);
    assert!(run(&properties, &screen, &[RECONFIGURED]).is_empty());

    let properties = with_video(properties, 0, 0);
    assert!(run(&properties, &screen, &[RECONFIGURED]).is_empty());
}

#[test_log::test]
fn reconfigure_with_invalid_scale_emits_nothing() {
    let properties = with_video(store(&[(WINDOW_SCALE_PROPERTY, "double")]), 640, 480);
    let screen = MockScreen::new(1920, 1080);
    assert!(run(&properties, &screen, &[RECONFIGURED]).is_empty());
}

#[test_log::test]
fn reconfigure_without_new_file_is_ignored() {
    let properties = with_video(store(&[(WINDOW_SCALE_PROPERTY, "2.0")]), 640, 480);
    let screen = MockScreen::new(1920, 1080);
    let actions = run(
        &properties,
        &screen,
        &[SizingEvent::VideoReconfigured { new_file: false }],
    );
    assert!(actions.is_empty());
}

#[test_log::test]
fn reconfigure_ignores_geometry_position() {
    let properties = with_video(store(&[(GEOMETRY_PROPERTY, "800x600+10+20")]), 640, 480);
    let screen = MockScreen::new(1920, 1080);
    assert!(run(&properties, &screen, &[RECONFIGURED]).is_empty());
}

#[test_log::test]
fn repeated_passes_are_identical() {
    let properties = with_video(
        store(&[
            (GEOMETRY_PROPERTY, "50%x50%-10+10"),
            (WINDOW_SCALE_PROPERTY, "1.5"),
            (AUTOFIT_PROPERTY, "1000x1000"),
        ]),
        1280,
        720,
    );
    let screen = MockScreen::new(1920, 1080);
    let events = [SizingEvent::Ready, RECONFIGURED];
    let first = run(&properties, &screen, &events);
    let second = run(&properties, &screen, &[SizingEvent::Ready, RECONFIGURED, SizingEvent::Ready, RECONFIGURED]);
    assert_eq!(first.len(), 4);
    assert_eq!(first[3], resize(1000, 562));
    assert_eq!(second[..first.len()], first[..]);
    assert_eq!(second[first.len()..], first[..]);
}

#[test_log::test]
fn sink_failure_is_reported() {
    let properties = store(&[(GEOMETRY_PROPERTY, "800x600")]);
    let screen = MockScreen::new(1920, 1080);
    let mut sink = RecordingSink::new();
    sink.fail = true;
    let mut orchestrator = SizingOrchestrator::new(&properties, &screen, &mut sink, Config::default());
    assert!(orchestrator.handle_event(SizingEvent::Ready).is_err());
}
