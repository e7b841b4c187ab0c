use easyclip_state::constants::{MAX_CLIP_LENGTH, MIN_CLIP_LENGTH, VIEW_DURATION_MAX};
use easyclip_state::{
    ActiveEdge, ClipRange, ClipTimeline, DragTarget, MediaHost, PointerInput, PreviewPlayer,
    ViewportWindow,
};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

#[derive(Debug, Clone)]
enum Gesture {
    Drag {
        target: DragTarget,
        start_x: f32,
        moves: Vec<f32>,
    },
    Seek(f64),
    Play(f64),
}

fn target() -> impl Strategy<Value = DragTarget> {
    prop_oneof![
        Just(DragTarget::LeftHandle),
        Just(DragTarget::RightHandle),
        Just(DragTarget::Range),
        Just(DragTarget::Playhead),
    ]
}

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        (
            target(),
            -200.0f32..1200.0,
            prop::collection::vec(-1500.0f32..1500.0, 1..8)
        )
            .prop_map(|(target, start_x, moves)| Gesture::Drag {
                target,
                start_x,
                moves,
            }),
        (0.0f64..1.0).prop_map(Gesture::Seek),
        (0.0f64..120.0).prop_map(Gesture::Play),
    ]
}

fn loaded(duration: f64, width: f32) -> ClipTimeline<PreviewPlayer> {
    let mut player = PreviewPlayer::new();
    player.load(duration);
    let mut timeline = ClipTimeline::new(player, width);
    timeline.pump_host_events();
    timeline
}

fn assert_settled(timeline: &ClipTimeline<PreviewPlayer>) -> Result<(), TestCaseError> {
    let clip = timeline.clip();
    let window = timeline.window();
    prop_assert!(clip.length() >= MIN_CLIP_LENGTH - EPS, "too short: {clip:?}");
    prop_assert!(clip.length() <= MAX_CLIP_LENGTH + EPS, "too long: {clip:?}");
    prop_assert!(window.start <= clip.start, "{clip:?} starts before {window:?}");
    prop_assert!(clip.start <= clip.end);
    prop_assert!(clip.end <= window.end, "{clip:?} ends after {window:?}");
    prop_assert!(window.start >= 0.0 && window.end <= timeline.duration() + EPS);
    Ok(())
}

proptest! {
    #[test]
    fn centering_keeps_span_and_reference(duration in 1.0f64..5000.0, frac in 0.0f64..=1.0) {
        let reference = duration * frac;
        let window = ViewportWindow::centered_on(reference, duration);
        let span = duration.min(VIEW_DURATION_MAX);
        prop_assert!((window.span() - span).abs() < EPS);
        prop_assert!(window.start >= 0.0);
        prop_assert!(window.end <= duration + EPS);
        prop_assert!(window.start <= reference + EPS && reference <= window.end + EPS);
    }

    #[test]
    fn clamp_to_window_is_idempotent(
        start in -500.0f64..1500.0,
        length in 0.0f64..400.0,
        window_start in 0.0f64..800.0,
        span in 0.0f64..=VIEW_DURATION_MAX,
        edge in prop_oneof![Just(ActiveEdge::Start), Just(ActiveEdge::End), Just(ActiveEdge::None)],
    ) {
        let window = ViewportWindow::new(window_start, window_start + span);
        let mut once = ClipRange::new(start, start + length);
        once.clamp_to_window(edge, window);
        let mut twice = once;
        twice.clamp_to_window(edge, window);
        prop_assert_eq!(once, twice);
        prop_assert!(window.start <= once.start && once.start <= once.end && once.end <= window.end);
    }

    #[test]
    fn every_settle_point_respects_invariants(
        duration in 20.0f64..3000.0,
        width in 120.0f32..2000.0,
        gestures in prop::collection::vec(gesture(), 1..12),
    ) {
        let mut timeline = loaded(duration, width);
        assert_settled(&timeline)?;

        for gesture in gestures {
            match gesture {
                Gesture::Drag { target, start_x, moves } => {
                    prop_assert!(timeline.on_drag_start(target, start_x));
                    let mut last = start_x;
                    for x in moves {
                        timeline.on_drag_move(x);
                        last = x;
                    }
                    timeline.on_drag_end(last);
                }
                Gesture::Seek(frac) => timeline.host_mut().seek(duration * frac),
                Gesture::Play(dt) => {
                    timeline.host_mut().play();
                    timeline.host_mut().advance(dt);
                    timeline.host_mut().pause();
                }
            }
            timeline.pump_host_events();
            prop_assert!(timeline.drag().is_idle());
            assert_settled(&timeline)?;
            let playhead = timeline.playhead();
            let window = timeline.window();
            prop_assert!(window.start - EPS <= playhead && playhead <= window.end + EPS);
        }
    }
}

#[test]
fn long_video_scenario() {
    let mut timeline = loaded(300.0, 560.0);
    assert_eq!(timeline.window(), ViewportWindow::new(0.0, 280.0));
    assert_eq!(timeline.clip(), ClipRange::new(0.0, 15.0));

    timeline.host_mut().seek(290.0);
    timeline.pump_host_events();
    assert_eq!(timeline.window(), ViewportWindow::new(20.0, 300.0));
    assert_eq!(timeline.clip(), ClipRange::new(290.0, 300.0));
}

#[test]
fn tiny_video_clip_spans_whole_timeline() {
    let mut timeline = loaded(3.0, 300.0);
    assert_eq!(timeline.clip(), ClipRange::new(0.0, 3.0));

    assert!(timeline.on_drag_start(DragTarget::LeftHandle, 0.0));
    timeline.on_drag_move(250.0);
    timeline.on_drag_end(250.0);
    timeline.pump_host_events();
    assert_eq!(timeline.clip(), ClipRange::new(0.0, 3.0));
    assert!(timeline.host().current_time().abs() < EPS);
}
