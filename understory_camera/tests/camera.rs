// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_camera` crate.
//!
//! These drive a `Camera` with a virtual-time `ManualScheduler`, delivering
//! frames the way a host event loop would.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use kurbo::Point;
use understory_camera::{
    AnimateError, AnimationOptions, Camera, CameraEvent, CameraState, CameraStatePatch,
    Dimensions, DimensionsPatch, Topic,
};
use understory_easing::{Curve, Easing};
use understory_timing::{FrameScheduler, ManualScheduler};

const FRAME: Duration = Duration::from_millis(16);

fn camera() -> Camera<ManualScheduler> {
    Camera::new(ManualScheduler::default())
}

/// Advances virtual time by `step` and delivers every pending frame.
fn tick(camera: &mut Camera<ManualScheduler>, step: Duration) {
    camera.scheduler_mut().advance(step);
    for frame in camera.scheduler_mut().take_frames() {
        camera.on_frame(frame);
    }
}

fn record_updates(camera: &mut Camera<ManualScheduler>) -> Rc<RefCell<Vec<CameraState>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    camera.on_updated(move |state| sink.borrow_mut().push(state));
    seen
}

fn linear(duration: Duration) -> AnimationOptions {
    AnimationOptions::default()
        .with_easing(Easing::Linear)
        .with_duration(duration)
}

#[test]
fn state_is_a_snapshot() {
    let mut camera = camera();
    let mut snapshot = camera.state();
    snapshot.x = 42.0;
    assert_eq!(camera.state(), CameraState::default());

    let mut dims = camera.dimensions();
    dims.width = 10.0;
    assert_eq!(camera.dimensions(), Dimensions::default());

    camera.set_state(CameraStatePatch::default().with_x(1.0));
    assert_eq!(snapshot.x, 42.0);
}

#[test]
fn set_state_merges_sparsely_and_chains() {
    let mut camera = camera();
    camera
        .set_state(CameraState::new(1.0, 2.0, 0.25, 3.0))
        .set_state(CameraStatePatch::default().with_y(-5.0))
        .resize(Dimensions::new(640.0, 480.0));

    assert_eq!(camera.state(), CameraState::new(1.0, -5.0, 0.25, 3.0));
    assert_eq!(camera.dimensions(), Dimensions::new(640.0, 480.0));
    assert_eq!(
        camera.previous_state(),
        Some(CameraState::new(1.0, 2.0, 0.25, 3.0))
    );
}

#[test]
fn resize_and_set_state_are_independent() {
    let mut camera = camera();
    camera.set_state(CameraState::new(3.0, 4.0, 1.0, 0.5));
    camera.resize(DimensionsPatch::default().with_width(300.0));
    assert_eq!(camera.state(), CameraState::new(3.0, 4.0, 1.0, 0.5));
    assert_eq!(camera.dimensions(), Dimensions::new(300.0, 0.0));

    camera.set_state(CameraStatePatch::default().with_ratio(9.0));
    assert_eq!(camera.dimensions(), Dimensions::new(300.0, 0.0));
}

#[test]
fn updated_fires_once_with_new_ratio() {
    let mut camera = camera();
    let seen = record_updates(&mut camera);

    camera.set_state(CameraStatePatch::default().with_ratio(2.0));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].ratio, 2.0);
}

#[test]
fn notifications_are_not_deduplicated() {
    let mut camera = camera();
    let updates = record_updates(&mut camera);
    let resizes = Rc::new(RefCell::new(0));
    let counter = resizes.clone();
    camera.on_resized(move |_| *counter.borrow_mut() += 1);

    camera.set_state(CameraStatePatch::EMPTY);
    camera.set_state(CameraStatePatch::EMPTY);
    camera.resize(DimensionsPatch::default());

    assert_eq!(updates.borrow().len(), 2);
    assert_eq!(*resizes.borrow(), 1);
}

#[test]
fn topics_share_registration_order_and_unsubscribe() {
    let mut camera = camera();
    let log = Rc::new(RefCell::new(Vec::new()));

    let first = log.clone();
    let a = camera.subscribe(Topic::Resized, move |e| first.borrow_mut().push(("a", *e)));
    let second = log.clone();
    camera.subscribe(Topic::Resized, move |e| second.borrow_mut().push(("b", *e)));
    let third = log.clone();
    camera.subscribe(Topic::Updated, move |e| third.borrow_mut().push(("c", *e)));

    let dims = Dimensions::new(10.0, 20.0);
    camera.resize(dims);
    assert_eq!(
        *log.borrow(),
        [("a", CameraEvent::Resized(dims)), ("b", CameraEvent::Resized(dims))]
    );

    assert!(camera.unsubscribe(a));
    assert!(!camera.unsubscribe(a));
    log.borrow_mut().clear();
    camera.resize(dims);
    assert_eq!(*log.borrow(), [("b", CameraEvent::Resized(dims))]);
}

#[test]
fn graph_origin_maps_to_surface_center() {
    let mut camera = camera();
    camera.resize(Dimensions::new(800.0, 600.0));
    assert_eq!(camera.graph_to_display(0.0, 0.0), Point::new(400.0, 300.0));
}

#[test]
fn transforms_are_not_inverses() {
    let mut camera = camera();
    camera.resize(Dimensions::new(800.0, 600.0));
    camera.set_state(CameraState::new(10.0, 20.0, 0.0, 1.0));

    // The display point for the camera position is the surface center, but
    // mapping it back does not subtract the center or add the position.
    let display = camera.graph_to_display(10.0, 20.0);
    assert_eq!(display, Point::new(400.0, 300.0));
    let back = camera.display_to_graph(display.x, display.y);
    assert_eq!(back, Point::new(400.0, 300.0));
    assert_ne!(back, Point::new(10.0, 20.0));
}

#[test]
fn transforms_read_the_live_state_mid_animation() {
    let mut camera = camera();
    camera.resize(Dimensions::new(200.0, 200.0));
    camera
        .animate(
            CameraStatePatch::default().with_x(100.0),
            linear(Duration::from_millis(100)),
        )
        .unwrap();

    tick(&mut camera, Duration::from_millis(50));
    assert_eq!(camera.state().x, 50.0);
    assert_eq!(camera.graph_to_display(50.0, 0.0), Point::new(100.0, 100.0));
}

#[test]
fn animate_returns_before_any_state_change() {
    let mut camera = camera();
    let seen = record_updates(&mut camera);
    camera
        .animate(CameraStatePatch::default().with_ratio(4.0), AnimationOptions::default())
        .unwrap();

    assert!(camera.is_animated());
    assert!(seen.borrow().is_empty());
    assert_eq!(camera.scheduler().pending(), 1);
}

#[test]
fn animation_terminates_on_exact_target() {
    let mut camera = camera();
    camera.set_state(CameraState::new(0.3, -7.0, 0.0, 1.0));
    let before = camera.state();

    let target = CameraStatePatch::default()
        .with_x(0.1 + 0.2)
        .with_angle(1.234_567)
        .with_ratio(1.0 / 3.0);
    camera.animate(target, AnimationOptions::default()).unwrap();

    let mut ticks = 0;
    while camera.is_animated() {
        tick(&mut camera, FRAME);
        ticks += 1;
        assert!(ticks < 100, "animation did not terminate");
    }

    assert_eq!(camera.state(), before.merged(&target));
    assert_eq!(camera.current_animation(), None);
    assert_eq!(camera.scheduler().pending(), 0);
}

#[test]
fn untargeted_fields_are_never_written() {
    let mut camera = camera();
    camera.set_state(CameraState::new(5.0, 6.0, 0.5, 2.0));
    let seen = record_updates(&mut camera);

    camera
        .animate(
            CameraStatePatch::default().with_x(50.0),
            AnimationOptions::default().with_duration(Duration::from_millis(64)),
        )
        .unwrap();
    while camera.is_animated() {
        tick(&mut camera, FRAME);
    }

    let seen = seen.borrow();
    assert!(seen.len() > 1);
    for state in seen.iter() {
        assert_eq!((state.y, state.angle, state.ratio), (6.0, 0.5, 2.0));
    }
}

#[test]
fn animation_progress_is_monotonic() {
    let mut camera = camera();
    camera
        .animate(
            CameraStatePatch::default().with_x(100.0).with_ratio(0.5),
            AnimationOptions::default()
                .with_easing(Easing::CubicInOut)
                .with_duration(Duration::from_millis(150)),
        )
        .unwrap();

    let mut last = camera.state();
    tick(&mut camera, Duration::from_millis(30));
    let mut steps = 0;
    while camera.is_animated() {
        let now = camera.state();
        assert!(now.x > last.x && now.x < 100.0, "{now:?} after {last:?}");
        assert!(now.ratio < last.ratio && now.ratio > 0.5, "{now:?} after {last:?}");
        last = now;
        steps += 1;
        tick(&mut camera, Duration::from_millis(30));
    }
    assert!(steps >= 3);
    assert_eq!((camera.state().x, camera.state().ratio), (100.0, 0.5));
}

#[test]
fn linear_frames_land_on_expected_values() {
    let mut camera = camera();
    camera
        .animate(
            CameraStatePatch::default().with_y(-100.0),
            linear(Duration::from_millis(200)),
        )
        .unwrap();

    tick(&mut camera, Duration::from_millis(50));
    assert_eq!(camera.state().y, -25.0);
    tick(&mut camera, Duration::from_millis(50));
    assert_eq!(camera.state().y, -50.0);
}

#[test]
fn restart_cancels_previous_animation() {
    let mut camera = camera();
    let seen = record_updates(&mut camera);

    let first = camera
        .animate(
            CameraStatePatch::default().with_x(1_000.0),
            linear(Duration::from_millis(100)),
        )
        .unwrap();
    tick(&mut camera, Duration::from_millis(20));
    let second = camera
        .animate(
            CameraStatePatch::default().with_x(-10.0),
            linear(Duration::from_millis(100)),
        )
        .unwrap();
    assert_ne!(first, second);
    assert_eq!(camera.current_animation(), Some(second));
    assert_eq!(camera.scheduler().pending(), 1);

    while camera.is_animated() {
        tick(&mut camera, FRAME);
    }

    let seen = seen.borrow();
    assert_eq!(camera.state().x, -10.0);
    assert!(seen.iter().all(|s| s.x != 1_000.0));
    assert_eq!(seen.iter().filter(|s| s.x == -10.0).count(), 1);
}

#[test]
fn zero_duration_completes_on_first_frame() {
    let mut camera = camera();
    camera
        .animate(
            CameraState::new(1.0, 2.0, 3.0, 4.0),
            AnimationOptions::default().with_duration(Duration::ZERO),
        )
        .unwrap();
    assert_eq!(camera.state(), CameraState::default());

    tick(&mut camera, Duration::ZERO);
    assert!(!camera.is_animated());
    assert_eq!(camera.state(), CameraState::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn stale_frames_are_ignored() {
    let mut camera = camera();
    let stale = camera.scheduler_mut().request_frame();
    assert!(!camera.on_frame(stale));

    camera
        .animate(CameraStatePatch::default().with_x(1.0), AnimationOptions::default())
        .unwrap();
    assert!(!camera.on_frame(stale));
    assert!(camera.is_animated());
    assert_eq!(camera.state().x, 0.0);
}

#[test]
fn explicit_cancel_only_stops_its_own_animation() {
    let mut camera = camera();
    let first = camera
        .animate(
            CameraStatePatch::default().with_x(100.0),
            linear(Duration::from_millis(100)),
        )
        .unwrap();
    let second = camera
        .animate(
            CameraStatePatch::default().with_x(200.0),
            linear(Duration::from_millis(100)),
        )
        .unwrap();

    assert!(!camera.cancel_animation(first));
    assert!(camera.is_animated());

    tick(&mut camera, Duration::from_millis(50));
    let halfway = camera.state();
    assert_eq!(halfway.x, 100.0);

    assert!(camera.cancel_animation(second));
    assert!(!camera.is_animated());
    assert_eq!(camera.scheduler().pending(), 0);

    tick(&mut camera, Duration::from_millis(100));
    assert_eq!(camera.state(), halfway);
    assert!(!camera.stop_animation());
}

#[test]
fn unknown_easing_leaves_running_animation_alone() {
    let mut camera = camera();
    let running = camera
        .animate(CameraStatePatch::default().with_x(1.0), AnimationOptions::default())
        .unwrap();

    let err = camera
        .animate(
            CameraStatePatch::default().with_x(2.0),
            AnimationOptions::default().with_easing("elasticOut"),
        )
        .unwrap_err();
    assert!(matches!(err, AnimateError::UnknownEasing(ref e) if e.name() == "elasticOut"));
    assert_eq!(camera.current_animation(), Some(running));
}

#[test]
fn custom_easings_resolve_by_name() {
    let mut camera = camera();
    camera
        .easings_mut()
        .register("hold", Curve::custom(|_| 0.0));
    camera
        .animate(
            CameraStatePatch::default().with_x(10.0),
            AnimationOptions::default()
                .with_easing("hold")
                .with_duration(Duration::from_millis(100)),
        )
        .unwrap();

    tick(&mut camera, Duration::from_millis(50));
    assert_eq!(camera.state().x, 0.0);
    tick(&mut camera, Duration::from_millis(50));
    assert_eq!(camera.state().x, 10.0);
}

#[test]
fn animated_zoom_unzoom_and_reset() {
    let mut camera = camera();
    camera.set_state(CameraState::new(5.0, 5.0, 0.3, 3.0));

    camera.animated_zoom(1.5).unwrap();
    while camera.is_animated() {
        tick(&mut camera, FRAME);
    }
    assert_eq!(camera.state().ratio, 3.0 / 1.5);

    camera.animated_unzoom(2.0).unwrap();
    while camera.is_animated() {
        tick(&mut camera, FRAME);
    }
    assert_eq!(camera.state().ratio, 3.0 / 1.5 * 2.0);
    assert_eq!(camera.state().x, 5.0);

    camera.animated_reset().unwrap();
    while camera.is_animated() {
        tick(&mut camera, FRAME);
    }
    assert_eq!(camera.state(), CameraState::default());
}

#[test]
fn debug_info_reflects_animation() {
    let mut camera = camera();
    camera.on_resized(|_| {});
    let id = camera
        .animate(CameraStatePatch::default().with_x(1.0), AnimationOptions::default())
        .unwrap();

    let info = camera.debug_info();
    assert_eq!(info.animation, Some(id));
    assert!(info.pending_frame.is_some());
    assert_eq!(info.subscribers, 1);
    assert_eq!(info.previous_state, None);
}
