use glam::DVec2;
use snake_curve::app::{sample_window, tick};
use snake_curve::{
    Circle, CircleCurve, CurveTexture, DebugOverlay, RandomCircleGenerator,
    SequenceCircleGenerator, SnakeController, SnakeOptions, SnakeState,
};

fn seeded_options(seed: u64) -> SnakeOptions {
    SnakeOptions {
        seed: Some(seed),
        sample_points: 48,
        ..SnakeOptions::default()
    }
}

#[test]
fn test_controller_runs_many_frames_without_error() {
    let mut controller =
        SnakeController::new(seeded_options(77)).expect("Controller sollte starten");
    let delta = controller.options().frame_delta();

    for frame in 0..600 {
        let snake_frame = controller
            .advance(delta)
            .unwrap_or_else(|e| panic!("Frame {frame} fehlgeschlagen: {e:#}"));
        assert_eq!(snake_frame.points.len(), 48);
        assert!(snake_frame.points.iter().all(|p| p.is_finite()));

        let total = controller.curve().total_length().unwrap();
        let state = controller.state();
        assert!(state.head <= total + 1e-9);
        assert!(state.tail >= -1e-9);
        assert!(controller.curve().len() >= 3);
    }
}

#[test]
fn test_window_length_stays_constant() {
    let mut controller = SnakeController::new(seeded_options(5)).unwrap();
    let length = controller.state().length;
    for _ in 0..200 {
        let frame = controller.advance(1.0 / 30.0).unwrap();
        assert!((frame.state.head - frame.state.tail - length).abs() < 1e-9);
        assert_eq!(frame.state.length, length);
    }
}

#[test]
fn test_circle_list_stays_bounded() {
    let mut controller = SnakeController::new(seeded_options(9)).unwrap();
    let mut max_len = 0;
    for _ in 0..1000 {
        controller.advance(1.0 / 60.0).unwrap();
        max_len = max_len.max(controller.curve().len());
    }
    // Es wird vorne entfernt, was hinten angehängt wird
    assert!(max_len < 100, "Kreisliste wächst unbegrenzt: {max_len}");
}

#[test]
fn test_tick_with_fixed_layout() {
    let options = SnakeOptions::default();
    let circles: Vec<Circle> = (0..4)
        .map(|i| Circle::new(DVec2::new(i as f64 * 3.0, 0.0), 1.0, i % 2 == 0))
        .collect();
    let mut curve = CircleCurve::new(circles);
    let mut generator = SequenceCircleGenerator::new([]);
    let mut state = SnakeState::for_curve(&curve, 0.5).unwrap();

    for _ in 0..50 {
        state = tick(state, &mut curve, 0.1, &options, &mut generator).unwrap();
        let points = sample_window(&state, &curve, 16).unwrap();
        assert_eq!(points.len(), 16);
    }
    // Alle Kreise liegen weiterhin auf der x-Achse im 3er-Raster
    for circle in curve.circles() {
        assert_eq!(circle.center.y, 0.0);
        assert_eq!(circle.center.x % 3.0, 0.0);
    }
}

#[test]
fn test_circle_limit_per_tick_is_respected() {
    let options = SnakeOptions {
        max_circles_per_tick: 2,
        ..SnakeOptions::default()
    };
    let mut curve = CircleCurve::default();
    let mut generator = RandomCircleGenerator::new(3, options.generator);
    let state = SnakeState::initial(0.0, 0.8);
    tick(state, &mut curve, 0.0, &options, &mut generator).unwrap();
    assert_eq!(curve.len(), 2);
}

#[test]
fn test_frame_feeds_render_buffers() {
    let mut controller = SnakeController::new(seeded_options(12)).unwrap();
    let frame = controller.advance(1.0 / 60.0).unwrap();

    let texture = CurveTexture::from_points(&frame.points);
    assert_eq!(texture.width(), 48);
    assert_eq!(texture.as_floats().len(), 96);
    assert!(texture.as_floats().iter().all(|v| v.is_finite()));

    let overlay = DebugOverlay::for_curve(controller.curve()).unwrap();
    assert!(overlay.triangle_count() > 0);
    assert_eq!(overlay.as_floats().len(), overlay.triangle_count() * 9);
}
