use super::*;

fn run_frames(parallax: &mut Parallax, frames: usize) {
    for _ in 0..frames {
        parallax.tick(16.0);
    }
}

#[test]
fn starts_at_rest_with_identity_transform() {
    let parallax = Parallax::default();
    assert_eq!(parallax.state(), ParallaxState::AtRest);
    assert!(!parallax.is_animating());
    assert_eq!(parallax.transform(), "translate3d(0px, 0px, 0) scale(1)");
}

#[test]
fn tick_at_rest_is_noop() {
    let mut parallax = Parallax::default();
    parallax.tick(16.0);
    assert_eq!(parallax.offset(), Offset::REST);
}

#[test]
fn move_starts_tracking_against_pointer() {
    let mut parallax = Parallax::default();
    parallax.pointer_move(10.0, -4.0);
    assert_eq!(parallax.state(), ParallaxState::Tracking { moved_x: 10.0, moved_y: -4.0 });
    assert_eq!(parallax.target(), Offset { x: -10.0, y: 4.0, scale: 1.0 });
    assert!(parallax.is_animating());
}

#[test]
fn moves_accumulate_while_tracking() {
    let mut parallax = Parallax::default();
    parallax.pointer_move(10.0, 0.0);
    parallax.pointer_move(5.0, 2.0);
    assert_eq!(parallax.target(), Offset { x: -15.0, y: -2.0, scale: 1.0 });
}

#[test]
fn offset_approaches_target_over_frames() {
    let mut parallax = Parallax::default();
    parallax.pointer_move(44.0, 0.0);
    parallax.tick(16.0);
    let early = parallax.offset().x;
    assert!(early < 0.0 && early > -44.0, "early offset {early}");
    run_frames(&mut parallax, 300);
    assert!((parallax.offset().x + 44.0).abs() < 0.01);
    assert!(!parallax.is_animating());
    assert_eq!(parallax.transform(), "translate3d(-2px, 0px, 0) scale(1)");
}

#[test]
fn leave_returns_and_settles_at_rest() {
    let mut parallax = Parallax::default();
    parallax.pointer_move(30.0, 30.0);
    run_frames(&mut parallax, 10);
    parallax.pointer_leave();
    assert_eq!(parallax.state(), ParallaxState::Returning);
    assert_eq!(parallax.target(), Offset::REST);
    run_frames(&mut parallax, 300);
    assert_eq!(parallax.state(), ParallaxState::AtRest);
    assert_eq!(parallax.offset(), Offset::REST);
    assert_eq!(parallax.transform(), "translate3d(0px, 0px, 0) scale(1)");
}

#[test]
fn leave_at_rest_stays_at_rest() {
    let mut parallax = Parallax::default();
    parallax.pointer_leave();
    assert_eq!(parallax.state(), ParallaxState::AtRest);
}

#[test]
fn move_while_returning_restarts_accumulation() {
    let mut parallax = Parallax::default();
    parallax.pointer_move(50.0, 0.0);
    parallax.pointer_leave();
    parallax.pointer_move(3.0, 1.0);
    assert_eq!(parallax.state(), ParallaxState::Tracking { moved_x: 3.0, moved_y: 1.0 });
}

#[test]
fn long_frame_gap_is_capped() {
    let mut capped = Parallax::default();
    let mut stepped = Parallax::default();
    capped.pointer_move(100.0, 0.0);
    stepped.pointer_move(100.0, 0.0);
    capped.tick(10_000.0);
    stepped.tick(64.0);
    assert_eq!(capped.offset(), stepped.offset());
}
