use super::*;

fn pose(kind: ShapeKind, x: i32) -> ShapeSnapshot {
    ShapeSnapshot::from_raw(kind, x, 0, 10, 10, 0, 0, 0).unwrap()
}

fn motion(kind: ShapeKind, start: Tick, end: Tick) -> Motion {
    Motion::new(start, end, pose(kind, 0), pose(kind, 100)).unwrap()
}

fn with_chain(anim: &mut Animation, name: &str, kind: ShapeKind, bounds: &[Tick]) {
    anim.declare_shape(name, kind).unwrap();
    for w in bounds.windows(2) {
        anim.add_motion(name, motion(kind, w[0], w[1])).unwrap();
    }
}

#[test]
fn operations_on_undeclared_names_fail() {
    let mut anim = Animation::new();
    assert!(matches!(
        anim.add_motion("ghost", motion(ShapeKind::Rectangle, 0, 1)),
        Err(MotionlineError::UnknownShape { .. })
    ));
    assert!(anim.sequence_for("ghost").is_err());
    assert!(anim.delete_motion("ghost", 0).is_err());
    assert!(anim.change_speed_anchor_start_point("ghost", 0, 1).is_err());
    assert!(anim.shape_type("ghost").is_err());
}

#[test]
fn duplicate_declaration_is_rejected_by_default() {
    let mut anim = Animation::new();
    with_chain(&mut anim, "R", ShapeKind::Rectangle, &[0, 10]);
    let err = anim.declare_shape("R", ShapeKind::Ellipse).unwrap_err();
    assert!(matches!(err, MotionlineError::DuplicateName { .. }));
    assert_eq!(anim.shape_type("R").unwrap(), ShapeKind::Rectangle);
    assert_eq!(anim.sequence_for("R").unwrap().len(), 1);
}

#[test]
fn replace_policy_restarts_the_shape() {
    let mut anim = Animation::with_opts(AnimationOpts {
        duplicate_shapes: DuplicatePolicy::Replace,
    });
    with_chain(&mut anim, "A", ShapeKind::Rectangle, &[0, 10]);
    with_chain(&mut anim, "B", ShapeKind::Rectangle, &[0, 10]);
    anim.declare_shape("A", ShapeKind::Ellipse).unwrap();

    assert_eq!(anim.shape_type("A").unwrap(), ShapeKind::Ellipse);
    assert!(anim.sequence_for("A").unwrap().is_empty());
    assert!(matches!(
        anim.add_motion("A", motion(ShapeKind::Rectangle, 0, 5)),
        Err(MotionlineError::TypeMismatch { .. })
    ));
    let names: Vec<_> = anim.registry().iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn declared_but_motionless_shape_has_empty_sequence() {
    let mut anim = Animation::new();
    anim.declare_shape("R", ShapeKind::Rectangle).unwrap();
    assert!(anim.sequence_for("R").unwrap().is_empty());
    assert!(anim.query().is_empty());
    assert_eq!(anim.total_length(), 0);
    assert_eq!(anim.global_start_time(), 0);
}

#[test]
fn query_sorts_stably_by_first_start_tick() {
    let mut anim = Animation::new();
    with_chain(&mut anim, "late", ShapeKind::Rectangle, &[20, 30]);
    with_chain(&mut anim, "tie_a", ShapeKind::Ellipse, &[5, 6]);
    anim.declare_shape("empty", ShapeKind::Rectangle).unwrap();
    with_chain(&mut anim, "tie_b", ShapeKind::Rectangle, &[5, 50]);
    with_chain(&mut anim, "early", ShapeKind::Rectangle, &[1, 2]);

    let q = anim.query();
    let names: Vec<&str> = q.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["early", "tie_a", "tie_b", "late"]);
    assert_eq!(q["tie_b"][0].end_tick(), 50);
}

#[test]
fn query_reflects_head_insertions() {
    let mut anim = Animation::new();
    with_chain(&mut anim, "A", ShapeKind::Rectangle, &[10, 20]);
    with_chain(&mut anim, "B", ShapeKind::Rectangle, &[5, 20]);
    anim.add_motion("A", motion(ShapeKind::Rectangle, 0, 10))
        .unwrap();
    let names: Vec<String> = anim.query().keys().cloned().collect();
    assert_eq!(names, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(anim.global_start_time(), 0);
}

#[test]
fn total_length_is_latest_end_tick() {
    let mut anim = Animation::new();
    with_chain(&mut anim, "A", ShapeKind::Rectangle, &[0, 10, 30]);
    with_chain(&mut anim, "B", ShapeKind::Rectangle, &[15, 45]);
    assert_eq!(anim.total_length(), 45);
}

#[test]
fn global_start_time_is_first_start_of_first_sorted_shape() {
    let mut anim = Animation::new();
    with_chain(&mut anim, "A", ShapeKind::Rectangle, &[12, 30]);
    with_chain(&mut anim, "B", ShapeKind::Rectangle, &[7, 9]);
    with_chain(&mut anim, "C", ShapeKind::Rectangle, &[9, 40]);
    assert_eq!(anim.global_start_time(), 7);

    anim.delete_motion("B", 7).unwrap();
    assert_eq!(anim.global_start_time(), 9);
}

#[test]
fn queries_are_detached_from_later_edits() {
    let mut anim = Animation::new();
    with_chain(&mut anim, "R", ShapeKind::Rectangle, &[0, 10, 20]);
    let q = anim.query();
    let seq = anim.sequence_for("R").unwrap();
    let found = anim.find_by_start("R", 0).unwrap();

    anim.change_color("R", 0, Color::rgb(9, 9, 9)).unwrap();
    anim.change_speed_anchor_start_point("R", 0, 5).unwrap();

    assert_eq!(q["R"][0].end_tick(), 10);
    assert_eq!(seq[1].start_tick(), 10);
    assert_eq!(found.end_shape().color(), Color::rgb(0, 0, 0));
    assert_eq!(anim.find_by_start("R", 5).unwrap().end_tick(), 15);
}

#[test]
fn routed_edits_and_lookups() {
    let mut anim = Animation::new();
    with_chain(&mut anim, "R", ShapeKind::Rectangle, &[0, 10, 20, 30]);

    anim.change_position("R", 10, Position::new(1, 2)).unwrap();
    anim.change_size("R", 10, 3, 4).unwrap();
    let m = anim.find_exact("R", 10, 20).unwrap();
    assert_eq!(m.end_shape().position(), Position::new(1, 2));
    assert_eq!(anim.find_by_end("R", 30).unwrap().start_tick(), 20);

    anim.change_speed_anchor_end_point("R", 30, 25).unwrap();
    let spans: Vec<_> = anim
        .sequence_for("R")
        .unwrap()
        .iter()
        .map(|m| (m.start_tick(), m.end_tick()))
        .collect();
    assert_eq!(spans, vec![(5, 15), (15, 25), (25, 30)]);

    let removed = anim.delete_motion("R", 15).unwrap();
    assert_eq!(removed.len(), 2);
    assert_eq!(anim.total_length(), 15);
}

#[test]
fn keyframes_route_through_the_named_timeline() {
    let mut anim = Animation::new();
    anim.declare_shape("R", ShapeKind::Rectangle).unwrap();
    anim.add_keyframe("R", &Keyframe::new(5, pose(ShapeKind::Rectangle, 3)))
        .unwrap();
    let err = anim
        .add_keyframe("R", &Keyframe::new(6, pose(ShapeKind::Ellipse, 3)))
        .unwrap_err();
    assert!(matches!(err, MotionlineError::TypeMismatch { .. }));
    assert_eq!(anim.total_length(), 6);
}

#[test]
fn frame_at_samples_visible_shapes_in_query_order() {
    let mut anim = Animation::new();
    with_chain(&mut anim, "B", ShapeKind::Rectangle, &[5, 15]);
    with_chain(&mut anim, "A", ShapeKind::Rectangle, &[0, 10]);

    let frame = anim.frame_at(5);
    assert_eq!(frame.len(), 2);
    assert_eq!(frame[0].0, "A");
    assert_eq!(frame[0].1.position().x, 50);
    assert_eq!(frame[1].0, "B");
    assert_eq!(frame[1].1.position().x, 0);

    let late = anim.frame_at(12);
    assert_eq!(late.len(), 1);
    assert_eq!(late[0].0, "B");
    assert!(anim.frame_at(100).is_empty());
}

#[test]
fn describe_lists_canvas_shapes_and_motions() {
    let mut anim = Animation::new();
    anim.set_bounds(Canvas {
        x: 0,
        y: 0,
        width: 100,
        height: 50,
    });
    anim.declare_shape("idle", ShapeKind::Ellipse).unwrap();
    with_chain(&mut anim, "R", ShapeKind::Rectangle, &[0, 10]);

    let text = anim.describe();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "canvas 0 0 100 50",
            "shape R rectangle",
            "motion R 0 0 0 10 10 0 0 0    10 100 0 10 10 0 0 0",
            "shape idle ellipse",
        ]
    );
}

#[test]
fn json_document_carries_timing_and_shapes() {
    let mut anim = Animation::new();
    with_chain(&mut anim, "R", ShapeKind::Rectangle, &[3, 10, 20]);
    let v = anim.to_json_value().unwrap();
    assert_eq!(v["total_length"], 20);
    assert_eq!(v["global_start_time"], 3);
    assert_eq!(v["shapes"][0]["name"], "R");
    assert_eq!(v["shapes"][0]["kind"], "rectangle");
    assert_eq!(v["shapes"][0]["motions"][1]["start_tick"], 10);
}
