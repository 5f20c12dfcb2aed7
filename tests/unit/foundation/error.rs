use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MotionlineError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
    assert!(
        MotionlineError::motion_not_found("x")
            .to_string()
            .contains("motion not found:")
    );
    assert_eq!(
        MotionlineError::unknown_shape("R").to_string(),
        "unknown shape 'R'"
    );
    assert_eq!(
        MotionlineError::duplicate_name("R").to_string(),
        "shape 'R' is already declared"
    );
    assert_eq!(
        MotionlineError::invalid_interval(10, 10).to_string(),
        "invalid interval: start 10 must be before end 10"
    );
}

#[test]
fn type_mismatch_names_both_kinds() {
    let err = MotionlineError::TypeMismatch {
        name: "R".to_string(),
        expected: ShapeKind::Rectangle,
        found: ShapeKind::Ellipse,
    };
    let msg = err.to_string();
    assert!(msg.contains("rectangle"));
    assert!(msg.contains("ellipse"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = MotionlineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
