use super::*;

#[test]
fn tags_resolve_case_insensitively() {
    assert_eq!(ShapeKind::from_tag("rectangle").unwrap(), ShapeKind::Rectangle);
    assert_eq!(ShapeKind::from_tag("Rect").unwrap(), ShapeKind::Rectangle);
    assert_eq!(ShapeKind::from_tag("ellipse").unwrap(), ShapeKind::Ellipse);
    assert_eq!(ShapeKind::from_tag(" OVAL ").unwrap(), ShapeKind::Ellipse);
}

#[test]
fn unknown_tag_is_invalid_argument() {
    let err = ShapeKind::from_tag("triangle").unwrap_err();
    assert!(matches!(err, MotionlineError::InvalidArgument(_)));
    assert!(err.to_string().contains("triangle"));
}

#[test]
fn canonical_tag_round_trips() {
    for kind in [ShapeKind::Rectangle, ShapeKind::Ellipse] {
        assert_eq!(ShapeKind::from_tag(kind.tag()).unwrap(), kind);
    }
}
