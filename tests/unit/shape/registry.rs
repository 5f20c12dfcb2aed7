use super::*;

#[test]
fn declared_names_resolve_to_their_kind() {
    let mut reg = ShapeRegistry::new();
    reg.declare("R", ShapeKind::Rectangle).unwrap();
    reg.declare("C", ShapeKind::Ellipse).unwrap();
    assert_eq!(reg.type_of("R").unwrap(), ShapeKind::Rectangle);
    assert_eq!(reg.type_of("C").unwrap(), ShapeKind::Ellipse);
    assert_eq!(reg.len(), 2);
}

#[test]
fn undeclared_name_is_unknown_shape() {
    let reg = ShapeRegistry::new();
    assert!(reg.is_empty());
    let err = reg.type_of("ghost").unwrap_err();
    assert!(matches!(err, MotionlineError::UnknownShape { ref name } if name == "ghost"));
}

#[test]
fn duplicate_declaration_is_rejected_and_keeps_first_kind() {
    let mut reg = ShapeRegistry::new();
    reg.declare("R", ShapeKind::Rectangle).unwrap();
    let err = reg.declare("R", ShapeKind::Ellipse).unwrap_err();
    assert!(matches!(err, MotionlineError::DuplicateName { .. }));
    assert_eq!(reg.type_of("R").unwrap(), ShapeKind::Rectangle);
}

#[test]
fn redeclare_overwrites_in_place() {
    let mut reg = ShapeRegistry::new();
    reg.declare("A", ShapeKind::Rectangle).unwrap();
    reg.declare("B", ShapeKind::Rectangle).unwrap();
    assert_eq!(
        reg.redeclare("A", ShapeKind::Ellipse),
        Some(ShapeKind::Rectangle)
    );
    let order: Vec<_> = reg.iter().collect();
    assert_eq!(
        order,
        vec![("A", ShapeKind::Ellipse), ("B", ShapeKind::Rectangle)]
    );
}
