use super::*;

#[test]
fn label_uppercases_and_truncates_to_twelve() {
    assert_eq!(label_text("alice"), "ALICE");
    assert_eq!(label_text("verylongusername"), "VERYLONGUSER");
    assert_eq!(label_text(""), "");
    assert_eq!(label_text("Ab-9"), "AB-9");
}

#[test]
fn every_shield_shape_builds_a_closed_path() {
    use kurbo::Shape as _;

    for shape in crate::config::crest::SHIELD_SHAPE_ORDER {
        let path = shield_path(shape, 100.0, 100.0, 156.0, 176.0);
        assert!(
            !path.elements().is_empty(),
            "{shape:?} produced an empty path"
        );
        let bbox = path.bounding_box();
        assert!(bbox.width() > 100.0, "{shape:?} bbox too narrow: {bbox:?}");
        assert!(bbox.height() > 100.0, "{shape:?} bbox too short: {bbox:?}");
    }
}

#[test]
fn shield_bounds_stay_within_the_requested_box() {
    use kurbo::Shape as _;

    // Baroque flares slightly past the nominal width by construction; the
    // others stay inside it.
    for shape in [
        crate::config::crest::ShieldShape::Heater,
        crate::config::crest::ShieldShape::Kite,
        crate::config::crest::ShieldShape::Oval,
        crate::config::crest::ShieldShape::Cartouche,
    ] {
        let path = shield_path(shape, 100.0, 100.0, 156.0, 176.0);
        let bbox = path.bounding_box();
        assert!(bbox.width() <= 156.0 + 1e-6, "{shape:?}: {bbox:?}");
        assert!(bbox.height() <= 176.0 + 1e-6, "{shape:?}: {bbox:?}");
    }
}
