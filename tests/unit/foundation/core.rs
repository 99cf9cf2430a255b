use super::*;

#[test]
fn premultiply_opaque_is_identity() {
    let px = Rgba8Premul::from_straight_rgba(200, 168, 130, 255);
    assert_eq!(
        px,
        Rgba8Premul {
            r: 200,
            g: 168,
            b: 130,
            a: 255
        }
    );
}

#[test]
fn premultiply_zero_alpha_zeroes_channels() {
    let px = Rgba8Premul::from_straight_rgba(200, 168, 130, 0);
    assert_eq!(px, Rgba8Premul::transparent());
}

#[test]
fn premultiply_half_alpha_rounds() {
    let px = Rgba8Premul::from_straight_rgba(255, 100, 1, 128);
    assert_eq!(px.r, 128);
    assert_eq!(px.g, 50);
    assert_eq!(px.b, 1);
    assert_eq!(px.a, 128);
}
